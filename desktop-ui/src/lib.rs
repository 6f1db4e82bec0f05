pub mod api;
pub mod components;
pub mod content;
pub mod desktop;
pub mod desktop_window;
pub mod interop;

pub use api::*;
pub use components::*;
pub use content::*;
pub use desktop::*;
pub use desktop_window::*;
pub use interop::*;
