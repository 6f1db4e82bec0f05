//! Window manager model for the SynthOS portfolio desktop
//!
//! Everything stateful about the simulated desktop lives here: window
//! records, stacking order, focus, and the drag/resize session math. The
//! crate is framework-free so the whole model is testable off the UI
//! thread; the Dioxus crate consumes it through plain method calls.

pub mod geometry;
pub mod gesture;
pub mod session;
pub mod window;

pub use geometry::{Position, Size};
pub use gesture::{DragSession, ResizeEdge, ResizeSession, MIN_HEIGHT, MIN_WIDTH};
pub use session::DesktopSession;
pub use window::{AppDescriptor, WindowKind, WindowRecord};
