//! Desktop shell: icon grid, window layer, taskbar.

use dioxus::prelude::*;

pub mod apps;
mod components;
mod effects;
mod shell;

pub use shell::DesktopShell;

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
