use chrono::{DateTime, Local};
use desktop_core::WindowRecord;
use dioxus::prelude::*;

use crate::desktop::apps::kind_icon;

/// Label shown next to a taskbar icon: the title without its file
/// extension.
pub fn taskbar_label(title: &str) -> &str {
    title.split('.').next().unwrap_or(title)
}

#[component]
pub fn Taskbar(
    windows: Vec<WindowRecord>,
    active_id: Option<String>,
    clock: DateTime<Local>,
    on_item_click: Callback<String>,
) -> Element {
    let time = clock.format("%H:%M").to_string();
    let date = clock.format("%Y-%m-%d").to_string();

    rsx! {
        div {
            class: "taskbar",
            style: "position: absolute; bottom: 0.75rem; left: 0.75rem; right: 0.75rem; height: 3.5rem; \
                    background: rgba(17, 24, 39, 0.6); backdrop-filter: blur(24px); \
                    border: 1px solid rgba(255,255,255,0.1); border-radius: 16px; display: flex; \
                    align-items: center; justify-content: space-between; padding: 0 1rem; z-index: 2147483000; \
                    box-shadow: 0 25px 50px rgba(0,0,0,0.5);",

            div {
                style: "display: flex; align-items: center; gap: 0.5rem; height: 100%;",

                button {
                    class: "start-button",
                    style: "margin-right: 0.5rem; padding: 0.5rem; background: transparent; border: none; \
                            border-radius: 8px; color: #60a5fa; font-size: 1.25rem; cursor: pointer;",
                    "⚙"
                }

                div { style: "width: 1px; height: 1.5rem; background: rgba(255,255,255,0.1); margin: 0 0.5rem;" }

                div {
                    class: "running-apps",
                    style: "display: flex; gap: 0.25rem; height: 100%; padding: 0.5rem 0;",

                    for window in windows.iter() {
                        TaskbarItem {
                            key: "{window.id}",
                            window: window.clone(),
                            is_open: !window.is_minimized,
                            is_active: active_id.as_deref() == Some(window.id.as_str())
                                && !window.is_minimized,
                            on_click: on_item_click,
                        }
                    }
                }
            }

            div {
                class: "system-tray",
                style: "display: flex; align-items: center; gap: 1rem; color: #d1d5db; \
                        font-size: 0.8rem; padding: 0 0.5rem;",

                div { style: "width: 1px; height: 1.5rem; background: rgba(255,255,255,0.1);" }
                div {
                    style: "display: flex; flex-direction: column; align-items: flex-end; line-height: 1.1;",
                    span { style: "font-weight: 500; color: white;", "{time}" }
                    span { style: "font-size: 0.65rem; color: #9ca3af;", "{date}" }
                }
            }
        }
    }
}

#[component]
pub fn TaskbarItem(
    window: WindowRecord,
    is_open: bool,
    is_active: bool,
    on_click: Callback<String>,
) -> Element {
    let icon = kind_icon(window.kind);
    let label = taskbar_label(&window.title).to_string();
    let window_id = window.id.clone();

    let background = if is_active {
        "rgba(255,255,255,0.1)"
    } else {
        "transparent"
    };
    let label_color = if is_active { "white" } else { "#9ca3af" };

    rsx! {
        button {
            class: if is_active { "taskbar-item active" } else { "taskbar-item" },
            style: "height: 100%; padding: 0 0.75rem; display: flex; align-items: center; gap: 0.5rem; \
                    background: {background}; border: none; border-radius: 8px; cursor: pointer; \
                    position: relative;",
            onclick: move |_| on_click.call(window_id.clone()),
            title: "{window.title}",

            if is_open {
                div {
                    style: "position: absolute; bottom: 0; left: 0; width: 100%; height: 2px; \
                            background: #60a5fa; border-radius: 1px;",
                }
            }

            span { style: "font-size: 1.1rem;", "{icon}" }
            span {
                style: "font-size: 0.75rem; font-weight: 500; color: {label_color};",
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_drops_the_extension() {
        assert_eq!(taskbar_label("About Me.txt"), "About Me");
        assert_eq!(taskbar_label("My Projects"), "My Projects");
    }
}
