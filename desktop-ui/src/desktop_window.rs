use desktop_core::{
    DragSession, Position, ResizeEdge, ResizeSession, Size, WindowKind, WindowRecord,
};
use dioxus::prelude::*;

use crate::components::{ChatView, ExplorerView, GameView, MailView, NotepadView, TerminalView};
use crate::content;
use crate::desktop::apps::kind_icon;
use crate::interop::{
    capture_window_pointer, pointer_point, pointer_target_is_window_control,
    release_window_pointer,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Gesture {
    Drag(DragSession),
    Resize(ResizeSession),
}

/// One live drag or resize, keyed by the captured pointer. Created on
/// pointer-down, discarded on pointer-up; every move recomputes geometry
/// from the session origin.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveGesture {
    pointer_id: i32,
    gesture: Gesture,
}

/// Edge hit regions: 4px strips along the edges, 12px squares on the
/// corners.
const RESIZE_HANDLES: [(ResizeEdge, &str); 8] = [
    (ResizeEdge::North, "top: 0; left: 8px; right: 8px; height: 4px;"),
    (ResizeEdge::South, "bottom: 0; left: 8px; right: 8px; height: 4px;"),
    (ResizeEdge::West, "top: 8px; bottom: 8px; left: 0; width: 4px;"),
    (ResizeEdge::East, "top: 8px; bottom: 8px; right: 0; width: 4px;"),
    (ResizeEdge::NorthWest, "top: 0; left: 0; width: 12px; height: 12px;"),
    (ResizeEdge::NorthEast, "top: 0; right: 0; width: 12px; height: 12px;"),
    (ResizeEdge::SouthWest, "bottom: 0; left: 0; width: 12px; height: 12px;"),
    (ResizeEdge::SouthEast, "bottom: 0; right: 0; width: 12px; height: 12px;"),
];

/// Body text for a notepad window: fixed pages for the about/credits apps,
/// the stored content for project detail windows.
fn notepad_text(window: &WindowRecord) -> String {
    if window.id == "credits" {
        content::CREDITS_TEXT.to_string()
    } else if window.id.starts_with("project-") {
        window.content.clone().unwrap_or_default()
    } else {
        content::WELCOME_TEXT.to_string()
    }
}

#[component]
pub fn FloatingWindow(
    window: WindowRecord,
    is_active: bool,
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
    on_move: Callback<(String, Position)>,
    on_resize: Callback<(String, Size, Option<Position>)>,
    on_open_project: Callback<u32>,
) -> Element {
    let window_id = window.id.clone();
    let position = window.position;
    let size = window.size;
    let maximized = window.is_maximized;
    let z_index = window.z_index;

    let mut gesture = use_signal(|| None::<ActiveGesture>);

    let window_id_for_root = window_id.clone();
    let window_id_for_pointer_move = window_id.clone();
    let window_id_for_title_dblclick = window_id.clone();
    let window_id_for_controls = window_id.clone();

    let ring = if is_active {
        "0 0 0 1px rgba(255,255,255,0.2), 0 20px 50px rgba(0,0,0,0.5)"
    } else {
        "0 10px 30px rgba(0,0,0,0.4)"
    };
    let window_style = if maximized {
        format!(
            "position: absolute; inset: 0; z-index: {z_index}; display: flex; \
             flex-direction: column; background: var(--window-bg); overflow: hidden; \
             border: none; border-radius: 0; box-shadow: none; backdrop-filter: blur(24px);"
        )
    } else {
        format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; \
             z-index: {z_index}; display: flex; flex-direction: column; \
             background: var(--window-bg); backdrop-filter: blur(24px); \
             border: 1px solid rgba(255,255,255,0.1); border-radius: 12px; overflow: hidden; \
             box-shadow: {ring};",
            position.x, position.y, size.width, size.height
        )
    };

    let resize_handles: Vec<Element> = RESIZE_HANDLES
        .iter()
        .map(|&(edge, inset)| {
            let handle_style = format!(
                "position: absolute; z-index: 50; cursor: {}; {inset}",
                edge.cursor()
            );
            let window_id = window_id.clone();
            rsx! {
                div {
                    class: "resize-handle",
                    style: "{handle_style}",
                    onpointerdown: move |e: Event<PointerData>| {
                        e.stop_propagation();
                        e.prevent_default();
                        if !is_active {
                            on_focus.call(window_id.clone());
                        }
                        capture_window_pointer(&e, e.data().pointer_id());
                        gesture.set(Some(ActiveGesture {
                            pointer_id: e.data().pointer_id(),
                            gesture: Gesture::Resize(ResizeSession::new(
                                edge,
                                pointer_point(&e),
                                position,
                                size,
                            )),
                        }));
                    },
                }
            }
        })
        .collect();

    rsx! {
        div {
            class: if is_active { "floating-window active" } else { "floating-window" },
            role: "dialog",
            "aria-label": window.title.clone(),
            style: "{window_style}",
            onpointerdown: move |_| on_focus.call(window_id_for_root.clone()),
            onpointermove: move |e| {
                let Some(active) = gesture() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }

                let pointer = pointer_point(&e);
                match active.gesture {
                    Gesture::Drag(drag) => {
                        on_move.call((window_id_for_pointer_move.clone(), drag.update(pointer)));
                    }
                    Gesture::Resize(resize) => {
                        let (size, position) = resize.update(pointer);
                        on_resize.call((
                            window_id_for_pointer_move.clone(),
                            size,
                            Some(position),
                        ));
                    }
                }
            },
            onpointerup: move |e| {
                let Some(active) = gesture() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }
                release_window_pointer(&e, active.pointer_id);
                gesture.set(None);
            },
            onpointercancel: move |e| {
                let Some(active) = gesture() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }
                release_window_pointer(&e, active.pointer_id);
                gesture.set(None);
            },

            // Resize hit regions; never rendered while maximized.
            if !maximized {
                {resize_handles.into_iter()}
            }

            div {
                class: "window-titlebar",
                style: if maximized {
                    "height: 2.5rem; flex-shrink: 0; display: flex; align-items: center; \
                     justify-content: space-between; padding: 0 1rem; cursor: default; \
                     border-bottom: 1px solid var(--titlebar-border); \
                     background: linear-gradient(to right, rgba(255,255,255,0.05), transparent); \
                     user-select: none; touch-action: none;"
                } else {
                    "height: 2.5rem; flex-shrink: 0; display: flex; align-items: center; \
                     justify-content: space-between; padding: 0 1rem; cursor: move; \
                     border-bottom: 1px solid var(--titlebar-border); \
                     background: linear-gradient(to right, rgba(255,255,255,0.05), transparent); \
                     user-select: none; touch-action: none;"
                },
                onpointerdown: move |e| {
                    if maximized {
                        return;
                    }
                    if pointer_target_is_window_control(&e) {
                        return;
                    }
                    e.prevent_default();
                    capture_window_pointer(&e, e.data().pointer_id());
                    gesture.set(Some(ActiveGesture {
                        pointer_id: e.data().pointer_id(),
                        gesture: Gesture::Drag(DragSession::new(pointer_point(&e), position)),
                    }));
                },
                ondoubleclick: move |_| on_maximize.call(window_id_for_title_dblclick.clone()),

                div {
                    style: "display: flex; align-items: center; gap: 0.75rem; font-size: 0.875rem; \
                            color: #e5e7eb; font-weight: 500; letter-spacing: 0.02em;",
                    span { style: "font-size: 0.9rem;", {kind_icon(window.kind)} }
                    span { style: "opacity: 0.9;", "{window.title}" }
                }

                WindowControls {
                    window_id: window_id_for_controls.clone(),
                    on_minimize,
                    on_maximize,
                    on_close,
                }
            }

            div {
                class: "window-content",
                style: "flex: 1; overflow: hidden; position: relative;",

                match window.kind {
                    WindowKind::Terminal => rsx! { TerminalView {} },
                    WindowKind::Explorer => rsx! { ExplorerView { on_open_project } },
                    WindowKind::Notepad => rsx! { NotepadView { text: notepad_text(&window) } },
                    WindowKind::Mail => rsx! { MailView {} },
                    WindowKind::Game => rsx! { GameView {} },
                    WindowKind::Chat => rsx! { ChatView {} },
                    WindowKind::Music => rsx! {
                        div {
                            style: "display: flex; align-items: center; justify-content: center; \
                                    height: 100%; color: var(--text-muted); padding: 1rem;",
                            "Content not found"
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn WindowControls(
    window_id: String,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
    on_close: Callback<String>,
) -> Element {
    let window_id_for_minimize = window_id.clone();
    let window_id_for_maximize = window_id.clone();
    let window_id_for_close = window_id;

    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; align-items: center; gap: 0.5rem;",

            button {
                style: "width: 12px; height: 12px; border-radius: 999px; border: none; \
                        background: rgba(234, 179, 8, 0.8); cursor: pointer; padding: 0;",
                "aria-label": "Minimize",
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_minimize.call(window_id_for_minimize.clone());
                },
            }
            button {
                style: "width: 12px; height: 12px; border-radius: 999px; border: none; \
                        background: rgba(34, 197, 94, 0.8); cursor: pointer; padding: 0;",
                "aria-label": "Maximize",
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_maximize.call(window_id_for_maximize.clone());
                },
            }
            button {
                class: "window-close",
                style: "width: 12px; height: 12px; border-radius: 999px; border: none; \
                        background: rgba(239, 68, 68, 0.8); cursor: pointer; padding: 0;",
                "aria-label": "Close",
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(window_id_for_close.clone());
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notepad(id: &str, content: Option<&str>) -> WindowRecord {
        WindowRecord {
            id: id.to_string(),
            title: format!("{id}.txt"),
            kind: WindowKind::Notepad,
            is_minimized: false,
            is_maximized: false,
            z_index: 10,
            position: Position::new(50, 50),
            size: Size::new(640, 480),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn notepad_routes_fixed_pages_by_id() {
        assert_eq!(notepad_text(&notepad("about", None)), content::WELCOME_TEXT);
        assert_eq!(notepad_text(&notepad("credits", None)), content::CREDITS_TEXT);
    }

    #[test]
    fn project_windows_render_their_stored_content() {
        let text = notepad_text(&notepad("project-3", Some("detail text")));
        assert_eq!(text, "detail text");
        // A project window without content renders empty rather than the
        // welcome page.
        assert_eq!(notepad_text(&notepad("project-9", None)), "");
    }
}
