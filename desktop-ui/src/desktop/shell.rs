use chrono::Local;
use desktop_core::{AppDescriptor, DesktopSession, Position, Size};
use dioxus::prelude::*;

use crate::content;
use crate::desktop::apps::app_catalog;
use crate::desktop::components::desktop_icons::DesktopIcons;
use crate::desktop::components::taskbar::Taskbar;
use crate::desktop::effects;
use crate::desktop_window::FloatingWindow;
use crate::interop::get_viewport_size;

fn initial_session() -> DesktopSession {
    DesktopSession::new(&app_catalog()[0])
}

#[component]
pub fn DesktopShell() -> Element {
    let mut session = use_signal(initial_session);
    let viewport = use_signal(get_viewport_size);
    let clock = use_signal(Local::now);

    use_effect(move || {
        spawn(async move {
            effects::track_viewport(viewport).await;
        });
    });

    use_effect(move || {
        spawn(async move {
            effects::run_clock(clock).await;
        });
    });

    let open_app = use_callback(move |app: AppDescriptor| {
        session.write().open(&app);
    });

    let open_project = use_callback(move |project_id: u32| {
        let Some(project) = content::project(project_id) else {
            return;
        };
        session.write().open_project_detail(project_id, project.window_title(), || {
            content::project_content(project_id)
        });
    });

    let close_window = use_callback(move |window_id: String| {
        session.write().close(&window_id);
    });

    let focus_window = use_callback(move |window_id: String| {
        session.write().focus(&window_id);
    });

    let minimize_window = use_callback(move |window_id: String| {
        session.write().toggle_minimize(&window_id);
    });

    let maximize_window = use_callback(move |window_id: String| {
        session.write().toggle_maximize(&window_id);
    });

    let move_window = use_callback(move |(window_id, position): (String, Position)| {
        session.write().move_to(&window_id, position);
    });

    let resize_window =
        use_callback(move |(window_id, size, position): (String, Size, Option<Position>)| {
            session.write().resize(&window_id, size, position);
        });

    // Taskbar click: an active visible window minimizes; anything else is
    // focused, restoring it first when minimized.
    let taskbar_click = use_callback(move |window_id: String| {
        let (is_active, is_minimized) = {
            let s = session.read();
            (
                s.is_active(&window_id),
                s.window(&window_id).map(|w| w.is_minimized).unwrap_or(false),
            )
        };

        let mut s = session.write();
        if is_active && !is_minimized {
            s.toggle_minimize(&window_id);
        } else {
            s.focus(&window_id);
            if is_minimized {
                s.toggle_minimize(&window_id);
            }
        }
    });

    let snapshot = session.read().clone();
    let viewport_value = *viewport.read();
    let active_id = snapshot.active_id().map(str::to_string);

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            class: "desktop-shell",
            style: "width: 100vw; height: 100dvh; overflow: hidden; position: relative; \
                    background: var(--desktop-bg); color: var(--text-primary); user-select: none;",

            DesktopIcons {
                apps: app_catalog(),
                on_open_app: open_app,
                viewport: viewport_value,
            }

            div {
                class: "window-canvas",
                style: "position: absolute; inset: 0 0 56px 0; overflow: hidden; pointer-events: none;",

                for window in snapshot.windows().iter().filter(|w| !w.is_minimized) {
                    FloatingWindow {
                        key: "{window.id}",
                        window: window.clone(),
                        is_active: active_id.as_deref() == Some(window.id.as_str()),
                        on_close: close_window,
                        on_focus: focus_window,
                        on_minimize: minimize_window,
                        on_maximize: maximize_window,
                        on_move: move_window,
                        on_resize: resize_window,
                        on_open_project: open_project,
                    }
                }
            }

            Taskbar {
                windows: snapshot.windows().to_vec(),
                active_id,
                clock: *clock.read(),
                on_item_click: taskbar_click,
            }
        }
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    --desktop-bg: radial-gradient(ellipse at 20% 0%, #1a1033 0%, #0b0b14 55%, #000000 100%);
    --window-bg: rgba(17, 24, 39, 0.7);
    --titlebar-border: rgba(255, 255, 255, 0.1);
    --text-primary: #f3f4f6;
    --text-secondary: #9ca3af;
    --text-muted: #6b7280;
    --accent: #60a5fa;
    --panel-bg: rgba(255, 255, 255, 0.05);
    --panel-border: rgba(255, 255, 255, 0.1);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    margin: 0;
    padding: 0;
    font-family: "VT323", "Share Tech Mono", ui-monospace, monospace;
    background: #000;
}

.desktop-icon:hover {
    background: rgba(255, 255, 255, 0.1);
}

.taskbar-item:hover {
    background: rgba(255, 255, 255, 0.05) !important;
}

.floating-window {
    pointer-events: auto;
}

@keyframes pulse {
    50% { opacity: 0.4; }
}
"#;
