use desktop_core::AppDescriptor;
use dioxus::prelude::*;

/// Approximate height of one icon cell: 56px tile + gap + label + padding.
const ICON_CELL_PX: u32 = 112;
const ROW_GAP_PX: u32 = 24;
const GRID_PADDING_PX: u32 = 48;
const TASKBAR_PX: u32 = 56;

/// How many icon rows fit the viewport. Icons flow column-first, so the row
/// count drives the whole grid shape; recomputed whenever the viewport
/// resizes.
pub fn max_icon_rows(viewport_height: u32) -> usize {
    let available = viewport_height
        .saturating_sub(TASKBAR_PX)
        .saturating_sub(GRID_PADDING_PX);
    ((available / (ICON_CELL_PX + ROW_GAP_PX)) as usize).max(1)
}

#[component]
pub fn DesktopIcons(
    apps: Vec<AppDescriptor>,
    on_open_app: Callback<AppDescriptor>,
    viewport: (u32, u32),
) -> Element {
    let rows = max_icon_rows(viewport.1);

    rsx! {
        div {
            class: "desktop-icons",
            style: "position: relative; z-index: 1; padding: 1.5rem; display: grid; \
                    grid-template-rows: repeat({rows}, max-content); grid-auto-flow: column; \
                    gap: 1.5rem 2rem; width: fit-content; align-content: start; \
                    height: calc(100vh - 56px);",

            for app in apps {
                DesktopIcon {
                    app: app.clone(),
                    on_open_app,
                }
            }
        }
    }
}

#[component]
pub fn DesktopIcon(app: AppDescriptor, on_open_app: Callback<AppDescriptor>) -> Element {
    let app_for_open = app.clone();
    let mut last_click_ms = use_signal(|| 0i64);

    // Launch debounce: a fast double-click is one open, not two.
    let handle_click = move |_| {
        let now = js_sys::Date::now() as i64;
        if now - *last_click_ms.read() >= 500 {
            on_open_app.call(app_for_open.clone());
            last_click_ms.set(now);
        }
    };

    rsx! {
        button {
            class: "desktop-icon",
            style: "display: flex; flex-direction: column; align-items: center; gap: 0.5rem; \
                    padding: 0.75rem; width: 7rem; background: transparent; border: none; \
                    border-radius: 12px; cursor: pointer;",
            onclick: handle_click,

            div {
                style: "width: 3.5rem; height: 3.5rem; display: flex; align-items: center; \
                        justify-content: center; border-radius: 16px; \
                        background: linear-gradient(135deg, rgba(255,255,255,0.2), rgba(255,255,255,0.05)); \
                        border: 1px solid rgba(255,255,255,0.2); backdrop-filter: blur(8px); \
                        box-shadow: 0 10px 25px rgba(0,0,0,0.3); color: {app.color};",
                span {
                    style: "font-size: 2rem; pointer-events: none; user-select: none;",
                    "{app.icon}"
                }
            }
            span {
                style: "font-size: 0.75rem; font-weight: 500; color: white; text-align: center; \
                        background: rgba(0,0,0,0.3); padding: 0.125rem 0.75rem; border-radius: 999px; \
                        border: 1px solid rgba(255,255,255,0.1); backdrop-filter: blur(8px); \
                        user-select: none;",
                "{app.title}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count_follows_viewport_height() {
        assert_eq!(max_icon_rows(800), 5);
        assert_eq!(max_icon_rows(400), 2);
    }

    #[test]
    fn at_least_one_row_even_on_tiny_viewports() {
        assert_eq!(max_icon_rows(0), 1);
        assert_eq!(max_icon_rows(120), 1);
    }
}
