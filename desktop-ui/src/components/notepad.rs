use dioxus::prelude::*;

use crate::content::CODENAME;

/// Read-only text page with the notepad status strip.
#[component]
pub fn NotepadView(text: String) -> Element {
    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column; color: #e5e7eb;",

            div {
                style: "flex: 1; overflow-y: auto; padding: 1rem 1.25rem;",
                pre {
                    style: "margin: 0; white-space: pre-wrap; font-family: inherit; \
                            font-size: 1rem; line-height: 1.5;",
                    "{text}"
                }
            }

            div {
                style: "border-top: 1px solid rgba(255,255,255,0.1); padding: 0.25rem 0.75rem; \
                        font-size: 0.75rem; color: var(--text-muted); \
                        background: rgba(255,255,255,0.05); display: flex; \
                        justify-content: space-between; user-select: none;",
                span { "UTF-8" }
                span { "{CODENAME}" }
            }
        }
    }
}
