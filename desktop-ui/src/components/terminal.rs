use dioxus::prelude::*;

use crate::content::{CODENAME, SKILLS};

const LOGO: &str = r#"
 .d8888b.
d88P  Y88b
Y88b.
 "Y888b.
    "Y88b.
      "888
Y88b  d88P
 "Y8888P"
"#;

/// Fake-neofetch resume. Everything is static; the prompt just blinks.
#[component]
pub fn TerminalView() -> Element {
    rsx! {
        div {
            style: "height: 100%; background: rgba(0,0,0,0.4); color: #34d399; padding: 1rem; \
                    overflow-y: auto; font-size: 1.05rem;",

            div {
                style: "margin-bottom: 1rem;",
                Prompt {}
                span { "neofetch" }
            }

            div {
                style: "display: flex; gap: 1.5rem; margin-bottom: 1.5rem;",
                pre {
                    style: "color: #ec4899; opacity: 0.8; margin: 0; user-select: none;",
                    "{LOGO}"
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 0.25rem; color: #d1d5db;",
                    div { span { style: "color: #ec4899; font-weight: 700;", "User" } ": Visitor" }
                    div { span { style: "color: #ec4899; font-weight: 700;", "Host" } ": {CODENAME}" }
                    div { span { style: "color: #ec4899; font-weight: 700;", "Uptime" } ": Forever" }
                    div { span { style: "color: #ec4899; font-weight: 700;", "Shell" } ": Swm 6.7" }
                    div {
                        style: "display: flex; gap: 0.5rem; margin-top: 0.5rem; opacity: 0.8;",
                        for color in ["#ef4444", "#22c55e", "#eab308", "#3b82f6", "#a855f7"] {
                            span {
                                style: "width: 12px; height: 12px; border-radius: 999px; \
                                        display: inline-block; background: {color};",
                            }
                        }
                    }
                }
            }

            div {
                style: "margin-bottom: 0.5rem;",
                Prompt {}
                span { "list-skills" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr)); \
                        gap: 1rem; margin-bottom: 1rem;",
                for group in SKILLS {
                    div {
                        div {
                            style: "color: #facc15; font-weight: 700; margin-bottom: 0.25rem; \
                                    background: rgba(255,255,255,0.05); display: inline-block; \
                                    padding: 0 0.25rem; border-radius: 4px;",
                            "./{group.category}"
                        }
                        for item in group.items {
                            div {
                                style: "color: #9ca3af; margin-left: 1rem;",
                                "↳ {item}"
                            }
                        }
                    }
                }
                div {
                    style: "color: #9ca3af;",
                    "And more... Just ask me!"
                }
            }

            div {
                style: "margin-top: 0.5rem; animation: pulse 2s infinite;",
                Prompt {}
                span {
                    style: "width: 8px; height: 1rem; background: #6b7280; display: inline-block; \
                            vertical-align: middle;",
                }
            }
        }
    }
}

#[component]
fn Prompt() -> Element {
    rsx! {
        span { style: "color: #60a5fa;", "visitor@portfolio" }
        span { ":" }
        span { style: "color: #c084fc;", "~" }
        span { "$ " }
    }
}
