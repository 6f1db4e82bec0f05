use dioxus::prelude::*;

#[component]
pub fn ChatView() -> Element {
    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column; align-items: center; \
                    justify-content: center; gap: 2rem; padding: 2rem; background: rgba(0,0,0,0.2);",

            span {
                style: "font-size: 6rem; animation: pulse 2s infinite;",
                "🚧"
            }
            span {
                style: "font-size: 2.25rem; font-weight: 700; color: white; text-align: center;",
                "In construction..."
            }
        }
    }
}
