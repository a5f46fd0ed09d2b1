use dioxus::prelude::*;

#[component]
pub fn ResponsePanel(text: String, answered_by: Option<String>) -> Element {
    rsx! {
        div {
            class: "response-panel",
            strong { "Response:" }
            if let Some(model) = answered_by {
                span {
                    class: "answered-by",
                    " ({model})"
                }
            }
            // Rendered as plain text so the reply shows exactly as returned.
            div {
                class: "response-text",
                "{text}"
            }
        }
    }
}
