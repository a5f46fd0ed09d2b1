use dioxus::prelude::*;

#[component]
pub fn Header(title: String) -> Element {
    rsx! {
        header {
            class: "app-header",
            h1 { "{title}" }
        }
    }
}
