use crate::utils::ModelId;
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn ModelPicker(selected: ModelId, on_select: EventHandler<ModelId>) -> Element {
    rsx! {
        div {
            class: "model-picker",
            label { r#for: "model", "Model: " }
            select {
                id: "model",
                value: "{selected.id()}",
                onchange: move |evt| match evt.value().parse::<ModelId>() {
                    Ok(model) => on_select.call(model),
                    // Only the options below can be chosen.
                    Err(e) => warn!("Ignoring model selection: {}", e),
                },

                for model in ModelId::all() {
                    option {
                        key: "{model.id()}",
                        value: "{model.id()}",
                        selected: model == selected,
                        "{model.label()}"
                    }
                }
            }
        }
    }
}
