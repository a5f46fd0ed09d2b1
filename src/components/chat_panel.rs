use super::{ModelPicker, ResponsePanel};
use crate::utils::{ChatForm, ChatTransport, ModelId};
use dioxus::prelude::*;
use std::sync::Arc;

#[derive(Props, Clone)]
pub struct ChatPanelProps {
    transport: Arc<dyn ChatTransport>,
    default_model: ModelId,
}

impl PartialEq for ChatPanelProps {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.transport, &other.transport) && self.default_model == other.default_model
    }
}

#[component]
pub fn ChatPanel(props: ChatPanelProps) -> Element {
    let transport = props.transport;
    let default_model = props.default_model;
    let mut form = use_signal(|| ChatForm::new(default_model));

    let send_message = move |_: MouseEvent| {
        let Some(request) = form.write().begin_submit() else {
            return;
        };

        let transport = transport.clone();
        spawn(async move {
            let outcome = transport.send_chat(&request).await;
            form.write().settle(outcome);
        });
    };

    let state = form.read();
    let model = state.model();
    let message = state.message().to_string();
    let response = state.response().to_string();
    let answered_by = state.answered_by().map(str::to_string);
    let in_flight = state.in_flight();
    let can_submit = state.can_submit();
    drop(state);

    rsx! {
        div {
            class: "chat-panel",

            ModelPicker {
                selected: model,
                on_select: move |model: ModelId| form.write().select_model(model),
            }

            textarea {
                rows: "4",
                class: "message-input",
                placeholder: "Type your message...",
                value: "{message}",
                oninput: move |evt| form.write().edit_message(evt.value()),
            }

            button {
                class: "send-button",
                onclick: send_message,
                disabled: !can_submit,
                if in_flight { "Sending..." } else { "Send" }
            }

            ResponsePanel {
                text: response,
                answered_by,
            }
        }
    }
}
