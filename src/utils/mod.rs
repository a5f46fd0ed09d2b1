mod backend;
mod chat_form;
mod settings;
mod types;

pub use backend::{BackendClient, ChatTransport};
pub use chat_form::ChatForm;
pub use settings::Settings;
pub use types::ModelId;
