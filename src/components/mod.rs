mod chat_panel;
mod header;
mod model_picker;
mod response_panel;

pub use chat_panel::ChatPanel;
pub use header::Header;
pub use model_picker::ModelPicker;
pub use response_panel::ResponsePanel;
