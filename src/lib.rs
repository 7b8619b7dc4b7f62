pub mod store;
pub mod tui;

pub use store::{Message, MessageStore};
pub use tui::{render_to_buffer, App, InputController, TextInput};
