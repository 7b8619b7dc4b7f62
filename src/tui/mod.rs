pub mod draw;
pub mod events;
pub mod input;
pub mod state;

pub use draw::render_to_buffer;
pub use events::{run, Options};
pub use input::{handle_draft_key, InputController, TextInput};
pub use state::App;
