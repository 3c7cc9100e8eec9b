pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::{wire_input_handlers, InputWiring};
