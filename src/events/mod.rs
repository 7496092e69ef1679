pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_backdrop_click, wire_global_keydown, wire_terminal_submit};
pub use pointer::{wire_cursor_follow, wire_input_handlers, InputWiring};
