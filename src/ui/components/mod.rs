pub mod board;
pub mod keyboard_diagram;
pub mod notice;
