pub mod feedback;
pub mod state;
pub mod words;
