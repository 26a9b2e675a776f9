pub mod input;
pub mod state;
pub mod view;
