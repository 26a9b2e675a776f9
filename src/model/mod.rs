pub mod adapter;
pub mod event;

pub use event::{Event, Signature};
