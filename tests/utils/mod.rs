pub mod setup;

pub use setup::{play_many, TestGame};
