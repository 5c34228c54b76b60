pub mod addon;
pub mod compose;
pub mod deck;
pub mod profile;
pub mod resolve;
pub mod reveal;
