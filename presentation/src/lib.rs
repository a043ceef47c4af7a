pub mod input;
pub mod markdown;
pub mod terminal;
