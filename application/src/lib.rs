pub mod clock;
pub mod widget;
