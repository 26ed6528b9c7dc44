pub mod chapters;
pub mod data;
pub mod study;
