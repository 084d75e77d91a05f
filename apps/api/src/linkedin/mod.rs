pub mod content;
pub mod handlers;
