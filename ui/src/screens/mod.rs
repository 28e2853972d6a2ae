pub mod chat;
pub mod donations;
