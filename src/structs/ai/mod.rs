pub mod api_error;
pub mod chat;
