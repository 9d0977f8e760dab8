pub mod chat_message;
pub mod chat_request;
pub mod chat_response;
