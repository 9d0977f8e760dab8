pub mod openrouter;
pub mod unavailable;
