pub mod http_error;
pub mod response_handler;
pub mod types;
