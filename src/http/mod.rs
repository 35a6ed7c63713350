pub mod callback_set;
pub mod common;
pub mod io;
pub mod json_callbacks;
pub mod json_response_handler;
pub mod parsed_value;
