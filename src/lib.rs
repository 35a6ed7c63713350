//! Parses HTTP response bodies as JSON and routes them to typed callbacks.
//!
//! An HTTP engine hands each completed request to a [`ResponseHandler`].
//! [`JsonResponseHandler`] parses the body and invokes exactly one method of
//! the consumer's [`JsonCallbacks`].

pub mod config;
pub mod http;

pub use http::callback_set::JsonCallbackSet;
pub use http::common::http_error::{HttpError, ResponseError};
pub use http::common::response_handler::ResponseHandler;
pub use http::common::types::{threadable_new, Threadable};
pub use http::io::network::{dispatch_completion, Network};
pub use http::json_callbacks::JsonCallbacks;
pub use http::json_response_handler::JsonResponseHandler;
pub use http::parsed_value::{parse, ParsedValue, ValueKind};
