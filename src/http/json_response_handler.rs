use super::super::config;
use super::common::http_error::ResponseError;
use super::common::response_handler::ResponseHandler;
use super::json_callbacks::JsonCallbacks;
use super::parsed_value::ParsedValue;

use failure::Error;
use log::{debug, warn};

/// Parses completed response bodies as JSON and dispatches them to `C`.
///
/// Holds no state besides the callbacks; each call is independent.
pub struct JsonResponseHandler<C> {
    callbacks: C,
}

impl<C: JsonCallbacks> JsonResponseHandler<C> {
    pub fn new(callbacks: C) -> JsonResponseHandler<C> {
        JsonResponseHandler { callbacks }
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    pub fn into_callbacks(self) -> C {
        self.callbacks
    }
}

impl<C: JsonCallbacks> ResponseHandler for JsonResponseHandler<C> {
    fn handle_success_message(&mut self, response_body: &str) {
        debug!(
            "== Success body ({} bytes): {}",
            response_body.len(),
            body_preview(response_body)
        );

        match self.callbacks.parse_response(response_body) {
            Ok(ParsedValue::Object(object)) => self.callbacks.on_success_object(object),
            Ok(ParsedValue::Array(array)) => self.callbacks.on_success_array(array),
            Ok(other) => {
                warn!("Unexpected {} at top level of response", other.kind());
                let error = ResponseError::UnexpectedShape(other.kind());
                self.callbacks.on_failure(Error::from(error));
            }
            Err(err) => {
                warn!("Response is not valid JSON: {}", err);
                self.callbacks.on_failure(Error::from(ResponseError::Parse(err)));
            }
        }
    }

    fn handle_failure_message(&mut self, response_body: Option<&str>, error: Error) {
        let response_body = match response_body {
            Some(body) if !body.is_empty() => body,
            _ => {
                debug!("== Failure without body: {}", error);
                self.callbacks.on_failure(error);
                return;
            }
        };

        debug!(
            "== Failure body ({} bytes): {}, cause: {}",
            response_body.len(),
            body_preview(response_body),
            error
        );

        match self.callbacks.parse_response(response_body) {
            Ok(ParsedValue::Object(object)) => self.callbacks.on_failure_with_object(error, object),
            Ok(ParsedValue::Array(array)) => self.callbacks.on_failure_with_array(error, array),
            Ok(other) => {
                debug!("Failure body is a {}, ignoring content", other.kind());
                self.callbacks.on_failure(error);
            }
            Err(err) => {
                // The engine's error is what the consumer needs to see.
                debug!("Failure body is not valid JSON: {}", err);
                self.callbacks.on_failure(error);
            }
        }
    }
}

fn body_preview(body: &str) -> &str {
    match body.char_indices().nth(config::LOG_BODY_PREVIEW_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
