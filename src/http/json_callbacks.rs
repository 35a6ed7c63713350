use super::common::types::{lock_threadable, Threadable};
use super::parsed_value::{parse, ParsedValue};

use failure::Error;
use serde_json::{Map, Value};

/// Consumer-side callbacks for a JSON response.
///
/// Exactly one method is called per completed request. Every method has a
/// default: the success callbacks and `on_failure` do nothing, and the two
/// content-aware failure callbacks forward to `on_failure`. Implement only
/// the ones you care about.
///
/// Callbacks run on whatever thread the HTTP engine completes the request on.
/// State shared with other threads has to be synchronized by the implementor,
/// e.g. by handing the engine a [`Threadable`] wrapping the callbacks.
pub trait JsonCallbacks: Send {
    /// The response body was a JSON object.
    fn on_success_object(&mut self, _response: Map<String, Value>) {}

    /// The response body was a JSON array.
    fn on_success_array(&mut self, _response: Vec<Value>) {}

    /// The request failed and its body held a JSON object.
    fn on_failure_with_object(&mut self, error: Error, _content: Map<String, Value>) {
        self.on_failure(error);
    }

    /// The request failed and its body held a JSON array.
    fn on_failure_with_array(&mut self, error: Error, _content: Vec<Value>) {
        self.on_failure(error);
    }

    /// The request failed, or its body could not be used.
    fn on_failure(&mut self, _error: Error) {}

    /// Parses a raw body before dispatch. Override to pre-process bodies,
    /// e.g. to strip an anti-hijacking prefix.
    fn parse_response(&self, response_body: &str) -> Result<ParsedValue, serde_json::Error> {
        parse(response_body)
    }
}

impl<C: JsonCallbacks + ?Sized> JsonCallbacks for Box<C> {
    fn on_success_object(&mut self, response: Map<String, Value>) {
        (**self).on_success_object(response);
    }

    fn on_success_array(&mut self, response: Vec<Value>) {
        (**self).on_success_array(response);
    }

    fn on_failure_with_object(&mut self, error: Error, content: Map<String, Value>) {
        (**self).on_failure_with_object(error, content);
    }

    fn on_failure_with_array(&mut self, error: Error, content: Vec<Value>) {
        (**self).on_failure_with_array(error, content);
    }

    fn on_failure(&mut self, error: Error) {
        (**self).on_failure(error);
    }

    fn parse_response(&self, response_body: &str) -> Result<ParsedValue, serde_json::Error> {
        (**self).parse_response(response_body)
    }
}

impl<C: JsonCallbacks + ?Sized> JsonCallbacks for Threadable<C> {
    fn on_success_object(&mut self, response: Map<String, Value>) {
        lock_threadable(self).on_success_object(response);
    }

    fn on_success_array(&mut self, response: Vec<Value>) {
        lock_threadable(self).on_success_array(response);
    }

    fn on_failure_with_object(&mut self, error: Error, content: Map<String, Value>) {
        lock_threadable(self).on_failure_with_object(error, content);
    }

    fn on_failure_with_array(&mut self, error: Error, content: Vec<Value>) {
        lock_threadable(self).on_failure_with_array(error, content);
    }

    fn on_failure(&mut self, error: Error) {
        lock_threadable(self).on_failure(error);
    }

    fn parse_response(&self, response_body: &str) -> Result<ParsedValue, serde_json::Error> {
        lock_threadable(self).parse_response(response_body)
    }
}
