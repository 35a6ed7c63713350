use super::json_callbacks::JsonCallbacks;

use failure::Error;
use serde_json::{Map, Value};

type ObjectFn = Box<dyn FnMut(Map<String, Value>) + Send>;
type ArrayFn = Box<dyn FnMut(Vec<Value>) + Send>;
type FailureWithObjectFn = Box<dyn FnMut(Error, Map<String, Value>) + Send>;
type FailureWithArrayFn = Box<dyn FnMut(Error, Vec<Value>) + Send>;
type FailureFn = Box<dyn FnMut(Error) + Send>;

/// [`JsonCallbacks`] assembled from closures.
///
/// Slots left unset behave like the trait defaults.
///
/// ```
/// use json_http_handler::{JsonCallbackSet, JsonResponseHandler, ResponseHandler};
///
/// let callbacks = JsonCallbackSet::new()
///     .on_success_object(|obj| println!("got {} keys", obj.len()))
///     .on_failure(|err| eprintln!("request failed: {}", err));
/// let mut handler = JsonResponseHandler::new(callbacks);
/// handler.handle_success_message(r#"{"id":1}"#);
/// ```
#[derive(Default)]
pub struct JsonCallbackSet {
    success_object: Option<ObjectFn>,
    success_array: Option<ArrayFn>,
    failure_with_object: Option<FailureWithObjectFn>,
    failure_with_array: Option<FailureWithArrayFn>,
    failure: Option<FailureFn>,
}

impl JsonCallbackSet {
    pub fn new() -> JsonCallbackSet {
        JsonCallbackSet::default()
    }

    pub fn on_success_object<F>(mut self, f: F) -> Self
    where
        F: FnMut(Map<String, Value>) + Send + 'static,
    {
        self.success_object = Some(Box::new(f));
        self
    }

    pub fn on_success_array<F>(mut self, f: F) -> Self
    where
        F: FnMut(Vec<Value>) + Send + 'static,
    {
        self.success_array = Some(Box::new(f));
        self
    }

    pub fn on_failure_with_object<F>(mut self, f: F) -> Self
    where
        F: FnMut(Error, Map<String, Value>) + Send + 'static,
    {
        self.failure_with_object = Some(Box::new(f));
        self
    }

    pub fn on_failure_with_array<F>(mut self, f: F) -> Self
    where
        F: FnMut(Error, Vec<Value>) + Send + 'static,
    {
        self.failure_with_array = Some(Box::new(f));
        self
    }

    pub fn on_failure<F>(mut self, f: F) -> Self
    where
        F: FnMut(Error) + Send + 'static,
    {
        self.failure = Some(Box::new(f));
        self
    }
}

impl JsonCallbacks for JsonCallbackSet {
    fn on_success_object(&mut self, response: Map<String, Value>) {
        if let Some(f) = self.success_object.as_mut() {
            f(response);
        }
    }

    fn on_success_array(&mut self, response: Vec<Value>) {
        if let Some(f) = self.success_array.as_mut() {
            f(response);
        }
    }

    fn on_failure_with_object(&mut self, error: Error, content: Map<String, Value>) {
        match self.failure_with_object.as_mut() {
            Some(f) => f(error, content),
            None => JsonCallbacks::on_failure(self, error),
        }
    }

    fn on_failure_with_array(&mut self, error: Error, content: Vec<Value>) {
        match self.failure_with_array.as_mut() {
            Some(f) => f(error, content),
            None => JsonCallbacks::on_failure(self, error),
        }
    }

    fn on_failure(&mut self, error: Error) {
        if let Some(f) = self.failure.as_mut() {
            f(error);
        }
    }
}
