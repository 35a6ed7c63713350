use failure::Error;

/// Entry points an HTTP engine calls once a request has completed and its
/// body (if any) is fully buffered.
pub trait ResponseHandler: Send {
    fn handle_success_message(&mut self, response_body: &str);
    fn handle_failure_message(&mut self, response_body: Option<&str>, error: Error);
}
