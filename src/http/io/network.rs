extern crate reqwest;

use super::super::super::config;
use super::super::common::http_error::HttpError;
use super::super::common::response_handler::ResponseHandler;

use failure::Error;
use log::{debug, warn};

/// Feeds one fully buffered completion into `handler`: 2xx statuses go to
/// the success path, everything else to the failure path with an
/// `HttpError::Status`.
pub fn dispatch_completion(
    handler: &mut dyn ResponseHandler,
    status: u16,
    response_body: Option<&str>,
) {
    if (200..300).contains(&status) {
        handler.handle_success_message(response_body.unwrap_or_default());
    } else {
        handler.handle_failure_message(response_body, HttpError::Status(status).into());
    }
}

fn transport_error(err: &reqwest::Error) -> Error {
    if err.is_timeout() {
        HttpError::Timeout.into()
    } else {
        HttpError::Network(err.to_string()).into()
    }
}

/// Blocking request glue. Sends on the caller's thread and hands the
/// completed response to a `ResponseHandler`; no pooling, no retry.
pub struct Network {
    client: reqwest::Client,
}

impl Network {
    pub fn new() -> Network {
        Network {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Network {
        Network { client }
    }

    pub fn get(&self, url: &str, handler: &mut dyn ResponseHandler) {
        debug!("== GET {}", url);
        let result = self
            .client
            .get(url)
            .header(config::ACCEPT_HEADER, config::ACCEPT_JSON)
            .send();

        match result {
            Ok(mut res) => {
                let status = res.status().as_u16();
                match res.text() {
                    Ok(body) => dispatch_completion(handler, status, Some(&body)),
                    Err(err) => {
                        warn!("Error: reading body of {} failed: {}", url, err);
                        handler.handle_failure_message(None, transport_error(&err));
                    }
                }
            }
            Err(err) => {
                warn!("Error: GET {} failed: {}", url, err);
                handler.handle_failure_message(None, transport_error(&err));
            }
        }
    }
}

impl Default for Network {
    fn default() -> Network {
        Network::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Success(String),
        Failure(Option<String>, Option<HttpError>),
    }

    #[derive(Default)]
    struct Calls(Vec<Call>);

    impl ResponseHandler for Calls {
        fn handle_success_message(&mut self, response_body: &str) {
            self.0.push(Call::Success(response_body.to_owned()));
        }

        fn handle_failure_message(&mut self, response_body: Option<&str>, error: Error) {
            self.0.push(Call::Failure(
                response_body.map(str::to_owned),
                error.downcast_ref::<HttpError>().cloned(),
            ));
        }
    }

    #[test]
    fn two_hundreds_are_successes() {
        let mut calls = Calls::default();
        dispatch_completion(&mut calls, 200, Some("{}"));
        dispatch_completion(&mut calls, 204, None);
        assert_eq!(
            calls.0,
            vec![Call::Success("{}".to_owned()), Call::Success(String::new())]
        );
    }

    #[test]
    fn other_statuses_are_failures_with_body() {
        let mut calls = Calls::default();
        dispatch_completion(&mut calls, 500, Some(r#"{"message":"server error"}"#));
        dispatch_completion(&mut calls, 304, None);
        assert_eq!(
            calls.0,
            vec![
                Call::Failure(
                    Some(r#"{"message":"server error"}"#.to_owned()),
                    Some(HttpError::Status(500))
                ),
                Call::Failure(None, Some(HttpError::Status(304))),
            ]
        );
    }

    #[test]
    fn unreachable_host_reports_one_failure() {
        let mut calls = Calls::default();
        Network::new().get("http://127.0.0.1:1/", &mut calls);
        match &calls.0[..] {
            [Call::Failure(_, Some(_))] => {}
            other => panic!("unexpected calls {:?}", other),
        }
    }
}
