//! Inspection of requests recorded by the mock movies API.

use serde_json::Value;
use wiremock::Request;

/// Returns the recorded requests with `method` on `path`.
pub(crate) fn requests_to<'a>(
    received: &'a [Request],
    method: &str,
    path: &str,
) -> Vec<&'a Request> {
    received
        .iter()
        .filter(|request| request.method.as_str() == method && request.url.path() == path)
        .collect()
}

/// Decodes each request body as JSON.
pub(crate) fn json_bodies(requests: &[&Request]) -> Vec<Value> {
    requests
        .iter()
        .map(|request| {
            serde_json::from_slice(&request.body)
                .unwrap_or_else(|error| panic!("request body should be JSON: {error}"))
        })
        .collect()
}
