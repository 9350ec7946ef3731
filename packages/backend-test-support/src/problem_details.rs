//! Deserialization target and assertions for problem+json error bodies.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Parse a response body as problem+json and check status and code.
///
/// # Panics
/// Panics with a readable message when the body is not problem+json or the
/// fields do not match.
pub fn assert_problem(body: &[u8], expected_status: u16, expected_code: &str) -> ProblemDetails {
    let problem: ProblemDetails = serde_json::from_slice(body)
        .unwrap_or_else(|e| panic!("response body is not problem+json: {e}"));
    assert_eq!(problem.status, expected_status, "problem status mismatch");
    assert_eq!(problem.code, expected_code, "problem code mismatch");
    problem
}
