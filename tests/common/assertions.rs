//! Domain-specific assertion macros for loggate harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! response invariant was violated.

/// Assert a failure envelope: given status, `success: false`, a non-empty
/// message, and no `data`.
///
/// ```rust
/// assert_failure!(response, StatusCode::BAD_REQUEST);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($response:expr, $status:expr) => {{
        let response: &$crate::common::http::TestResponse = &$response;
        assert_eq!(response.status, $status, "unexpected status, body: {}", response.json);
        assert_eq!(
            response.json["success"], false,
            "assert_failure! expected success=false, body: {}",
            response.json
        );
        let message = response.json["message"].as_str().unwrap_or_default();
        assert!(!message.is_empty(), "assert_failure! empty message");
        assert!(
            response.json.get("data").is_none(),
            "assert_failure! failure envelope carries data: {}",
            response.json
        );
    }};
}

/// Assert `has_more == (offset + len(logs) < total_count)` on a log page.
#[macro_export]
macro_rules! assert_page_consistent {
    ($response:expr, $offset:expr) => {{
        let response: &$crate::common::http::TestResponse = &$response;
        let data = &response.json["data"];
        let total = data["total_count"].as_u64().expect("total_count");
        let len = data["logs"].as_array().expect("logs").len() as u64;
        let has_more = data["has_more"].as_bool().expect("has_more");
        let offset: u64 = $offset;
        assert_eq!(
            has_more,
            offset + len < total,
            "assert_page_consistent! offset={offset} len={len} total={total} has_more={has_more}"
        );
    }};
}
