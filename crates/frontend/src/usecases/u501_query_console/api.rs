//! API client for UseCase u501

use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u501_query_console::{
    interpret_reply, QueryReply, QueryRequest, QueryResult,
};
use gloo_net::http::Request;

/// `POST` the request to the Query Service.
///
/// No timeout and no retry: the call settles when the browser settles it.
pub async fn run_query(url: &str, request: &QueryRequest) -> UseCaseResult<QueryResult> {
    let response = Request::post(url)
        .json(request)
        .map_err(|e| UseCaseError::transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| UseCaseError::transport(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| UseCaseError::transport(e.to_string()))?;

    classify_reply(ok, status, &body)
}

/// Decide the outcome from status and body.
///
/// The body is read regardless of status, so an `error` reported with a
/// non-2xx status is still shown verbatim.
pub fn classify_reply(ok: bool, status: u16, body: &str) -> UseCaseResult<QueryResult> {
    match interpret_reply(body) {
        Ok(QueryReply::Failed(message)) => Err(UseCaseError::application(message)),
        Ok(QueryReply::Succeeded(result)) if ok => Ok(result),
        Ok(QueryReply::Succeeded(_)) => Err(UseCaseError::transport(format!("HTTP {}", status))),
        Err(err) if !ok => Err(UseCaseError::transport(format!(
            "HTTP {}: {}",
            status,
            err.details.unwrap_or_default()
        ))),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::common::ErrorKind;

    #[test]
    fn test_ok_success() {
        let result = classify_reply(true, 200, r#"{"sql":"SELECT 1","data":[{"a":1}]}"#).unwrap();
        assert_eq!(result.sql, "SELECT 1");
    }

    #[test]
    fn test_error_field_with_any_status() {
        for (ok, status) in [(true, 200), (false, 400), (false, 500)] {
            let err = classify_reply(ok, status, r#"{"error":"Prompt or DB connection details missing."}"#)
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Application);
            assert_eq!(err.user_message(), "Prompt or DB connection details missing.");
        }
    }

    #[test]
    fn test_non_ok_without_error_field() {
        let err = classify_reply(false, 502, r#"{"sql":"SELECT 1","data":[]}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(err.details.as_deref(), Some("HTTP 502"));

        let err = classify_reply(false, 500, "Internal Server Error").unwrap_err();
        assert_eq!(err.user_message(), "Failed to connect to server");
        assert!(err.details.unwrap().starts_with("HTTP 500: malformed body"));
    }

    #[test]
    fn test_ok_with_unparsable_body() {
        let err = classify_reply(true, 200, "not json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(err.user_message(), "Failed to connect to server");
    }
}
