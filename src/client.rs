// src/client.rs
//! Research Office API client.
//!
//! Every report is `GET {base}/{report}/?schemeRound=..&apiKey=..` and answers
//! with the same envelope:
//!
//! ```text
//! { "status": "success" | "fail" | "error", "data": [...], "message": "..." }
//! ```
//!
//! `fetch` does the request; `interpret` is the pure part that turns a reply
//! into records or a classified error.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    core::net::{HttpReply, Transport},
    error::{RmsError, RmsResult},
    request::ReportRequest,
    row::render,
};

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
}

pub fn report_url(base_url: &str, request: &ReportRequest) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), request.report().api_name())
}

/// Download one report and return its `data` records.
pub fn fetch(
    transport: &dyn Transport,
    base_url: &str,
    request: &ReportRequest,
) -> RmsResult<Vec<Value>> {
    let url = report_url(base_url, request);
    logf!("Client: {} round={}", request.report(), request.scheme_round());

    let reply = transport.get(&url, &request.query())?;
    let records = interpret(&reply)?;

    logf!("Client: {} record(s)", records.len());
    Ok(records)
}

/// Classify a reply. Non-2xx statuses are rejected before the body is looked at.
pub fn interpret(reply: &HttpReply) -> RmsResult<Vec<Value>> {
    if !reply.is_success() {
        loge!("Client: HTTP {}", reply.status);
        return Err(RmsError::Transport(format!(
            "server responded with HTTP {}",
            reply.status
        )));
    }

    let body: Value = serde_json::from_str(&reply.body)?;
    if !body.is_object() {
        return Err(RmsError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            kind_of(&body)
        )));
    }
    let envelope: Envelope = serde_json::from_value(body)?;

    match envelope.status.as_ref().and_then(Value::as_str) {
        Some("success") => match envelope.data {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(records)) => Ok(records),
            Some(other) => Err(RmsError::MalformedResponse(format!(
                "expected `data` to be a list, got {}",
                kind_of(&other)
            ))),
        },
        Some("fail") => Err(RmsError::ReportFailed(reason(envelope.data.as_ref()))),
        Some("error") => Err(RmsError::Server(reason(envelope.message.as_ref()))),
        Some(other) => Err(RmsError::UnknownStatus(s!(other))),
        None => Err(RmsError::UnknownStatus(
            envelope
                .status
                .as_ref()
                .map(render)
                .unwrap_or_else(|| s!("missing")),
        )),
    }
}

fn reason(v: Option<&Value>) -> String {
    match v.map(render) {
        Some(text) if !text.is_empty() => text,
        _ => s!("no reason given"),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ReportKind;

    fn ok(body: &str) -> HttpReply {
        HttpReply { status: 200, body: s!(body) }
    }

    #[test]
    fn success_returns_data() {
        let recs = interpret(&ok(r#"{"status":"success","data":[{"projectId":"A"},{"projectId":"B"}]}"#)).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1]["projectId"], "B");
    }

    #[test]
    fn success_without_data_is_empty() {
        assert!(interpret(&ok(r#"{"status":"success"}"#)).unwrap().is_empty());
        assert!(interpret(&ok(r#"{"status":"success","data":null}"#)).unwrap().is_empty());
    }

    #[test]
    fn success_with_non_list_data_is_malformed() {
        let err = interpret(&ok(r#"{"status":"success","data":"oops"}"#)).unwrap_err();
        assert!(matches!(err, RmsError::MalformedResponse(ref m) if m.contains("a string")));
    }

    #[test]
    fn fail_carries_data_reason() {
        let err = interpret(&ok(r#"{"status":"fail","data":"reason X"}"#)).unwrap_err();
        assert!(matches!(err, RmsError::ReportFailed(_)));
        assert!(err.to_string().contains("reason X"));
    }

    #[test]
    fn fail_with_structured_reason_renders_json() {
        let err = interpret(&ok(r#"{"status":"fail","data":{"schemeRound":"required"}}"#)).unwrap_err();
        assert!(err.to_string().contains(r#"{"schemeRound":"required"}"#));
    }

    #[test]
    fn error_carries_message() {
        let err = interpret(&ok(r#"{"status":"error","message":"Y"}"#)).unwrap_err();
        assert!(matches!(err, RmsError::Server(_)));
        assert!(err.to_string().contains("Y"));
    }

    #[test]
    fn unknown_and_missing_status() {
        let err = interpret(&ok(r#"{"status":"pending"}"#)).unwrap_err();
        assert!(matches!(err, RmsError::UnknownStatus(ref s) if s == "pending"));

        let err = interpret(&ok(r#"{"data":[]}"#)).unwrap_err();
        assert!(matches!(err, RmsError::UnknownStatus(ref s) if s == "missing"));

        let err = interpret(&ok(r#"{"status":7}"#)).unwrap_err();
        assert!(matches!(err, RmsError::UnknownStatus(ref s) if s == "7"));
    }

    #[test]
    fn non_2xx_skips_json_parsing() {
        let reply = HttpReply { status: 503, body: s!("{not json") };
        let err = interpret(&reply).unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = interpret(&ok("<html>maintenance</html>")).unwrap_err();
        assert!(matches!(err, RmsError::MalformedResponse(_)));
    }

    #[test]
    fn top_level_array_is_malformed() {
        let err = interpret(&ok(r#"["success",[{"projectId":"A"}]]"#)).unwrap_err();
        assert!(matches!(err, RmsError::MalformedResponse(ref m) if m.contains("a list")));

        let err = interpret(&ok(r#""success""#)).unwrap_err();
        assert!(matches!(err, RmsError::MalformedResponse(ref m) if m.contains("a string")));
    }

    #[test]
    fn url_has_trailing_slash_once() {
        let req = ReportRequest::new(ReportKind::IneligibleProposals, "DP24", "k").unwrap();
        assert_eq!(
            report_url("https://host/api/", &req),
            "https://host/api/IneligibleProposals/"
        );
    }
}
