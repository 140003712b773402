// tests/http_transport.rs
//
// The real reqwest transport against a port nobody listens on. The API key
// travels in the query string and must not surface in errors or the log.
//
use std::fs;
use std::path::PathBuf;

use rms_export::config::consts::{LOG_DIR, LOG_FILE};
use rms_export::config::options::{ApiOptions, AppOptions, ReportKind};
use rms_export::core::net::{HttpTransport, Transport};
use rms_export::request::ReportRequest;
use rms_export::{client, runner};
use tempfile::TempDir;

const REFUSED: &str = "http://127.0.0.1:1/api";

fn log_text() -> String {
    fs::read_to_string(PathBuf::from(LOG_DIR).join(LOG_FILE)).unwrap_or_default()
}

#[test]
fn connection_error_is_transport_without_key() {
    let key = "ConnRefusedKey-7f3a91";
    let req = ReportRequest::new(ReportKind::IneligibleProposals, "DP25", key).unwrap();
    let transport = HttpTransport::new().unwrap();

    let err = client::fetch(&transport, REFUSED, &req).unwrap_err();

    assert!(err.is_transport(), "got {err:?}");
    assert!(!err.to_string().contains(key), "key leaked: {err}");
    assert!(!format!("{err:?}").contains(key));
}

#[test]
fn raw_get_error_hides_query() {
    let key = "RawGetKey-0c55e2";
    let transport = HttpTransport::new().unwrap();

    let err = transport
        .get(&format!("{}/IneligibleProposals/", REFUSED), &[("schemeRound", "DP25"), ("apiKey", key)])
        .unwrap_err();

    assert!(err.is_transport());
    assert!(!err.to_string().contains(key));
    assert!(!err.to_string().contains("apiKey="));
}

#[test]
fn failed_run_does_not_log_key() {
    let key = "RunLogKey-b812d4";
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("ineligible.csv");
    let req = ReportRequest::new(ReportKind::IneligibleProposals, "DP25", key).unwrap();
    let options = AppOptions {
        api: ApiOptions { base_url: REFUSED.to_string() },
        ..AppOptions::default()
    };
    let transport = HttpTransport::new().unwrap();

    let err = runner::run(&transport, &options, &req, &out, None).unwrap_err();

    assert!(err.is_transport());
    assert!(!out.exists());
    let log = log_text();
    assert!(log.contains("Run: Error"), "run error was not logged");
    assert!(!log.contains(key), "key found in {}/{}", LOG_DIR, LOG_FILE);
}
