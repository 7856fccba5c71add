use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::time::{Duration, Instant};
use crate::config::settings::Settings;
use crate::error::{AnalysisError, UNKNOWN_ERROR_DETAIL};
use crate::models::analysis::{AnalysisRequest, AnalysisResponse};

/// Upper bound for one analysis call. LLM mode can take well over a minute.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const CLIENT_USER_AGENT: &str = concat!("Security-Mapping-Dashboard/", env!("CARGO_PKG_VERSION"));

/// Client for the backend analysis endpoint.
///
/// One POST per call, no retries. Failures come back as a closed
/// [`AnalysisError`] so the dashboard can render each case.
#[derive(Debug, Clone)]
pub struct AnalysisApiClient {
	client: reqwest::Client,
	analyze_url: String,
}

impl AnalysisApiClient {
	pub fn new(settings: &Settings) -> Result<Self> {
		let mut headers = HeaderMap::new();
		headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

		let client = reqwest::Client::builder()
			.default_headers(headers)
			.timeout(REQUEST_TIMEOUT)
			.build()
			.context("Failed to create HTTP client")?;

		Ok(Self::with_client(client, settings.analyze_url()))
	}

	pub fn with_client(client: reqwest::Client, analyze_url: String) -> Self {
		Self { client, analyze_url }
	}

	pub fn analyze_url(&self) -> &str {
		&self.analyze_url
	}

	pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
		debug!(
			"Sending {} analysis request ({} chars) to {}",
			request.analysis_mode,
			request.requirement_text.chars().count(),
			self.analyze_url
		);
		let started = Instant::now();

		let response = self.client
			.post(&self.analyze_url)
			.json(request)
			.send()
			.await
			.map_err(|e| self.transport_error(e))?;

		if !response.status().is_success() {
			let err = http_error(response).await;
			warn!("Analysis request rejected: {}", err);
			return Err(err);
		}

		let data = response
			.json::<Value>()
			.await
			.map_err(|e| {
				let message = describe(e);
				error!("Failed to decode analysis response: {}", message);
				AnalysisError::Unexpected { message }
			})?;

		let analysis = AnalysisResponse::from_value(&data);
		info!(
			"Analysis finished in {} ms (backend reported {} ms, mode {}, risk {})",
			started.elapsed().as_millis(),
			analysis.processing_time_ms,
			analysis.mode_used,
			analysis.risk_level
		);
		Ok(analysis)
	}

	fn transport_error(&self, e: reqwest::Error) -> AnalysisError {
		if e.is_connect() {
			error!("Analysis backend unreachable at {}: {}", self.analyze_url, e);
			AnalysisError::Connection { url: self.analyze_url.clone() }
		} else {
			let message = describe(e);
			error!("Analysis request failed: {}", message);
			AnalysisError::Unexpected { message }
		}
	}
}

/// Renders the whole source chain; reqwest's own `Display` stops at the
/// outermost layer and hides causes such as a timeout.
fn describe(e: reqwest::Error) -> String {
	let timed_out = e.is_timeout();
	let chain = format!("{:#}", anyhow::Error::from(e));
	if timed_out {
		format!("İstek zaman aşımına uğradı: {}", chain)
	} else {
		chain
	}
}

/// Builds the HTTP error from the failed response itself, so the status and
/// body always belong to the same exchange.
async fn http_error(response: reqwest::Response) -> AnalysisError {
	let status = response.status().as_u16();
	let detail = match response.text().await {
		Ok(body) => error_detail(&body),
		Err(e) => {
			debug!("Could not read error body: {}", e);
			UNKNOWN_ERROR_DETAIL.to_string()
		}
	};
	AnalysisError::Http { status, detail }
}

/// Extracts `detail` from an error body. Strings are used as is, other JSON
/// is rendered as text, anything else falls back to a generic label.
pub fn error_detail(body: &str) -> String {
	let detail = serde_json::from_str::<Value>(body)
		.ok()
		.and_then(|v| v.get("detail").cloned());

	match detail {
		Some(Value::String(text)) if !text.trim().is_empty() => text,
		Some(Value::Null) | Some(Value::String(_)) | None => UNKNOWN_ERROR_DETAIL.to_string(),
		Some(other) => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::analysis::{AnalysisMode, AnalysisStatus};
	use tokio::io::{AsyncReadExt, AsyncWriteExt};
	use tokio::net::{TcpListener, TcpStream};
	use tokio::sync::oneshot;

	fn test_client(url: String) -> AnalysisApiClient {
		let client = reqwest::Client::builder()
			.no_proxy()
			.timeout(Duration::from_secs(10))
			.build()
			.unwrap();
		AnalysisApiClient::with_client(client, url)
	}

	fn http_response(status_line: &str, content_type: &str, body: &str) -> String {
		format!(
			"HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
			status_line,
			content_type,
			body.len(),
			body
		)
	}

	async fn read_request(socket: &mut TcpStream) -> String {
		let mut data = Vec::new();
		let mut buf = [0u8; 4096];
		loop {
			let n = socket.read(&mut buf).await.unwrap();
			if n == 0 {
				break;
			}
			data.extend_from_slice(&buf[..n]);
			if let Some(header_end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
				let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
				let content_length = headers
					.lines()
					.find_map(|line| line.strip_prefix("content-length:"))
					.and_then(|v| v.trim().parse::<usize>().ok())
					.unwrap_or(0);
				if data.len() >= header_end + 4 + content_length {
					break;
				}
			}
		}
		String::from_utf8_lossy(&data).into_owned()
	}

	/// Serves exactly one canned response and hands back the raw request.
	async fn serve_once(response: String) -> (String, oneshot::Receiver<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		let (tx, rx) = oneshot::channel();

		tokio::spawn(async move {
			let (mut socket, _) = listener.accept().await.unwrap();
			let request = read_request(&mut socket).await;
			socket.write_all(response.as_bytes()).await.unwrap();
			socket.shutdown().await.ok();
			let _ = tx.send(request);
		});

		(format!("http://{}/api/v1/analyze", addr), rx)
	}

	#[tokio::test]
	async fn test_successful_analysis() {
		let body = r#"{
			"status": "success",
			"mode_used": "fast",
			"processing_time_ms": 42,
			"risk_level": "KRİTİK",
			"summary": "SQL injection riski",
			"cve_id_matches": ["CVE-2019-0001"],
			"framework_matches": {"OWASP": "A03 Injection (Neden: parametresiz sorgu)"},
			"security_suggestions": {"short_term": ["Hazır sorgu kullan"], "long_term": []}
		}"#;
		let (url, request_rx) = serve_once(http_response("200 OK", "application/json", body)).await;
		let client = test_client(url);

		let request = AnalysisRequest::new("Kullanıcı girdisi SQL sorgusuna ekleniyor", AnalysisMode::Fast);
		let result = client.analyze(&request).await.unwrap();

		assert_eq!(result.status, AnalysisStatus::Success);
		assert_eq!(result.mode_used, "fast");
		assert_eq!(result.processing_time_ms, 42);
		assert_eq!(result.framework_matches[0].label, "A03 Injection");
		assert_eq!(result.suggestions.short_term, vec!["Hazır sorgu kullan"]);
		assert!(result.suggestions.long_term.is_empty());

		let raw_request = request_rx.await.unwrap();
		assert!(raw_request.starts_with("POST /api/v1/analyze HTTP/1.1"));
		let body_start = raw_request.find("\r\n\r\n").unwrap() + 4;
		let sent: Value = serde_json::from_str(&raw_request[body_start..]).unwrap();
		assert_eq!(sent["analysis_mode"], "fast");
		assert_eq!(sent["requirement_text"], "Kullanıcı girdisi SQL sorgusuna ekleniyor");
		assert_eq!(sent["standard_frameworks"].as_array().unwrap().len(), 5);
	}

	#[tokio::test]
	async fn test_http_500_with_detail() {
		let (url, _rx) = serve_once(http_response(
			"500 Internal Server Error",
			"application/json",
			r#"{"detail": "boom"}"#,
		))
		.await;
		let client = test_client(url);

		let err = client
			.analyze(&AnalysisRequest::new("req", AnalysisMode::Ai))
			.await
			.unwrap_err();

		assert_eq!(err, AnalysisError::Http { status: 500, detail: "boom".to_string() });
		let message = err.to_string();
		assert!(message.contains("boom"));
		assert!(message.contains("500"));
	}

	#[tokio::test]
	async fn test_http_error_without_json_body() {
		let (url, _rx) = serve_once(http_response(
			"502 Bad Gateway",
			"text/html",
			"<html>bad gateway</html>",
		))
		.await;
		let client = test_client(url);

		let err = client
			.analyze(&AnalysisRequest::new("req", AnalysisMode::Auto))
			.await
			.unwrap_err();

		assert_eq!(
			err,
			AnalysisError::Http { status: 502, detail: UNKNOWN_ERROR_DETAIL.to_string() }
		);
	}

	#[tokio::test]
	async fn test_non_json_success_body_is_unexpected() {
		let (url, _rx) = serve_once(http_response("200 OK", "text/plain", "not json")).await;
		let client = test_client(url);

		let err = client
			.analyze(&AnalysisRequest::new("req", AnalysisMode::Ai))
			.await
			.unwrap_err();

		assert!(matches!(err, AnalysisError::Unexpected { .. }));
		assert!(err.to_string().starts_with("Beklenmeyen Hata"));
	}

	#[tokio::test]
	async fn test_timeout_is_unexpected_and_says_so() {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			let (mut socket, _) = listener.accept().await.unwrap();
			let _request = read_request(&mut socket).await;
			tokio::time::sleep(Duration::from_secs(5)).await;
		});

		let client = reqwest::Client::builder()
			.no_proxy()
			.timeout(Duration::from_millis(300))
			.build()
			.unwrap();
		let client = AnalysisApiClient::with_client(client, format!("http://{}/api/v1/analyze", addr));

		let err = client
			.analyze(&AnalysisRequest::new("req", AnalysisMode::Ai))
			.await
			.unwrap_err();

		match err {
			AnalysisError::Unexpected { ref message } => {
				assert!(message.contains("zaman aşımı"), "message: {}", message);
				assert!(message.contains("timed out"), "message: {}", message);
			}
			other => panic!("expected Unexpected, got {:?}", other),
		}
	}

	#[tokio::test]
	async fn test_unreachable_backend_is_connection_error() {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);

		let url = format!("http://{}/api/v1/analyze", addr);
		let client = test_client(url.clone());

		let err = client
			.analyze(&AnalysisRequest::new("req", AnalysisMode::Ai))
			.await
			.unwrap_err();

		assert_eq!(err, AnalysisError::Connection { url });
	}

	#[test]
	fn test_error_detail_variants() {
		assert_eq!(error_detail(r#"{"detail": "boom"}"#), "boom");
		assert_eq!(error_detail(r#"{"detail": null}"#), UNKNOWN_ERROR_DETAIL);
		assert_eq!(error_detail(r#"{"detail": ""}"#), UNKNOWN_ERROR_DETAIL);
		assert_eq!(error_detail(r#"{"message": "nope"}"#), UNKNOWN_ERROR_DETAIL);
		assert_eq!(error_detail(""), UNKNOWN_ERROR_DETAIL);
		assert_eq!(error_detail("[1, 2]"), UNKNOWN_ERROR_DETAIL);
		assert_eq!(
			error_detail(r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#),
			r#"[{"loc":["body"],"msg":"field required"}]"#
		);
	}

	#[test]
	fn test_client_uses_settings_url() {
		let client = AnalysisApiClient::new(&Settings::default()).unwrap();
		assert_eq!(client.analyze_url(), "http://localhost:8000/api/v1/analyze");
	}
}
