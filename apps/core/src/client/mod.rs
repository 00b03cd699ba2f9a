//! Generation job client — the single point of entry for all remote
//! image-generation calls.
//!
//! Wire contract (kie.ai jobs API): `POST {base}/createTask` submits a job
//! and returns a task id inside a `{code, msg, data}` envelope;
//! `GET {base}/recordInfo?taskId=..` reports `waiting`/`success`/`fail`,
//! with the result URLs embedded as a separately-encoded JSON string on
//! success. `run` drives submit-then-poll under a wall-clock budget; errors
//! hit mid-poll are absorbed and retried, the timeout is the only circuit
//! breaker.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::{Error, Result};

pub mod options;
pub mod progress;
pub mod task;

use options::GenerationOptions;
use progress::Progress;
use task::{GenerationTask, TaskState};

/// The model used for all generation jobs.
pub const MODEL: &str = "nano-banana-pro";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(300);
/// Transport-level budget for a single HTTP round trip, independent of the
/// overall polling budget.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct CreateTaskRequest<'a> {
    model: &'static str,
    input: TaskInput<'a>,
    #[serde(rename = "callBackUrl", skip_serializing_if = "Option::is_none")]
    callback_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct TaskInput<'a> {
    prompt: &'a str,
    image_input: &'a [String],
    aspect_ratio: &'static str,
    resolution: &'static str,
    output_format: &'static str,
}

/// Response envelope shared by both endpoints. `code != 200` signals an
/// application-level error even on an HTTP 200.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    code: i64,
    #[serde(default)]
    msg: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskData {
    #[serde(default)]
    task_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordInfoData {
    #[serde(default)]
    state: String,
    #[serde(default)]
    fail_msg: Option<String>,
    /// JSON-encoded string carrying `{"resultUrls": [...]}` on success.
    #[serde(default)]
    result_json: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultPayload {
    #[serde(default)]
    result_urls: Vec<String>,
}

/// Client for one credential. Independent instances share nothing; all
/// internal state is the HTTP connection pool and the progress handle.
#[derive(Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    poll_timeout: Duration,
    progress: Progress,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("base_url", &self.base_url)
            .field("poll_interval", &self.poll_interval)
            .field("poll_timeout", &self.poll_timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GenerationClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key: api_key.into(),
            base_url: crate::config::DEFAULT_API_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            progress: Progress::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone())
            .with_base_url(config.api_base_url.clone())
            .with_poll_interval(Duration::from_millis(config.poll_interval_ms))
            .with_poll_timeout(Duration::from_millis(config.poll_timeout_ms))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    /// Observer handle for the synthetic progress estimate. Valid across
    /// runs; reset to 0 when a new run starts.
    pub fn progress(&self) -> Progress {
        self.progress.clone()
    }

    /// Submits one generation job. Returns the task in `Created` state with
    /// the remote-assigned id.
    pub async fn submit(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationTask> {
        self.check_credential()?;
        if prompt.trim().is_empty() {
            return Err(Error::Validation("prompt must not be blank".to_string()));
        }

        let request = CreateTaskRequest {
            model: MODEL,
            input: TaskInput {
                prompt,
                image_input: &options.image_input,
                aspect_ratio: options.aspect_ratio.as_str(),
                resolution: options.resolution.as_str(),
                output_format: options.output_format.as_str(),
            },
            callback_url: options.callback_url.as_deref(),
        };

        let response = self
            .http
            .post(format!("{}/createTask", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let envelope: ApiEnvelope<CreateTaskData> = read_envelope(response).await?;
        let data = envelope
            .data
            .ok_or_else(|| Error::MalformedResponse("missing data in response".to_string()))?;
        let task_id = data
            .task_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::MalformedResponse("no task id in response".to_string()))?;

        info!(task_id = %task_id, "generation task created");
        Ok(GenerationTask::created(task_id))
    }

    /// Fetches the remote status once and returns an updated snapshot.
    /// Remote states map as `waiting → Polling`, `success → Succeeded`,
    /// `fail → Failed`; anything unrecognized keeps `Polling`.
    pub async fn poll(&self, task: &GenerationTask) -> Result<GenerationTask> {
        let data = self.fetch_status(&task.task_id).await?;
        let mut next = task.clone();

        match data.state.as_str() {
            "success" => {
                next.state = TaskState::Succeeded;
                next.result_urls = parse_result_urls(data.result_json.as_deref());
            }
            "fail" => {
                next.state = TaskState::Failed;
                next.failure_reason =
                    Some(data.fail_msg.unwrap_or_else(|| "unknown failure".to_string()));
            }
            other => {
                if other != "waiting" {
                    debug!(state = other, "unrecognized remote state, still waiting");
                }
                next.state = TaskState::Polling;
            }
        }

        Ok(next)
    }

    /// Submit, then poll until a terminal state or the wall-clock timeout.
    /// Transient polling errors are logged and retried; the returned task is
    /// always terminal. Submission errors are raised.
    pub async fn run(&self, prompt: &str, options: &GenerationOptions) -> Result<GenerationTask> {
        let interval = options.poll_interval.unwrap_or(self.poll_interval);
        let timeout = options.timeout.unwrap_or(self.poll_timeout);

        self.progress.reset();
        let mut task = self.submit(prompt, options).await?;
        let started = Instant::now();

        loop {
            // Timeout is checked before each attempt, so a remote that would
            // eventually succeed still times out once the budget is spent.
            if started.elapsed() >= timeout {
                warn!(task_id = %task.task_id, ?timeout, "generation timed out");
                task.state = TaskState::TimedOut;
                return Ok(task);
            }

            match self.poll(&task).await {
                Ok(next) => {
                    task = next;
                    match task.state {
                        TaskState::Succeeded => {
                            self.progress.finish();
                            info!(
                                task_id = %task.task_id,
                                urls = task.result_urls.len(),
                                "generation succeeded"
                            );
                            return Ok(task);
                        }
                        TaskState::Failed => {
                            info!(
                                task_id = %task.task_id,
                                reason = task.failure_reason.as_deref().unwrap_or("unknown"),
                                "generation failed"
                            );
                            return Ok(task);
                        }
                        _ => {}
                    }
                }
                Err(err) => {
                    // Transient: keep the last error for diagnostics and let
                    // the timeout act as the only circuit breaker.
                    warn!(task_id = %task.task_id, error = %err, "polling error, will retry");
                    task.last_transient_error = Some(err.to_string());
                }
            }

            self.progress.advance();
            tokio::time::sleep(interval).await;
        }
    }

    /// Probes the credential with a minimal submission. 401 means rejected;
    /// 402/403 mean the key cannot be used either. Anything else — including
    /// a plain validation complaint from the remote — means the key works.
    pub async fn validate_api_key(&self) -> bool {
        if self.api_key.trim().is_empty() {
            return false;
        }

        let request = CreateTaskRequest {
            model: MODEL,
            input: TaskInput {
                prompt: "test",
                image_input: &[],
                aspect_ratio: "1:1",
                resolution: "1K",
                output_format: "png",
            },
            callback_url: None,
        };

        let response = self
            .http
            .post(format!("{}/createTask", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await;

        match response {
            Ok(r) => !matches!(r.status().as_u16(), 401 | 402 | 403),
            Err(e) => {
                warn!(error = %e, "API key probe failed");
                false
            }
        }
    }

    fn check_credential(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Validation("API key is not set".to_string()));
        }
        Ok(())
    }

    async fn fetch_status(&self, task_id: &str) -> Result<RecordInfoData> {
        let response = self
            .http
            .get(format!("{}/recordInfo", self.base_url))
            .query(&[("taskId", task_id)])
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let envelope: ApiEnvelope<RecordInfoData> = read_envelope(response).await?;
        envelope
            .data
            .ok_or_else(|| Error::MalformedResponse("missing data in response".to_string()))
    }
}

/// Reads a response, classifying non-success transport statuses and
/// application-level error codes into the error taxonomy.
async fn read_envelope<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiEnvelope<T>> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(classify(status.as_u16(), body));
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(&body)
        .map_err(|e| Error::MalformedResponse(format!("invalid response body: {e}")))?;

    if envelope.code != 200 {
        return Err(classify(
            u16::try_from(envelope.code).unwrap_or(0),
            envelope.msg,
        ));
    }

    Ok(envelope)
}

fn classify(status: u16, message: String) -> Error {
    let message = if message.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        message
    };
    match status {
        401 => Error::Auth(message),
        402 => Error::Quota(message),
        429 => Error::RateLimited(message),
        _ => Error::Remote { status, message },
    }
}

/// Extracts result URLs from the embedded payload. Unparsable or missing
/// payloads degrade to an empty list — this never raises.
fn parse_result_urls(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<ResultPayload>(raw) {
        Ok(payload) => payload.result_urls,
        Err(e) => {
            warn!(error = %e, "could not parse result payload, returning no URLs");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn client_for(server: &mockito::ServerGuard) -> GenerationClient {
        GenerationClient::new("test-key").with_base_url(server.url())
    }

    fn success_envelope(urls: &[&str]) -> String {
        let result_json = serde_json::json!({ "resultUrls": urls }).to_string();
        serde_json::json!({
            "code": 200,
            "msg": "success",
            "data": { "state": "success", "resultJson": result_json }
        })
        .to_string()
    }

    fn waiting_envelope() -> String {
        serde_json::json!({
            "code": 200,
            "msg": "success",
            "data": { "state": "waiting" }
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_submit_returns_created_task() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/createTask")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":200,"msg":"success","data":{"taskId":"task-42"}}"#)
            .create_async()
            .await;

        let task = client_for(&server)
            .submit("a poster prompt", &GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(task.task_id, "task-42");
        assert_eq!(task.state, TaskState::Created);
    }

    #[tokio::test]
    async fn test_submit_blank_prompt_is_validation_error() {
        let client = GenerationClient::new("test-key");
        let err = client
            .submit("   ", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_submit_without_credential_is_validation_error() {
        let client = GenerationClient::new("");
        let err = client
            .submit("a prompt", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_submit_401_classifies_as_auth() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/createTask")
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let err = client_for(&server)
            .submit("a prompt", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Auth(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_submit_402_classifies_as_quota() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/createTask")
            .with_status(402)
            .with_body("insufficient balance")
            .create_async()
            .await;

        let err = client_for(&server)
            .submit("a prompt", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Quota(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_submit_429_classifies_as_rate_limit() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/createTask")
            .with_status(429)
            .with_body("too many requests")
            .create_async()
            .await;

        let err = client_for(&server)
            .submit("a prompt", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RateLimited(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_submit_application_error_code_is_classified() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/createTask")
            .with_status(200)
            .with_body(r#"{"code":402,"msg":"insufficient balance","data":null}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .submit("a prompt", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Quota(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_submit_missing_task_id_is_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/createTask")
            .with_status(200)
            .with_body(r#"{"code":200,"msg":"success","data":{}}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .submit("a prompt", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_poll_waiting_maps_to_polling() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/recordInfo")
            .match_query(mockito::Matcher::UrlEncoded(
                "taskId".into(),
                "task-1".into(),
            ))
            .with_status(200)
            .with_body(waiting_envelope())
            .create_async()
            .await;

        let task = GenerationTask::created("task-1".to_string());
        let next = client_for(&server).poll(&task).await.unwrap();
        assert_eq!(next.state, TaskState::Polling);
    }

    #[tokio::test]
    async fn test_poll_unrecognized_state_keeps_polling() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/recordInfo")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"code":200,"msg":"success","data":{"state":"queuing"}}"#)
            .create_async()
            .await;

        let task = GenerationTask::created("task-1".to_string());
        let next = client_for(&server).poll(&task).await.unwrap();
        assert_eq!(next.state, TaskState::Polling);
    }

    #[tokio::test]
    async fn test_poll_success_extracts_result_urls() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/recordInfo")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(success_envelope(&["https://cdn.example/poster.png"]))
            .create_async()
            .await;

        let task = GenerationTask::created("task-1".to_string());
        let next = client_for(&server).poll(&task).await.unwrap();
        assert_eq!(next.state, TaskState::Succeeded);
        assert_eq!(
            next.result_urls,
            vec!["https://cdn.example/poster.png".to_string()]
        );
    }

    #[tokio::test]
    async fn test_poll_success_with_corrupt_payload_yields_empty_urls() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/recordInfo")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"code":200,"msg":"success","data":{"state":"success","resultJson":"not json"}}"#,
            )
            .create_async()
            .await;

        let task = GenerationTask::created("task-1".to_string());
        let next = client_for(&server).poll(&task).await.unwrap();
        assert_eq!(next.state, TaskState::Succeeded);
        assert!(next.result_urls.is_empty());
    }

    #[tokio::test]
    async fn test_poll_fail_captures_remote_message() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/recordInfo")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"code":200,"msg":"success","data":{"state":"fail","failMsg":"content rejected"}}"#,
            )
            .create_async()
            .await;

        let task = GenerationTask::created("task-1".to_string());
        let next = client_for(&server).poll(&task).await.unwrap();
        assert_eq!(next.state, TaskState::Failed);
        assert_eq!(next.failure_reason.as_deref(), Some("content rejected"));
    }

    #[tokio::test]
    async fn test_run_waits_twice_then_succeeds() {
        let mut server = mockito::Server::new_async().await;
        let _create = server
            .mock("POST", "/createTask")
            .with_status(200)
            .with_body(r#"{"code":200,"msg":"success","data":{"taskId":"task-1"}}"#)
            .create_async()
            .await;

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_mock = Arc::clone(&calls);
        let status = server
            .mock("GET", "/recordInfo")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body_from_request(move |_| {
                let n = calls_in_mock.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    waiting_envelope().into_bytes()
                } else {
                    success_envelope(&["https://cdn.example/poster.png"]).into_bytes()
                }
            })
            .expect(3)
            .create_async()
            .await;

        let options = GenerationOptions {
            poll_interval: Some(Duration::from_millis(50)),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let client = client_for(&server);
        let started = std::time::Instant::now();
        let task = client.run("a poster prompt", &options).await.unwrap();

        assert_eq!(task.state, TaskState::Succeeded);
        assert_eq!(
            task.result_urls,
            vec!["https://cdn.example/poster.png".to_string()]
        );
        assert_eq!(client.progress().get(), 100);
        assert!(
            started.elapsed() >= Duration::from_millis(100),
            "two poll delays must elapse"
        );
        status.assert_async().await;
    }

    #[tokio::test]
    async fn test_run_times_out_on_endless_waiting() {
        let mut server = mockito::Server::new_async().await;
        let _create = server
            .mock("POST", "/createTask")
            .with_status(200)
            .with_body(r#"{"code":200,"msg":"success","data":{"taskId":"task-1"}}"#)
            .create_async()
            .await;
        let _status = server
            .mock("GET", "/recordInfo")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(waiting_envelope())
            .expect_at_least(2)
            .create_async()
            .await;

        let options = GenerationOptions {
            poll_interval: Some(Duration::from_millis(80)),
            timeout: Some(Duration::from_millis(250)),
            ..Default::default()
        };
        let started = std::time::Instant::now();
        let task = client_for(&server)
            .run("a poster prompt", &options)
            .await
            .unwrap();

        assert_eq!(task.state, TaskState::TimedOut);
        assert!(task.result_urls.is_empty());
        assert!(
            started.elapsed() < Duration::from_secs(2),
            "timeout must fire close to the budget"
        );
    }

    #[tokio::test]
    async fn test_run_survives_transient_polling_errors() {
        let mut server = mockito::Server::new_async().await;
        let _create = server
            .mock("POST", "/createTask")
            .with_status(200)
            .with_body(r#"{"code":200,"msg":"success","data":{"taskId":"task-1"}}"#)
            .create_async()
            .await;

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_mock = Arc::clone(&calls);
        let _status = server
            .mock("GET", "/recordInfo")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body_from_request(move |_| {
                if calls_in_mock.fetch_add(1, Ordering::SeqCst) == 0 {
                    b"not even json".to_vec()
                } else {
                    success_envelope(&["https://cdn.example/poster.png"]).into_bytes()
                }
            })
            .create_async()
            .await;

        let options = GenerationOptions {
            poll_interval: Some(Duration::from_millis(30)),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let task = client_for(&server)
            .run("a poster prompt", &options)
            .await
            .unwrap();

        assert_eq!(task.state, TaskState::Succeeded);
        assert!(
            task.last_transient_error
                .as_deref()
                .unwrap()
                .contains("malformed response"),
            "transient error retained for diagnostics"
        );
    }

    #[tokio::test]
    async fn test_validate_api_key_rejects_401() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/createTask")
            .with_status(401)
            .create_async()
            .await;
        assert!(!client_for(&server).validate_api_key().await);
    }

    #[tokio::test]
    async fn test_validate_api_key_accepts_success() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/createTask")
            .with_status(200)
            .with_body(r#"{"code":200,"msg":"success","data":{"taskId":"probe"}}"#)
            .create_async()
            .await;
        assert!(client_for(&server).validate_api_key().await);
    }

    #[tokio::test]
    async fn test_validate_api_key_blank_key_short_circuits() {
        let client = GenerationClient::new("  ");
        assert!(!client.validate_api_key().await);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = GenerationClient::new("secret-key");
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_classify_maps_statuses() {
        assert!(matches!(classify(401, String::new()), Error::Auth(_)));
        assert!(matches!(classify(402, String::new()), Error::Quota(_)));
        assert!(matches!(classify(429, String::new()), Error::RateLimited(_)));
        assert!(matches!(
            classify(500, "boom".to_string()),
            Error::Remote { status: 500, .. }
        ));
    }

    #[test]
    fn test_parse_result_urls_degrades_gracefully() {
        assert!(parse_result_urls(None).is_empty());
        assert!(parse_result_urls(Some("garbage")).is_empty());
        assert!(parse_result_urls(Some("{}")).is_empty());
        assert_eq!(
            parse_result_urls(Some(r#"{"resultUrls":["u1","u2"]}"#)),
            vec!["u1".to_string(), "u2".to_string()]
        );
    }
}
