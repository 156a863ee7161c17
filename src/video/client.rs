//! HailuoClient - handles communication with the MiniMax HailuoAI video API.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use super::backoff::{poll_backoff, PollConfig};
use super::cancel::CancelToken;

/// The environment variable name for the HailuoAI API key.
pub const HAILUO_API_KEY_ENV: &str = "HAILUO_API_KEY";

/// Default base URL for the HailuoAI API.
pub const HAILUO_API_BASE_URL: &str = "https://api.minimax.chat/v1";

/// Default model for video generation.
pub const DEFAULT_MODEL: &str = "video-01";

/// Minimum clip duration supported by the provider, in seconds.
pub const MIN_DURATION_SECS: u32 = 3;

/// Maximum clip duration supported by the provider, in seconds.
pub const MAX_DURATION_SECS: u32 = 10;

/// Default timeout for HTTP requests (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the availability probe (5 seconds).
const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Parameters for one video generation request.
///
/// Immutable once constructed; the duration is silently clamped into the
/// provider's supported range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    style: String,
    duration_seconds: u32,
    aspect_ratio: String,
}

impl GenerationRequest {
    pub fn new(prompt: String, style: String, duration_seconds: u32, aspect_ratio: String) -> Self {
        Self {
            prompt,
            style,
            duration_seconds: duration_seconds.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS),
            aspect_ratio,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn aspect_ratio(&self) -> &str {
        &self.aspect_ratio
    }
}

/// Opaque identifier for one in-flight generation task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    task_id: String,
}

impl JobHandle {
    pub fn task_id(&self) -> &str {
        &self.task_id
    }
}

/// Lifecycle of one generation job as driven by `generate`.
#[derive(Debug, Clone, PartialEq)]
pub enum JobState {
    /// Submitted to the provider, not yet polled.
    Submitted,
    /// Waiting on the provider, polling for a terminal status.
    Polling,
    /// Terminal: the provider produced a video.
    Succeeded { video_url: String },
    /// Terminal: the provider reported failure.
    Failed,
    /// Terminal: a polling budget was exhausted.
    TimedOut,
}

/// Outcome of one status poll.
#[derive(Debug, Clone, PartialEq)]
pub enum PollStatus {
    /// The job is still being processed.
    Processing,
    /// The job finished and produced a video.
    Succeeded { video_url: String },
    /// The job failed on the provider side.
    Failed,
}

/// Request body for the generation endpoint.
#[derive(Debug, Serialize)]
struct SubmitBody<'a> {
    model: &'a str,
    prompt: &'a str,
    duration: u32,
    aspect_ratio: &'a str,
    style: &'a str,
}

/// Domain status embedded in every provider response.
#[derive(Debug, Deserialize)]
struct BaseResp {
    status_code: i64,
    #[serde(default)]
    status_msg: String,
}

/// Response from the generation endpoint.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    task_id: String,
    base_resp: BaseResp,
}

/// Response from the task status endpoint.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    video_url: Option<String>,
    base_resp: BaseResp,
}

/// Client for communicating with the HailuoAI video-generation API.
pub struct HailuoClient {
    api_key: String,
    base_url: String,
    model: String,
    http_client: reqwest::Client,
    poll_config: PollConfig,
}

impl HailuoClient {
    /// Create a new HailuoClient by reading the API key from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MissingApiKey` if the `HAILUO_API_KEY`
    /// environment variable is not set. No network call is made.
    pub fn new() -> Result<Self, ProviderError> {
        let api_key =
            std::env::var(HAILUO_API_KEY_ENV).map_err(|_| ProviderError::MissingApiKey)?;
        Self::with_api_key(api_key)
    }

    /// Create a new HailuoClient with an explicit API key.
    pub fn with_api_key(api_key: String) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, HAILUO_API_BASE_URL.to_string())
    }

    /// Create a new HailuoClient with a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            api_key,
            base_url,
            model: DEFAULT_MODEL.to_string(),
            http_client,
            poll_config: PollConfig::default(),
        })
    }

    /// Create a new HailuoClient with a custom model.
    pub fn with_model(api_key: String, model: String) -> Result<Self, ProviderError> {
        let mut client = Self::with_api_key(api_key)?;
        client.model = model;
        Ok(client)
    }

    /// Replace the polling configuration.
    pub fn with_poll_config(mut self, poll_config: PollConfig) -> Self {
        self.poll_config = poll_config;
        self
    }

    /// Replace the model on an existing client.
    pub fn with_model_name(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Submit a video generation request.
    ///
    /// Issues one POST to the provider's generation endpoint and returns a
    /// handle for polling.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Remote` for a non-2xx response,
    /// `ProviderError::Protocol` when the provider signals a domain error
    /// inside a 2xx response (`base_resp.status_code != 0`), or
    /// `ProviderError::Http` for transport failures.
    pub async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle, ProviderError> {
        let url = format!("{}/video_generation", self.base_url);

        let body = SubmitBody {
            model: &self.model,
            prompt: request.prompt(),
            duration: request.duration_seconds(),
            aspect_ratio: request.aspect_ratio(),
            style: request.style(),
        };

        log::info!(
            "Submitting generation request (style: {}, duration: {}s, aspect: {})",
            request.style(),
            request.duration_seconds(),
            request.aspect_ratio()
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::warn!("Generation submission rejected with HTTP {}", status);
            return Err(ProviderError::Remote { status, body });
        }

        let submit_response: SubmitResponse = response.json().await?;
        if submit_response.base_resp.status_code != 0 {
            return Err(ProviderError::Protocol {
                status_code: submit_response.base_resp.status_code,
                status_msg: submit_response.base_resp.status_msg,
            });
        }

        log::info!("Generation task submitted: {}", submit_response.task_id);
        Ok(JobHandle {
            task_id: submit_response.task_id,
        })
    }

    /// Poll the status of a previously submitted generation task.
    ///
    /// Failure modes mirror `submit`. A `success` status without a video
    /// URL is reported as a protocol error.
    pub async fn poll(&self, handle: &JobHandle) -> Result<PollStatus, ProviderError> {
        let url = format!("{}/video_generation/{}", self.base_url, handle.task_id());

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Remote { status, body });
        }

        let status_response: StatusResponse = response.json().await?;
        if status_response.base_resp.status_code != 0 {
            return Err(ProviderError::Protocol {
                status_code: status_response.base_resp.status_code,
                status_msg: status_response.base_resp.status_msg,
            });
        }

        match status_response.status.as_str() {
            "success" => match status_response.video_url {
                Some(video_url) => Ok(PollStatus::Succeeded { video_url }),
                None => Err(ProviderError::Protocol {
                    status_code: 0,
                    status_msg: "success status without video_url".to_string(),
                }),
            },
            "failed" => Ok(PollStatus::Failed),
            _ => Ok(PollStatus::Processing),
        }
    }

    /// Submit a generation request and drive it to completion.
    ///
    /// Convenience wrapper over `generate_with_cancel` with a token that
    /// never fires.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        self.generate_with_cancel(request, CancelToken::disarmed())
            .await
    }

    /// Submit a generation request and poll until terminal, honoring a
    /// cancellation token.
    ///
    /// The job walks `Submitted → Polling → Succeeded | Failed | TimedOut`.
    /// Two independent budgets bound the polling phase: "still processing"
    /// responses consume poll attempts (exponential backoff), while errors
    /// on a polling call consume network retries (flat delay). The token is
    /// checked at the top of every iteration and raced against every wait.
    ///
    /// # Errors
    ///
    /// `GenerationFailed` on a terminal failed status, `TimedOut` when
    /// either budget is exhausted, `Cancelled` when the token fires, and
    /// the `submit` failure modes if submission itself fails.
    pub async fn generate_with_cancel(
        &self,
        request: &GenerationRequest,
        mut cancel: CancelToken,
    ) -> Result<String, ProviderError> {
        let handle = self.submit(request).await?;

        let mut poll_attempts = 0u32;
        let mut network_retries = 0u32;
        let mut state = JobState::Submitted;

        loop {
            state = match state {
                JobState::Submitted => JobState::Polling,

                JobState::Polling => {
                    if cancel.is_cancelled() {
                        log::info!("Generation {} cancelled", handle.task_id());
                        return Err(ProviderError::Cancelled);
                    }

                    match self.poll(&handle).await {
                        Ok(PollStatus::Succeeded { video_url }) => {
                            JobState::Succeeded { video_url }
                        }
                        Ok(PollStatus::Failed) => JobState::Failed,
                        Ok(PollStatus::Processing) => {
                            poll_attempts += 1;
                            log::debug!(
                                "Task {} still processing (attempt {}/{})",
                                handle.task_id(),
                                poll_attempts,
                                self.poll_config.max_poll_attempts
                            );
                            if poll_attempts >= self.poll_config.max_poll_attempts {
                                JobState::TimedOut
                            } else {
                                let delay = poll_backoff(poll_attempts, &self.poll_config);
                                self.wait(delay, &mut cancel).await?;
                                JobState::Polling
                            }
                        }
                        Err(e) => {
                            network_retries += 1;
                            log::warn!(
                                "Polling attempt failed ({}/{}): {}",
                                network_retries,
                                self.poll_config.max_network_retries,
                                e
                            );
                            if network_retries >= self.poll_config.max_network_retries {
                                JobState::TimedOut
                            } else {
                                self.wait(self.poll_config.network_retry_delay, &mut cancel)
                                    .await?;
                                JobState::Polling
                            }
                        }
                    }
                }

                JobState::Succeeded { video_url } => {
                    log::info!("Generation {} completed", handle.task_id());
                    return Ok(video_url);
                }
                JobState::Failed => {
                    log::error!("Generation {} failed on the provider", handle.task_id());
                    return Err(ProviderError::GenerationFailed);
                }
                JobState::TimedOut => {
                    log::error!("Generation {} timed out", handle.task_id());
                    return Err(ProviderError::TimedOut);
                }
            };
        }
    }

    /// Sleep for `delay`, returning `Cancelled` if the token fires first.
    async fn wait(&self, delay: Duration, cancel: &mut CancelToken) -> Result<(), ProviderError> {
        tokio::select! {
            _ = tokio::time::sleep(delay) => Ok(()),
            _ = cancel.cancelled() => Err(ProviderError::Cancelled),
        }
    }

    /// Probe provider availability.
    ///
    /// Issues a GET against the models endpoint with a short timeout; any
    /// 2xx response means available, anything else (including transport
    /// errors) means unavailable.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/models", self.base_url);
        match self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .timeout(HEALTH_PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::warn!("Provider availability check failed: {}", e);
                false
            }
        }
    }
}

/// Download a finished video to disk.
///
/// Streams the response body to the destination without buffering the full
/// video in memory. Parent directories are created as needed.
pub async fn download_video(url: &str, dest: &Path) -> Result<PathBuf, ProviderError> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let http_client = reqwest::Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .build()?;
    let response = http_client.get(url).send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ProviderError::Remote { status, body });
    }

    let mut file = tokio::fs::File::create(dest).await?;
    let mut stream = response.bytes_stream();

    use futures_util::StreamExt;
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;

    Ok(dest.to_path_buf())
}

/// Errors that can occur on the provider path.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("provider error {status_code}: {status_msg}")]
    Protocol { status_code: i64, status_msg: String },

    #[error("video generation failed on the provider")]
    GenerationFailed,

    #[error("video generation timed out")]
    TimedOut,

    #[error("video generation cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
