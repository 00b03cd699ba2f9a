use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the poster generation core.
///
/// `Validation` and submission-time errors are raised synchronously from
/// `submit`/`run`. Errors hit mid-poll are absorbed and retried until the
/// wall-clock timeout fires; the polling loop then yields a `TimedOut` task
/// state rather than the underlying transient error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("insufficient credits: {0}")]
    Quota(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("remote error (status {status}): {message}")]
    Remote { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("generation timed out after {elapsed_secs}s")]
    TimedOut { elapsed_secs: u64 },
}

impl Error {
    /// User-facing guidance string (Chinese, matching the product surface).
    /// Classified network/credential/billing errors get actionable wording;
    /// everything else falls back to the technical `Display` form.
    pub fn user_message(&self) -> String {
        match self {
            Error::Network(_) => "网络连接失败，请检查网络设置".to_string(),
            Error::Auth(_) => "API密钥无效或已过期，请检查您的API Key".to_string(),
            Error::Quota(_) => "账户余额不足，请充值后重试".to_string(),
            Error::RateLimited(_) => "请求频率过高，请稍后再试".to_string(),
            other => other.to_string(),
        }
    }
}
