#[derive(Debug, thiserror::Error)]
pub(crate) enum FetchError {
  #[error("response body could not be decoded")]
  Decode(#[source] reqwest::Error),
  #[error("item {0} does not exist")]
  Missing(u64),
  #[error("request failed")]
  Request(#[source] reqwest::Error),
  #[error("server responded with {0}")]
  Status(reqwest::StatusCode),
  #[error("request timed out")]
  Timeout,
  #[error("unsupported content type `{0}`")]
  Unsupported(String),
}

impl From<reqwest::Error> for FetchError {
  fn from(error: reqwest::Error) -> Self {
    if error.is_timeout() {
      Self::Timeout
    } else if let Some(status) = error.status() {
      Self::Status(status)
    } else if error.is_decode() {
      Self::Decode(error)
    } else {
      Self::Request(error)
    }
  }
}
