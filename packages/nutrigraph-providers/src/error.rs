pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Upstream failures, surfaced immediately: there is no retry policy at
/// this layer or above it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Upstream unavailable: {message}")]
	Unavailable { message: String },
	#[error("Upstream timed out: {message}")]
	Timeout { message: String },
	#[error("Query rejected by the engine: {message}")]
	MalformedQuery { message: String },
	#[error("Upstream returned status {status}: {message}")]
	UpstreamStatus { status: u16, message: String },
	#[error("Failed to decode upstream response: {message}")]
	Decode { message: String },
}
impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			Self::Timeout { message: err.to_string() }
		} else {
			Self::Unavailable { message: err.to_string() }
		}
	}
}
