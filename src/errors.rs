use derive_more::derive::{Display, Error};

/// Failures that abort the whole run. Per-request failures never end up
/// here; they are reported as outcomes.
#[derive(Debug, Display, Error)]
pub enum LoadGeneratorError {
	#[display("Could not load configuration: {_0}")]
	Configuration(#[error(source)] config::ConfigError),
	#[display("Could not build the HTTP client: {_0}")]
	HttpClient(#[error(source)] reqwest::Error),
	#[display("Worker {worker} terminated abnormally: {source}")]
	Worker {
		worker: usize,
		source: tokio::task::JoinError,
	},
}

impl From<config::ConfigError> for LoadGeneratorError {
	fn from(err: config::ConfigError) -> Self {
		LoadGeneratorError::Configuration(err)
	}
}

impl From<reqwest::Error> for LoadGeneratorError {
	fn from(err: reqwest::Error) -> Self {
		LoadGeneratorError::HttpClient(err)
	}
}
