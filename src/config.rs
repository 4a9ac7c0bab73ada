use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_TARGET_URL: &str = "http://localhost:8080/api/payments";
pub const DEFAULT_TOTAL_REQUESTS: usize = 500;
pub const DEFAULT_WORKER_MULTIPLIER: usize = 4;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
	pub target_url:         String,
	pub total_requests:     usize,
	pub worker_multiplier:  usize,
	pub workers:            Option<usize>,
	pub request_timeout_ms: Option<u64>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			target_url:         DEFAULT_TARGET_URL.to_string(),
			total_requests:     DEFAULT_TOTAL_REQUESTS,
			worker_multiplier:  DEFAULT_WORKER_MULTIPLIER,
			workers:            None,
			request_timeout_ms: None,
		}
	}
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("target_url", DEFAULT_TARGET_URL)?
			.set_default("total_requests", DEFAULT_TOTAL_REQUESTS as u64)?
			.set_default("worker_multiplier", DEFAULT_WORKER_MULTIPLIER as u64)?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn request_timeout(&self) -> Option<Duration> {
		self.request_timeout_ms.map(Duration::from_millis)
	}

	/// An explicit positive `workers` wins; otherwise the pool scales with
	/// the hardware. Never below one.
	pub fn worker_count(&self, available_parallelism: usize) -> usize {
		match self.workers {
			Some(workers) if workers > 0 => workers,
			_ => self
				.worker_multiplier
				.saturating_mul(available_parallelism)
				.max(1),
		}
	}
}

pub fn available_parallelism() -> usize {
	std::thread::available_parallelism()
		.map(|n| n.get())
		.unwrap_or(1)
}
