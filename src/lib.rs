pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod use_cases;

use std::sync::Arc;

use log::{debug, info};

use crate::config::{Config, available_parallelism};
use crate::domain::outcome::BatchSummary;
use crate::domain::reporter::OutcomeReporter;
use crate::errors::LoadGeneratorError;
use crate::infrastructure::http::http_payment_gateway::HttpPaymentGateway;
use crate::use_cases::generate_load::GenerateLoadUseCase;

/// Fires one batch of synthetic payments at the configured endpoint and
/// reports every outcome through `reporter`.
pub async fn run<R: OutcomeReporter>(
	config: Arc<Config>,
	reporter: Arc<R>,
) -> Result<BatchSummary, LoadGeneratorError> {
	let http_client = HttpPaymentGateway::build_client(config.request_timeout())?;
	let gateway = Arc::new(HttpPaymentGateway::new(
		http_client,
		config.target_url.clone(),
	));
	let workers = config.worker_count(available_parallelism());

	info!("Starting payment load against {}", gateway.target_url());
	let summary = GenerateLoadUseCase::new(gateway, reporter, workers)
		.execute(config.total_requests)
		.await?;

	info!(
		"Batch finished in {:?}: {} dispatched, {} created, {} missing id, {} \
		 rejected, {} transport failures",
		summary.elapsed,
		summary.dispatched,
		summary.created,
		summary.missing_id,
		summary.rejected,
		summary.transport_failures
	);
	if let Ok(json) = serde_json::to_string(&summary) {
		debug!("Batch summary: {json}");
	}

	Ok(summary)
}
