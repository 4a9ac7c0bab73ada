use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use log::{error, info};
use time::OffsetDateTime;

use crate::domain::gateway::PaymentGateway;
use crate::domain::outcome::BatchSummary;
use crate::domain::reporter::OutcomeReporter;
use crate::errors::LoadGeneratorError;
use crate::infrastructure::workers::load_worker::{TaskCursor, load_worker};

pub struct GenerateLoadUseCase<G: PaymentGateway, R: OutcomeReporter> {
	gateway:  Arc<G>,
	reporter: Arc<R>,
	workers:  usize,
}

impl<G: PaymentGateway, R: OutcomeReporter> GenerateLoadUseCase<G, R> {
	pub fn new(gateway: Arc<G>, reporter: Arc<R>, workers: usize) -> Self {
		Self {
			gateway,
			reporter,
			workers: workers.max(1),
		}
	}

	pub fn workers(&self) -> usize {
		self.workers
	}

	/// Dispatches `total_requests` payments over the worker pool and waits
	/// until every one of them has produced an outcome.
	pub async fn execute(
		&self,
		total_requests: usize,
	) -> Result<BatchSummary, LoadGeneratorError> {
		let started_at = OffsetDateTime::now_utc();
		let clock = Instant::now();
		let cursor = Arc::new(TaskCursor::new(total_requests));

		info!(
			"Dispatching {total_requests} payment requests across {} workers",
			self.workers
		);

		let handles = (0..self.workers).map(|worker_id| {
			tokio::spawn(load_worker(
				worker_id,
				cursor.clone(),
				self.gateway.clone(),
				self.reporter.clone(),
			))
		});

		let mut summary = BatchSummary::new(self.workers, started_at);
		for (worker, result) in join_all(handles).await.into_iter().enumerate() {
			let outcomes = result.map_err(|source| {
				error!("Worker {worker} terminated abnormally: {source}");
				LoadGeneratorError::Worker { worker, source }
			})?;
			outcomes.iter().for_each(|outcome| summary.record(outcome));
		}
		summary.elapsed = clock.elapsed();

		Ok(summary)
	}
}
