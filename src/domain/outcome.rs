use std::time::Duration;

use derive_more::Display;
use serde::Serialize;
use time::OffsetDateTime;

/// Result of a single payment submission. Every request ends in exactly one
/// of these; none of them stop the batch.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
	#[display("ID: {id}")]
	Created { id: String },
	#[display("Missing ID in response (status {status})")]
	MissingId { status: u16 },
	#[display("Response Code: {status}")]
	Rejected { status: u16 },
	#[display("Request failed: {reason}")]
	TransportFailure { reason: String },
}

impl PaymentOutcome {
	pub fn is_created(&self) -> bool {
		matches!(self, PaymentOutcome::Created { .. })
	}
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BatchSummary {
	pub workers:            usize,
	pub dispatched:         usize,
	pub created:            usize,
	pub missing_id:         usize,
	pub rejected:           usize,
	pub transport_failures: usize,
	#[serde(with = "time::serde::rfc3339")]
	pub started_at:         OffsetDateTime,
	pub elapsed:            Duration,
}

impl BatchSummary {
	pub fn new(workers: usize, started_at: OffsetDateTime) -> Self {
		Self {
			workers,
			dispatched: 0,
			created: 0,
			missing_id: 0,
			rejected: 0,
			transport_failures: 0,
			started_at,
			elapsed: Duration::ZERO,
		}
	}

	pub fn record(&mut self, outcome: &PaymentOutcome) {
		self.dispatched += 1;
		match outcome {
			PaymentOutcome::Created { .. } => self.created += 1,
			PaymentOutcome::MissingId { .. } => self.missing_id += 1,
			PaymentOutcome::Rejected { .. } => self.rejected += 1,
			PaymentOutcome::TransportFailure { .. } => self.transport_failures += 1,
		}
	}

	pub fn failed(&self) -> usize {
		self.dispatched - self.created
	}
}
