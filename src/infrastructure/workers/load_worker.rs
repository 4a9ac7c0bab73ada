use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::domain::gateway::PaymentGateway;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment_factory::PaymentFactory;
use crate::domain::reporter::OutcomeReporter;

/// Shared work cursor: hands out task indices `0..total` exactly once each.
#[derive(Debug)]
pub struct TaskCursor {
	next:  AtomicUsize,
	total: usize,
}

impl TaskCursor {
	pub fn new(total: usize) -> Self {
		Self {
			next: AtomicUsize::new(0),
			total,
		}
	}

	pub fn claim(&self) -> Option<usize> {
		let index = self.next.fetch_add(1, Ordering::Relaxed);
		(index < self.total).then_some(index)
	}
}

/// Runs tasks until the cursor is exhausted and returns the outcomes this
/// worker produced.
pub async fn load_worker<G, R>(
	worker_id: usize,
	cursor: Arc<TaskCursor>,
	gateway: Arc<G>,
	reporter: Arc<R>,
) -> Vec<PaymentOutcome>
where
	G: PaymentGateway,
	R: OutcomeReporter,
{
	let mut outcomes = Vec::new();

	while let Some(task) = cursor.claim() {
		let payment = {
			let mut rng = rand::thread_rng();
			PaymentFactory::random_payment(&mut rng)
		};
		debug!(
			"Worker {worker_id} sending task {task}: {} {} via {}",
			payment.amount, payment.currency, payment.payment_method
		);

		let outcome = gateway.submit(&payment).await;
		reporter.report(&outcome);
		outcomes.push(outcome);
	}

	debug!("Worker {worker_id} drained after {} tasks", outcomes.len());
	outcomes
}
