use std::sync::Mutex;

use payment_load_generator::domain::outcome::PaymentOutcome;
use payment_load_generator::domain::reporter::OutcomeReporter;

#[derive(Default)]
pub struct CollectingReporter {
	outcomes: Mutex<Vec<PaymentOutcome>>,
}

impl CollectingReporter {
	pub fn outcomes(&self) -> Vec<PaymentOutcome> {
		self.outcomes.lock().unwrap().clone()
	}

	pub fn lines(&self) -> Vec<String> {
		self.outcomes().iter().map(ToString::to_string).collect()
	}
}

impl OutcomeReporter for CollectingReporter {
	fn report(&self, outcome: &PaymentOutcome) {
		self.outcomes.lock().unwrap().push(outcome.clone());
	}
}
