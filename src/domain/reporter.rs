use crate::domain::outcome::PaymentOutcome;

pub trait OutcomeReporter: Send + Sync + 'static {
	fn report(&self, outcome: &PaymentOutcome);
}
