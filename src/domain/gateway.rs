use async_trait::async_trait;

use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment::PaymentRequest;

/// Submits one payment to the service under test. Implementations fold every
/// failure into the returned outcome instead of erroring.
#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	async fn submit(&self, payment: &PaymentRequest) -> PaymentOutcome;
}
