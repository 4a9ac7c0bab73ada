use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;

use crate::domain::payment::{
	Currency, MAX_AMOUNT, MERCHANT_LENGTH, MIN_AMOUNT, PaymentMethod,
	PaymentRequest,
};

/// Builds synthetic payment requests with every field sampled uniformly
/// and independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentFactory;

impl PaymentFactory {
	pub fn random_payment<R: Rng + ?Sized>(rng: &mut R) -> PaymentRequest {
		PaymentRequest {
			amount:         rng.gen_range(MIN_AMOUNT..=MAX_AMOUNT),
			currency:       *Currency::ALL
				.choose(rng)
				.unwrap_or(&Currency::Usd),
			payment_method: *PaymentMethod::ALL
				.choose(rng)
				.unwrap_or(&PaymentMethod::PayNow),
			merchant:       Self::random_merchant(rng),
		}
	}

	pub fn random_merchant<R: Rng + ?Sized>(rng: &mut R) -> String {
		rng.sample_iter(&Alphanumeric)
			.take(MERCHANT_LENGTH)
			.map(char::from)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	const SAMPLES: usize = 2_000;

	#[test]
	fn test_random_payment_fields_stay_in_their_domains() {
		let mut rng = StdRng::seed_from_u64(7);

		for _ in 0..SAMPLES {
			let payment = PaymentFactory::random_payment(&mut rng);

			assert!((MIN_AMOUNT..=MAX_AMOUNT).contains(&payment.amount));
			assert!(Currency::ALL.contains(&payment.currency));
			assert!(PaymentMethod::ALL.contains(&payment.payment_method));
			assert_eq!(payment.merchant.len(), MERCHANT_LENGTH);
			assert!(payment.merchant.chars().all(|c| c.is_ascii_alphanumeric()));
		}
	}

	#[test]
	fn test_random_payment_covers_every_enumerated_value() {
		let mut rng = StdRng::seed_from_u64(11);
		let mut currencies = HashSet::new();
		let mut methods = HashSet::new();
		let mut amounts = HashSet::new();

		for _ in 0..SAMPLES {
			let payment = PaymentFactory::random_payment(&mut rng);
			currencies.insert(payment.currency.to_string());
			methods.insert(payment.payment_method.to_string());
			amounts.insert(payment.amount);
		}

		assert_eq!(currencies.len(), Currency::ALL.len());
		assert_eq!(methods.len(), PaymentMethod::ALL.len());
		assert!(amounts.contains(&MIN_AMOUNT));
		assert!(amounts.contains(&MAX_AMOUNT));
	}

	#[test]
	fn test_random_merchants_differ() {
		let mut rng = rand::thread_rng();

		let first = PaymentFactory::random_merchant(&mut rng);
		let second = PaymentFactory::random_merchant(&mut rng);

		assert_ne!(first, second);
	}
}
