use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const MIN_AMOUNT: u32 = 1;
pub const MAX_AMOUNT: u32 = 100;
pub const MERCHANT_LENGTH: usize = 10;

#[derive(Debug, Display, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
	#[display("USD")]
	Usd,
	#[display("EUR")]
	Eur,
	#[display("GBP")]
	Gbp,
}

impl Currency {
	pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Gbp];
}

#[derive(Debug, Display, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
	#[display("PAY_NOW")]
	PayNow,
	#[display("PAY_OVER_3_MONTHS")]
	#[serde(rename = "PAY_OVER_3_MONTHS")]
	PayOver3Months,
	#[display("PAY_OVER_6_MONTHS")]
	#[serde(rename = "PAY_OVER_6_MONTHS")]
	PayOver6Months,
}

impl PaymentMethod {
	pub const ALL: [PaymentMethod; 3] = [
		PaymentMethod::PayNow,
		PaymentMethod::PayOver3Months,
		PaymentMethod::PayOver6Months,
	];

	/// Installment methods settle after the purchase date.
	pub fn is_pay_later(&self) -> bool {
		!matches!(self, PaymentMethod::PayNow)
	}
}

/// Body of `POST /api/payments`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
	pub amount:         u32,
	pub currency:       Currency,
	pub payment_method: PaymentMethod,
	pub merchant:       String,
}
