use std::error::Error;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::gateway::PaymentGateway;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment::PaymentRequest;

/// The payments service answers with the full payment details; only the
/// identifier matters here.
#[derive(Debug, Deserialize)]
struct CreatedPaymentResponse {
	#[serde(default)]
	id: Option<Value>,
}

#[derive(Clone)]
pub struct HttpPaymentGateway {
	http_client: Client,
	target_url:  String,
}

impl HttpPaymentGateway {
	pub fn new(http_client: Client, target_url: String) -> Self {
		Self {
			http_client,
			target_url,
		}
	}

	pub fn build_client(
		request_timeout: Option<Duration>,
	) -> Result<Client, reqwest::Error> {
		let builder = Client::builder();
		match request_timeout {
			Some(timeout) => builder.timeout(timeout).build(),
			None => builder.build(),
		}
	}

	pub fn target_url(&self) -> &str {
		&self.target_url
	}
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
	async fn submit(&self, payment: &PaymentRequest) -> PaymentOutcome {
		let response = match self
			.http_client
			.post(&self.target_url)
			.header(CONTENT_TYPE, "application/json")
			.json(payment)
			.send()
			.await
		{
			Ok(response) => response,
			Err(e) => {
				let reason = describe_error(&e);
				warn!("Payment request to {} failed: {reason}", self.target_url);
				return PaymentOutcome::TransportFailure { reason };
			}
		};

		let status = response.status();
		if status != StatusCode::CREATED {
			debug!("Payment rejected with status {status}");
			return PaymentOutcome::Rejected {
				status: status.as_u16(),
			};
		}

		match response.json::<CreatedPaymentResponse>().await {
			Ok(CreatedPaymentResponse { id: Some(id) }) => match id_to_string(id) {
				Some(id) => {
					debug!("Payment created with id {id}");
					PaymentOutcome::Created { id }
				}
				None => {
					warn!("Payment created but the response id is not usable");
					PaymentOutcome::MissingId {
						status: status.as_u16(),
					}
				}
			},
			Ok(CreatedPaymentResponse { id: None }) => {
				warn!("Payment created but the response carries no id");
				PaymentOutcome::MissingId {
					status: status.as_u16(),
				}
			}
			Err(e) => {
				warn!("Failed to parse created payment response: {e}");
				PaymentOutcome::MissingId {
					status: status.as_u16(),
				}
			}
		}
	}
}

fn id_to_string(id: Value) -> Option<String> {
	match id {
		Value::String(id) if !id.is_empty() => Some(id),
		Value::Number(id) => Some(id.to_string()),
		_ => None,
	}
}

/// Flattens the error chain so the printed line names the root cause
/// (e.g. "connection refused") and not only the outer request error.
fn describe_error(error: &reqwest::Error) -> String {
	let mut description = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		description.push_str(": ");
		description.push_str(&cause.to_string());
		source = cause.source();
	}
	description
}
