use std::net::TcpListener;
use std::sync::Mutex;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use payment_load_generator::domain::payment::PaymentRequest;
use serde_json::Value;

pub const PAYMENTS_PATH: &str = "/api/payments";

#[derive(Clone)]
pub enum MockBehaviour {
	Created(Value),
	Status(u16),
	Delayed(Duration, Value),
}

struct MockState {
	behaviour: MockBehaviour,
	received:  Mutex<Vec<PaymentRequest>>,
}

/// Stand-in for the payments service, listening on an ephemeral port.
pub struct MockPaymentsApi {
	pub url: String,
	state:   web::Data<MockState>,
	handle:  ServerHandle,
}

impl MockPaymentsApi {
	pub async fn start(behaviour: MockBehaviour) -> Self {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let port = listener.local_addr().unwrap().port();
		let state = web::Data::new(MockState {
			behaviour,
			received: Mutex::new(Vec::new()),
		});

		let app_state = state.clone();
		let server = HttpServer::new(move || {
			App::new()
				.app_data(app_state.clone())
				.route(PAYMENTS_PATH, web::post().to(create_payment))
		})
		.workers(2)
		.listen(listener)
		.unwrap()
		.run();
		let handle = server.handle();
		actix_web::rt::spawn(server);

		Self {
			url: format!("http://127.0.0.1:{port}{PAYMENTS_PATH}"),
			state,
			handle,
		}
	}

	pub fn received(&self) -> Vec<PaymentRequest> {
		self.state.received.lock().unwrap().clone()
	}

	pub async fn stop(self) {
		self.handle.stop(true).await;
	}
}

/// Address nothing listens on, for connection-refused scenarios.
pub fn unreachable_url() -> String {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();
	drop(listener);
	format!("http://127.0.0.1:{port}{PAYMENTS_PATH}")
}

async fn create_payment(
	payload: web::Json<PaymentRequest>,
	state: web::Data<MockState>,
) -> HttpResponse {
	state.received.lock().unwrap().push(payload.into_inner());

	match &state.behaviour {
		MockBehaviour::Created(body) => HttpResponse::Created().json(body),
		MockBehaviour::Status(status) => {
			HttpResponse::build(StatusCode::from_u16(*status).unwrap()).finish()
		}
		MockBehaviour::Delayed(delay, body) => {
			actix_web::rt::time::sleep(*delay).await;
			HttpResponse::Created().json(body)
		}
	}
}
