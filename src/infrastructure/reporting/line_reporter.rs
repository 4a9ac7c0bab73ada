use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use log::error;

use crate::domain::outcome::PaymentOutcome;
use crate::domain::reporter::OutcomeReporter;

/// Writes one line per outcome. Lines from concurrent workers may interleave
/// in any order but never tear.
pub struct LineReporter<W: Write + Send + 'static> {
	writer: Mutex<W>,
}

impl LineReporter<Stdout> {
	pub fn stdout() -> Self {
		Self::new(io::stdout())
	}
}

impl<W: Write + Send + 'static> LineReporter<W> {
	pub fn new(writer: W) -> Self {
		Self {
			writer: Mutex::new(writer),
		}
	}

	pub fn into_inner(self) -> W {
		match self.writer.into_inner() {
			Ok(writer) => writer,
			Err(poisoned) => poisoned.into_inner(),
		}
	}
}

impl<W: Write + Send + 'static> OutcomeReporter for LineReporter<W> {
	fn report(&self, outcome: &PaymentOutcome) {
		let mut writer = match self.writer.lock() {
			Ok(writer) => writer,
			Err(poisoned) => poisoned.into_inner(),
		};

		if let Err(e) = writeln!(writer, "{outcome}").and_then(|_| writer.flush()) {
			error!("Failed to report outcome '{outcome}': {e}");
		}
	}
}
