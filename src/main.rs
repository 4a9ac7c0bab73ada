use std::sync::Arc;

use payment_load_generator::config::Config;
use payment_load_generator::infrastructure::reporting::line_reporter::LineReporter;
use payment_load_generator::run;

#[tokio::main]
async fn main() -> Result<(), payment_load_generator::errors::LoadGeneratorError> {
	env_logger::init();

	let config = Arc::new(Config::load()?);
	run(config, Arc::new(LineReporter::stdout())).await?;
	Ok(())
}
