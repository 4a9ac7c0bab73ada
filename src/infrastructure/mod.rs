pub mod http;
pub mod reporting;
pub mod workers;
