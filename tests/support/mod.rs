#![allow(dead_code)]

pub mod collecting_reporter;
pub mod mock_payments_api;
