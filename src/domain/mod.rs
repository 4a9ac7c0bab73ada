pub mod gateway;
pub mod outcome;
pub mod payment;
pub mod payment_factory;
pub mod reporter;
