pub mod client;
pub mod error;

pub use client::{HospitalApi, HospitalApiClient};
pub use error::GatewayError;
