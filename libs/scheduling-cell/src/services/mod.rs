pub mod availability;
pub mod lifecycle;
pub mod notify;
pub mod rebooking;
pub mod session;
