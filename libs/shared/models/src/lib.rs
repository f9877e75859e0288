pub mod appointment;
pub mod patient;
pub mod range;
pub mod service;
pub mod slot;

pub use appointment::{Appointment, AppointmentStatus, BoundSlot};
pub use patient::Patient;
pub use range::DateRange;
pub use service::{ServiceStep, StepCapability};
pub use slot::{ScheduleSlot, SlotQuery};
