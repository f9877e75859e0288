use std::sync::Arc;

use tracing::{debug, warn};

use hospital_gateway::{GatewayError, HospitalApi};
use shared_models::{Appointment, ScheduleSlot};

use crate::models::SchedulingError;

/// Orchestrates moving an appointment onto a different available slot.
///
/// The server is the sole arbiter of conflicts: validation here only rejects
/// requests that could never succeed, and nothing is updated optimistically.
pub struct RebookingCoordinator {
    api: Arc<dyn HospitalApi>,
}

impl RebookingCoordinator {
    pub fn new(api: Arc<dyn HospitalApi>) -> Self {
        Self { api }
    }

    /// Local preconditions, checked before any network call: the appointment
    /// must not be terminal and the target slot must still be available.
    pub fn validate(
        &self,
        appointment: &Appointment,
        target: &ScheduleSlot,
    ) -> Result<(), SchedulingError> {
        if appointment.status.is_terminal() {
            warn!(
                "Reschedule rejected: appointment {} is {}",
                appointment.id, appointment.status
            );
            return Err(SchedulingError::RescheduleNotAllowed(appointment.status));
        }

        if !target.is_available {
            warn!("Reschedule rejected: slot {} is not available", target.id);
            return Err(SchedulingError::SlotNotAvailable);
        }

        Ok(())
    }

    /// Submit the reassignment. A conflict (slot taken, patient
    /// double-booked) comes back as `GatewayError::Conflict` and must be
    /// surfaced to the user as recoverable.
    pub async fn submit(
        &self,
        appointment: &Appointment,
        target: &ScheduleSlot,
    ) -> Result<Appointment, GatewayError> {
        debug!(
            "Rescheduling appointment {} to slot {}",
            appointment.id, target.id
        );

        self.api.reschedule(appointment.id, target.id).await
    }
}
