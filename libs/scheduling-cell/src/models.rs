use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hospital_gateway::GatewayError;
use shared_models::{Appointment, AppointmentStatus, DateRange, ServiceStep, SlotQuery, StepCapability};

// ==============================================================================
// AVAILABILITY FILTER MODELS
// ==============================================================================

/// The availability filter driving the reschedule modal: hospital scope plus
/// optional doctor/specialization narrowing over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotFilter {
    pub hospital_id: Uuid,
    pub doctor_id: Option<Uuid>,
    pub specialization_id: Option<Uuid>,
    pub range: DateRange,
}

impl SlotFilter {
    /// Seed the filter from the appointment being rescheduled: its doctor
    /// and specialization are preset even when the controls are disabled.
    pub fn for_appointment(hospital_id: Uuid, appointment: &Appointment, range: DateRange) -> Self {
        Self {
            hospital_id,
            doctor_id: Some(appointment.doctor_id),
            specialization_id: Some(appointment.specialization_id),
            range,
        }
    }

    /// A filter with neither doctor nor specialization would query the whole
    /// hospital; that is disallowed to keep result sets bounded.
    pub fn is_unconstrained(&self) -> bool {
        self.doctor_id.is_none() && self.specialization_id.is_none()
    }

    pub fn to_query(&self) -> SlotQuery {
        SlotQuery {
            hospital_id: self.hospital_id,
            doctor_id: self.doctor_id,
            specialization_id: self.specialization_id,
            date_from: self.range.from,
            date_to: self.range.to,
        }
    }
}

/// Which reschedule filter controls are interactive, derived from the
/// service's booking-flow steps by capability name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControls {
    pub specialization_enabled: bool,
    pub doctor_enabled: bool,
}

impl FilterControls {
    pub fn from_steps(steps: &[ServiceStep]) -> Self {
        let has_enabled = |capability: StepCapability| {
            steps
                .iter()
                .any(|step| step.enabled && step.capability == capability)
        };

        Self {
            specialization_enabled: has_enabled(StepCapability::ChooseSpecialization),
            doctor_enabled: has_enabled(StepCapability::ChooseDoctor),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum SchedulingError {
    #[error("Appointment cannot move from {0} to {1}")]
    InvalidTransition(AppointmentStatus, AppointmentStatus),

    #[error("Appointment is already cancelled")]
    AlreadyCancelled,

    #[error("No target slot selected")]
    NoSlotSelected,

    #[error("Selected slot is no longer in the current result set")]
    SlotNotInResultSet,

    #[error("Selected slot is not available")]
    SlotNotAvailable,

    #[error("Appointment in status {0} cannot be rescheduled")]
    RescheduleNotAllowed(AppointmentStatus),

    #[error("The {0} filter is not available for this service")]
    FilterDisabled(&'static str),

    #[error("Appointment not found in the current view")]
    UnknownAppointment,

    #[error("No appointment detail is open")]
    NoActiveDetail,

    #[error("Scheduling conflict: {0}")]
    Conflict(String),

    #[error("Hospital API call failed: {0}")]
    Gateway(String),
}

impl SchedulingError {
    /// Validation rejections are caught before any network call and surface
    /// as non-blocking warnings; everything else is an error notification.
    pub fn is_validation(&self) -> bool {
        !matches!(self, SchedulingError::Conflict(_) | SchedulingError::Gateway(_))
    }
}

impl From<GatewayError> for SchedulingError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Conflict(message) => SchedulingError::Conflict(message),
            other => SchedulingError::Gateway(other.to_string()),
        }
    }
}
