use tracing::{debug, warn};

use shared_models::AppointmentStatus;

use crate::models::SchedulingError;

/// Pure appointment status machine. Forward motion is strictly
/// Pending -> Confirmed -> Completed; Cancel is a separate action available
/// from any non-terminal status.
pub struct AppointmentLifecycle;

impl AppointmentLifecycle {
    pub fn new() -> Self {
        Self
    }

    /// The single forward action offered for a status, if any. Terminal
    /// statuses offer none.
    pub fn next_status(&self, current: AppointmentStatus) -> Option<AppointmentStatus> {
        match current {
            AppointmentStatus::Pending => Some(AppointmentStatus::Confirmed),
            AppointmentStatus::Confirmed => Some(AppointmentStatus::Completed),
            AppointmentStatus::Cancelled | AppointmentStatus::Completed => None,
        }
    }

    /// All statuses reachable from `current` through a user action.
    pub fn valid_transitions(&self, current: AppointmentStatus) -> Vec<AppointmentStatus> {
        match current {
            AppointmentStatus::Pending => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
            ],
            // Terminal states - no transitions allowed
            AppointmentStatus::Cancelled => vec![],
            AppointmentStatus::Completed => vec![],
        }
    }

    /// Reject an illegal transition before any network call is made.
    pub fn validate_transition(
        &self,
        current: AppointmentStatus,
        requested: AppointmentStatus,
    ) -> Result<(), SchedulingError> {
        debug!("Validating status transition from {} to {}", current, requested);

        if !self.valid_transitions(current).contains(&requested) {
            warn!("Invalid status transition attempted: {} -> {}", current, requested);
            return Err(SchedulingError::InvalidTransition(current, requested));
        }

        Ok(())
    }

    /// Cancel is gated only by "not already terminal". A repeated cancel on a
    /// Cancelled appointment is reported separately so the UI can show a
    /// warning instead of an error.
    pub fn can_cancel(&self, current: AppointmentStatus) -> bool {
        !current.is_terminal()
    }
}

impl Default for AppointmentLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
