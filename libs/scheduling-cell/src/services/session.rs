use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};
use uuid::Uuid;

use calendar_cell::CalendarEvent;
use hospital_gateway::{GatewayError, HospitalApi};
use shared_models::{Appointment, AppointmentStatus, DateRange, Patient, ScheduleSlot};

use crate::models::{FilterControls, SchedulingError, SlotFilter};
use crate::services::availability::SlotBrowser;
use crate::services::lifecycle::AppointmentLifecycle;
use crate::services::notify::{Notification, NotificationBus};
use crate::services::rebooking::RebookingCoordinator;

/// The patient and date range the calendar is currently showing.
#[derive(Debug, Clone, Copy)]
struct ViewScope {
    patient_id: Uuid,
    range: DateRange,
}

/// State of the open appointment detail modal.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub appointment_id: Uuid,
    pub controls: FilterControls,
    pub filter: SlotFilter,
    pub selected_slot: Option<Uuid>,
}

/// One user's rescheduling view session.
///
/// Holds ephemeral, read-mostly copies of server-owned state. Every mutation
/// goes to the server first; local state changes only through a refresh after
/// a confirmed success. Failures publish a notification and leave the session
/// untouched, so re-invoking a failed action is always safe.
pub struct RescheduleSession {
    api: Arc<dyn HospitalApi>,
    bus: NotificationBus,
    lifecycle: AppointmentLifecycle,
    rebooking: RebookingCoordinator,
    slots: SlotBrowser,
    hospital_id: Uuid,
    patients: HashMap<Uuid, Patient>,
    patients_loaded: bool,
    view: Option<ViewScope>,
    appointments: Vec<Appointment>,
    detail: Option<DetailView>,
}

impl RescheduleSession {
    pub fn new(
        api: Arc<dyn HospitalApi>,
        hospital_id: Uuid,
    ) -> (Self, UnboundedReceiver<Notification>) {
        let (bus, receiver) = NotificationBus::channel();

        let session = Self {
            bus,
            lifecycle: AppointmentLifecycle::new(),
            rebooking: RebookingCoordinator::new(api.clone()),
            slots: SlotBrowser::new(api.clone()),
            api,
            hospital_id,
            patients: HashMap::new(),
            patients_loaded: false,
            view: None,
            appointments: Vec::new(),
            detail: None,
        };

        (session, receiver)
    }

    /// Open the calendar for a patient and date range. The patient roster is
    /// fetched once per session; the appointment list on every open.
    pub async fn open(
        &mut self,
        patient_id: Uuid,
        range: DateRange,
    ) -> Result<(), SchedulingError> {
        info!("Opening calendar for patient {} ({} - {})", patient_id, range.from, range.to);

        if !self.patients_loaded {
            let roster = self.remote(self.api.patients(self.hospital_id).await)?;
            self.patients = roster.into_iter().map(|p| (p.id, p)).collect();
            self.patients_loaded = true;
        }

        let appointments = self.remote(self.api.appointments(patient_id, &range).await)?;
        self.appointments = appointments;
        self.view = Some(ViewScope { patient_id, range });
        self.close_detail().await;

        Ok(())
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Every appointment in the range, mapped for reporting views.
    pub fn events(&self) -> Vec<CalendarEvent> {
        calendar_cell::map_events(&self.appointments, &self.patients)
    }

    /// The clickable calendar surface (Pending and Confirmed only).
    pub fn interactive_events(&self) -> Vec<CalendarEvent> {
        calendar_cell::interactive_events(&self.appointments, &self.patients)
    }

    /// Open the detail modal for an appointment: load the service's booking
    /// flow to decide which filters are interactive, seed the slot filter
    /// from the appointment, and run the initial availability query.
    pub async fn open_detail(&mut self, appointment_id: Uuid) -> Result<(), SchedulingError> {
        let appointment = self.local(self.find_appointment(appointment_id))?;
        let range = self.active_range();

        let steps = self.remote(self.api.service_steps(appointment.service_id).await)?;
        let controls = FilterControls::from_steps(&steps);
        let filter = SlotFilter::for_appointment(self.hospital_id, &appointment, range);

        debug!(
            "Opening detail for appointment {} (doctor filter: {}, specialization filter: {})",
            appointment_id, controls.doctor_enabled, controls.specialization_enabled
        );

        self.detail = Some(DetailView {
            appointment_id,
            controls,
            filter: filter.clone(),
            selected_slot: None,
        });
        self.remote(self.slots.search(&filter).await)?;

        Ok(())
    }

    /// Close the modal and discard the ephemeral slot result set.
    pub async fn close_detail(&mut self) {
        self.detail = None;
        self.slots.clear().await;
    }

    pub async fn available_slots(&self) -> Vec<ScheduleSlot> {
        self.slots.current_slots().await
    }

    /// Narrow or clear the doctor filter. Only allowed when the service's
    /// flow has an enabled choose-doctor step.
    pub async fn set_doctor_filter(
        &mut self,
        doctor_id: Option<Uuid>,
    ) -> Result<(), SchedulingError> {
        let detail = self.local(self.active_detail())?;
        if !detail.controls.doctor_enabled {
            return Err(self.reject(SchedulingError::FilterDisabled("doctor")));
        }

        let mut filter = detail.filter;
        filter.doctor_id = doctor_id;
        self.apply_filter(filter).await
    }

    /// Narrow or clear the specialization filter, gated like the doctor one.
    pub async fn set_specialization_filter(
        &mut self,
        specialization_id: Option<Uuid>,
    ) -> Result<(), SchedulingError> {
        let detail = self.local(self.active_detail())?;
        if !detail.controls.specialization_enabled {
            return Err(self.reject(SchedulingError::FilterDisabled("specialization")));
        }

        let mut filter = detail.filter;
        filter.specialization_id = specialization_id;
        self.apply_filter(filter).await
    }

    /// Change the date range the modal is offering slots for.
    pub async fn set_filter_range(&mut self, range: DateRange) -> Result<(), SchedulingError> {
        let detail = self.local(self.active_detail())?;
        let mut filter = detail.filter;
        filter.range = range;
        self.apply_filter(filter).await
    }

    /// Remember the slot the user picked from the current result set.
    pub async fn select_slot(&mut self, slot_id: Uuid) -> Result<(), SchedulingError> {
        self.local(self.active_detail())?;

        if self.slots.slot(slot_id).await.is_none() {
            return Err(self.reject(SchedulingError::SlotNotInResultSet));
        }

        if let Some(detail) = self.detail.as_mut() {
            detail.selected_slot = Some(slot_id);
        }
        Ok(())
    }

    /// "Accept" action: Pending -> Confirmed.
    pub async fn accept(&mut self) -> Result<(), SchedulingError> {
        self.transition(AppointmentStatus::Confirmed, "Appointment confirmed")
            .await
    }

    /// "Complete" action: Confirmed -> Completed.
    pub async fn complete(&mut self) -> Result<(), SchedulingError> {
        self.transition(AppointmentStatus::Completed, "Appointment completed")
            .await
    }

    /// "Cancel" action, allowed from any non-terminal status. Cancelling an
    /// already-cancelled appointment is a warning and issues no call.
    pub async fn cancel(&mut self) -> Result<(), SchedulingError> {
        let detail = self.local(self.active_detail())?;
        let appointment = self.local(self.find_appointment(detail.appointment_id))?;

        if appointment.status == AppointmentStatus::Cancelled {
            return Err(self.reject(SchedulingError::AlreadyCancelled));
        }

        self.transition(AppointmentStatus::Cancelled, "Appointment cancelled")
            .await
    }

    /// Reschedule the open appointment onto the selected slot.
    pub async fn reschedule(&mut self) -> Result<(), SchedulingError> {
        let detail = self.local(self.active_detail())?;
        let appointment = self.local(self.find_appointment(detail.appointment_id))?;

        let slot_id = match detail.selected_slot {
            Some(slot_id) => slot_id,
            None => return Err(self.reject(SchedulingError::NoSlotSelected)),
        };
        let target = match self.slots.slot(slot_id).await {
            Some(slot) => slot,
            None => return Err(self.reject(SchedulingError::SlotNotInResultSet)),
        };

        if let Err(err) = self.rebooking.validate(&appointment, &target) {
            return Err(self.reject(err));
        }

        self.remote(self.rebooking.submit(&appointment, &target).await)?;

        self.bus.success("Appointment rescheduled");
        self.refresh().await?;
        self.close_detail().await;

        Ok(())
    }

    /// Re-fetch the appointment list for the active scope. This is the only
    /// way local appointment state changes after a mutation.
    pub async fn refresh(&mut self) -> Result<(), SchedulingError> {
        let Some(view) = self.view else {
            return Ok(());
        };

        let appointments = self
            .remote(self.api.appointments(view.patient_id, &view.range).await)?;
        self.appointments = appointments;

        Ok(())
    }

    // Private helpers

    async fn transition(
        &mut self,
        new_status: AppointmentStatus,
        success_message: &str,
    ) -> Result<(), SchedulingError> {
        let detail = self.local(self.active_detail())?;
        let appointment = self.local(self.find_appointment(detail.appointment_id))?;

        if let Err(err) = self
            .lifecycle
            .validate_transition(appointment.status, new_status)
        {
            return Err(self.reject(err));
        }

        self.remote(self.api.change_status(appointment.id, new_status).await)?;

        self.bus.success(success_message);
        self.refresh().await?;
        self.close_detail().await;

        Ok(())
    }

    async fn apply_filter(&mut self, filter: SlotFilter) -> Result<(), SchedulingError> {
        if let Some(detail) = self.detail.as_mut() {
            detail.filter = filter.clone();
            detail.selected_slot = None;
        }
        self.remote(self.slots.search(&filter).await)?;
        Ok(())
    }

    fn active_range(&self) -> DateRange {
        match self.view {
            Some(view) => view.range,
            None => DateRange::visible_week(chrono::Utc::now().date_naive()),
        }
    }

    fn active_detail(&self) -> Result<DetailView, SchedulingError> {
        self.detail.clone().ok_or(SchedulingError::NoActiveDetail)
    }

    fn find_appointment(&self, appointment_id: Uuid) -> Result<Appointment, SchedulingError> {
        self.appointments
            .iter()
            .find(|appointment| appointment.id == appointment_id)
            .cloned()
            .ok_or(SchedulingError::UnknownAppointment)
    }

    /// Publish the matching notification for a local validation rejection.
    fn reject(&self, err: SchedulingError) -> SchedulingError {
        self.notify_failure(&err);
        err
    }

    /// Publish for a local pre-check result and pass the value through.
    fn local<T>(&self, result: Result<T, SchedulingError>) -> Result<T, SchedulingError> {
        result.map_err(|err| self.reject(err))
    }

    /// Map a gateway result, publishing an error notification on failure.
    /// No local state is touched on the failure path.
    fn remote<T>(&self, result: Result<T, GatewayError>) -> Result<T, SchedulingError> {
        result.map_err(|err| {
            let err = SchedulingError::from(err);
            self.notify_failure(&err);
            err
        })
    }

    fn notify_failure(&self, err: &SchedulingError) {
        if err.is_validation() {
            self.bus.warning(err.to_string());
        } else {
            self.bus.error(err.to_string());
        }
    }
}
