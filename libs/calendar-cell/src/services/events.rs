use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use shared_models::{Appointment, AppointmentStatus, Patient};

use crate::models::{CalendarEvent, EventStyle};

const UNKNOWN_PATIENT: &str = "Unknown";

/// Map appointments into renderable calendar events.
///
/// Pure and idempotent: the same appointment list and patient lookup always
/// produce identical events, in input order.
pub fn map_events(
    appointments: &[Appointment],
    patients: &HashMap<Uuid, Patient>,
) -> Vec<CalendarEvent> {
    debug!("Mapping {} appointments to calendar events", appointments.len());

    appointments
        .iter()
        .map(|appointment| to_event(appointment, patients))
        .collect()
}

/// The clickable calendar surface: only Pending and Confirmed appointments.
/// Cancelled and Completed stay fetchable for reporting views but are never
/// offered for interaction.
pub fn interactive_events(
    appointments: &[Appointment],
    patients: &HashMap<Uuid, Patient>,
) -> Vec<CalendarEvent> {
    appointments
        .iter()
        .filter(|appointment| {
            matches!(
                appointment.status,
                AppointmentStatus::Pending | AppointmentStatus::Confirmed
            )
        })
        .map(|appointment| to_event(appointment, patients))
        .collect()
}

fn to_event(appointment: &Appointment, patients: &HashMap<Uuid, Patient>) -> CalendarEvent {
    let patient_name = patients
        .get(&appointment.patient_id)
        .map(Patient::full_name)
        .unwrap_or_else(|| UNKNOWN_PATIENT.to_string());

    CalendarEvent {
        appointment_id: appointment.id,
        starts_at: appointment.starts_at(),
        ends_at: appointment.ends_at(),
        status: appointment.status,
        style: EventStyle::for_status(appointment.status),
        patient_name,
        doctor_name: appointment.doctor_name.clone(),
        specialization_name: appointment.specialization_name.clone(),
        room_name: appointment.slot.room_name.clone(),
        note: appointment.note.clone(),
    }
}
