use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use calendar_cell::{interactive_events, map_events, EventColor, EventIcon};
use shared_models::{Appointment, AppointmentStatus, BoundSlot, Patient};

fn appointment(patient_id: Uuid, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        patient_id,
        doctor_id: Uuid::new_v4(),
        specialization_id: Uuid::new_v4(),
        department_id: Uuid::new_v4(),
        slot: BoundSlot {
            slot_id: Uuid::new_v4(),
            work_date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            room_name: "B-204".to_string(),
        },
        status,
        doctor_name: "Maria Ruiz".to_string(),
        specialization_name: "Cardiology".to_string(),
        service_id: Uuid::new_v4(),
        service_name: "Cardiology consultation".to_string(),
        note: Some("bring referral".to_string()),
    }
}

fn roster(patient_id: Uuid) -> HashMap<Uuid, Patient> {
    let mut patients = HashMap::new();
    patients.insert(
        patient_id,
        Patient {
            id: patient_id,
            first_name: "Jonas".to_string(),
            last_name: "Weber".to_string(),
        },
    );
    patients
}

#[test]
fn events_span_the_bound_slot_of_the_appointment() {
    let patient_id = Uuid::new_v4();
    let appointments = vec![appointment(patient_id, AppointmentStatus::Pending)];

    let events = map_events(&appointments, &roster(patient_id));

    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].starts_at,
        Utc.with_ymd_and_hms(2026, 8, 26, 9, 0, 0).unwrap()
    );
    assert_eq!(
        events[0].ends_at,
        Utc.with_ymd_and_hms(2026, 8, 26, 9, 30, 0).unwrap()
    );
    assert_eq!(events[0].room_name, "B-204");
    assert_eq!(events[0].patient_name, "Jonas Weber");
}

#[test]
fn styles_are_fixed_per_status() {
    let patient_id = Uuid::new_v4();
    let appointments = vec![
        appointment(patient_id, AppointmentStatus::Pending),
        appointment(patient_id, AppointmentStatus::Confirmed),
        appointment(patient_id, AppointmentStatus::Completed),
        appointment(patient_id, AppointmentStatus::Cancelled),
    ];

    let events = map_events(&appointments, &roster(patient_id));

    assert_eq!(events[0].style.color, EventColor::Amber);
    assert_eq!(events[0].style.icon, Some(EventIcon::Pending));
    assert_eq!(events[1].style.color, EventColor::Green);
    assert_eq!(events[1].style.icon, Some(EventIcon::Check));
    assert_eq!(events[2].style.color, EventColor::Blue);
    assert_eq!(events[3].style.color, EventColor::Grey);
    assert!(events[3].style.dimmed);
    assert!(events[3].style.struck_through);
    assert!(!events[0].style.dimmed && !events[1].style.dimmed && !events[2].style.dimmed);
}

#[test]
fn interactive_surface_excludes_cancelled_and_completed() {
    let patient_id = Uuid::new_v4();
    let appointments = vec![
        appointment(patient_id, AppointmentStatus::Pending),
        appointment(patient_id, AppointmentStatus::Confirmed),
        appointment(patient_id, AppointmentStatus::Completed),
        appointment(patient_id, AppointmentStatus::Cancelled),
    ];

    let events = interactive_events(&appointments, &roster(patient_id));

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| matches!(
        event.status,
        AppointmentStatus::Pending | AppointmentStatus::Confirmed
    )));

    // The full mapping still carries every appointment for reporting views
    assert_eq!(map_events(&appointments, &roster(patient_id)).len(), 4);
}

#[test]
fn unknown_patients_fall_back_to_placeholder_name() {
    let appointments = vec![appointment(Uuid::new_v4(), AppointmentStatus::Pending)];

    let events = map_events(&appointments, &HashMap::new());

    assert_eq!(events[0].patient_name, "Unknown");
}

#[test]
fn mapping_is_idempotent() {
    let patient_id = Uuid::new_v4();
    let appointments = vec![
        appointment(patient_id, AppointmentStatus::Pending),
        appointment(patient_id, AppointmentStatus::Cancelled),
    ];
    let patients = roster(patient_id);

    let first = map_events(&appointments, &patients);
    let second = map_events(&appointments, &patients);

    assert_eq!(first, second);
}
