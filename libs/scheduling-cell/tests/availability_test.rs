use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use uuid::Uuid;

use hospital_gateway::{GatewayError, HospitalApi};
use scheduling_cell::{FilterControls, SlotBrowser, SlotFilter};
use shared_models::{
    Appointment, AppointmentStatus, DateRange, Patient, ScheduleSlot, ServiceStep, SlotQuery,
    StepCapability,
};

mock! {
    pub Api {}

    #[async_trait]
    impl HospitalApi for Api {
        async fn appointments(
            &self,
            patient_id: Uuid,
            range: &DateRange,
        ) -> Result<Vec<Appointment>, GatewayError>;
        async fn change_status(
            &self,
            appointment_id: Uuid,
            new_status: AppointmentStatus,
        ) -> Result<Appointment, GatewayError>;
        async fn reschedule(
            &self,
            appointment_id: Uuid,
            slot_id: Uuid,
        ) -> Result<Appointment, GatewayError>;
        async fn available_slots(&self, query: &SlotQuery) -> Result<Vec<ScheduleSlot>, GatewayError>;
        async fn service_steps(&self, service_id: Uuid) -> Result<Vec<ServiceStep>, GatewayError>;
        async fn patients(&self, hospital_id: Uuid) -> Result<Vec<Patient>, GatewayError>;
    }
}

fn slot(doctor_id: Uuid, is_available: bool) -> ScheduleSlot {
    ScheduleSlot {
        id: Uuid::new_v4(),
        doctor_id,
        specialization_id: Uuid::new_v4(),
        work_date: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
        start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        room_name: "A-101".to_string(),
        is_available,
    }
}

fn week() -> DateRange {
    DateRange::visible_week(NaiveDate::from_ymd_opt(2026, 8, 25).unwrap())
}

fn step(capability: StepCapability, enabled: bool, step_order: i32) -> ServiceStep {
    ServiceStep {
        id: Uuid::new_v4(),
        step_order,
        enabled,
        capability,
    }
}

#[tokio::test]
async fn unconstrained_filter_short_circuits_without_network_call() {
    let mut api = MockApi::new();
    api.expect_available_slots().times(0);

    let browser = SlotBrowser::new(Arc::new(api));
    let filter = SlotFilter {
        hospital_id: Uuid::new_v4(),
        doctor_id: None,
        specialization_id: None,
        range: week(),
    };

    let slots = browser.search(&filter).await.unwrap();

    assert!(slots.is_empty());
    assert!(browser.current_slots().await.is_empty());
}

#[tokio::test]
async fn unavailable_slots_are_filtered_out_of_results() {
    let doctor_id = Uuid::new_v4();
    let mut api = MockApi::new();
    api.expect_available_slots()
        .times(1)
        .returning(move |_| Ok(vec![slot(doctor_id, true), slot(doctor_id, false), slot(doctor_id, true)]));

    let browser = SlotBrowser::new(Arc::new(api));
    let filter = SlotFilter {
        hospital_id: Uuid::new_v4(),
        doctor_id: Some(doctor_id),
        specialization_id: None,
        range: week(),
    };

    let slots = browser.search(&filter).await.unwrap();

    assert_eq!(slots.len(), 2);
    assert!(slots.iter().all(|s| s.is_available));
    assert!(browser.current_slots().await.iter().all(|s| s.is_available));
}

#[tokio::test]
async fn each_search_replaces_the_previous_result_set() {
    let first_doctor = Uuid::new_v4();
    let second_doctor = Uuid::new_v4();

    let mut api = MockApi::new();
    api.expect_available_slots()
        .times(2)
        .returning(|query| {
            let doctor_id = query.doctor_id.unwrap();
            Ok(vec![slot(doctor_id, true)])
        });

    let browser = SlotBrowser::new(Arc::new(api));
    let mut filter = SlotFilter {
        hospital_id: Uuid::new_v4(),
        doctor_id: Some(first_doctor),
        specialization_id: None,
        range: week(),
    };

    browser.search(&filter).await.unwrap();
    filter.doctor_id = Some(second_doctor);
    browser.search(&filter).await.unwrap();

    let current = browser.current_slots().await;
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].doctor_id, second_doctor);
}

#[tokio::test]
async fn stale_response_resolving_late_is_discarded() {
    let api = MockApi::new();
    let browser = SlotBrowser::new(Arc::new(api));

    let older_doctor = Uuid::new_v4();
    let newer_doctor = Uuid::new_v4();

    // Two queries issued back to back; the older one resolves last.
    let stale_generation = browser.begin();
    let latest_generation = browser.begin();

    assert!(browser.apply(latest_generation, vec![slot(newer_doctor, true)]).await);
    assert!(!browser.apply(stale_generation, vec![slot(older_doctor, true)]).await);

    let current = browser.current_slots().await;
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].doctor_id, newer_doctor);
}

#[tokio::test]
async fn clear_discards_results_and_invalidates_in_flight_queries() {
    let doctor_id = Uuid::new_v4();
    let api = MockApi::new();
    let browser = SlotBrowser::new(Arc::new(api));

    let generation = browser.begin();
    assert!(browser.apply(generation, vec![slot(doctor_id, true)]).await);

    let in_flight = browser.begin();
    browser.clear().await;

    assert!(!browser.apply(in_flight, vec![slot(doctor_id, true)]).await);
    assert!(browser.current_slots().await.is_empty());
}

#[test]
fn filter_controls_follow_enabled_capabilities() {
    let steps = vec![
        step(StepCapability::ChooseSpecialization, true, 1),
        step(StepCapability::ChooseDoctor, false, 2),
    ];

    let controls = FilterControls::from_steps(&steps);

    assert!(controls.specialization_enabled);
    assert!(!controls.doctor_enabled);
}

#[test]
fn unknown_capabilities_never_enable_a_filter() {
    let steps = vec![step(StepCapability::Other, true, 1)];

    let controls = FilterControls::from_steps(&steps);

    assert!(!controls.specialization_enabled);
    assert!(!controls.doctor_enabled);
}

#[test]
fn empty_step_list_disables_both_filters() {
    let controls = FilterControls::from_steps(&[]);

    assert!(!controls.specialization_enabled);
    assert!(!controls.doctor_enabled);
}
