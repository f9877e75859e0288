use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{Appointment, AppointmentStatus, DateRange, Patient, ScheduleSlot, ServiceStep, SlotQuery};

use crate::error::GatewayError;

/// The six hospital REST collaborators this client core consumes. Kept as a
/// trait so services can be tested against a mock without a live server.
#[async_trait]
pub trait HospitalApi: Send + Sync {
    /// Appointments for one patient inside a date range, with the bound
    /// schedule-slot and room data resolved server-side.
    async fn appointments(
        &self,
        patient_id: Uuid,
        range: &DateRange,
    ) -> Result<Vec<Appointment>, GatewayError>;

    /// Move an appointment to a new status. The server re-validates the
    /// transition and may reject it on concurrent state change.
    async fn change_status(
        &self,
        appointment_id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, GatewayError>;

    /// Rebind an appointment to a different schedule slot. Fails with a
    /// conflict if the slot was taken or the patient is double-booked.
    async fn reschedule(
        &self,
        appointment_id: Uuid,
        slot_id: Uuid,
    ) -> Result<Appointment, GatewayError>;

    /// Server-computed availability for the given filter.
    async fn available_slots(&self, query: &SlotQuery) -> Result<Vec<ScheduleSlot>, GatewayError>;

    /// Ordered booking-flow steps configured for a medical service.
    async fn service_steps(&self, service_id: Uuid) -> Result<Vec<ServiceStep>, GatewayError>;

    /// Patient roster for name resolution, fetched once per session.
    async fn patients(&self, hospital_id: Uuid) -> Result<Vec<Patient>, GatewayError>;
}

pub struct HospitalApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HospitalApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.hospital_api_url.trim_end_matches('/').to_string(),
            api_key: config.hospital_api_key.clone(),
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(AUTHORIZATION, value);
        }

        headers
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url).headers(self.headers());

        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = extract_error_message(&error_text);
            error!("Hospital API error ({}): {}", status, message);

            return Err(match status.as_u16() {
                401 | 403 => GatewayError::Auth(message),
                404 => GatewayError::NotFound(message),
                409 => GatewayError::Conflict(message),
                code => GatewayError::Api { status: code, message },
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}

/// The hospital API wraps failures as `{"error": "..."}`; fall back to the
/// raw body for anything else.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl HospitalApi for HospitalApiClient {
    async fn appointments(
        &self,
        patient_id: Uuid,
        range: &DateRange,
    ) -> Result<Vec<Appointment>, GatewayError> {
        let query = [
            ("patientId", patient_id.to_string()),
            ("dateFrom", range.from.to_string()),
            ("dateTo", range.to.to_string()),
        ];

        self.request(Method::GET, "/api/v1/appointments", &query, None)
            .await
    }

    async fn change_status(
        &self,
        appointment_id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, GatewayError> {
        let path = format!("/api/v1/appointments/{}/status", appointment_id);
        let body = json!({ "status": new_status });

        self.request(Method::POST, &path, &[], Some(body)).await
    }

    async fn reschedule(
        &self,
        appointment_id: Uuid,
        slot_id: Uuid,
    ) -> Result<Appointment, GatewayError> {
        let path = format!("/api/v1/appointments/{}/reschedule", appointment_id);
        let body = json!({ "slotId": slot_id });

        self.request(Method::POST, &path, &[], Some(body)).await
    }

    async fn available_slots(&self, query: &SlotQuery) -> Result<Vec<ScheduleSlot>, GatewayError> {
        let mut params = vec![
            ("hospitalId", query.hospital_id.to_string()),
            ("dateFrom", query.date_from.to_string()),
            ("dateTo", query.date_to.to_string()),
        ];
        if let Some(doctor_id) = query.doctor_id {
            params.push(("doctorId", doctor_id.to_string()));
        }
        if let Some(specialization_id) = query.specialization_id {
            params.push(("specializationId", specialization_id.to_string()));
        }

        self.request(Method::GET, "/api/v1/schedule-slots", &params, None)
            .await
    }

    async fn service_steps(&self, service_id: Uuid) -> Result<Vec<ServiceStep>, GatewayError> {
        let path = format!("/api/v1/services/{}/steps", service_id);

        self.request(Method::GET, &path, &[], None).await
    }

    async fn patients(&self, hospital_id: Uuid) -> Result<Vec<Patient>, GatewayError> {
        let query = [("hospitalId", hospital_id.to_string())];

        self.request(Method::GET, "/api/v1/patients", &query, None)
            .await
    }
}
