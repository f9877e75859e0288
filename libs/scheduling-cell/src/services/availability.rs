use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use hospital_gateway::{GatewayError, HospitalApi};
use shared_models::ScheduleSlot;

use crate::models::SlotFilter;

/// Availability query adapter for the reschedule modal.
///
/// Each search replaces the previous result set wholesale; there is no
/// incremental merge. Every query is stamped with a monotonically increasing
/// generation, and a response is applied only while its generation is still
/// the latest issued, so a slow stale response cannot overwrite a newer one.
pub struct SlotBrowser {
    api: Arc<dyn HospitalApi>,
    generation: AtomicU64,
    slots: RwLock<Vec<ScheduleSlot>>,
}

impl SlotBrowser {
    pub fn new(api: Arc<dyn HospitalApi>) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
            slots: RwLock::new(Vec::new()),
        }
    }

    /// Run one availability query for the filter and apply the result.
    ///
    /// An unconstrained filter (neither doctor nor specialization) empties
    /// the result set without touching the network: querying the whole
    /// hospital is disallowed. Unavailable slots are filtered out even when
    /// the server returns them.
    pub async fn search(&self, filter: &SlotFilter) -> Result<Vec<ScheduleSlot>, GatewayError> {
        let generation = self.begin();

        if filter.is_unconstrained() {
            debug!("Availability filter has no doctor or specialization, returning empty set");
            self.apply(generation, Vec::new()).await;
            return Ok(Vec::new());
        }

        let fetched = self.api.available_slots(&filter.to_query()).await?;
        let open: Vec<ScheduleSlot> = fetched.into_iter().filter(|slot| slot.is_available).collect();

        if !self.apply(generation, open.clone()).await {
            warn!("Discarding stale availability response for generation {}", generation);
        }

        Ok(open)
    }

    /// Stamp a new query. Any response belonging to an earlier stamp is
    /// stale from this point on.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a resolved result set if `generation` is still the latest
    /// issued. Returns false when the response was stale and discarded.
    pub async fn apply(&self, generation: u64, slots: Vec<ScheduleSlot>) -> bool {
        let mut current = self.slots.write().await;
        if generation != self.generation.load(Ordering::SeqCst) {
            return false;
        }

        debug!("Applying {} available slots for generation {}", slots.len(), generation);
        *current = slots;
        true
    }

    /// The slots currently offered for rebooking.
    pub async fn current_slots(&self) -> Vec<ScheduleSlot> {
        self.slots.read().await.clone()
    }

    /// Resolve a selected slot id against the current result set.
    pub async fn slot(&self, slot_id: Uuid) -> Option<ScheduleSlot> {
        self.slots
            .read()
            .await
            .iter()
            .find(|slot| slot.id == slot_id)
            .cloned()
    }

    /// Discard the ephemeral result set, invalidating any in-flight query.
    pub async fn clear(&self) {
        self.begin();
        self.slots.write().await.clear();
    }
}
