use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named stage in a medical service's configurable booking flow,
/// individually enabled or disabled per service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStep {
    pub id: Uuid,
    pub step_order: i32,
    pub enabled: bool,
    pub capability: StepCapability,
}

/// Explicit capability names for service steps. Steps are matched by name,
/// so a server-side reordering of step ids cannot change their meaning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepCapability {
    ChooseSpecialization,
    ChooseDoctor,
    /// Capability names this client does not know; never enables anything.
    #[serde(other)]
    Other,
}
