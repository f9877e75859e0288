pub mod models;
pub mod services;

pub use models::{FilterControls, SchedulingError, SlotFilter};
pub use services::availability::SlotBrowser;
pub use services::lifecycle::AppointmentLifecycle;
pub use services::notify::{Notification, NotificationBus, NotificationKind};
pub use services::rebooking::RebookingCoordinator;
pub use services::session::RescheduleSession;
