//! tonle-common - Shared state logic for the Tonle utility website
//!
//! Pure data structures driven by the UI layer: section reveal tracking and
//! the service-request step flow. No browser or framework types here so the
//! behavior can be unit tested directly.

mod reveal;
mod service_request;

pub use reveal::RevealTracker;
pub use service_request::{
    ApplicantDetails, ConnectionType, RequestDraft, RequestSteps, ServiceDetails, SubmitAction,
    REQUEST_STEP_COUNT,
};
