//! Service-request form shell
//!
//! The three step views, the step indicator, and the navigation footer.
//! All components here are pure views: the step position and the draft
//! live in the form store, owned by the services page.

pub mod applicant_step;
pub mod navigation_buttons;
pub mod review_step;
pub mod service_step;
pub mod step_indicator;

pub use applicant_step::ApplicantStep;
pub use navigation_buttons::NavigationButtons;
pub use review_step::ReviewStep;
pub use service_step::ServiceStep;
pub use step_indicator::{StepIndicator, StepLabel};
