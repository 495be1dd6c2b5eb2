use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of steps in the service-request form.
pub const REQUEST_STEP_COUNT: u8 = 3;

/// What to do when the user asks to submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// Hand the draft to the submission workflow.
    Begin,
    /// Not submittable right now: wrong step, already submitting, or no
    /// privacy consent. The UI disables the control; this is the backstop.
    Ignore,
}

/// Position in a linear multi-step form.
///
/// Steps are 1-based and only move to adjacent steps. Moving past either
/// end is a no-op rather than an error; the controls for those moves are
/// not shown, so a stray call must not corrupt the step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestSteps {
    current: u8,
    total: u8,
}

impl Default for RequestSteps {
    fn default() -> Self {
        Self::new(REQUEST_STEP_COUNT)
    }
}

impl RequestSteps {
    pub fn new(total: u8) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Go to the next step. No-op on the last step.
    pub fn advance(&mut self) {
        if self.current < self.total {
            self.current += 1;
        }
    }

    /// Go back one step. No-op on the first step.
    pub fn retreat(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Decide whether a submit click starts the submission workflow.
    ///
    /// Computed fresh from the two inputs every time; `is_submitting` and
    /// `privacy_accepted` are owned elsewhere and must never be cached here.
    pub fn submit_action(&self, is_submitting: bool, privacy_accepted: bool) -> SubmitAction {
        if self.is_last() && !is_submitting && privacy_accepted {
            SubmitAction::Begin
        } else {
            SubmitAction::Ignore
        }
    }
}

/// Kind of water connection being requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    #[default]
    Household,
    Commercial,
    Institution,
}

impl ConnectionType {
    pub const ALL: [ConnectionType; 3] = [
        ConnectionType::Household,
        ConnectionType::Commercial,
        ConnectionType::Institution,
    ];

    pub fn label_en(&self) -> &'static str {
        match self {
            ConnectionType::Household => "Household",
            ConnectionType::Commercial => "Commercial",
            ConnectionType::Institution => "Institution",
        }
    }

    pub fn label_km(&self) -> &'static str {
        match self {
            ConnectionType::Household => "គ្រួសារ",
            ConnectionType::Commercial => "អាជីវកម្ម",
            ConnectionType::Institution => "ស្ថាប័ន",
        }
    }

    /// Stable form-value identifier for this variant.
    pub fn slug(&self) -> &'static str {
        match self {
            ConnectionType::Household => "household",
            ConnectionType::Commercial => "commercial",
            ConnectionType::Institution => "institution",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ConnectionType> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Step 1: who is applying.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    pub full_name: String,
    pub phone: String,
    pub address: String,
}

/// Step 2: what connection they want.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub connection_type: ConnectionType,
    pub preferred_date: Option<NaiveDate>,
    pub usage_note: String,
}

/// Everything the form collects across its steps. Serialized as the
/// submission payload when the workflow starts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestDraft {
    pub applicant: ApplicantDetails,
    pub service: ServiceDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_step_one() {
        let steps = RequestSteps::default();
        assert_eq!(steps.current(), 1);
        assert_eq!(steps.total(), REQUEST_STEP_COUNT);
        assert!(steps.is_first());
    }

    #[test]
    fn test_advance_through_all_steps() {
        let mut steps = RequestSteps::new(3);
        steps.advance();
        assert_eq!(steps.current(), 2);
        steps.advance();
        assert_eq!(steps.current(), 3);
        assert!(steps.is_last());
    }

    #[test]
    fn test_advance_past_last_is_noop() {
        let mut steps = RequestSteps::new(3);
        steps.advance();
        steps.advance();
        steps.advance();
        assert_eq!(steps.current(), 3);
    }

    #[test]
    fn test_retreat_at_first_is_noop() {
        let mut steps = RequestSteps::new(3);
        steps.retreat();
        assert_eq!(steps.current(), 1);
    }

    #[test]
    fn test_retreat_goes_back_one() {
        let mut steps = RequestSteps::new(3);
        steps.advance();
        steps.advance();
        steps.retreat();
        assert_eq!(steps.current(), 2);
    }

    #[test]
    fn test_step_stays_in_bounds_under_any_sequence() {
        let mut steps = RequestSteps::new(3);
        for _ in 0..10 {
            steps.advance();
            assert!(steps.current() >= 1 && steps.current() <= 3);
        }
        for _ in 0..10 {
            steps.retreat();
            assert!(steps.current() >= 1 && steps.current() <= 3);
        }
    }

    #[test]
    fn test_total_clamped_to_at_least_one() {
        let steps = RequestSteps::new(0);
        assert_eq!(steps.total(), 1);
        assert!(steps.is_first() && steps.is_last());
    }

    #[test]
    fn test_submit_begins_only_on_last_step_with_consent() {
        let mut steps = RequestSteps::new(3);
        assert_eq!(steps.submit_action(false, true), SubmitAction::Ignore);
        steps.advance();
        steps.advance();
        assert_eq!(steps.submit_action(false, true), SubmitAction::Begin);
    }

    #[test]
    fn test_submit_ignored_while_submitting() {
        let mut steps = RequestSteps::new(3);
        steps.advance();
        steps.advance();
        assert_eq!(steps.submit_action(true, true), SubmitAction::Ignore);
    }

    #[test]
    fn test_connection_type_slug_round_trip() {
        for kind in ConnectionType::ALL {
            assert_eq!(ConnectionType::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ConnectionType::from_slug("bogus"), None);
    }

    #[test]
    fn test_submit_ignored_without_consent() {
        let mut steps = RequestSteps::new(3);
        steps.advance();
        steps.advance();
        assert_eq!(steps.submit_action(false, false), SubmitAction::Ignore);
    }
}
