//! Service-request form state store
//!
//! One form session: the draft being filled in, the step position, and the
//! submission flags. The step machine itself lives in `tonle-common`; this
//! store wires it to the two booleans the submit gate reads and to the
//! success modal flag.

use tonle_common::{RequestDraft, RequestSteps, SubmitAction};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestFormState {
    /// Everything collected across the steps
    pub draft: RequestDraft,
    /// Position in the step flow
    pub steps: RequestSteps,
    /// True between submission-started and the workflow finishing.
    /// Owned here; the consent flag is its own field so the gate is always
    /// computed from the two current values.
    pub is_submitting: bool,
    /// Consent checkbox on the review step
    pub privacy_accepted: bool,
    /// Success modal visibility, flipped by the workflow on completion
    pub show_success: bool,
}

impl RequestFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_step(&mut self) {
        self.steps.advance();
    }

    pub fn prev_step(&mut self) {
        self.steps.retreat();
    }

    /// Whether the submit control is enabled right now.
    pub fn can_submit(&self) -> bool {
        self.steps
            .submit_action(self.is_submitting, self.privacy_accepted)
            == SubmitAction::Begin
    }

    /// Try to start the submission workflow. Returns the draft to submit
    /// when the gate allows it, `None` otherwise.
    pub fn begin_submission(&mut self) -> Option<RequestDraft> {
        match self
            .steps
            .submit_action(self.is_submitting, self.privacy_accepted)
        {
            SubmitAction::Begin => {
                self.is_submitting = true;
                Some(self.draft.clone())
            }
            SubmitAction::Ignore => None,
        }
    }

    /// Called by the workflow when the request went through.
    pub fn finish_submission(&mut self) {
        self.is_submitting = false;
        self.show_success = true;
    }

    /// Dismissing the success modal resets the whole form session.
    pub fn acknowledge_success(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_review_step() -> RequestFormState {
        let mut state = RequestFormState::new();
        state.next_step();
        state.next_step();
        state
    }

    #[test]
    fn test_walks_steps_forward_and_back() {
        let mut state = RequestFormState::new();
        assert_eq!(state.steps.current(), 1);
        state.next_step();
        assert_eq!(state.steps.current(), 2);
        state.prev_step();
        assert_eq!(state.steps.current(), 1);
    }

    #[test]
    fn test_cannot_submit_before_review_step() {
        let mut state = RequestFormState::new();
        state.privacy_accepted = true;
        assert!(!state.can_submit());
        assert_eq!(state.begin_submission(), None);
    }

    #[test]
    fn test_submission_requires_consent() {
        let mut state = at_review_step();
        assert_eq!(state.begin_submission(), None);

        state.privacy_accepted = true;
        let draft = state.begin_submission();
        assert!(draft.is_some());
        assert!(state.is_submitting);
    }

    #[test]
    fn test_no_double_submission() {
        let mut state = at_review_step();
        state.privacy_accepted = true;
        assert!(state.begin_submission().is_some());
        // Second click while the workflow is running does nothing
        assert_eq!(state.begin_submission(), None);
    }

    #[test]
    fn test_finish_opens_success_modal() {
        let mut state = at_review_step();
        state.privacy_accepted = true;
        state.begin_submission();
        state.finish_submission();
        assert!(!state.is_submitting);
        assert!(state.show_success);
    }

    #[test]
    fn test_acknowledge_success_resets_session() {
        let mut state = at_review_step();
        state.draft.applicant.full_name = "សុខ សុភា".to_string();
        state.privacy_accepted = true;
        state.begin_submission();
        state.finish_submission();
        state.acknowledge_success();
        assert_eq!(state, RequestFormState::default());
    }
}
