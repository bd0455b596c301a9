//! Per-run rule evaluation state.

use flourish_model::{Submission, ValidationContext};

use crate::issue::Issue;
use crate::primitives;
use crate::settings::AccumulationPolicy;

/// Returned by [`Checker::check`] when the policy says to stop.
///
/// Form validators propagate it with `?` so that the first failure ends the
/// run under [`AccumulationPolicy::FirstFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop;

/// Collects rule outcomes for one submission.
#[derive(Debug)]
pub struct Checker<'a> {
    submission: &'a Submission,
    context: &'a ValidationContext,
    policy: AccumulationPolicy,
    issues: Vec<Issue>,
}

impl<'a> Checker<'a> {
    pub fn new(
        submission: &'a Submission,
        context: &'a ValidationContext,
        policy: AccumulationPolicy,
    ) -> Self {
        Self {
            submission,
            context,
            policy,
            issues: Vec::new(),
        }
    }

    pub fn submission(&self) -> &'a Submission {
        self.submission
    }

    pub fn context(&self) -> &'a ValidationContext {
        self.context
    }

    /// Record a rule outcome.
    pub fn check(&mut self, outcome: Result<(), Issue>) -> Result<(), Stop> {
        let Err(issue) = outcome else {
            return Ok(());
        };
        tracing::trace!(code = issue.code(), field = issue.field(), "rule failed");
        self.issues.push(issue);
        match self.policy {
            AccumulationPolicy::FirstFailure => Err(Stop),
            AccumulationPolicy::CollectAll => Ok(()),
        }
    }

    pub fn required_if(
        &mut self,
        trigger_value: &str,
        field: &str,
        field_required: &str,
    ) -> Result<(), Stop> {
        let outcome =
            primitives::required_if(self.submission, trigger_value, field, field_required);
        self.check(outcome)
    }

    pub fn required_if_true(&mut self, condition: bool, field_required: &str) -> Result<(), Stop> {
        let outcome = primitives::required_if_true(self.submission, condition, field_required);
        self.check(outcome)
    }

    pub fn not_required_if_true(&mut self, condition: bool, field: &str) -> Result<(), Stop> {
        let outcome = primitives::not_required_if_true(self.submission, condition, field);
        self.check(outcome)
    }

    pub fn other_specify(
        &mut self,
        choice_set: &str,
        other_value: &str,
        free_text_field: &str,
    ) -> Result<(), Stop> {
        let outcome =
            primitives::other_specify(self.submission, choice_set, other_value, free_text_field);
        self.check(outcome)
    }

    pub fn other_specify_single(
        &mut self,
        field: &str,
        other_value: &str,
        free_text_field: &str,
    ) -> Result<(), Stop> {
        let outcome =
            primitives::other_specify_single(self.submission, field, other_value, free_text_field);
        self.check(outcome)
    }

    pub fn exclusive_option(&mut self, choice_set: &str, option: &str) -> Result<(), Stop> {
        let outcome = primitives::exclusive_option(self.submission, choice_set, option);
        self.check(outcome)
    }

    pub fn only_option(&mut self, choice_set: &str, option: &str) -> Result<(), Stop> {
        let outcome = primitives::only_option(self.submission, choice_set, option);
        self.check(outcome)
    }

    pub fn option_not_allowed(&mut self, choice_set: &str, option: &str) -> Result<(), Stop> {
        let outcome = primitives::option_not_allowed(self.submission, choice_set, option);
        self.check(outcome)
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failure_stops_after_one_issue() {
        let submission = Submission::new();
        let context = ValidationContext::new();
        let mut checker = Checker::new(&submission, &context, AccumulationPolicy::FirstFailure);

        assert_eq!(checker.required_if_true(true, "comment"), Err(Stop));
        assert_eq!(checker.issues().len(), 1);
    }

    #[test]
    fn collect_all_keeps_going() {
        let submission = Submission::new();
        let context = ValidationContext::new();
        let mut checker = Checker::new(&submission, &context, AccumulationPolicy::CollectAll);

        assert!(checker.required_if_true(true, "comment").is_ok());
        assert!(checker.required_if_true(true, "is_preg").is_ok());
        assert!(checker.required_if_true(false, "current_hiv_status").is_ok());

        let fields: Vec<&str> = checker.issues().iter().map(Issue::field).collect();
        assert_eq!(fields, ["comment", "is_preg"]);
    }
}
