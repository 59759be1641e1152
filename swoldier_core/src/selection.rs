//! Selection rules for the muscle group picker.
//!
//! The `individual` split accepts up to three muscle groups; every other split
//! accepts exactly one bucket. The engine trusts its input, so callers check
//! the rule here before generating.

use crate::{group_key, Error, Goal, Result, SplitType, WorkoutRequest};
use std::collections::HashSet;

/// Most groups a single workout may target
pub const MAX_SELECTED_GROUPS: usize = 3;

/// Check the per-split selection arity
pub fn check_arity(split: SplitType, groups: &[String]) -> Result<()> {
    if groups.is_empty() {
        return Err(Error::EmptySelection);
    }

    let unique: HashSet<String> = groups.iter().map(|g| group_key(g)).collect();
    if unique.len() != groups.len() {
        return Err(Error::Selection("the same group was selected twice".into()));
    }

    if split.is_individual() {
        if groups.len() > MAX_SELECTED_GROUPS {
            return Err(Error::Selection(format!(
                "select at most {} muscle groups, got {}",
                MAX_SELECTED_GROUPS,
                groups.len()
            )));
        }
    } else if groups.len() != 1 {
        return Err(Error::Selection(format!(
            "{} takes exactly one group, got {}",
            split.label(),
            groups.len()
        )));
    }

    Ok(())
}

/// In-progress selection as driven by a picker
#[derive(Clone, Debug)]
pub struct Selection {
    split: SplitType,
    groups: Vec<String>,
}

impl Selection {
    pub fn new(split: SplitType) -> Self {
        Self {
            split,
            groups: Vec::new(),
        }
    }

    pub fn split(&self) -> SplitType {
        self.split
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Switch split type, clearing the current picks
    pub fn set_split(&mut self, split: SplitType) {
        self.split = split;
        self.groups.clear();
    }

    /// Toggle a group
    ///
    /// Selected groups are removed. Once three groups are picked further
    /// additions are ignored. Bucketed splits replace the selection with the
    /// single chosen bucket.
    pub fn toggle(&mut self, group: &str) {
        let group = group_key(group);
        if let Some(pos) = self.groups.iter().position(|g| *g == group) {
            self.groups.remove(pos);
            return;
        }

        if self.groups.len() >= MAX_SELECTED_GROUPS {
            return;
        }

        if !self.split.is_individual() {
            self.groups = vec![group];
            return;
        }

        self.groups.push(group);
    }

    /// Whether the picker has all it can take
    pub fn is_complete(&self) -> bool {
        if self.split.is_individual() {
            self.groups.len() == MAX_SELECTED_GROUPS
        } else {
            self.groups.len() == 1
        }
    }

    /// Build a generation request, checking the arity rule first
    pub fn to_request(&self, goal: Goal) -> Result<WorkoutRequest> {
        check_arity(self.split, &self.groups)?;
        Ok(WorkoutRequest::new(
            self.split.as_str(),
            self.groups.iter().cloned(),
            goal.as_str(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_arity_individual() {
        assert!(check_arity(SplitType::Individual, &groups(&["chest"])).is_ok());
        assert!(check_arity(SplitType::Individual, &groups(&["chest", "back", "abs"])).is_ok());
        assert!(matches!(
            check_arity(SplitType::Individual, &groups(&["chest", "back", "abs", "quads"])),
            Err(Error::Selection(_))
        ));
    }

    #[test]
    fn test_arity_bucketed() {
        assert!(check_arity(SplitType::BroSplit, &groups(&["push"])).is_ok());
        assert!(matches!(
            check_arity(SplitType::UpperLower, &groups(&["upper", "lower"])),
            Err(Error::Selection(_))
        ));
    }

    #[test]
    fn test_arity_empty_and_duplicates() {
        assert!(matches!(
            check_arity(SplitType::BodybuilderSplit, &[]),
            Err(Error::EmptySelection)
        ));
        assert!(matches!(
            check_arity(SplitType::Individual, &groups(&["chest", "chest"])),
            Err(Error::Selection(_))
        ));
    }

    #[test]
    fn test_arity_duplicates_ignore_case() {
        assert!(matches!(
            check_arity(SplitType::Individual, &groups(&["chest", "CHEST"])),
            Err(Error::Selection(_))
        ));
        assert!(matches!(
            check_arity(SplitType::Individual, &groups(&["back", " Back "])),
            Err(Error::Selection(_))
        ));
    }

    #[test]
    fn test_toggle_uses_canonical_keys() {
        let mut selection = Selection::new(SplitType::Individual);
        selection.toggle("Chest");
        assert_eq!(selection.groups(), &["chest".to_string()]);

        selection.toggle("CHEST");
        assert!(selection.groups().is_empty());
    }

    #[test]
    fn test_toggle_individual() {
        let mut selection = Selection::new(SplitType::Individual);
        selection.toggle("chest");
        selection.toggle("back");
        assert!(!selection.is_complete());

        selection.toggle("abs");
        assert!(selection.is_complete());

        // Full: ignored
        selection.toggle("quads");
        assert_eq!(selection.groups(), groups(&["chest", "back", "abs"]).as_slice());

        // Toggle off
        selection.toggle("back");
        assert_eq!(selection.groups(), groups(&["chest", "abs"]).as_slice());
    }

    #[test]
    fn test_toggle_bucketed_replaces() {
        let mut selection = Selection::new(SplitType::BroSplit);
        selection.toggle("push");
        assert!(selection.is_complete());

        selection.toggle("legs");
        assert_eq!(selection.groups(), groups(&["legs"]).as_slice());
    }

    #[test]
    fn test_set_split_clears() {
        let mut selection = Selection::new(SplitType::Individual);
        selection.toggle("chest");
        selection.set_split(SplitType::UpperLower);
        assert!(selection.groups().is_empty());
        assert_eq!(selection.split(), SplitType::UpperLower);
    }

    #[test]
    fn test_to_request() {
        let mut selection = Selection::new(SplitType::Individual);
        assert!(matches!(
            selection.to_request(Goal::StrengthPower),
            Err(Error::EmptySelection)
        ));

        selection.toggle("chest");
        selection.toggle("back");
        let request = selection.to_request(Goal::GrowthHypertrophy).unwrap();
        assert_eq!(
            request,
            WorkoutRequest::new("individual", ["chest", "back"], "growth_hypertrophy")
        );
    }
}
