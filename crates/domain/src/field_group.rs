//! Field Group state machine
//!
//! A Field Group is the list of entries of one category. The page is the
//! source of truth for how many entries exist, so this type is built from an
//! observed entry count and only computes what the next transition should do:
//! which index an append assigns, which index a remove drops, and whether the
//! container must be shown or hidden.
//!
//! ```text
//!   KeepVisible:  0 <-> 1 <-> 2 <-> ...
//!   Hide:         hidden-empty <-> visible(1) <-> visible(2) <-> ...
//! ```

use serde::{Deserialize, Serialize};

/// What happens to a container once its last entry is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyGroupPolicy {
    /// Leave the empty container on the page
    #[default]
    KeepVisible,
    /// Hide the container while it has no entries
    Hide,
}

/// Visibility change a transition requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Show,
    Hide,
}

/// Observed state of one Field Group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGroupState {
    entries: usize,
    policy: EmptyGroupPolicy,
}

/// Result of applying append or remove to a [`FieldGroupState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Index of the entry that was added or removed
    pub index: usize,
    /// State after the transition
    pub state: FieldGroupState,
    /// Visibility change to apply to the container, if any
    pub visibility: Option<VisibilityChange>,
}

impl FieldGroupState {
    /// State of a group whose container currently holds `entries` children.
    pub fn observe(entries: usize, policy: EmptyGroupPolicy) -> Self {
        Self { entries, policy }
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Whether the container should be visible in this state.
    pub fn is_visible(&self) -> bool {
        match self.policy {
            EmptyGroupPolicy::KeepVisible => true,
            EmptyGroupPolicy::Hide => self.entries > 0,
        }
    }

    /// Index the next appended entry receives.
    pub fn next_index(&self) -> usize {
        self.entries
    }

    /// Visibility the container should be forced to when first observed.
    ///
    /// Only the `Hide` policy constrains the initial state.
    pub fn initial_visibility(&self) -> Option<VisibilityChange> {
        match self.policy {
            EmptyGroupPolicy::KeepVisible => None,
            EmptyGroupPolicy::Hide if self.entries == 0 => Some(VisibilityChange::Hide),
            EmptyGroupPolicy::Hide => Some(VisibilityChange::Show),
        }
    }

    /// N -> N+1. The new entry takes index N.
    pub fn append(&self) -> Transition {
        let next = Self {
            entries: self.entries + 1,
            policy: self.policy,
        };
        Transition {
            index: self.entries,
            state: next,
            visibility: (!self.is_visible() && next.is_visible()).then_some(VisibilityChange::Show),
        }
    }

    /// N -> N-1, dropping index N-1. `None` when the group is already empty.
    pub fn remove(&self) -> Option<Transition> {
        let index = self.entries.checked_sub(1)?;
        let next = Self {
            entries: index,
            policy: self.policy,
        };
        Some(Transition {
            index,
            state: next,
            visibility: (self.is_visible() && !next.is_visible()).then_some(VisibilityChange::Hide),
        })
    }
}
