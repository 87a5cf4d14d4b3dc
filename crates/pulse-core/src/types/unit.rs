//! Unit tree nodes: the hierarchical work items the engine scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UnitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Workflow state of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitState {
    New,
    Todo,
    InProgress,
    Blocked,
    OnHold,
    Done,
}

impl UnitState {
    /// Severity rank for canonical ordering. Blocked work sorts first,
    /// finished work last.
    pub fn sort_rank(&self) -> u8 {
        match self {
            Self::Blocked => 0,
            Self::InProgress => 1,
            Self::New => 2,
            Self::Todo => 3,
            Self::OnHold => 4,
            Self::Done => 5,
        }
    }

    /// State name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::OnHold => "on_hold",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for UnitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in the unit tree, materialized by the caller before evaluation.
///
/// A unit with no children is a leaf; all others are composite. A
/// composite's effective state is always derived from its leaf
/// descendants, never read from `state` — see
/// `pulse_engine::hierarchy::effective_state`. The engine treats the
/// whole tree as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    /// Stored workflow state. Meaningful for leaves; `None` when the
    /// upstream system has not assigned one.
    pub state: Option<UnitState>,
    pub archived: bool,
    #[serde(default)]
    pub children: Vec<Unit>,
}

impl Unit {
    /// Construct a leaf unit.
    pub fn leaf(id: impl Into<UnitId>, name: impl Into<String>, state: Option<UnitState>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state,
            archived: false,
            children: Vec::new(),
        }
    }

    /// Construct a composite unit from its children.
    pub fn composite(
        id: impl Into<UnitId>,
        name: impl Into<String>,
        children: Vec<Unit>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: None,
            archived: false,
            children,
        }
    }

    /// Mark the unit archived (builder style, used heavily in tests).
    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// True iff this unit has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
