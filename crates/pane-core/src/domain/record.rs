//! Record Entity
//!
//! One entry in the content list (a task or project).

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Record priority, shown as a badge on each card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Menu order, highest first
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Badge variant name used by the card renderer
    pub fn badge_variant(self) -> &'static str {
        match self {
            Priority::High => "destructive",
            Priority::Medium => "default",
            Priority::Low => "secondary",
        }
    }
}

/// Workflow status of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Scheduled,
    Pending,
    InProgress,
    Completed,
}

impl Status {
    /// Display label; status filters compare against this text
    pub fn label(self) -> &'static str {
        match self {
            Status::Scheduled => "Scheduled",
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

/// A content list record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display label ("Today", "2 days ago"), never parsed
    pub date: String,
    pub priority: Priority,
    pub status: Status,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        priority: Priority,
        status: Status,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            date: date.into(),
            priority,
            status,
        }
    }
}

impl Entity for Record {
    fn id(&self) -> &str {
        &self.id
    }
}
