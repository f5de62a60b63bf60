//! # Domain Models
//!
//! These structs represent the core entities of CitizenConnect.
//! Record identifiers are opaque strings; fresh ones come from UUID v4.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// The closed set of roles. An unauthenticated caller has no role at all,
/// which is modelled as `Option<Role>::None` rather than a fifth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Politician,
    Moderator,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Citizen, Role::Politician, Role::Moderator, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Politician => "politician",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }

    /// The dashboard path for this role (e.g., "/citizen").
    pub fn home_path(&self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("unknown role '{s}'")))
    }
}

/// The single signed-in identity. This is also the exact shape written to
/// the persisted session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Opaque token fabricated at sign-in; carries no meaning.
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Identifier of a record within one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    Pending,
    InProgress,
    Resolved,
}

/// A civic issue reported by a citizen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: IssueStatus,
    /// Name of the reporting citizen. The citizen's own list leaves it empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    pub location: String,
    pub date: NaiveDate,
    pub upvotes: u32,
    /// Append-only, in insertion order.
    #[serde(default)]
    pub responses: Vec<Response>,
}

/// Input for reporting a new issue. Server-assigned fields are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default = "default_issue_status")]
    pub status: IssueStatus,
    #[serde(default)]
    pub reporter: Option<String>,
    pub location: String,
}

fn default_issue_status() -> IssueStatus {
    IssueStatus::Pending
}

/// An official's reply attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub id: RecordId,
    pub author: String,
    pub content: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Comment,
    Issue,
    Announcement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Removed,
}

/// A piece of content reported to the moderators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedContent {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: String,
    pub content: String,
    pub author: String,
    pub reporter: String,
    pub reason: String,
    pub date: NaiveDate,
    pub status: ModerationStatus,
}

/// A politician's public update. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub views: u64,
    pub reactions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn toggled(self) -> Self {
        match self {
            AccountStatus::Active => AccountStatus::Suspended,
            AccountStatus::Suspended => AccountStatus::Active,
        }
    }
}

/// A platform account as seen from the admin's user-management list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub joined: NaiveDate,
}

/// One line of an activity feed (moderation log, platform activity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: RecordId,
    pub action: String,
    /// Who performed the action. `None` stands for whoever is viewing the feed.
    pub actor: Option<String>,
    pub target: String,
    /// Human-readable relative time ("10 minutes ago").
    pub time: String,
}

/// A `{label, value}` pair handed to the charting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self { label: label.into(), value }
    }
}

/// A labelled stat card value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self { label: label.into(), value }
    }
}
