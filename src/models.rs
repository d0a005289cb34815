// Data models for the civic issue reporting screens

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{Interactive, Record, ToggleKind};

/// Lifecycle status of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "pending",
            IssueStatus::InProgress => "in-progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Rejected => "rejected",
        }
    }

    /// Valid transitions from this status
    pub fn valid_transitions(&self) -> Vec<IssueStatus> {
        match self {
            IssueStatus::Pending => vec![IssueStatus::InProgress, IssueStatus::Rejected],
            IssueStatus::InProgress => vec![IssueStatus::Resolved, IssueStatus::Rejected],
            // Resolved and rejected are terminal
            IssueStatus::Resolved => vec![],
            IssueStatus::Rejected => vec![],
        }
    }

    pub fn can_transition_to(&self, target: IssueStatus) -> bool {
        self.valid_transitions().contains(&target)
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read state of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadState {
    Unread,
    Read,
}

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    StatusUpdate,
    Comment,
    AuthorityResponse,
    Resolution,
    General,
}

impl NotificationKind {
    /// Kinds shown under the "updates" notification tab
    pub fn is_update(&self) -> bool {
        matches!(
            self,
            NotificationKind::StatusUpdate
                | NotificationKind::AuthorityResponse
                | NotificationKind::Resolution
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A community-reported issue shown on the home feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: IssueStatus,
    pub reporter: String,
    pub location: String,
    pub tags: Vec<String>,
    pub created_at: i64,
    pub likes: u32,
    pub comments: u32,
    pub upvotes: u32,
    pub is_liked: bool,
    pub is_upvoted: bool,
}

impl Issue {
    /// Move to a new status, checked against the transition table
    pub fn transition(&mut self, target: IssueStatus) -> Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(Error::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}

impl Record for Issue {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl Interactive for Issue {
    fn is_active(&self, kind: ToggleKind) -> bool {
        match kind {
            ToggleKind::Liked => self.is_liked,
            ToggleKind::Upvoted => self.is_upvoted,
        }
    }

    fn count(&self, kind: ToggleKind) -> u32 {
        match kind {
            ToggleKind::Liked => self.likes,
            ToggleKind::Upvoted => self.upvotes,
        }
    }

    fn apply_toggle(&mut self, kind: ToggleKind) {
        match kind {
            ToggleKind::Liked => {
                if self.is_liked {
                    self.likes = self.likes.saturating_sub(1);
                } else {
                    self.likes += 1;
                }
                self.is_liked = !self.is_liked;
            }
            ToggleKind::Upvoted => {
                if self.is_upvoted {
                    self.upvotes = self.upvotes.saturating_sub(1);
                } else {
                    self.upvotes += 1;
                }
                self.is_upvoted = !self.is_upvoted;
            }
        }
    }

    fn engagement(&self) -> i64 {
        self.likes as i64 + self.comments as i64 + self.upvotes as i64
    }
}

/// An entry in the notifications screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read_state: ReadState,
    pub priority: Priority,
    pub issue_id: Option<String>,
    pub issue_title: Option<String>,
    pub author_name: Option<String>,
    pub created_at: i64,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.read_state == ReadState::Unread
    }
}

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

/// One of the viewer's own submitted reports, shown on the profile screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReport {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: IssueStatus,
    pub location: String,
    pub created_at: i64,
    pub likes: u32,
    pub comments: u32,
    pub upvotes: u32,
}

impl UserReport {
    /// Move to a new status, checked against the transition table
    pub fn transition(&mut self, target: IssueStatus) -> Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(Error::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}

impl Record for UserReport {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms() {
        let ts = now_ms();
        assert!(ts > 0);
        // Should be reasonable timestamp (after year 2020)
        assert!(ts > 1_600_000_000_000);
    }

    #[test]
    fn test_issue_status_serialization() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let json = serde_json::to_string(&IssueStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }

    #[test]
    fn test_notification_kind_serialization() {
        let json = serde_json::to_string(&NotificationKind::AuthorityResponse).unwrap();
        assert_eq!(json, "\"authority_response\"");
    }

    #[test]
    fn test_transition_table() {
        assert!(IssueStatus::Pending.can_transition_to(IssueStatus::InProgress));
        assert!(IssueStatus::Pending.can_transition_to(IssueStatus::Rejected));
        assert!(IssueStatus::InProgress.can_transition_to(IssueStatus::Resolved));
        assert!(IssueStatus::InProgress.can_transition_to(IssueStatus::Rejected));

        assert!(!IssueStatus::Pending.can_transition_to(IssueStatus::Resolved));
        assert!(!IssueStatus::Resolved.can_transition_to(IssueStatus::Pending));
        assert!(!IssueStatus::Rejected.can_transition_to(IssueStatus::InProgress));
    }

    #[test]
    fn test_issue_transition_rejects_invalid_move() {
        let mut issue = Issue {
            id: "1".to_string(),
            title: "Pothole".to_string(),
            description: "Large pothole".to_string(),
            category: "Road".to_string(),
            status: IssueStatus::Pending,
            reporter: "Rajesh Kumar".to_string(),
            location: "Main Street".to_string(),
            tags: vec!["Pothole".to_string()],
            created_at: 1000,
            likes: 0,
            comments: 0,
            upvotes: 0,
            is_liked: false,
            is_upvoted: false,
        };

        let err = issue.transition(IssueStatus::Resolved).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTransition {
                from: IssueStatus::Pending,
                to: IssueStatus::Resolved
            }
        );
        // Status unchanged on failure
        assert_eq!(issue.status, IssueStatus::Pending);

        issue.transition(IssueStatus::InProgress).unwrap();
        issue.transition(IssueStatus::Resolved).unwrap();
        assert_eq!(issue.status, IssueStatus::Resolved);
    }

    #[test]
    fn test_apply_toggle_saturates_at_zero() {
        let mut issue = Issue {
            id: "1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            category: "Road".to_string(),
            status: IssueStatus::Pending,
            reporter: "r".to_string(),
            location: "l".to_string(),
            tags: vec![],
            created_at: 0,
            likes: 0,
            comments: 0,
            upvotes: 0,
            is_liked: true,
            is_upvoted: false,
        };

        // Flag active but counter already 0: turning inactive must not underflow
        issue.apply_toggle(ToggleKind::Liked);
        assert!(!issue.is_liked);
        assert_eq!(issue.likes, 0);
    }

    #[test]
    fn test_issue_serialization_round_trip() {
        let issue = Issue {
            id: "1".to_string(),
            title: "Pothole on Main Street".to_string(),
            description: "Dangerous pothole near the intersection".to_string(),
            category: "Road".to_string(),
            status: IssueStatus::Pending,
            reporter: "Rajesh Kumar".to_string(),
            location: "Main Street, Sector 15".to_string(),
            tags: vec!["Pothole".to_string(), "Traffic".to_string()],
            created_at: 1000,
            likes: 23,
            comments: 7,
            upvotes: 45,
            is_liked: false,
            is_upvoted: true,
        };

        let json = serde_json::to_string(&issue).unwrap();
        let back: Issue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, issue);
    }
}
