// Static seed data for screen sessions.
//
// Each screen re-seeds its own store on mount, so collections are independent
// across screens by design.

use crate::models::{
    Issue, IssueStatus, Notification, NotificationKind, Priority, ReadState, UserReport,
};

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Home feed issues. Timestamps are offsets from `now` so recency ordering is
/// stable regardless of when the session starts.
pub fn seed_issues(now: i64) -> Vec<Issue> {
    vec![
        Issue {
            id: "1".to_string(),
            title: "Large pothole on Main Street causing traffic issues".to_string(),
            description: "There is a dangerous pothole near the intersection that has been \
                          growing larger over the past month. Multiple vehicles have suffered \
                          tire damage."
                .to_string(),
            category: "Road".to_string(),
            status: IssueStatus::Pending,
            reporter: "Rajesh Kumar".to_string(),
            location: "Main Street, Sector 15".to_string(),
            tags: vec!["Pothole".to_string(), "Traffic".to_string(), "Safety".to_string()],
            created_at: now - 2 * HOUR_MS,
            likes: 23,
            comments: 7,
            upvotes: 45,
            is_liked: false,
            is_upvoted: true,
        },
        Issue {
            id: "2".to_string(),
            title: "Overflowing garbage bin at Park Avenue".to_string(),
            description: "The garbage bin has been overflowing for days, attracting stray \
                          animals and creating hygiene issues for nearby residents."
                .to_string(),
            category: "Garbage".to_string(),
            status: IssueStatus::InProgress,
            reporter: "Priya Sharma".to_string(),
            location: "Park Avenue, Block C".to_string(),
            tags: vec!["Garbage".to_string(), "Hygiene".to_string(), "Health".to_string()],
            created_at: now - 6 * HOUR_MS,
            likes: 12,
            comments: 3,
            upvotes: 28,
            is_liked: true,
            is_upvoted: false,
        },
        Issue {
            id: "3".to_string(),
            title: "Broken streetlight causing safety concerns".to_string(),
            description: "The streetlight has been non-functional for over a week, making the \
                          area unsafe for pedestrians during evening hours."
                .to_string(),
            category: "Electricity".to_string(),
            status: IssueStatus::Resolved,
            reporter: "Amit Singh".to_string(),
            location: "Liberty Square, Gate 2".to_string(),
            tags: vec!["Streetlight".to_string(), "Safety".to_string(), "Night".to_string()],
            created_at: now - DAY_MS,
            likes: 8,
            comments: 12,
            upvotes: 34,
            is_liked: false,
            is_upvoted: true,
        },
    ]
}

/// Notifications screen entries: five items, two unread.
pub fn seed_notifications(now: i64) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            kind: NotificationKind::AuthorityResponse,
            title: "Authority Response".to_string(),
            message: "Municipal Corporation has responded to your pothole report on Main \
                      Street. Work will begin next week."
                .to_string(),
            read_state: ReadState::Unread,
            priority: Priority::High,
            issue_id: Some("1".to_string()),
            issue_title: Some("Pothole on Main Street".to_string()),
            author_name: Some("Municipal Corporation".to_string()),
            created_at: now - 2 * HOUR_MS,
        },
        Notification {
            id: "2".to_string(),
            kind: NotificationKind::StatusUpdate,
            title: "Status Update".to_string(),
            message: "Your reported streetlight issue has been marked as \"In Progress\". \
                      Repair team has been assigned."
                .to_string(),
            read_state: ReadState::Unread,
            priority: Priority::Medium,
            issue_id: Some("2".to_string()),
            issue_title: Some("Broken streetlight at Liberty Square".to_string()),
            author_name: None,
            created_at: now - 4 * HOUR_MS,
        },
        Notification {
            id: "3".to_string(),
            kind: NotificationKind::Comment,
            title: "New Comment".to_string(),
            message: "Priya Sharma commented on the garbage bin issue: \"This has been going \
                      on for weeks now!\""
                .to_string(),
            read_state: ReadState::Read,
            priority: Priority::Low,
            issue_id: Some("3".to_string()),
            issue_title: Some("Overflowing garbage bin".to_string()),
            author_name: Some("Priya Sharma".to_string()),
            created_at: now - 6 * HOUR_MS,
        },
        Notification {
            id: "4".to_string(),
            kind: NotificationKind::Resolution,
            title: "Issue Resolved".to_string(),
            message: "Great news! The water supply issue you reported has been resolved. \
                      Thank you for helping improve our community."
                .to_string(),
            read_state: ReadState::Read,
            priority: Priority::High,
            issue_id: Some("4".to_string()),
            issue_title: Some("Water supply disruption".to_string()),
            author_name: None,
            created_at: now - DAY_MS,
        },
        Notification {
            id: "5".to_string(),
            kind: NotificationKind::General,
            title: "Weekly Community Report".to_string(),
            message: "This week: 12 issues reported, 8 resolved, 4 in progress. Your \
                      neighborhood ranking: #3 most active!"
                .to_string(),
            read_state: ReadState::Read,
            priority: Priority::Low,
            issue_id: None,
            issue_title: None,
            author_name: None,
            created_at: now - 2 * DAY_MS,
        },
    ]
}

/// The viewer's own reports, shown on the profile screen.
pub fn seed_reports(now: i64) -> Vec<UserReport> {
    vec![
        UserReport {
            id: "1".to_string(),
            title: "Pothole on Main Street causing traffic issues".to_string(),
            description: "Large pothole near intersection causing vehicle damage".to_string(),
            category: "Road".to_string(),
            status: IssueStatus::Pending,
            location: "Main Street, Sector 15".to_string(),
            created_at: now - 3 * DAY_MS,
            likes: 23,
            comments: 7,
            upvotes: 45,
        },
        UserReport {
            id: "2".to_string(),
            title: "Broken streetlight at Liberty Square".to_string(),
            description: "Non-functional streetlight making area unsafe during night".to_string(),
            category: "Electricity".to_string(),
            status: IssueStatus::InProgress,
            location: "Liberty Square, Gate 2".to_string(),
            created_at: now - 5 * DAY_MS,
            likes: 12,
            comments: 4,
            upvotes: 28,
        },
        UserReport {
            id: "3".to_string(),
            title: "Water supply disruption in Block C".to_string(),
            description: "No water supply for 3 days affecting multiple households".to_string(),
            category: "Water".to_string(),
            status: IssueStatus::Resolved,
            location: "Block C, Apartments".to_string(),
            created_at: now - 11 * DAY_MS,
            likes: 8,
            comments: 12,
            upvotes: 34,
        },
    ]
}
