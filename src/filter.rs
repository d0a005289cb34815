// Pure filtering and ordering over screen collections

use std::convert::Infallible;

use tracing::debug;

use crate::models::{Issue, IssueStatus, Notification, NotificationKind, UserReport};
use crate::record::Interactive;

/// Home feed filter set.
///
/// `Latest` and `Trending` reorder (stable sort by recency / engagement);
/// `Nearby` is order-preserving because geolocation ranking is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFilter {
    Latest,
    Nearby,
    Trending,
    Resolved,
    #[default]
    All,
}

impl FeedFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedFilter::Latest => "latest",
            FeedFilter::Nearby => "nearby",
            FeedFilter::Trending => "trending",
            FeedFilter::Resolved => "resolved",
            FeedFilter::All => "all",
        }
    }
}

/// Unknown keys fall back to `All`: the screen shows the full feed rather
/// than failing on a bad filter string.
impl std::str::FromStr for FeedFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "latest" => FeedFilter::Latest,
            "nearby" => FeedFilter::Nearby,
            "trending" => FeedFilter::Trending,
            "resolved" => FeedFilter::Resolved,
            "all" => FeedFilter::All,
            other => {
                debug!(key = other, "unknown feed filter, defaulting to all");
                FeedFilter::All
            }
        })
    }
}

/// Notifications screen tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Updates,
    Comments,
}

impl std::str::FromStr for NotificationFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "unread" => NotificationFilter::Unread,
            "updates" => NotificationFilter::Updates,
            "comments" => NotificationFilter::Comments,
            "all" => NotificationFilter::All,
            other => {
                debug!(key = other, "unknown notification filter, defaulting to all");
                NotificationFilter::All
            }
        })
    }
}

/// Profile screen status chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(IssueStatus),
}

impl std::str::FromStr for StatusFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pending" => StatusFilter::Status(IssueStatus::Pending),
            "in-progress" => StatusFilter::Status(IssueStatus::InProgress),
            "resolved" => StatusFilter::Status(IssueStatus::Resolved),
            "rejected" => StatusFilter::Status(IssueStatus::Rejected),
            "all" => StatusFilter::All,
            other => {
                debug!(key = other, "unknown status filter, defaulting to all");
                StatusFilter::All
            }
        })
    }
}

/// Apply a feed filter to the issues collection.
///
/// Predicate filters preserve the input's relative order; an empty result is
/// valid and drives the empty-state display.
pub fn filter_feed(issues: &[Issue], filter: FeedFilter) -> Vec<Issue> {
    match filter {
        FeedFilter::All | FeedFilter::Nearby => issues.to_vec(),
        FeedFilter::Resolved => issues
            .iter()
            .filter(|i| i.status == IssueStatus::Resolved)
            .cloned()
            .collect(),
        FeedFilter::Latest => {
            let mut sorted = issues.to_vec();
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            sorted
        }
        FeedFilter::Trending => {
            let mut sorted = issues.to_vec();
            sorted.sort_by(|a, b| b.engagement().cmp(&a.engagement()));
            sorted
        }
    }
}

/// Apply a notifications tab filter, preserving relative order
pub fn filter_notifications(
    notifications: &[Notification],
    filter: NotificationFilter,
) -> Vec<Notification> {
    notifications
        .iter()
        .filter(|n| match filter {
            NotificationFilter::All => true,
            NotificationFilter::Unread => n.is_unread(),
            NotificationFilter::Updates => n.kind.is_update(),
            NotificationFilter::Comments => n.kind == NotificationKind::Comment,
        })
        .cloned()
        .collect()
}

/// Apply a profile status chip, preserving relative order
pub fn filter_reports(reports: &[UserReport], filter: StatusFilter) -> Vec<UserReport> {
    reports
        .iter()
        .filter(|r| match filter {
            StatusFilter::All => true,
            StatusFilter::Status(status) => r.status == status,
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring search over title, description, location,
/// category and tags. A blank query matches nothing.
pub fn search(issues: &[Issue], query: &str) -> Vec<Issue> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    issues
        .iter()
        .filter(|i| {
            i.title.to_lowercase().contains(&query)
                || i.description.to_lowercase().contains(&query)
                || i.location.to_lowercase().contains(&query)
                || i.category.to_lowercase().contains(&query)
                || i.tags.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{seed_issues, seed_notifications, seed_reports};

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_filter_all_is_identity() {
        let issues = seed_issues(NOW);
        assert_eq!(filter_feed(&issues, FeedFilter::All), issues);

        let notifications = seed_notifications(NOW);
        assert_eq!(
            filter_notifications(&notifications, NotificationFilter::All),
            notifications
        );

        let reports = seed_reports(NOW);
        assert_eq!(filter_reports(&reports, StatusFilter::All), reports);
    }

    #[test]
    fn test_filter_output_is_subsequence_of_input() {
        let issues = seed_issues(NOW);
        for filter in [FeedFilter::Nearby, FeedFilter::Resolved, FeedFilter::All] {
            let out = filter_feed(&issues, filter);
            for record in &out {
                let original = issues.iter().find(|i| i.id == record.id).unwrap();
                assert_eq!(record, original);
            }
        }
    }

    #[test]
    fn test_resolved_filter_preserves_relative_order() {
        let issues = seed_issues(NOW);
        let resolved = filter_feed(&issues, FeedFilter::Resolved);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "3");
    }

    #[test]
    fn test_latest_sorts_by_recency_descending() {
        let mut issues = seed_issues(NOW);
        // Reverse insertion order so the sort has work to do
        issues.reverse();
        let latest = filter_feed(&issues, FeedFilter::Latest);
        let ids: Vec<&str> = latest.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_trending_sorts_by_engagement_descending() {
        let issues = seed_issues(NOW);
        let trending = filter_feed(&issues, FeedFilter::Trending);
        // Engagement: id 1 = 75, id 3 = 54, id 2 = 43
        let ids: Vec<&str> = trending.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);
    }

    #[test]
    fn test_unread_filter_returns_exactly_the_unread_in_order() {
        let notifications = seed_notifications(NOW);
        let unread = filter_notifications(&notifications, NotificationFilter::Unread);
        assert_eq!(unread.len(), 2);
        assert_eq!(unread[0].id, "1");
        assert_eq!(unread[1].id, "2");
    }

    #[test]
    fn test_updates_and_comments_tabs() {
        let notifications = seed_notifications(NOW);

        let updates = filter_notifications(&notifications, NotificationFilter::Updates);
        let ids: Vec<&str> = updates.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);

        let comments = filter_notifications(&notifications, NotificationFilter::Comments);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, "3");
    }

    #[test]
    fn test_unknown_filter_key_defaults_to_all() {
        let notifications = seed_notifications(NOW);
        let filter: NotificationFilter = "unknown-key".parse().unwrap();
        assert_eq!(filter, NotificationFilter::All);
        let out = filter_notifications(&notifications, filter);
        assert_eq!(out.len(), 5);

        let feed: FeedFilter = "whatever".parse().unwrap();
        assert_eq!(feed, FeedFilter::All);

        let status: StatusFilter = "bogus".parse().unwrap();
        assert_eq!(status, StatusFilter::All);
    }

    #[test]
    fn test_status_chips_on_reports() {
        let reports = seed_reports(NOW);
        let pending = filter_reports(&reports, "pending".parse().unwrap());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "1");

        let rejected = filter_reports(&reports, "rejected".parse().unwrap());
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_search_matches_across_fields() {
        let issues = seed_issues(NOW);

        let by_title = search(&issues, "pothole");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "1");

        let by_location = search(&issues, "liberty square");
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].id, "3");

        let by_tag = search(&issues, "hygiene");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, "2");

        // "safety" tags issues 1 and 3, original order kept
        let by_shared_tag = search(&issues, "Safety");
        let ids: Vec<&str> = by_shared_tag.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_search_blank_query_matches_nothing() {
        let issues = seed_issues(NOW);
        assert!(search(&issues, "").is_empty());
        assert!(search(&issues, "   ").is_empty());
    }
}
