// civicfeed - session-scoped collection state for a civic issue reporting client

pub mod error;
pub mod filter;
pub mod form;
pub mod models;
pub mod record;
pub mod seed;
pub mod store;
pub mod task;
pub mod toggle;
pub mod viewer;

// Re-export main types for convenience
pub use error::{Error, FieldError, Result};
pub use filter::{
    FeedFilter, NotificationFilter, StatusFilter, filter_feed, filter_notifications,
    filter_reports, search,
};
pub use form::{LoginForm, LoginMethod, ReportForm};
pub use models::{
    Issue, IssueStatus, Notification, NotificationKind, Priority, ReadState, UserReport, now_ms,
};
pub use record::{Interactive, Record, ToggleKind};
pub use store::Store;
pub use task::{Deferred, Poll};
pub use toggle::toggle;
pub use viewer::{Identity, Viewer};
