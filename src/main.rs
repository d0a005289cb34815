use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use civicfeed::{
    Deferred, FeedFilter, Issue, IssueStatus, NotificationFilter, Poll, ReportForm, StatusFilter,
    Store, ToggleKind, Viewer, filter_feed, filter_notifications, filter_reports, now_ms, search,
    seed, toggle,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;

#[derive(Parser)]
#[command(name = "civicfeed")]
#[command(about = "Civicfeed demo CLI - browse and interact with the mock civic issue feed")]
struct Cli {
    /// Browse as a guest (read-only session)
    #[arg(long)]
    guest: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the community feed
    Feed {
        /// latest, nearby, trending, resolved or all (unknown keys mean all)
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Show the notifications screen
    Notifications {
        /// all, unread, updates or comments
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Show your submitted reports
    Reports {
        /// all, pending, in-progress, resolved or rejected
        #[arg(short, long, default_value = "all")]
        status: String,
    },

    /// Search issues by keyword
    Search { query: String },

    /// Toggle a like or upvote on a feed issue
    Toggle {
        id: String,
        /// liked or upvoted
        #[arg(short, long, default_value = "liked")]
        kind: ToggleKind,
    },

    /// Submit a new issue report
    Report {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        category: String,
    },
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let viewer = if cli.guest {
        Viewer::Guest
    } else {
        Viewer::registered("1", "Demo User")
    };

    match cli.command {
        Commands::Feed { filter } => {
            let store = Store::seeded(seed::seed_issues(now_ms()))?;
            let filter: FeedFilter = filter.parse().expect("feed filter parsing is infallible");
            let issues = filter_feed(store.get_all(), filter);
            println!("Community Reports ({})\n", filter.as_str());
            if issues.is_empty() {
                println!("  No issues match this filter.");
            }
            for issue in &issues {
                print_issue(issue);
            }
            if viewer.is_guest() {
                println!("{}", "Browsing as guest. Sign up to interact.".yellow());
            }
        }

        Commands::Notifications { filter } => {
            let mut store = Store::seeded(seed::seed_notifications(now_ms()))?;
            let filter: NotificationFilter =
                filter.parse().expect("notification filter parsing is infallible");
            println!("Notifications ({} unread)\n", store.unread_count());
            let shown = filter_notifications(store.get_all(), filter);
            if shown.is_empty() {
                println!("  No notifications yet.");
            }
            for notification in &shown {
                let marker = if notification.is_unread() { "●".blue() } else { " ".normal() };
                println!("{} {} - {}", marker, notification.title.bold(), notification.message);
            }
            // Viewing the list marks everything read, as the screen does
            store.mark_all_read();
        }

        Commands::Reports { status } => {
            let store = Store::seeded(seed::seed_reports(now_ms()))?;
            let filter: StatusFilter = status.parse().expect("status filter parsing is infallible");
            let reports = filter_reports(store.get_all(), filter);
            let resolved = store
                .get_all()
                .iter()
                .filter(|r| r.status == IssueStatus::Resolved)
                .count();
            println!("My Reports ({} total, {} resolved)\n", store.len(), resolved);
            for report in &reports {
                println!(
                    "  [{}] {} {} - {} upvotes",
                    status_badge(report.status),
                    report.id,
                    report.title,
                    report.upvotes
                );
            }
        }

        Commands::Search { query } => {
            let store = Store::seeded(seed::seed_issues(now_ms()))?;
            let results = search(store.get_all(), &query);
            if results.is_empty() {
                println!("No results found. Try different keywords.");
            }
            for issue in &results {
                print_issue(issue);
            }
        }

        Commands::Toggle { id, kind } => {
            let Some(identity) = viewer.identity() else {
                println!("{}", "Sign up to interact".yellow());
                return Ok(());
            };
            let mut store = Store::seeded(seed::seed_issues(now_ms()))?;
            let result = toggle(store.get_all(), &id, kind, identity);
            match result {
                Ok(next) => {
                    store.replace(next);
                    let issue = store.get(&id).expect("toggled record is present");
                    println!("Issue {}: {}", id, issue.title);
                    println!(
                        "  liked={} likes={} upvoted={} upvotes={}",
                        issue.is_liked, issue.likes, issue.is_upvoted, issue.upvotes
                    );
                }
                Err(err) => {
                    // Not-found toggles are a logged no-op, never a crash
                    tracing::warn!(%err, "toggle skipped");
                    println!("{}", err);
                }
            }
        }

        Commands::Report {
            title,
            description,
            location,
            category,
        } => {
            if viewer.is_guest() {
                println!("{}", "Sign up required to report issues".yellow());
                return Ok(());
            }
            let form = ReportForm {
                title,
                description,
                location,
                category,
            };
            let report = form.into_report(now_ms())?;

            // Simulated submission: fixed delay, explicit cancellation point
            let mut pending = Deferred::new(report, 1500, now_ms());
            println!("Submitting report...");
            loop {
                match pending.poll(now_ms()) {
                    Poll::Pending => thread::sleep(Duration::from_millis(100)),
                    Poll::Ready(report) => {
                        let mut store = Store::seeded(seed::seed_reports(now_ms()))?;
                        let id = store.create(report)?;
                        println!("{} Report {} submitted.", "✓".green(), id);
                        break;
                    }
                    Poll::Taken | Poll::Cancelled => break,
                }
            }
        }
    }

    Ok(())
}

fn print_issue(issue: &Issue) {
    let when = DateTime::<Utc>::from_timestamp_millis(issue.created_at)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!(
        "  [{}] {} {}",
        status_badge(issue.status),
        issue.id,
        issue.title.bold()
    );
    println!(
        "      {} | {} | {} | ♥ {}  💬 {}  ↑ {}",
        issue.reporter, issue.location, when, issue.likes, issue.comments, issue.upvotes
    );
}

fn status_badge(status: IssueStatus) -> colored::ColoredString {
    match status {
        IssueStatus::Pending => status.as_str().yellow(),
        IssueStatus::InProgress => status.as_str().blue(),
        IssueStatus::Resolved => status.as_str().green(),
        IssueStatus::Rejected => status.as_str().red(),
    }
}
