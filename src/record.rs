// Record and engagement traits shared by every screen collection

use serde::{Serialize, de::DeserializeOwned};

/// Core trait for any record held in a screen collection
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Unique identifier within the collection, assigned at creation
    fn id(&self) -> &str;

    /// Creation timestamp (milliseconds since epoch)
    fn created_at(&self) -> i64;
}

/// The per-viewer engagement flags a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    Liked,
    Upvoted,
}

impl ToggleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleKind::Liked => "liked",
            ToggleKind::Upvoted => "upvoted",
        }
    }
}

impl std::fmt::Display for ToggleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ToggleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "liked" | "like" => Ok(ToggleKind::Liked),
            "upvoted" | "upvote" => Ok(ToggleKind::Upvoted),
            other => Err(format!("unknown toggle kind: {}", other)),
        }
    }
}

/// Records that carry viewer engagement state: boolean flags paired with
/// integer counters that move together.
pub trait Interactive: Record {
    /// Whether the current viewer has the flag active on this record
    fn is_active(&self, kind: ToggleKind) -> bool;

    /// Current value of the counter paired with the flag
    fn count(&self, kind: ToggleKind) -> u32;

    /// Flip the flag and move its paired counter by one.
    /// Turning active increments; turning inactive decrements, saturating at 0.
    fn apply_toggle(&mut self, kind: ToggleKind);

    /// Aggregate engagement score used by trending ordering
    fn engagement(&self) -> i64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_kind_round_trip() {
        assert_eq!("liked".parse::<ToggleKind>().unwrap(), ToggleKind::Liked);
        assert_eq!("upvote".parse::<ToggleKind>().unwrap(), ToggleKind::Upvoted);
        assert_eq!(ToggleKind::Liked.to_string(), "liked");
        assert_eq!(ToggleKind::Upvoted.as_str(), "upvoted");
    }

    #[test]
    fn test_toggle_kind_unknown_is_error() {
        assert!("shared".parse::<ToggleKind>().is_err());
    }
}
