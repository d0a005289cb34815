// Session identity for the current viewer

use serde::{Deserialize, Serialize};

/// A fully registered account. Holding an `&Identity` is the capability
/// required by every mutating operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
}

/// Who is looking at the screen. Guests can browse and filter but hold no
/// `Identity`, so toggle and report calls cannot be expressed for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Full(Identity),
    Guest,
}

impl Viewer {
    pub fn registered(id: &str, name: &str) -> Self {
        Viewer::Full(Identity {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    /// The only bridge from a viewer to a mutation capability
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Viewer::Full(identity) => Some(identity),
            Viewer::Guest => None,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Viewer::Guest)
    }

    /// Display name for the welcome header
    pub fn display_name(&self) -> &str {
        match self {
            Viewer::Full(identity) => &identity.name,
            Viewer::Guest => "Guest",
        }
    }
}
