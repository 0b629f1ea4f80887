use serde::{Deserialize, Serialize};
use std::fmt;

/// Render classification of a catalog index.
///
/// Variants are ordered by precedence: `Locked` beats `Matched` beats `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tier {
    #[default]
    Default,
    Matched,
    Locked,
}

impl Tier {
    /// Resolve the tier for an index given its set memberships.
    pub const fn resolve(locked: bool, matched: bool) -> Self {
        if locked {
            Self::Locked
        } else if matched {
            Self::Matched
        } else {
            Self::Default
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::Matched => "matched",
            Self::Locked => "locked",
        })
    }
}

/// How the host should animate a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Where the target item should land in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlign {
    #[default]
    Center,
    Start,
    End,
    Nearest,
}

/// Fire-and-forget request to bring a catalog index into view.
///
/// Requests carry no acknowledgment. A newer request supersedes any older one
/// the host has not finished honoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
    pub behavior: ScrollBehavior,
    pub align: ScrollAlign,
}

/// One row of the render feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderItem<'a> {
    pub index: usize,
    pub token: &'a str,
    pub tier: Tier,
}

/// Which host commands are currently enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandState {
    /// Lock is enabled only while something matches.
    pub lock_enabled: bool,
    /// Clear-locked is enabled only while something is locked.
    pub clear_locked_enabled: bool,
}
