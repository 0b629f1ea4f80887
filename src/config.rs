//! Viewer configuration supplied by the host.
//!
//! Configuration arrives as a TOML string; the crate never reads files itself.
//!
//! ```toml
//! [scroll]
//! behavior = "instant"
//! align = "nearest"
//! ```

use crate::error::Result;
use crate::types::{ScrollAlign, ScrollBehavior};
use serde::{Deserialize, Serialize};

/// Top-level viewer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub scroll: ScrollConfig,
}

/// Parameters stamped onto every emitted scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    pub behavior: ScrollBehavior,
    pub align: ScrollAlign,
}

impl ViewerConfig {
    /// Decode a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
