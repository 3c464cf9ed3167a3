//! `<changefreq>` tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown change frequency `{0}`, expected one of: {list}", list = ChangeFreq::TOKENS.join(", "))]
pub struct UnknownChangeFreq(pub String);

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const ALL: [Self; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    const TOKENS: [&'static str; 7] = [
        "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
    ];

    /// Token used as `<changefreq>` text content.
    pub const fn as_str(self) -> &'static str {
        Self::TOKENS[self as usize]
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFreq {
    type Err = UnknownChangeFreq;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownChangeFreq(s.to_string()))
    }
}
