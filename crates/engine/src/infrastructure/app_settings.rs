//! Data loading settings
//!
//! Settings are read from environment variables prefixed with `GAMEDATAS_`.
//! Any missing or unparseable value falls back to its default.
//!
//! # Environment Variables
//!
//! - `GAMEDATAS_PROJECT_PATH` - Project root holding `Content/Datas` (default: `.`)
//! - `GAMEDATAS_RECORD_POLICY` - `strict` or `lenient` (default: `strict`)
//! - `GAMEDATAS_MAX_ID` - Highest id a registry will allocate a slot for (default: 65535)

use std::path::PathBuf;

/// Highest id accepted unless configured otherwise.
pub const DEFAULT_MAX_ID: u32 = 65_535;

// ============================================================================
// Record Failure Policy
// ============================================================================

/// What a registry does with a record it cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFailurePolicy {
    /// The first bad record fails the entire load.
    #[default]
    Strict,
    /// Skip bad records with a warning and keep loading.
    Lenient,
}

impl std::fmt::Display for RecordFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFailurePolicy::Strict => write!(f, "strict"),
            RecordFailurePolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl std::str::FromStr for RecordFailurePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(RecordFailurePolicy::Strict),
            "lenient" | "skip" => Ok(RecordFailurePolicy::Lenient),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Datas Settings
// ============================================================================

/// Settings shared by every registry of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasSettings {
    /// Project root; data file paths are resolved against it.
    pub project_path: PathBuf,
    /// Per-record failure handling.
    pub record_policy: RecordFailurePolicy,
    /// Ids above this are rejected with `IdOutOfRange` instead of growing the table.
    pub max_id: u32,
}

impl Default for DatasSettings {
    fn default() -> Self {
        Self {
            project_path: PathBuf::from("."),
            record_policy: RecordFailurePolicy::Strict,
            max_id: DEFAULT_MAX_ID,
        }
    }
}

impl DatasSettings {
    pub fn with_record_policy(mut self, policy: RecordFailurePolicy) -> Self {
        self.record_policy = policy;
        self
    }

    pub fn with_max_id(mut self, max_id: u32) -> Self {
        self.max_id = max_id;
        self
    }

    pub fn with_project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = path.into();
        self
    }

    /// Load settings from the process environment.
    ///
    /// Only reads variables already set; `.env` files are applied by the
    /// binary before this is called.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let env_or = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            project_path: env_or("GAMEDATAS_PROJECT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.project_path),
            record_policy: env_or("GAMEDATAS_RECORD_POLICY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.record_policy),
            max_id: env_or("GAMEDATAS_MAX_ID")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_id),
        }
    }
}
