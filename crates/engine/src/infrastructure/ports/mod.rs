//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Data file access (could swap the project directory -> packaged archive)

mod files;

pub use files::FileSourcePort;

#[cfg(test)]
pub use files::MockFileSourcePort;
