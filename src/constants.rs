//! Application-wide constants and configuration values
//!
//! This module centralizes the sentinel labels, environment variable
//! names and default values used across the crate.

#![allow(dead_code)]

/// Label of the catch-all index bucket for names that cannot be
/// assigned a reliable phonetic first character ("Other").
pub const OTHER_BUCKET_LABEL: &str = "その他";

/// Default file name for the daily-rolling log file
pub const DEFAULT_LOG_FILE_NAME: &str = "meibo.log";

/// Directory name under the platform config dir that holds the config
/// file and the default log directory
pub const APP_CONFIG_DIR: &str = "meibo";

/// Environment variable overrides for the configuration file
pub mod env_vars {
    /// Override the contacts JSON file the CLI reads by default
    pub const CONTACTS_FILE: &str = "MEIBO_CONTACTS_FILE";

    /// Override the log file path
    pub const LOG_FILE: &str = "MEIBO_LOG_FILE";
}

/// Capacity hints for the in-memory store
pub mod store {
    /// Initial capacity of the persons collection
    pub const PERSONS_CAPACITY: usize = 64;

    /// Initial capacity of the groups collection
    pub const GROUPS_CAPACITY: usize = 8;
}
