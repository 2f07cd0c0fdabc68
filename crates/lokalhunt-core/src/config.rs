// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shell configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, ShellError};
use crate::types::ApiLevel;

/// File name of the persisted config inside the app data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Persistent shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Tag used for platform log output (logcat on Android). Read once, when
    /// the platform logger is installed.
    pub log_tag: String,
    /// Property of `window` that receives the latest insets. A single
    /// identifier, assigned unconditionally.
    pub global_binding: String,
    /// Dotted path of the update hook called when present in the page.
    pub update_hook: String,
    /// Echo every delivered payload to the hosted content's console.
    pub console_trace: bool,
    /// Label printed in front of the console trace.
    pub console_label: String,
    /// Lowest API level that uses the split system-bars / cutout measurement.
    /// Never below 30, where `WindowInsets.Type` first exists.
    pub modern_min_api_level: u32,
    /// Ask the platform to re-dispatch insets whenever the activity resumes.
    pub reapply_on_resume: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_tag: "LokalHunt".into(),
            global_binding: "androidSafeAreaInsets".into(),
            update_hook: "SafeAreaManager.updateFromNative".into(),
            console_trace: true,
            console_label: "🤖 Android Safe Area Insets:".into(),
            modern_min_api_level: ApiLevel::R.0,
            reapply_on_resume: true,
        }
    }
}

impl ShellConfig {
    pub fn modern_min_api_level(&self) -> ApiLevel {
        ApiLevel(self.modern_min_api_level)
    }

    /// Reject settings that would produce broken script.
    ///
    /// Binding and hook names end up spliced into JavaScript source. The hook
    /// is called behind a guard on every path segment, so it may be dotted;
    /// the binding is assigned directly and must be a single identifier.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.global_binding) {
            return Err(ShellError::Config(format!(
                "global_binding is not a JS identifier: {:?}",
                self.global_binding
            )));
        }
        if !is_dotted_identifier(&self.update_hook) {
            return Err(ShellError::Config(format!(
                "update_hook is not a JS identifier path: {:?}",
                self.update_hook
            )));
        }
        if self.log_tag.is_empty() {
            return Err(ShellError::Config("log_tag must not be empty".into()));
        }
        if self.modern_min_api_level < ApiLevel::R.0 {
            return Err(ShellError::Config(format!(
                "modern_min_api_level {} is below {}, the first level with WindowInsets.Type",
                self.modern_min_api_level,
                ApiLevel::R
            )));
        }
        Ok(())
    }

    /// Load `config.json` from `data_dir`, falling back to defaults when the
    /// file is missing, unreadable, or invalid.
    pub fn load_or_default(data_dir: &Path) -> Self {
        match Self::load(data_dir) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!(dir = %data_dir.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "config unusable, using defaults");
                Self::default()
            }
        }
    }

    /// Like [`load_or_default`](Self::load_or_default) but without logging:
    /// the load error, if any, is handed back so it can be reported once the
    /// logger that depends on this config has been installed.
    pub fn load_quietly(data_dir: &Path) -> (Self, Option<ShellError>) {
        match Self::load(data_dir) {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load and validate `config.json`. Returns `Ok(None)` if the file does
    /// not exist.
    pub fn load(data_dir: &Path) -> Result<Option<Self>> {
        let path = data_dir.join(CONFIG_FILE);
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Write `config.json` into `data_dir`.
    pub fn persist(&self, data_dir: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(data_dir.join(CONFIG_FILE), json)?;
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

fn is_dotted_identifier(s: &str) -> bool {
    s.split('.').all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ShellConfig::default();
        config.validate().unwrap();
        assert_eq!(config.modern_min_api_level(), ApiLevel::R);
    }

    #[test]
    fn identifier_paths() {
        assert!(is_dotted_identifier("androidSafeAreaInsets"));
        assert!(is_dotted_identifier("SafeAreaManager.updateFromNative"));
        assert!(is_dotted_identifier("$app._hooks.v2"));
        assert!(!is_dotted_identifier(""));
        assert!(!is_dotted_identifier("a..b"));
        assert!(!is_dotted_identifier("1abc"));
        assert!(!is_dotted_identifier("x; alert(1)"));
    }

    #[test]
    fn rejects_script_injection_in_hook() {
        let config = ShellConfig {
            update_hook: "foo(); evil".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ShellError::Config(_))));
    }

    #[test]
    fn rejects_threshold_below_r() {
        for level in [0, 21, 29] {
            let config = ShellConfig {
                modern_min_api_level: level,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ShellError::Config(_))),
                "threshold {level} accepted"
            );
        }
        let config = ShellConfig {
            modern_min_api_level: ApiLevel::R.0,
            ..Default::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn low_threshold_on_disk_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"modern_min_api_level":21}"#).unwrap();
        assert_eq!(
            ShellConfig::load_or_default(dir.path()).modern_min_api_level(),
            ApiLevel::R
        );
    }

    #[test]
    fn binding_must_be_single_identifier() {
        let config = ShellConfig {
            global_binding: "lokal.insets".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ShellError::Config(_))));
    }

    #[test]
    fn quiet_load_keeps_configured_tag() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"log_tag":"LokalHuntDev"}"#).unwrap();

        let (config, err) = ShellConfig::load_quietly(dir.path());
        assert_eq!(config.log_tag, "LokalHuntDev");
        assert!(err.is_none());
    }

    #[test]
    fn quiet_load_hands_back_the_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();

        let (config, err) = ShellConfig::load_quietly(dir.path());
        assert_eq!(config, ShellConfig::default());
        assert!(matches!(err, Some(ShellError::Serialization(_))));

        let empty = tempfile::tempdir().unwrap();
        let (config, err) = ShellConfig::load_quietly(empty.path());
        assert_eq!(config, ShellConfig::default());
        assert!(err.is_none());
    }

    #[test]
    fn persist_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig {
            console_trace: false,
            modern_min_api_level: 31,
            ..Default::default()
        };
        config.persist(dir.path()).unwrap();

        let loaded = ShellConfig::load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ShellConfig::load(dir.path()).unwrap().is_none());
        assert_eq!(ShellConfig::load_or_default(dir.path()), ShellConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"log_tag":"Shell"}"#).unwrap();

        let loaded = ShellConfig::load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded.log_tag, "Shell");
        assert_eq!(loaded.global_binding, "androidSafeAreaInsets");
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();

        assert!(ShellConfig::load(dir.path()).is_err());
        assert_eq!(ShellConfig::load_or_default(dir.path()), ShellConfig::default());
    }
}
