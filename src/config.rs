//! # Plugin Configuration
//!
//! protoc forwards `--grpc_browser_opt=key=value,...` (or the `:` prefix of
//! `--grpc_browser_out`) to the plugin as the request `parameter`. This
//! module turns that string into [`PluginOptions`].
//!
//! ## Options
//!
//! | Key | Default | Meaning |
//! |---|---|---|
//! | `runtime` | `@altipla/grpc-browser` | module required by generated files for the `Caller` |
//! | `extension` | `js` | extension of generated files |
//!
//! ```bash
//! protoc --grpc_browser_out=gen --grpc_browser_opt=runtime=./caller,extension=cjs api.proto
//! ```
//!
//! Unknown keys are logged and ignored so newer option sets keep working
//! with older plugin builds.

use anyhow::{bail, Result};
use tracing::warn;

/// Runtime module required by generated files when none is configured
pub const DEFAULT_RUNTIME_MODULE: &str = "@altipla/grpc-browser";

/// Extension of generated files when none is configured
pub const DEFAULT_EXTENSION: &str = "js";

/// Options controlling generation, parsed from the request parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOptions {
    /// Module passed to `require(...)` in generated files
    pub runtime_module: String,
    /// Extension of generated files, without the dot
    pub extension: String,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            runtime_module: DEFAULT_RUNTIME_MODULE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl PluginOptions {
    /// Parse a comma-separated `key=value` list
    ///
    /// `None` or an empty string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for an entry without `=` or with an empty value.
    pub fn parse(parameter: Option<&str>) -> Result<Self> {
        let mut opts = Self::default();
        let Some(parameter) = parameter else {
            return Ok(opts);
        };

        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((key, value)) = entry.split_once('=') else {
                bail!("invalid plugin option '{entry}': expected key=value");
            };
            let (key, value) = (key.trim(), value.trim());
            if value.is_empty() {
                bail!("invalid plugin option '{entry}': empty value for '{key}'");
            }
            match key {
                "runtime" => opts.runtime_module = value.to_string(),
                "extension" => opts.extension = value.trim_start_matches('.').to_string(),
                _ => warn!(option = key, "ignoring unknown plugin option"),
            }
        }

        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PluginOptions::parse(None).unwrap(), PluginOptions::default());
        assert_eq!(PluginOptions::parse(Some("")).unwrap(), PluginOptions::default());
        let opts = PluginOptions::default();
        assert_eq!(opts.runtime_module, "@altipla/grpc-browser");
        assert_eq!(opts.extension, "js");
    }

    #[test]
    fn test_parse_options() {
        let opts = PluginOptions::parse(Some("runtime=./caller, extension=.mjs")).unwrap();
        assert_eq!(opts.runtime_module, "./caller");
        assert_eq!(opts.extension, "mjs");
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let opts = PluginOptions::parse(Some("paths=source_relative")).unwrap();
        assert_eq!(opts, PluginOptions::default());
    }

    #[test]
    fn test_malformed_options() {
        assert!(PluginOptions::parse(Some("runtime")).is_err());
        assert!(PluginOptions::parse(Some("runtime=")).is_err());
    }
}
