//! CLI runtime configuration.
//!
//! Configuration is resolved once at startup and then passed into command handlers. Handlers
//! never read environment variables themselves.

use anyhow::{anyhow, Context};
use bindata_uuid::EncodingVariant;
use clap::ValueEnum;

/// Variant used when `--variant` is omitted.
pub const DEFAULT_VARIANT_ENV: &str = "BUUID_DEFAULT_VARIANT";

/// Output format used when `--output` is omitted.
pub const OUTPUT_ENV: &str = "BUUID_OUTPUT";

/// Default tracing directive, added on top of `RUST_LOG`.
pub const LOG_ENV: &str = "BUUID_LOG";

pub const DEFAULT_LOG_DIRECTIVE: &str = "buuid=warn";

/// How encoded values are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Shell literal, e.g. `BinData(3, "…")`.
    Shell,
    /// Extended JSON, e.g. `{"$binary":{"base64":"…","subType":"03"}}`.
    Json,
}

/// CLI configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CliConfig {
    default_variant: EncodingVariant,
    output: OutputFormat,
    log_directive: String,
}

impl CliConfig {
    /// Create a new `CliConfig`.
    pub fn new(
        default_variant: EncodingVariant,
        output: OutputFormat,
        log_directive: String,
    ) -> anyhow::Result<Self> {
        if log_directive.trim().is_empty() {
            return Err(anyhow!("{} cannot be empty", LOG_ENV));
        }

        Ok(Self {
            default_variant,
            output,
            log_directive,
        })
    }

    pub fn default_variant(&self) -> EncodingVariant {
        self.default_variant
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    pub fn log_directive(&self) -> &str {
        &self.log_directive
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_variant: EncodingVariant::Standard,
            output: OutputFormat::Shell,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

/// Resolve configuration from the process environment.
pub fn resolve_from_env() -> anyhow::Result<CliConfig> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolve configuration from `lookup`, falling back to defaults for unset keys.
///
/// Set but invalid values are errors.
pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<CliConfig> {
    let defaults = CliConfig::default();

    let default_variant = match lookup(DEFAULT_VARIANT_ENV) {
        Some(value) => value
            .parse::<EncodingVariant>()
            .with_context(|| format!("invalid {}", DEFAULT_VARIANT_ENV))?,
        None => defaults.default_variant,
    };

    let output = match lookup(OUTPUT_ENV) {
        Some(value) => OutputFormat::from_str(value.trim(), true)
            .map_err(|e| anyhow!("invalid {}: {}", OUTPUT_ENV, e))?,
        None => defaults.output,
    };

    let log_directive = lookup(LOG_ENV).unwrap_or(defaults.log_directive);

    CliConfig::new(default_variant, output, log_directive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_resolve_defaults() {
        let config = resolve(lookup_from(&[])).unwrap();

        assert_eq!(config.default_variant(), EncodingVariant::Standard);
        assert_eq!(config.output(), OutputFormat::Shell);
        assert_eq!(config.log_directive(), DEFAULT_LOG_DIRECTIVE);
    }

    #[test]
    fn test_resolve_overrides() {
        let config = resolve(lookup_from(&[
            (DEFAULT_VARIANT_ENV, "csharp"),
            (OUTPUT_ENV, "JSON"),
            (LOG_ENV, "buuid=debug"),
        ]))
        .unwrap();

        assert_eq!(config.default_variant(), EncodingVariant::CSharpLegacy);
        assert_eq!(config.output(), OutputFormat::Json);
        assert_eq!(config.log_directive(), "buuid=debug");
    }

    #[test]
    fn test_resolve_rejects_unknown_variant() {
        let err = resolve(lookup_from(&[(DEFAULT_VARIANT_ENV, "cobol")])).unwrap_err();
        assert!(err.to_string().contains(DEFAULT_VARIANT_ENV));
    }

    #[test]
    fn test_resolve_rejects_unknown_output() {
        let err = resolve(lookup_from(&[(OUTPUT_ENV, "xml")])).unwrap_err();
        assert!(err.to_string().contains(OUTPUT_ENV));
    }

    #[test]
    fn test_new_rejects_empty_log_directive() {
        assert!(CliConfig::new(EncodingVariant::Standard, OutputFormat::Shell, "  ".into()).is_err());
    }
}
