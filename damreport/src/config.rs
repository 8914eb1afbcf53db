//! Application configuration management.
//!
//! Configuration can come from default values, a configuration file, and
//! environment variables, merged with a clear precedence order. The defaults
//! reproduce the standard day-ahead calendar and delta set, so the tool is
//! useful with no configuration at all.

use dam_core::models::ReportConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Report configuration (delta magnitudes, off-peak calendar, rounding)
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given on the command line
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `DAM_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Tighten the reported price precision
    /// export DAM_REPORT__PRECISION__PRICE=3
    ///
    /// # Report volumes unrounded to one decimal
    /// export DAM_REPORT__PRECISION__VOLUME=1
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path));
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps DAM_REPORT__OFF_PEAK to report.off_peak
        config = config.add_source(
            config::Environment::with_prefix("DAM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
