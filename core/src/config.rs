use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const LOCAL_API_ROOT: &str = "http://localhost:4000/api/";
pub const STAGING_API_ROOT: &str = "https://phoenix.api-develop.fediverse.space/api/";
pub const PRODUCTION_API_ROOT: &str = "https://phoenix.api.fediverse.space/api/";

pub const DEFAULT_DESKTOP_WIDTH_THRESHOLD: u32 = 1000;
pub const DEFAULT_WEIGHT_PRECISION: usize = 4;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub root: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Viewport widths below this are treated as mobile.
    pub desktop_width_threshold: u32,
    /// Decimal places used when printing mention ratios.
    pub weight_precision: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let staging = env::var("FEDISPACE_STAGING").ok();

        Self::load_from(Path::new("config"), &run_mode, staging.as_deref())
    }

    /// Layers `<dir>/default`, `<dir>/<run_mode>` and `FEDISPACE__*` variables
    /// over built-in defaults. Both files are optional.
    pub fn load_from(
        dir: &Path,
        run_mode: &str,
        staging: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_root = resolve_api_root(staging, run_mode);
        tracing::debug!(run_mode, api_root, "loading configuration");

        let builder = Config::builder()
            .set_default("api.root", api_root)?
            .set_default(
                "display.desktop_width_threshold",
                i64::from(DEFAULT_DESKTOP_WIDTH_THRESHOLD),
            )?
            .set_default("display.weight_precision", DEFAULT_WEIGHT_PRECISION as i64)?
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(run_mode).to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("FEDISPACE").separator("__"));

        builder.build()?.try_deserialize()
    }
}

/// Picks the backend root for a deployment. A staging flag of `true` or `1`
/// wins over the run mode.
pub fn resolve_api_root(staging: Option<&str>, run_mode: &str) -> &'static str {
    if matches!(staging, Some("true") | Some("1")) {
        STAGING_API_ROOT
    } else if run_mode == "production" {
        PRODUCTION_API_ROOT
    } else {
        LOCAL_API_ROOT
    }
}
