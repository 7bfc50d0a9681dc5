use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub tickets: TicketConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Length of the count-up animation on the KPI tiles
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl DashboardConfig {
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            animation_ms: default_animation_ms(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TicketConfig {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(default = "default_id_digits")]
    pub id_digits: u32,
    /// Draws allowed before giving up on a colliding id
    #[serde(default = "default_max_id_attempts")]
    pub max_id_attempts: usize,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            id_digits: default_id_digits(),
            max_id_attempts: default_max_id_attempts(),
        }
    }
}

fn default_animation_ms() -> u64 { 2000 }
fn default_frame_interval_ms() -> u64 { 16 }
fn default_export_directory() -> PathBuf { PathBuf::from("exports") }
fn default_id_prefix() -> String { "TKT-".to_string() }
fn default_id_digits() -> u32 { 6 }
fn default_max_id_attempts() -> usize { 8 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overlay
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Machine-local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `GROUNDOPS__TICKETS__ID_PREFIX=OPS-`
            .add_source(config::Environment::with_prefix("GROUNDOPS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dashboard.animation(), Duration::from_millis(2000));
        assert_eq!(config.dashboard.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.tickets.id_prefix, "TKT-");
        assert_eq!(config.tickets.id_digits, 6);
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: Config = config::Config::builder()
            .set_override("tickets.id_prefix", "OPS-")
            .and_then(|builder| builder.set_override("dashboard.animation_ms", 500_i64))
            .and_then(|builder| builder.build())
            .and_then(|built| built.try_deserialize())
            .unwrap();

        assert_eq!(config.tickets.id_prefix, "OPS-");
        assert_eq!(config.tickets.max_id_attempts, 8);
        assert_eq!(config.dashboard.animation_ms, 500);
        assert_eq!(config.dashboard.frame_interval_ms, 16);
        assert_eq!(config.export, ExportConfig::default());
    }
}
