use crate::domain::fsm::TickPeriod;
use crate::domain::geometry::Panel;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

const CONFIG_PATH: &str = "Config.toml";
const MAX_PANEL_SIDE: i16 = 4096;

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[display("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[display("invalid configuration: {_0}")]
    Invalid(#[error(not(source))] String),
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub timing: TimingConfig,
    pub panel: PanelConfig,
    pub clock: ClockConfig,
    pub simon: SimonConfig,
    pub tictactoe: TicTacToeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TimingConfig {
    pub tick_period_ms: u32,
    pub realtime: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PanelConfig {
    pub width: i16,
    pub height: i16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClockConfig {
    pub adc_settle_ms: u32,
    pub auto_repeat_delay_ms: u32,
    pub repeat_interval_ms: u32,
    pub second_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SimonConfig {
    pub adc_settle_ms: u32,
    pub flash_ms: u32,
    pub input_timeout_ms: u32,
    pub win_message_ms: u32,
    pub new_level_ms: u32,
    pub lose_message_ms: u32,
    pub longest_sequence_ms: u32,
    pub starting_session_length: usize,
    pub max_sequence_length: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub adc_settle_ms: u32,
    pub splash_ms: u32,
    pub first_move_ms: u32,
    pub parallel_root: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let display = path.display().to_string();
            let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: display.clone(),
                source,
            })?;
            Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
                path: display,
                source,
            })?
        } else {
            info!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        info!(
            tick_period_ms = config.timing.tick_period_ms,
            realtime = config.timing.realtime,
            panel_width = config.panel.width,
            panel_height = config.panel.height,
            simon_timeout_ms = config.simon.input_timeout_ms,
            parallel_root = config.tictactoe.parallel_root,
            "configuration loaded"
        );

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("tick_period_ms must be non-zero".into()));
        }
        let sides = 1..=MAX_PANEL_SIDE;
        if !sides.contains(&self.panel.width) || !sides.contains(&self.panel.height) {
            return Err(ConfigError::Invalid(format!(
                "panel must be within 1..={MAX_PANEL_SIDE} each way, got {}x{}",
                self.panel.width, self.panel.height
            )));
        }
        let simon = &self.simon;
        if simon.starting_session_length == 0
            || simon.starting_session_length > simon.max_sequence_length
        {
            return Err(ConfigError::Invalid(format!(
                "starting_session_length {} outside 1..={}",
                simon.starting_session_length, simon.max_sequence_length
            )));
        }
        Ok(())
    }

    /// Falls back to the default period if validation was skipped.
    pub fn tick_period(&self) -> TickPeriod {
        TickPeriod::from_millis(self.timing.tick_period_ms).unwrap_or_default()
    }

    pub fn panel(&self) -> Panel {
        Panel::new(self.panel.width, self.panel.height)
    }

    fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("TICKLABS_TICK_PERIOD_MS") {
            if let Ok(parsed) = val.parse() {
                self.timing.tick_period_ms = parsed;
            }
        }
        if let Ok(val) = std::env::var("TICKLABS_REALTIME") {
            if let Ok(parsed) = val.parse() {
                self.timing.realtime = parsed;
            }
        }
        if let Ok(val) = std::env::var("TICKLABS_PANEL_WIDTH") {
            if let Ok(parsed) = val.parse() {
                self.panel.width = parsed;
            }
        }
        if let Ok(val) = std::env::var("TICKLABS_PANEL_HEIGHT") {
            if let Ok(parsed) = val.parse() {
                self.panel.height = parsed;
            }
        }
        if let Ok(val) = std::env::var("TICKLABS_SIMON_TIMEOUT_MS") {
            if let Ok(parsed) = val.parse() {
                self.simon.input_timeout_ms = parsed;
            }
        }
        if let Ok(val) = std::env::var("TICKLABS_TICTACTOE_PARALLEL_ROOT") {
            if let Ok(parsed) = val.parse() {
                self.tictactoe.parallel_root = parsed;
            }
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: TickPeriod::DEFAULT.millis(),
            realtime: false,
        }
    }
}
impl Default for PanelConfig {
    fn default() -> Self {
        let panel = Panel::default();
        Self {
            width: panel.width,
            height: panel.height,
        }
    }
}
impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            adc_settle_ms: 50,
            auto_repeat_delay_ms: 500,
            repeat_interval_ms: 100,
            second_ms: 1000,
        }
    }
}
impl Default for SimonConfig {
    fn default() -> Self {
        Self {
            adc_settle_ms: 50,
            flash_ms: 500,
            input_timeout_ms: 2000,
            win_message_ms: 1500,
            new_level_ms: 3500,
            lose_message_ms: 1500,
            longest_sequence_ms: 2500,
            starting_session_length: 4,
            max_sequence_length: 100,
        }
    }
}
impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            adc_settle_ms: 50,
            splash_ms: 3000,
            first_move_ms: 3000,
            parallel_root: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    struct EnvVarGuard {
        key: String,
        original: Option<String>,
    }

    impl EnvVarGuard {
        fn new(key: &str, value: &str) -> Self {
            let original = env::var(key).ok();
            unsafe {
                env::set_var(key, value);
            }
            Self {
                key: key.to_string(),
                original,
            }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            unsafe {
                match &self.original {
                    Some(val) => env::set_var(&self.key, val),
                    None => env::remove_var(&self.key),
                }
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.timing.tick_period_ms, 50);
        assert!(!config.timing.realtime);
        assert_eq!(config.simon.flash_ms, 500);
        assert_eq!(config.simon.starting_session_length, 4);
        assert_eq!(config.clock.auto_repeat_delay_ms, 500);
        assert_eq!(config.tictactoe.first_move_ms, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            "[timing]\ntick_period_ms = 10\n\n[simon]\ninput_timeout_ms = 900\n",
        )
        .unwrap();
        assert_eq!(config.timing.tick_period_ms, 10);
        assert_eq!(config.simon.input_timeout_ms, 900);
        assert_eq!(config.simon.flash_ms, 500);
        assert_eq!(config.panel.width, 320);
        assert_eq!(config.tick_period().ticks_for(500), 50);
    }

    #[test]
    fn test_merge_env_overrides() {
        let mut config = AppConfig::default();

        let _g1 = EnvVarGuard::new("TICKLABS_PANEL_WIDTH", "480");
        let _g2 = EnvVarGuard::new("TICKLABS_SIMON_TIMEOUT_MS", "3000");
        let _g3 = EnvVarGuard::new("TICKLABS_TICTACTOE_PARALLEL_ROOT", "true");

        config.merge_env();

        assert_eq!(config.panel.width, 480);
        assert_eq!(config.simon.input_timeout_ms, 3000);
        assert!(config.tictactoe.parallel_root);
    }

    #[test]
    fn test_invalid_env_vars_ignored() {
        let mut config = AppConfig::default();
        let _g1 = EnvVarGuard::new("TICKLABS_REALTIME", "not_a_bool");

        config.merge_env();

        assert!(!config.timing.realtime);
    }

    #[test]
    fn test_validation_rejects_zero_period() {
        let mut config = AppConfig::default();
        config.timing.tick_period_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validation_rejects_oversized_panel() {
        let mut config = AppConfig::default();
        config.panel.width = 12000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("12000x240"));

        config.panel.width = MAX_PANEL_SIDE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_oversized_session() {
        let mut config = AppConfig::default();
        config.simon.starting_session_length = 101;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("starting_session_length"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load_from("does-not-exist.toml").unwrap();
        assert_eq!(config.panel.height, 240);
    }
}
