use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::{DEFAULT_BOT_DELAY_MS, GameMode, Player};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "connect_k_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 10_000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

/// Fields missing from the file fall back to [`Config::default`].
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub last_mode: Option<GameMode>,
    pub bot_player: Player,
    pub bot_delay_ms: u64,
    pub bot_seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms ({}) must not exceed {}",
                self.bot_delay_ms, MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_mode: None,
            bot_player: Player::O,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            bot_seed: None,
        }
    }
}
