use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    #[serde(default = "default_app_host")]
    pub app_host: String,
    #[serde(default = "default_app_port")]
    pub app_port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default)]
    pub bot: BotSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct BotSettings {
    #[serde(default = "default_bot_name")]
    pub name: String,
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,
    #[serde(default = "default_reply_delay_max_ms")]
    pub reply_delay_max_ms: u64,
}

impl Default for BotSettings {
    fn default() -> Self {
        BotSettings {
            name: default_bot_name(),
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_max_ms: default_reply_delay_max_ms(),
        }
    }
}

fn default_app_host() -> String {
    "0.0.0.0".to_string()
}

fn default_app_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_bot_name() -> String {
    "DevPortal Bot".to_string()
}

fn default_reply_delay_min_ms() -> u64 {
    1000
}

fn default_reply_delay_max_ms() -> u64 {
    3000
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Configuration file is optional; every field carries a default.
    settings.merge(config::File::with_name("configuration").required(false))?; // .json, .toml, .yaml, .yml

    let mut config: Settings = settings.try_deserialize()?;

    // PORT wins over the file, same as the original deployment contract.
    if let Ok(port) = std::env::var("PORT") {
        config.app_port = port
            .parse()
            .map_err(|_| config::ConfigError::Message(format!("invalid PORT value: {port}")))?;
    }

    if config.bot.reply_delay_min_ms > config.bot.reply_delay_max_ms {
        return Err(config::ConfigError::Message(
            "bot.reply_delay_min_ms must not exceed bot.reply_delay_max_ms".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_settings_default_to_original_delay_window() {
        let bot = BotSettings::default();
        assert_eq!(bot.name, "DevPortal Bot");
        assert_eq!(bot.reply_delay_min_ms, 1000);
        assert_eq!(bot.reply_delay_max_ms, 3000);
    }

    #[test]
    fn listen_port_defaults_to_3000() {
        assert_eq!(default_app_port(), 3000);
    }
}
