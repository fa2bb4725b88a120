use clap::Subcommand;
use timecat_core::{config::data_dir, Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting, e.g. `report.weekdays_only` or `keywords.department`
    Get { key: String },
    /// Change one setting and save the file
    Set {
        key: String,
        /// Booleans as true/false; keyword lists as `pod, guild` or `["pod","guild"]`
        value: String,
    },
    /// Print the whole configuration as JSON
    List,
    /// Print where the configuration file lives
    Path,
    /// Overwrite the configuration file with defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            Config::load()?.set(&key, &value)?;
            println!("ok");
        }
        ConfigAction::List => {
            println!("{}", serde_json::to_string_pretty(&Config::load()?)?);
        }
        ConfigAction::Path => {
            println!("{}", data_dir()?.join("config.toml").display());
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("configuration reset to defaults");
        }
    }
    Ok(())
}
