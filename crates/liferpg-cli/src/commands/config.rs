//! Configuration commands.

use clap::Subcommand;
use liferpg_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the full configuration as TOML
    Show,
    /// Get a value by dotted key (e.g. notifications.volume)
    Get {
        /// Config key
        key: String,
    },
    /// Set a value by dotted key and persist
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let cfg = Config::load()?;
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigAction::Get { key } => {
            let cfg = Config::load()?;
            match cfg.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = Config::load()?;
            cfg.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
