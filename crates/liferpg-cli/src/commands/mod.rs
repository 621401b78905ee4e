pub mod config;
pub mod day;
pub mod history;
pub mod profile;
pub mod quest;

use liferpg_core::{Config, Database, Profile};

/// Resolve the profile name: explicit flag, or `default_profile` from config.
pub fn profile_name(flag: Option<String>) -> String {
    flag.unwrap_or_else(|| Config::load_or_default().default_profile)
}

/// Load a save record, creating a default one on first access.
pub fn load_or_create(db: &Database, name: &str) -> Result<Profile, Box<dyn std::error::Error>> {
    match db.load_profile(name)? {
        Some(profile) => Ok(profile),
        None => {
            let profile = Profile::new(name);
            db.save_profile(name, &profile)?;
            Ok(profile)
        }
    }
}
