//! Character profile commands.

use clap::Subcommand;
use liferpg_core::Database;

use super::{load_or_create, profile_name};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the current profile (created with defaults on first access)
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a profile
    Create {
        /// Profile name
        name: String,
    },
    /// List profile names
    List,
    /// Delete a profile and its history
    Delete {
        /// Profile name
        name: String,
    },
}

pub fn run(action: ProfileAction, profile: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        ProfileAction::Show { json } => {
            let name = profile_name(profile);
            let record = load_or_create(&db, &name)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}  (level {})", record.display_name, record.level);
                println!(
                    "XP: {} / {}   HP: {} / {}",
                    record.experience,
                    record.xp_to_next_level(),
                    record.hit_points,
                    record.max_hit_points
                );
                for (attribute, value) in record.attributes.iter() {
                    println!("  {:<4} {}", attribute.tag(), value);
                }
                println!("Quests: {}", record.quests.len());
            }
        }
        ProfileAction::Create { name } => {
            if db.load_profile(&name)?.is_some() {
                return Err(format!("profile '{name}' already exists").into());
            }
            let record = load_or_create(&db, &name)?;
            println!("Profile created: {}", record.display_name);
        }
        ProfileAction::List => {
            for name in db.list_profiles()? {
                println!("{name}");
            }
        }
        ProfileAction::Delete { name } => {
            if db.delete_profile(&name)? {
                println!("Profile deleted: {name}");
            } else {
                println!("No such profile: {name}");
            }
        }
    }
    Ok(())
}
