//! XP history commands.

use clap::Subcommand;
use liferpg_core::Database;

use super::profile_name;

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Show XP earned per day, most recent days last
    Show {
        /// Number of days to include
        #[arg(long, default_value = "7")]
        days: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(
    action: HistoryAction,
    profile: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let name = profile_name(profile);

    match action {
        HistoryAction::Show { days, json } => {
            let entries = db.xp_history(&name, days)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No XP recorded yet.");
            } else {
                for entry in entries {
                    println!("{}  {:>4} XP", entry.day.format("%a %Y-%m-%d"), entry.xp);
                }
            }
        }
    }
    Ok(())
}
