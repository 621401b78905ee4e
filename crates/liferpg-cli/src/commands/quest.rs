//! Quest log commands.

use clap::Subcommand;
use liferpg_core::{Attribute, Config, Database};
use uuid::Uuid;

use super::{load_or_create, profile_name};

#[derive(Subcommand)]
pub enum QuestAction {
    /// Add a quest
    Add {
        /// Quest text
        text: String,
        /// Attribute trained by this quest: str, int, dex or cha
        #[arg(long, default_value = "str")]
        attribute: String,
    },
    /// List quests
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Complete a quest for today
    Complete {
        /// Quest ID
        id: Uuid,
    },
    /// Remove a quest
    Remove {
        /// Quest ID
        id: Uuid,
    },
}

pub fn run(action: QuestAction, profile: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let name = profile_name(profile);
    let mut record = load_or_create(&db, &name)?;

    match action {
        QuestAction::Add { text, attribute } => {
            let attribute: Attribute = attribute.parse()?;
            let id = record.add_quest(&text, attribute)?;
            db.save_profile(&name, &record)?;
            println!("Quest added: {id}");
        }
        QuestAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&record.quests)?);
            } else if record.quests.is_empty() {
                println!("No active quests.");
            } else {
                let show_streaks = Config::load_or_default().ui.show_streaks;
                for quest in &record.quests {
                    let mark = if quest.completed_today { "x" } else { " " };
                    let mut line =
                        format!("[{mark}] {}  +{}  {}", quest.text, quest.attribute, quest.id);
                    if show_streaks && quest.streak > 0 {
                        line.push_str(&format!("  (streak {})", quest.streak));
                    }
                    println!("{line}");
                }
            }
        }
        QuestAction::Complete { id } => match record.complete_quest(id) {
            Some(completion) => {
                db.save_profile(&name, &record)?;
                db.record_xp(&name, chrono::Utc::now().date_naive(), completion.xp_gained)?;
                println!(
                    "Completed. +{} XP, +1 {}",
                    completion.xp_gained, completion.attribute
                );
                if let Some(level) = completion.leveled_up_to {
                    println!("LEVEL UP! You are now level {level}");
                }
            }
            None => println!("Nothing to do: quest missing or already completed today."),
        },
        QuestAction::Remove { id } => {
            if record.remove_quest(id) {
                db.save_profile(&name, &record)?;
                println!("Quest removed: {id}");
            } else {
                println!("No such quest: {id}");
            }
        }
    }
    Ok(())
}
