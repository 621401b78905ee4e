//! Day boundary commands.

use clap::Subcommand;
use liferpg_core::{Database, DayOutcome};

use super::{load_or_create, profile_name};

#[derive(Subcommand)]
pub enum DayAction {
    /// Apply the day boundary: penalize missed quests and reset flags
    End {
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: DayAction, profile: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let name = profile_name(profile);
    let mut record = load_or_create(&db, &name)?;

    match action {
        DayAction::End { json } => {
            let report = record.end_day();
            db.save_profile(&name, &record)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            match report.outcome {
                DayOutcome::Perfect => {
                    println!("Perfect day! Fully healed ({} HP).", report.hit_points);
                }
                DayOutcome::Damaged => {
                    println!(
                        "{} quest(s) missed: -{} HP ({} remaining).",
                        report.missed, report.damage, report.hit_points
                    );
                }
                DayOutcome::Defeated => {
                    println!(
                        "Defeated! {} quest(s) missed. Back to level {} at full health.",
                        report.missed, report.level
                    );
                }
            }
        }
    }
    Ok(())
}
