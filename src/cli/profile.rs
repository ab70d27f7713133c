//! Profile CLI commands
//!
//! The profile is a single record holding the display name shown on the
//! overview and exported statements.

use clap::Subcommand;

use crate::error::FintrackResult;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the current profile
    Show,
    /// Set the display name
    SetName {
        /// New display name
        name: String,
    },
}

/// Handle a profile command
pub fn handle_profile_command(storage: &Storage, cmd: ProfileCommands) -> FintrackResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        ProfileCommands::Show => match service.get()? {
            Some(profile) => {
                println!("Name: {}", profile.name);
                println!(
                    "Last updated: {}",
                    profile.updated_at.format("%Y-%m-%d %H:%M UTC")
                );
            }
            None => {
                println!("No profile set. Use `fintrack profile set-name <name>`.");
            }
        },

        ProfileCommands::SetName { name } => {
            let profile = service.set_name(&name)?;
            println!("Profile name set to: {}", profile.name);
        }
    }

    Ok(())
}
