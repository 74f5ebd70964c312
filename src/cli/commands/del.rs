use crate::cli::parser::Commands;
use crate::core::App;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !app.session.is_privileged() {
            return Err(AppError::Unauthorized);
        }

        let Some(rec) = app.store.get(id) else {
            info(format!("No record with id '{}', nothing to delete.", id));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete record {} ({} · {:.1} mm) permanently?",
            rec.id, rec.date, rec.amount
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        app.store.delete(&app.session, id)?;
        success(format!("Record {} deleted.", id));
    }

    Ok(())
}
