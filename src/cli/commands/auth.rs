use crate::cli::parser::Commands;
use crate::core::App;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::io::{self, Write};

fn prompt_password() -> AppResult<String> {
    print!("Admin password: ");
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}

/// Handle `login`, `logout` and `whoami`.
pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    match cmd {
        Commands::Login { password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password()?,
            };

            if !app.session.login(&password)? {
                return Err(AppError::InvalidCredentials);
            }
            success("Admin session opened.");
        }
        Commands::Logout => {
            app.session.logout()?;
            success("Admin session closed.");
        }
        Commands::Whoami => {
            println!("{}", app.session.role().label());
        }
        _ => {}
    }
    Ok(())
}
