use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if !*print_config {
            info(format!(
                "Configuration file: {} (use --print to show it)",
                Config::config_file().display()
            ));
            return Ok(());
        }

        let mut shown = cfg.clone();
        if shown.api_key.is_some() {
            shown.api_key = Some("********".to_string());
        }
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(&shown)?);
    }

    Ok(())
}
