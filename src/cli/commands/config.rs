use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            match ConfigLogic::check(&path) {
                Ok(_) => success(format!("Configuration is valid: {}", path.display())),
                Err(e) => {
                    error(&e);
                    return Err(e);
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let used = ConfigLogic::edit(&path, editor)?;
            success(format!(
                "Configuration file edited successfully using '{}'",
                used
            ));

            // A broken edit must not go unnoticed until the next start
            if let Err(e) = ConfigLogic::check(&path) {
                error(format!("The edited configuration is invalid: {e}"));
            }
        }
    }

    Ok(())
}
