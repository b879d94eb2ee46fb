use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Parse and validate the file at `path` without using it.
    pub fn check(path: &Path) -> AppResult<Config> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist (run `rtable init`)",
                path.display()
            )));
        }
        Config::load_from(path)
    }

    /// Open `path` in the requested editor, falling back to `$EDITOR`/`$VISUAL`,
    /// then to nano (notepad on Windows). Returns the editor that succeeded.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let mut candidates = Vec::new();
        if let Some(e) = editor {
            candidates.push(e.clone());
        }
        candidates.push(default_editor);

        for ed in &candidates {
            if let Ok(status) = Command::new(ed).arg(path).status()
                && status.success()
            {
                return Ok(ed.clone());
            }
        }

        Err(AppError::Config(format!(
            "could not open {} with any of: {}",
            path.display(),
            candidates.join(", ")
        )))
    }
}
