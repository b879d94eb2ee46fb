use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::is_same_file;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store to `dest_file`, optionally as a `.zip`. Returns the final path.
    pub fn backup(pool: &DbPool, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&pool.path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if is_same_file(src, &final_target) {
            return Err(AppError::Io(io::Error::other(format!(
                "Backup target {} is the live database",
                final_target.display()
            ))));
        }

        if final_target.exists() && !force && !confirm_overwrite(&final_target)? {
            return Err(AppError::Io(io::Error::other("Backup cancelled by user")));
        }

        let final_path = if compress {
            compress_backup(src, &final_target)?
        } else {
            fs::copy(src, &final_target)?;
            final_target.clone()
        };
        success(format!("Backup created: {}", final_path.display()));

        if let Err(e) = ttlog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(final_path)
    }
}

fn confirm_overwrite(path: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Deflate the store file straight into `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rtable.sqlite".to_string());

    zip.start_file(entry, options).map_err(io::Error::other)?;

    let mut f = fs::File::open(src)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path.to_path_buf())
}
