//! Writing exported PNGs to disk.

use super::ExportError;
use crate::config::ExportConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how exports are saved.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSaveConfig {
    pub save_directory: PathBuf,
    /// chrono format string, without extension
    pub filename_template: String,
    pub format: String,
}

impl From<&ExportConfig> for FileSaveConfig {
    fn from(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
            format: config.format.clone(),
        }
    }
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

/// Expands the filename template against the local time and appends the extension.
pub fn generate_filename(template: &str, format: &str) -> String {
    let stem = Local::now().format(template).to_string();
    format!("{stem}.{format}")
}

/// Creates `directory` if it is missing and returns its canonical form.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    Ok(directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf()))
}

/// Writes PNG bytes to an explicit path, creating parent directories as needed.
pub fn write_png(png: &[u8], path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    fs::write(path, png)?;
    log::info!("Saved drawing to {} ({} bytes)", path.display(), png.len());
    Ok(path.to_path_buf())
}

/// Saves PNG bytes under a generated name in the configured directory.
pub fn save_png(png: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, &config.format);
    write_png(png, &directory.join(filename))
}

/// Expands a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
