//! Export documents
//!
//! Renders selections of generated copies into editor-facing documents and
//! writes them into the export directory (the platform download dir unless
//! the settings override it).

pub mod html;
pub mod text;

use chrono::{DateTime, Local};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::storage::settings::AppSettings;
use crate::types::GeneratedCopy;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("could not determine an export directory")]
    NoExportDir,
}

/// Resolve where exports go: settings override, then the download dir, then
/// the user's home.
pub fn export_dir(settings: &AppSettings) -> Result<PathBuf, ExportError> {
    if let Some(dir) = &settings.export_dir {
        return Ok(dir.clone());
    }
    let dirs = UserDirs::new().ok_or(ExportError::NoExportDir)?;
    Ok(dirs
        .download_dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dirs.home_dir().to_path_buf()))
}

/// `stem_YYYY-MM-DD.ext`, the naming every export uses.
pub fn dated_filename(stem: &str, ext: &str, now: DateTime<Local>) -> String {
    format!("{stem}_{}.{ext}", now.format("%Y-%m-%d"))
}

fn write_export(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, content)?;
    tracing::info!("Exported {}", path.display());
    Ok(path)
}

/// Write the visual HTML editor sheet.
pub fn write_editor_sheet(
    copies: &[GeneratedCopy],
    dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, ExportError> {
    let content = html::render_editor_sheet(copies, now);
    write_export(dir, &dated_filename("planilla_editora", "html", now), &content)
}

/// Write the plain-text editor guide (scenes + visual directions).
pub fn write_editor_guide(
    copies: &[GeneratedCopy],
    dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, ExportError> {
    let content = text::render_editor_guide(copies, now);
    write_export(dir, &dated_filename("guia_audio_editora", "txt", now), &content)
}

/// Write the audio-only script: full texts, one per paragraph.
pub fn write_audio_script(
    copies: &[GeneratedCopy],
    dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, ExportError> {
    let content = text::render_audio_script(copies);
    write_export(dir, &dated_filename("copies_para_audio", "txt", now), &content)
}

/// Write the raw JSON dump of a selection.
pub fn write_copies_json(
    copies: &[GeneratedCopy],
    dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, ExportError> {
    let content = serde_json::to_string_pretty(copies)?;
    write_export(dir, &dated_filename("copies", "json", now), &content)
}

/// Spanish long-form date, e.g. "viernes, 7 de agosto de 2026".
pub fn spanish_date(now: DateTime<Local>) -> String {
    const WEEKDAYS: [&str; 7] = [
        "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
    ];
    const MONTHS: [&str; 12] = [
        "enero", "febrero", "marzo", "abril", "mayo", "junio",
        "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
    ];
    use chrono::Datelike;
    let weekday = WEEKDAYS[now.weekday().num_days_from_monday() as usize];
    let month = MONTHS[now.month0() as usize];
    format!("{weekday}, {} de {month} de {}", now.day(), now.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_date() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 7, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_dated_filename() {
        assert_eq!(
            dated_filename("planilla_editora", "html", sample_date()),
            "planilla_editora_2026-08-07.html"
        );
    }

    #[test]
    fn test_spanish_date() {
        assert_eq!(spanish_date(sample_date()), "viernes, 7 de agosto de 2026");
    }

    #[test]
    fn test_settings_override_wins() {
        let mut settings = AppSettings::default();
        settings.export_dir = Some(PathBuf::from("/tmp/exports"));
        assert_eq!(export_dir(&settings).unwrap(), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_exports_land_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_audio_script(&[], dir.path(), sample_date()).unwrap();
        assert!(path.exists());
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("copies_para_audio_"));
    }
}
