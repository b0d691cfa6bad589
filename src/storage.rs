use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::CONFIG_FILE_NAME;
use crate::core::data::Timer;
use crate::core::traits::TimerStore;
use crate::utils::error::{AppError, AppResult};

/// Timers stored as `<dir>/<slug>.json`, next to the config file.
pub struct FileTimerStore {
    dir: PathBuf,
}

impl FileTimerStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn timer_path(&self, slug: &str) -> AppResult<PathBuf> {
        validate_slug(slug)?;
        Ok(self.dir.join(format!("{}.json", slug)))
    }
}

/// Slugs become file names, so only plain identifiers are accepted.
pub fn validate_slug(slug: &str) -> AppResult<()> {
    if slug.is_empty() {
        return Err(AppError::InvalidInput("goal slug cannot be empty".to_string()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::InvalidInput(format!(
            "goal slug '{}' may only contain letters, digits, '-' and '_'",
            slug
        )));
    }
    if format!("{}.json", slug) == CONFIG_FILE_NAME {
        return Err(AppError::InvalidInput(format!(
            "goal slug '{}' is reserved",
            slug
        )));
    }
    Ok(())
}

impl TimerStore for FileTimerStore {
    fn exists(&self, slug: &str) -> AppResult<bool> {
        Ok(self.timer_path(slug)?.exists())
    }

    fn load(&self, slug: &str) -> AppResult<Option<Timer>> {
        let path = self.timer_path(slug)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read timer file {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let timer = serde_json::from_str(&content).map_err(|e| {
            AppError::Storage(format!("Failed to parse timer file {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "timer loaded");
        Ok(Some(timer))
    }

    fn create(&self, slug: &str, timer: &Timer) -> AppResult<()> {
        let path = self.timer_path(slug)?;
        ensure_dir(&self.dir)?;

        let content = to_json(timer)?;
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(AppError::AlreadyStarted(slug.to_string()));
            }
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to create timer file {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        if let Err(e) = file.write_all(content.as_bytes()).and_then(|_| file.sync_all()) {
            // Leave no half-written timer behind.
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(AppError::Storage(format!(
                "Failed to write timer file {}: {}",
                path.display(),
                e
            )));
        }
        debug!(path = %path.display(), "timer created");
        Ok(())
    }

    fn save(&self, slug: &str, timer: &Timer) -> AppResult<()> {
        let path = self.timer_path(slug)?;
        write_json_atomic(&path, timer)
    }

    fn delete(&self, slug: &str) -> AppResult<bool> {
        let path = self.timer_path(slug)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "timer removed");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to delete timer file {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

pub fn ensure_dir(dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        AppError::Storage(format!("Failed to create directory {}: {}", dir.display(), e))
    })
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string(value).map_err(|e| AppError::Storage(format!("Failed to serialize: {}", e)))
}

/// Replace `path` with the JSON form of `value` via a temp file and rename,
/// so readers see either the old or the new document.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let content = to_json(value)?;
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let result = fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&tmp_path, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(AppError::Storage(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }
    debug!(path = %path.display(), "file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn timer(format: &str) -> Timer {
        let start = Local.with_ymd_and_hms(2024, 4, 2, 9, 30, 0).unwrap();
        Timer::new(start, format.to_string())
    }

    #[test]
    fn test_create_then_load() {
        let dir = TempDir::new().unwrap();
        let store = FileTimerStore::new(dir.path());

        assert!(!store.exists("writing").unwrap());
        assert_eq!(store.load("writing").unwrap(), None);

        let t = timer("%H hours");
        store.create("writing", &t).unwrap();

        assert!(dir.path().join("writing.json").exists());
        assert!(store.exists("writing").unwrap());
        assert_eq!(store.load("writing").unwrap(), Some(t));
    }

    #[test]
    fn test_create_refuses_existing_timer() {
        let dir = TempDir::new().unwrap();
        let store = FileTimerStore::new(dir.path());

        let original = timer("hours");
        store.create("writing", &original).unwrap();

        let err = store.create("writing", &timer("minutes")).unwrap_err();
        assert_eq!(err, AppError::AlreadyStarted("writing".to_string()));
        assert_eq!(store.load("writing").unwrap(), Some(original));
    }

    #[test]
    fn test_create_makes_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("beetimer");
        let store = FileTimerStore::new(&nested);

        store.create("reading", &timer("minutes")).unwrap();
        assert!(nested.join("reading.json").exists());
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = FileTimerStore::new(dir.path());

        let mut t = timer("hours");
        store.create("writing", &t).unwrap();
        t.stop = Some(t.start + chrono::Duration::minutes(45));
        store.save("writing", &t).unwrap();

        assert_eq!(store.load("writing").unwrap(), Some(t));
        assert!(!dir.path().join("writing.json.tmp").exists());
    }

    #[test]
    fn test_delete_reports_presence() {
        let dir = TempDir::new().unwrap();
        let store = FileTimerStore::new(dir.path());

        assert!(!store.delete("writing").unwrap());
        store.create("writing", &timer("hours")).unwrap();
        assert!(store.delete("writing").unwrap());
        assert!(!store.exists("writing").unwrap());
    }

    #[test]
    fn test_corrupt_timer_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("writing.json"), "{not json").unwrap();
        let store = FileTimerStore::new(dir.path());

        assert!(matches!(store.load("writing"), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_slug_validation() {
        assert!(validate_slug("deep-work_2").is_ok());
        assert!(matches!(validate_slug(""), Err(AppError::InvalidInput(_))));
        assert!(matches!(validate_slug("../etc"), Err(AppError::InvalidInput(_))));
        assert!(matches!(validate_slug("a/b"), Err(AppError::InvalidInput(_))));
        assert!(matches!(validate_slug("config"), Err(AppError::InvalidInput(_))));
    }
}
