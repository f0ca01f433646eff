use crate::momentum::MomentumData;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// TOML file persistence for Momentum data
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing data file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load data from the file, returning empty data when it is missing
    pub fn load(&self) -> Result<MomentumData> {
        if !self.file_path.exists() {
            return Ok(MomentumData::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let data: MomentumData = toml::from_str(&content)?;
        Ok(data)
    }

    /// Save data to the file
    pub fn save(&self, data: &MomentumData) -> Result<()> {
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file_is_empty() {
        let storage = Storage::new("/nonexistent/momentum.toml");
        let data = storage.load().unwrap();
        assert_eq!(data.task_count(), 0);
        assert_eq!(data.habit_count(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());
        assert_eq!(storage.file_path(), temp_file.path());

        let mut data = MomentumData::new();
        let id = data.generate_task_id();
        data.add_task(crate::momentum::Task {
            id,
            title: "Write report".to_string(),
            ..Default::default()
        });
        storage.save(&data).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.task_count(), 1);
        assert_eq!(loaded.task_counter, 1);
        assert!(loaded.find_task_by_id("task-1").is_some());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "not = [valid").unwrap();

        let storage = Storage::new(temp_file.path());
        assert!(storage.load().is_err());
    }
}
