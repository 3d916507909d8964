use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::err::RegistryError;
use super::student::Student;

/// Whole-file JSON persistence for the complete record set.
///
/// Every mutating registry operation rewrites the file from scratch; the
/// most recent successful save wins. There is no partial or incremental
/// writing.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `students` (already in persistence order) and overwrite
    /// the backing file with the result.
    pub fn save(&self, students: &[&Student]) -> Result<(), RegistryError> {
        let json = serde_json::to_string_pretty(students)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Read the full record set back. A missing file is an empty store; a
    /// read or parse failure is returned to the caller, which decides
    /// whether it is fatal.
    pub fn load(&self) -> Result<Vec<Student>, RegistryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        let students: Vec<Student> = serde_json::from_str(&json)?;
        info!(
            "loaded {} students from {}",
            students.len(),
            self.path.display()
        );
        Ok(students)
    }
}
