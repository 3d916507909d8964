mod bst;
mod department;
mod err;
mod input;
mod store;
mod student;

use std::path::PathBuf;

use log::warn;

use department::DepartmentTable;
use store::JsonStore;

pub use err::RegistryError;
pub use input::{parse_gpa, parse_id, parse_interests, parse_internships};
pub use student::{Internship, Student, StudentUpdate};

// listing threshold for "high gpa" students, exclusive
const HIGH_GPA_THRESHOLD: f64 = 3.5;

/// The façade the boundary talks to: every per-department tree plus the
/// JSON store, wired so that each successful mutation rewrites the backing
/// file before the call returns.
pub struct AlumniRegistry {
    departments: DepartmentTable,
    store: JsonStore,
}

impl AlumniRegistry {
    /// Open (or start) a registry backed by the file at `path`.
    ///
    /// An unreadable or corrupt file is reported and treated as an empty
    /// store; it never prevents startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = JsonStore::new(path);
        let students = match store.load() {
            Ok(students) => students,
            Err(err) => {
                warn!(
                    "could not load {}: {}; starting with an empty registry",
                    store.path().display(),
                    err
                );
                Vec::new()
            }
        };

        let mut departments = DepartmentTable::new();
        for student in students {
            let department = student.department.clone();
            departments.get_or_create(&department).insert(student);
        }

        AlumniRegistry { departments, store }
    }

    /// Register a brand new student and persist the change.
    ///
    /// Identifiers are unique across the whole system, not just within one
    /// department, so the check scans every tree.
    pub fn register(&mut self, student: Student) -> Result<(), RegistryError> {
        student.validate()?;
        if self.find(student.student_id).is_some() {
            return Err(RegistryError::DuplicateStudent(student.student_id));
        }
        let department = student.department.clone();
        self.departments.get_or_create(&department).insert(student);
        self.save_all()
    }

    /// Overwrite the given fields of an existing student and persist.
    pub fn update(&mut self, student_id: u32, changes: StudentUpdate) -> Result<(), RegistryError> {
        changes.validate()?;
        match self.search_all_mut(student_id) {
            Some(student) => {
                changes.apply(student);
                self.save_all()
            }
            None => Err(RegistryError::NotFound(student_id)),
        }
    }

    /// Remove a student from the department tree that owns them, returning
    /// the removed record. Persists on success.
    pub fn remove(&mut self, student_id: u32) -> Result<Student, RegistryError> {
        let mut removed = None;
        for (_, tree) in self.departments.iter_mut() {
            if let Some(student) = tree.delete(student_id) {
                removed = Some(student);
                break;
            }
        }
        match removed {
            Some(student) => {
                self.save_all()?;
                Ok(student)
            }
            None => Err(RegistryError::NotFound(student_id)),
        }
    }

    /// Look a student up by id across all departments. Never mutates,
    /// never saves.
    pub fn find(&self, student_id: u32) -> Option<&Student> {
        self.departments
            .iter()
            .find_map(|(_, tree)| tree.search(student_id))
    }

    /// All records in `department`, ascending by id. An unknown department
    /// is an empty listing, not an error.
    pub fn list_by_department(&self, department: &str) -> Vec<&Student> {
        match self.departments.get(department) {
            Some(tree) => tree.in_order(),
            None => Vec::new(),
        }
    }

    /// Records with a GPA strictly above the threshold, across every
    /// department.
    pub fn list_high_gpa(&self) -> Vec<&Student> {
        self.departments
            .all_students()
            .into_iter()
            .filter(|student| student.gpa > HIGH_GPA_THRESHOLD)
            .collect()
    }

    /// Records whose foreign-language level is "advanced", compared
    /// case-insensitively.
    pub fn list_advanced_language(&self) -> Vec<&Student> {
        self.departments
            .all_students()
            .into_iter()
            .filter(|student| student.has_advanced_language())
            .collect()
    }

    /// Total number of registered students.
    pub fn student_count(&self) -> usize {
        self.departments.iter().map(|(_, tree)| tree.len()).sum()
    }

    fn search_all_mut(&mut self, student_id: u32) -> Option<&mut Student> {
        for (_, tree) in self.departments.iter_mut() {
            if let Some(student) = tree.search_mut(student_id) {
                return Some(student);
            }
        }
        None
    }

    /// Rewrite the backing file with the current record set: departments
    /// in name order, each department's records ascending by id.
    fn save_all(&self) -> Result<(), RegistryError> {
        self.store.save(&self.departments.all_students())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    fn student(id: u32, department: &str, gpa: f64, language: &str) -> Student {
        Student {
            student_id: id,
            name: format!("Student {}", id),
            address: "Campus St. 1".to_string(),
            phone: "555-0000".to_string(),
            email: format!("s{}@example.edu", id),
            nationality: "TR".to_string(),
            birth_date: "2000-01-01".to_string(),
            foreign_language: language.to_string(),
            interests: vec!["reading".to_string()],
            gpa,
            internships: vec![],
            department: department.to_string(),
        }
    }

    fn open_registry() -> (TempDir, PathBuf, AlumniRegistry) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alumni.json");
        let registry = AlumniRegistry::open(&path);
        (dir, path, registry)
    }

    #[test]
    fn test_register_then_find() {
        let (_dir, _path, mut registry) = open_registry();
        registry
            .register(student(1, "CS", 3.2, "Intermediate"))
            .unwrap();

        let found = registry.find(1).unwrap();
        assert_eq!(found.student_id, 1);
        assert_eq!(found.department, "CS");
        assert!(registry.find(2).is_none());
    }

    #[test]
    fn test_register_rejects_duplicate_id_across_departments() {
        let (_dir, _path, mut registry) = open_registry();
        registry
            .register(student(7, "CS", 3.2, "Intermediate"))
            .unwrap();

        let result = registry.register(student(7, "Physics", 3.9, "Advanced"));
        assert!(matches!(result, Err(RegistryError::DuplicateStudent(7))));
        // the rejected record never reached a tree
        assert_eq!(registry.student_count(), 1);
        assert!(registry.list_by_department("Physics").is_empty());
    }

    #[test]
    fn test_register_rejects_invalid_record() {
        let (_dir, path, mut registry) = open_registry();
        let result = registry.register(student(1, "  ", 3.0, "Intermediate"));
        assert!(matches!(result, Err(RegistryError::InvalidData(_))));
        // nothing was persisted
        assert!(!path.exists());
    }

    #[test]
    fn test_update_gpa_is_visible_and_persisted() {
        let (_dir, path, mut registry) = open_registry();
        registry
            .register(student(1, "CS", 3.2, "Intermediate"))
            .unwrap();

        let changes = StudentUpdate {
            gpa: Some(3.9),
            ..StudentUpdate::default()
        };
        registry.update(1, changes).unwrap();
        assert_eq!(registry.find(1).unwrap().gpa, 3.9);

        // the backing file reflects the new gpa as soon as update returns
        let stored: Vec<Student> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].gpa, 3.9);
    }

    #[test]
    fn test_update_absent_id_is_not_found() {
        let (_dir, path, mut registry) = open_registry();
        registry
            .register(student(1, "CS", 3.2, "Intermediate"))
            .unwrap();
        let saved_before = fs::read_to_string(&path).unwrap();

        let changes = StudentUpdate {
            name: Some("Nobody".to_string()),
            ..StudentUpdate::default()
        };
        let result = registry.update(99, changes);
        assert!(matches!(result, Err(RegistryError::NotFound(99))));
        // a failed update does not rewrite the file
        assert_eq!(fs::read_to_string(&path).unwrap(), saved_before);
    }

    #[test]
    fn test_remove_then_find_is_absent() {
        let (_dir, _path, mut registry) = open_registry();
        registry
            .register(student(1, "CS", 3.2, "Intermediate"))
            .unwrap();
        registry
            .register(student(2, "CS", 3.6, "Advanced"))
            .unwrap();

        let removed = registry.remove(1).unwrap();
        assert_eq!(removed.student_id, 1);
        assert!(registry.find(1).is_none());
        assert_eq!(registry.student_count(), 1);

        assert!(matches!(
            registry.remove(1),
            Err(RegistryError::NotFound(1))
        ));
    }

    #[test]
    fn test_reopen_restores_previous_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alumni.json");
        {
            let mut registry = AlumniRegistry::open(&path);
            registry
                .register(student(2, "Physics", 3.4, "Advanced"))
                .unwrap();
            registry
                .register(student(1, "CS", 3.8, "Intermediate"))
                .unwrap();
        }

        let registry = AlumniRegistry::open(&path);
        assert_eq!(registry.student_count(), 2);
        assert_eq!(registry.find(1).unwrap().department, "CS");
        assert_eq!(registry.find(2).unwrap().department, "Physics");
    }

    #[test]
    fn test_corrupt_file_starts_empty_but_registry_still_works() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alumni.json");
        fs::write(&path, "{ definitely not a student list").unwrap();

        let mut registry = AlumniRegistry::open(&path);
        assert_eq!(registry.student_count(), 0);

        registry
            .register(student(1, "CS", 3.2, "Intermediate"))
            .unwrap();
        assert_eq!(registry.student_count(), 1);
    }

    #[test]
    fn test_list_by_department_unknown_is_empty() {
        let (_dir, _path, mut registry) = open_registry();
        registry
            .register(student(1, "CS", 3.2, "Intermediate"))
            .unwrap();

        assert!(registry.list_by_department("History").is_empty());
        assert_eq!(registry.list_by_department("CS").len(), 1);
    }

    #[test]
    fn test_list_high_gpa_is_strictly_above_threshold() {
        let (_dir, _path, mut registry) = open_registry();
        registry
            .register(student(1, "CS", 3.4, "Intermediate"))
            .unwrap();
        registry
            .register(student(2, "CS", 3.5, "Intermediate"))
            .unwrap();
        registry
            .register(student(3, "Physics", 3.51, "Intermediate"))
            .unwrap();
        registry
            .register(student(4, "Physics", 4.0, "Intermediate"))
            .unwrap();

        let ids: Vec<u32> = registry
            .list_high_gpa()
            .iter()
            .map(|s| s.student_id)
            .collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_list_advanced_language_matches_any_case() {
        let (_dir, _path, mut registry) = open_registry();
        registry
            .register(student(1, "CS", 3.0, "Advanced"))
            .unwrap();
        registry
            .register(student(2, "CS", 3.0, "advanced"))
            .unwrap();
        registry
            .register(student(3, "CS", 3.0, "ADVANCED"))
            .unwrap();
        registry
            .register(student(4, "CS", 3.0, "Intermediate"))
            .unwrap();

        let ids: Vec<u32> = registry
            .list_advanced_language()
            .iter()
            .map(|s| s.student_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_saved_order_is_department_name_then_ascending_id() {
        let (_dir, path, mut registry) = open_registry();
        registry
            .register(student(9, "Physics", 3.0, "Intermediate"))
            .unwrap();
        registry
            .register(student(5, "CS", 3.0, "Intermediate"))
            .unwrap();
        registry
            .register(student(3, "CS", 3.0, "Intermediate"))
            .unwrap();

        let stored: Vec<Student> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let ids: Vec<u32> = stored.iter().map(|s| s.student_id).collect();
        assert_eq!(ids, vec![3, 5, 9]);

        // reopening and re-saving reproduces the same order
        let mut registry = AlumniRegistry::open(&path);
        registry
            .register(student(4, "CS", 3.0, "Intermediate"))
            .unwrap();
        let stored: Vec<Student> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let ids: Vec<u32> = stored.iter().map(|s| s.student_id).collect();
        assert_eq!(ids, vec![3, 4, 5, 9]);
    }
}
