use serde::{Deserialize, Serialize};

use super::err::RegistryError;

/// One internship entry: where, and for how long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    // company name
    pub company: String,
    // free-text duration, e.g. "3 months"
    pub duration: String,
}

/// One student/alumni record. `student_id` is the unique key the
/// per-department trees are ordered by; everything else is payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    // unique id, immutable once registered
    pub student_id: u32,
    // full name
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub nationality: String,
    // free-text date, as captured by the form
    pub birth_date: String,
    // proficiency level, e.g. "Advanced"; compared case-insensitively
    pub foreign_language: String,
    // interest tags in capture order
    pub interests: Vec<String>,
    pub gpa: f64,
    // internship history in capture order
    pub internships: Vec<Internship>,
    // owning department; decides which tree holds the record
    pub department: String,
}

impl Student {
    /// Structural checks the core applies even when the boundary has
    /// already validated the free-text input.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.department.trim().is_empty() {
            return Err(RegistryError::InvalidData(
                "department must not be empty".to_string(),
            ));
        }
        if !self.gpa.is_finite() {
            return Err(RegistryError::InvalidData(format!(
                "gpa {} is not a finite number",
                self.gpa
            )));
        }
        Ok(())
    }

    pub fn has_advanced_language(&self) -> bool {
        self.foreign_language.eq_ignore_ascii_case("advanced")
    }
}

/// Partial update applied by `AlumniRegistry::update`: only fields that are
/// `Some` are overwritten. The id and the department are deliberately not
/// settable; the id is the tree key, and moving a record to another
/// department would leave it in the wrong tree.
#[derive(Debug, Default)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<String>,
    pub foreign_language: Option<String>,
    pub interests: Option<Vec<String>>,
    pub gpa: Option<f64>,
    pub internships: Option<Vec<Internship>>,
}

impl StudentUpdate {
    /// Check the changes before any of them is applied, so a rejected
    /// update leaves the record exactly as it was.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if let Some(gpa) = self.gpa {
            if !gpa.is_finite() {
                return Err(RegistryError::InvalidData(format!(
                    "gpa {} is not a finite number",
                    gpa
                )));
            }
        }
        Ok(())
    }

    /// Overwrite every field for which a new value is present.
    pub fn apply(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(address) = self.address {
            student.address = address;
        }
        if let Some(phone) = self.phone {
            student.phone = phone;
        }
        if let Some(email) = self.email {
            student.email = email;
        }
        if let Some(nationality) = self.nationality {
            student.nationality = nationality;
        }
        if let Some(birth_date) = self.birth_date {
            student.birth_date = birth_date;
        }
        if let Some(foreign_language) = self.foreign_language {
            student.foreign_language = foreign_language;
        }
        if let Some(interests) = self.interests {
            student.interests = interests;
        }
        if let Some(gpa) = self.gpa {
            student.gpa = gpa;
        }
        if let Some(internships) = self.internships {
            student.internships = internships;
        }
    }
}
