use super::err::RegistryError;
use super::student::Internship;

/// Parse the unique student identifier from form input.
pub fn parse_id(text: &str) -> Result<u32, RegistryError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| RegistryError::InvalidData(format!("'{}' is not a valid student id", text)))
}

/// Parse the grade point average from form input. Finiteness is checked
/// again by `Student::validate` before the record enters a tree.
pub fn parse_gpa(text: &str) -> Result<f64, RegistryError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| RegistryError::InvalidData(format!("'{}' is not a valid gpa", text)))
}

/// Split comma-separated interest tags; surrounding whitespace and empty
/// entries are dropped.
pub fn parse_interests(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse internships given as alternating company,duration entries, e.g.
/// "Acme,3 months,Initech,6 weeks". An odd number of entries means a
/// company without a duration and is rejected.
pub fn parse_internships(text: &str) -> Result<Vec<Internship>, RegistryError> {
    let entries: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();
    if entries.len() % 2 != 0 {
        return Err(RegistryError::InvalidData(
            "internship entries must come in company,duration pairs".to_string(),
        ));
    }
    Ok(entries
        .chunks(2)
        .map(|pair| Internship {
            company: pair[0].to_string(),
            duration: pair[1].to_string(),
        })
        .collect())
}
