/// Errors surfaced by registry operations
#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    /// update/remove targeted an identifier that is not registered anywhere
    #[error("student {0} not found")]
    NotFound(u32),
    /// register was called with an identifier that already exists
    #[error("student {0} is already registered")]
    DuplicateStudent(u32),
    /// structurally invalid field data, e.g. a non-numeric gpa
    #[error("invalid student data: {0}")]
    InvalidData(String),
    /// reading or writing the backing file failed
    #[error("failed to access the data file: {0}")]
    FileError(#[from] std::io::Error),
    /// the stored records could not be encoded or decoded
    #[error("failed to encode or decode the stored records: {0}")]
    JsonError(#[from] serde_json::Error),
}
