use crate::domain::errors::DomainError;
use crate::domain::value_objects::PublicId;

/// Extension of a client supplied file name, leading dot included.
///
/// Only the final path component is considered, so `a.d/b` has no
/// extension. Returns an empty string when there is no dot.
pub fn extension_of(filename: &str) -> &str {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match base.rfind('.') {
        Some(idx) => &base[idx..],
        None => "",
    }
}

/// Name of a file under the `files/` directory.
///
/// Always a single path component: it is joined onto the storage directory
/// and is also what the hash index records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredName(String);

impl StoredName {
    /// Build the name for a fresh upload: `<id><ext>`.
    pub fn for_upload(id: &PublicId, original_filename: &str) -> Result<Self, DomainError> {
        Self::parse(format!("{}{}", id, extension_of(original_filename)))
    }

    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() || value == "." || value == ".." {
            return Err(DomainError::InvalidStoredName(format!("'{}'", value)));
        }

        if value.contains(['/', '\\']) {
            return Err(DomainError::InvalidStoredName(format!(
                "'{}' contains a path separator",
                value
            )));
        }

        if value.chars().any(char::is_control) {
            return Err(DomainError::InvalidStoredName(format!(
                "{:?} contains control characters",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoredName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
