use crate::domain::errors::DomainError;

/// Minimum length of a generated public identifier
pub const MIN_PUBLIC_ID_LENGTH: usize = 6;

/// Short alphanumeric identifier handed out for a new upload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicId(String);

impl PublicId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.len() < MIN_PUBLIC_ID_LENGTH {
            return Err(DomainError::InvalidPublicId(format!(
                "'{}' is shorter than {} characters",
                value, MIN_PUBLIC_ID_LENGTH
            )));
        }

        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidPublicId(format!(
                "'{}' contains non-alphanumeric characters",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PublicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_id_valid() {
        let id = PublicId::new("gY8kLq").unwrap();
        assert_eq!(id.as_str(), "gY8kLq");
        assert_eq!(id.to_string(), "gY8kLq");
    }

    #[test]
    fn test_public_id_too_short() {
        let err = PublicId::new("abc12").unwrap_err();
        assert!(matches!(err, DomainError::InvalidPublicId(_)));
    }

    #[test]
    fn test_public_id_rejects_punctuation() {
        assert!(PublicId::new("abc/def").is_err());
        assert!(PublicId::new("abc.def").is_err());
        assert!(PublicId::new("").is_err());
    }
}
