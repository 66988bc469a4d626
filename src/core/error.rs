//! Error types shared by the site core

/// Errors raised while configuring or running the page logic.
///
/// Most of these are absorbed where they happen (logged and skipped); only
/// configuration errors surface at startup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SiteError {
    #[error("Section list must contain at least one section")]
    EmptySectionList,

    #[error("Section id is configured twice: {0}")]
    DuplicateSection(String),

    #[error("Persistent storage is not available")]
    StorageUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Intersection observer error: {0}")]
    Observer(String),

    #[error("Invalid value for {key}: {message}")]
    Config { key: String, message: String },
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SiteError::DuplicateSection("about".to_string()).to_string(),
            "Section id is configured twice: about"
        );
        assert_eq!(
            SiteError::Config {
                key: "SITE_COMPRESSION".to_string(),
                message: "expected true or false".to_string(),
            }
            .to_string(),
            "Invalid value for SITE_COMPRESSION: expected true or false"
        );
        assert_eq!(
            SiteError::StorageUnavailable.to_string(),
            "Persistent storage is not available"
        );
    }
}
