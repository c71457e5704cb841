//! Error types for schema changes.

/// Errors that can occur while building, reading or rendering a change.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// The target dialect cannot express the change.
    ///
    /// The message is dialect-specific and shown to the user verbatim.
    #[error("{0}")]
    UnsupportedChange(String),

    /// A change was declared with missing or blank attributes.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed changelog document.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute inside a changelog element.
    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    /// IO error (reading changelog files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MigrateError {
    /// Returns true if the error comes from a dialect that cannot run the change.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedChange(_))
    }
}

/// Result type for schema change operations.
pub type Result<T> = std::result::Result<T, MigrateError>;
