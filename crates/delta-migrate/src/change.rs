//! The contract every schema change fulfils.
//!
//! A changelog executor drives changes only through this trait: it asks for
//! the SQL of the active dialect, collects affected objects for ordering, and
//! writes the change back into the changelog document.

use std::collections::HashSet;

use crate::changelog::Element;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::schema::DatabaseObject;
use crate::statement::SqlStatement;

/// A declarative unit of schema change.
pub trait Change {
    /// Element name used in the persisted changelog.
    fn change_name(&self) -> &'static str;

    /// Short human-readable description of the change type.
    fn description(&self) -> &'static str;

    /// Message shown once the change has been applied.
    fn confirmation_message(&self) -> &'static str;

    /// Generates the SQL for `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::UnsupportedChange`](crate::error::MigrateError::UnsupportedChange)
    /// if the dialect cannot express the change.
    fn generate_statements(&self, dialect: Dialect) -> Result<Vec<SqlStatement>>;

    /// Returns the schema objects the change reads or modifies.
    fn affected_database_objects(&self) -> HashSet<DatabaseObject>;

    /// Serializes the change into a changelog element.
    fn serialize(&self) -> Element;

    /// Returns true if the change can be rolled back.
    fn is_reversible(&self) -> bool {
        false
    }
}
