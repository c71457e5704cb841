//! Dialect-aware `addAutoIncrement` schema change.
//!
//! `delta-migrate` turns the declarative intent "make this existing column
//! auto-increment" into SQL for a specific database, and refuses databases
//! that cannot alter an existing column that way:
//! - SQL generation dispatches over a closed [`Dialect`](dialect::Dialect) enum
//! - Affected tables and columns are reported for dependency ordering
//! - Changes round-trip through changelog XML elements
//!
//! # Architecture
//!
//! - **Change** - The contract a changelog executor drives (`Change` trait)
//! - **Operations** - `AddAutoIncrement` and its validating builder
//! - **Dialect** - The databases SQL can be generated for
//! - **Schema** - Table and column references reported as affected objects
//! - **Changelog** - XML element writing and reading
//!
//! # Example
//!
//! ```rust
//! use delta_migrate::prelude::*;
//!
//! let change = AddAutoIncrement::new("PERSON", "ID", "INTEGER")?;
//!
//! let sql = change.generate_statements(Dialect::Hsql)?;
//! assert_eq!(
//!     sql[0].as_str(),
//!     "ALTER TABLE PERSON ALTER COLUMN ID INTEGER GENERATED BY DEFAULT AS IDENTITY IDENTITY"
//! );
//!
//! let err = change.generate_statements(Dialect::Postgres).unwrap_err();
//! assert_eq!(err.to_string(), "PostgreSQL does not support auto-increment columns");
//!
//! assert_eq!(change.affected_database_objects().len(), 2);
//! # Ok::<(), MigrateError>(())
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the SQL for every change in a changelog
//! delta-migrate --changelog changelog.xml --dialect hsqldb sql
//!
//! # List the tables and columns the changelog touches
//! delta-migrate --changelog changelog.xml objects
//! ```

pub mod change;
pub mod changelog;
pub mod dialect;
pub mod error;
pub mod operations;
pub mod schema;
pub mod statement;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::change::Change;
    pub use crate::changelog::{load_changes, parse_changes, Element};
    pub use crate::dialect::Dialect;
    pub use crate::error::{MigrateError, Result};
    pub use crate::operations::{AddAutoIncrement, AddAutoIncrementBuilder};
    pub use crate::schema::{Column, DatabaseObject, Table};
    pub use crate::statement::SqlStatement;
}

/// Renders every change for `dialect`, in order.
///
/// Stops at the first change the dialect cannot express; an unsupported
/// change is fatal for the whole run.
///
/// # Errors
///
/// Returns the first error produced by a change.
pub fn render_all<'a, C, I>(
    changes: I,
    dialect: dialect::Dialect,
) -> error::Result<Vec<statement::SqlStatement>>
where
    C: change::Change + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut statements = Vec::new();
    for change in changes {
        statements.extend(change.generate_statements(dialect)?);
    }
    Ok(statements)
}
