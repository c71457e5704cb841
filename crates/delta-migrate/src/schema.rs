//! Schema objects referenced by changes.
//!
//! These are lightweight descriptions, not catalog entries: they carry only
//! the names a dependency graph needs to order changes and detect conflicts
//! between changes that touch the same table or column.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A database table, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,
}

impl Table {
    /// Creates a table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A column, identified by its name and the name of the table owning it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Name of the owning table.
    pub table: String,
}

impl Column {
    /// Creates a column reference belonging to `table`.
    #[must_use]
    pub fn new(table: &Table, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.name.clone(),
        }
    }

    /// Returns true if this column belongs to `table`.
    #[must_use]
    pub fn belongs_to(&self, table: &Table) -> bool {
        self.table == table.name
    }
}

/// A schema object touched by a change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DatabaseObject {
    /// A table.
    Table(Table),
    /// A column.
    Column(Column),
}

impl DatabaseObject {
    /// Returns the object's own name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Table(table) => &table.name,
            Self::Column(column) => &column.name,
        }
    }

    /// Returns the table if this object is one.
    #[must_use]
    pub const fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            Self::Column(_) => None,
        }
    }

    /// Returns the column if this object is one.
    #[must_use]
    pub const fn as_column(&self) -> Option<&Column> {
        match self {
            Self::Column(column) => Some(column),
            Self::Table(_) => None,
        }
    }
}

impl fmt::Display for DatabaseObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(table) => write!(f, "table {}", table.name),
            Self::Column(column) => write!(f, "column {}.{}", column.table, column.name),
        }
    }
}

impl From<Table> for DatabaseObject {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<Column> for DatabaseObject {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_belongs_to_table() {
        let users = Table::new("users");
        let id = Column::new(&users, "id");

        assert!(id.belongs_to(&users));
        assert!(!id.belongs_to(&Table::new("orders")));
    }

    #[test]
    fn test_display() {
        let users = Table::new("users");
        let id = Column::new(&users, "id");

        assert_eq!(DatabaseObject::from(users).to_string(), "table users");
        assert_eq!(DatabaseObject::from(id).to_string(), "column users.id");
    }

    #[test]
    fn test_table_and_column_with_same_name_differ() {
        let t = Table::new("x");
        let c = Column::new(&t, "x");
        assert_ne!(DatabaseObject::from(t), DatabaseObject::from(c));
    }
}
