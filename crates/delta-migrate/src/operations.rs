//! Schema change operations.
//!
//! [`AddAutoIncrement`] turns an existing column into an auto-generated
//! identity column. Only some databases can do that to a column that already
//! exists, so SQL generation rejects the others.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::change::Change;
use crate::changelog::Element;
use crate::dialect::Dialect;
use crate::error::{MigrateError, Result};
use crate::schema::{Column, DatabaseObject, Table};
use crate::statement::SqlStatement;

/// Makes an existing column auto-increment.
///
/// Built through [`AddAutoIncrement::builder`] or [`AddAutoIncrement::new`],
/// both of which reject blank table and column names. The value is immutable
/// afterwards, so generation and derivation always see the same attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AddAutoIncrementBuilder")]
pub struct AddAutoIncrement {
    table_name: String,
    column_name: String,
    column_data_type: String,
}

impl AddAutoIncrement {
    /// Element name in the persisted changelog.
    pub const CHANGE_NAME: &'static str = "addAutoIncrement";

    /// Description of the change type.
    pub const DESCRIPTION: &'static str = "Set Column as Auto-Increment";

    /// Message reported after the change has been applied.
    pub const CONFIRMATION_MESSAGE: &'static str = "Column Set as Auto-Increment";

    /// Creates the change.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::InvalidInput`] if the table or column name is blank.
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        column_data_type: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .table_name(table_name)
            .column_name(column_name)
            .column_data_type(column_data_type)
            .build()
    }

    /// Starts building the change.
    #[must_use]
    pub fn builder() -> AddAutoIncrementBuilder {
        AddAutoIncrementBuilder::new()
    }

    /// Returns the table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Returns the column name.
    #[must_use]
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// Returns the column's data type as written in the changelog.
    #[must_use]
    pub fn column_data_type(&self) -> &str {
        &self.column_data_type
    }

    /// Returns a human-readable summary of this particular change.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Set column '{}' in table '{}' as auto-increment",
            self.column_name, self.table_name
        )
    }

    /// Picks the SQL for `dialect`, or the reason it cannot be expressed.
    ///
    /// Order matters: dialects that reject the change are checked before the
    /// `MySQL`-style fallback.
    fn render(&self, dialect: Dialect) -> std::result::Result<String, &'static str> {
        let Self {
            table_name,
            column_name,
            column_data_type,
        } = self;

        match dialect {
            Dialect::Oracle => Err("Oracle does not support auto-increment columns"),
            Dialect::MsSql => Err(
                "MS SQL Server does not support marking existing columns as auto-increment",
            ),
            Dialect::Postgres => Err("PostgreSQL does not support auto-increment columns"),
            Dialect::Derby => {
                Err("Derby does not support adding auto-increment to existing columns")
            }
            Dialect::Hsql => Ok(format!(
                "ALTER TABLE {table_name} ALTER COLUMN {column_name} {column_data_type} \
                 GENERATED BY DEFAULT AS IDENTITY IDENTITY"
            )),
            Dialect::Cache => Err("Add Auto-Increment change not currently supported for Cache"),
            Dialect::MySql | Dialect::Generic => Ok(format!(
                "ALTER TABLE {table_name} MODIFY {column_name} {column_data_type} AUTO_INCREMENT"
            )),
        }
    }
}

impl Change for AddAutoIncrement {
    fn change_name(&self) -> &'static str {
        Self::CHANGE_NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn confirmation_message(&self) -> &'static str {
        Self::CONFIRMATION_MESSAGE
    }

    fn generate_statements(&self, dialect: Dialect) -> Result<Vec<SqlStatement>> {
        match self.render(dialect) {
            Ok(sql) => {
                debug!(%dialect, %sql, "Generated addAutoIncrement SQL");
                Ok(vec![SqlStatement::raw(sql)])
            }
            Err(message) => {
                debug!(%dialect, reason = message, "addAutoIncrement is not supported");
                Err(MigrateError::UnsupportedChange(message.to_string()))
            }
        }
    }

    fn affected_database_objects(&self) -> HashSet<DatabaseObject> {
        let table = Table::new(self.table_name.clone());
        let column = Column::new(&table, self.column_name.clone());

        HashSet::from([table.into(), column.into()])
    }

    // columnDataType is not written; readers of the element get an empty type.
    fn serialize(&self) -> Element {
        Element::new(Self::CHANGE_NAME)
            .with_attribute("tableName", &self.table_name)
            .with_attribute("columnName", &self.column_name)
    }
}

/// Builder for [`AddAutoIncrement`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddAutoIncrementBuilder {
    table_name: String,
    column_name: String,
    column_data_type: String,
}

impl AddAutoIncrementBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table name.
    #[must_use]
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Sets the column name.
    #[must_use]
    pub fn column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = column_name.into();
        self
    }

    /// Sets the column data type.
    #[must_use]
    pub fn column_data_type(mut self, column_data_type: impl Into<String>) -> Self {
        self.column_data_type = column_data_type.into();
        self
    }

    /// Builds the change.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::InvalidInput`] if the table or column name is blank.
    pub fn build(self) -> Result<AddAutoIncrement> {
        if self.table_name.trim().is_empty() {
            return Err(MigrateError::InvalidInput(
                "addAutoIncrement requires a tableName".to_string(),
            ));
        }
        if self.column_name.trim().is_empty() {
            return Err(MigrateError::InvalidInput(format!(
                "addAutoIncrement on table '{}' requires a columnName",
                self.table_name
            )));
        }

        Ok(AddAutoIncrement {
            table_name: self.table_name,
            column_name: self.column_name,
            column_data_type: self.column_data_type,
        })
    }
}

impl TryFrom<AddAutoIncrementBuilder> for AddAutoIncrement {
    type Error = MigrateError;

    fn try_from(builder: AddAutoIncrementBuilder) -> Result<Self> {
        builder.build()
    }
}
