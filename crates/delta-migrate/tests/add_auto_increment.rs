//! Integration tests for the `addAutoIncrement` change.
//!
//! These tests load changes from changelog documents, render them for each
//! dialect, and check the exact SQL, affected objects and serialized form.

use std::collections::HashSet;
use std::io::Write;

use delta_migrate::prelude::*;
use delta_migrate::render_all;

const CHANGELOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<databaseChangeLog>
    <changeSet id="1" author="ops">
        <addAutoIncrement tableName="PERSON" columnName="ID" columnDataType="INTEGER"/>
    </changeSet>
</databaseChangeLog>
"#;

fn person() -> AddAutoIncrement {
    let mut changes = parse_changes(CHANGELOG).expect("changelog should parse");
    assert_eq!(changes.len(), 1);
    changes.remove(0)
}

// =============================================================================
// SQL generation
// =============================================================================

#[test]
fn hsql_uses_identity_syntax() {
    let sql = person().generate_statements(Dialect::Hsql).unwrap();
    assert_eq!(
        sql,
        vec![SqlStatement::raw(
            "ALTER TABLE PERSON ALTER COLUMN ID INTEGER GENERATED BY DEFAULT AS IDENTITY IDENTITY"
        )]
    );
}

#[test]
fn unknown_dialect_uses_modify_syntax() {
    let dialect: Dialect = "firebird".parse().unwrap();
    let sql = person().generate_statements(dialect).unwrap();
    assert_eq!(
        sql,
        vec![SqlStatement::raw(
            "ALTER TABLE PERSON MODIFY ID INTEGER AUTO_INCREMENT"
        )]
    );
}

#[test]
fn unsupported_dialects_fail_with_literal_messages() {
    let expected = [
        ("oracle", "Oracle does not support auto-increment columns"),
        (
            "mssql",
            "MS SQL Server does not support marking existing columns as auto-increment",
        ),
        ("postgresql", "PostgreSQL does not support auto-increment columns"),
        (
            "derby",
            "Derby does not support adding auto-increment to existing columns",
        ),
        (
            "cache",
            "Add Auto-Increment change not currently supported for Cache",
        ),
    ];

    for (name, message) in expected {
        let dialect: Dialect = name.parse().unwrap();
        let err = person().generate_statements(dialect).unwrap_err();
        match err {
            MigrateError::UnsupportedChange(actual) => assert_eq!(actual, message),
            other => panic!("Expected UnsupportedChange for {name}, got {other:?}"),
        }
    }
}

#[test]
fn every_supported_dialect_yields_one_statement() {
    let change = person();
    for dialect in Dialect::ALL {
        if let Ok(statements) = change.generate_statements(dialect) {
            assert_eq!(statements.len(), 1, "{dialect}");
        }
    }
}

#[test]
fn render_all_aborts_on_first_unsupported_change() {
    let changes = vec![person(), person()];
    let err = render_all(&changes, Dialect::Oracle).unwrap_err();
    assert!(err.is_unsupported());
}

// =============================================================================
// Affected objects
// =============================================================================

#[test]
fn affected_objects_are_table_and_column() {
    let objects = person().affected_database_objects();

    let table = Table::new("PERSON");
    let column = Column::new(&table, "ID");
    assert_eq!(
        objects,
        [DatabaseObject::from(table), DatabaseObject::from(column)]
            .into_iter()
            .collect::<HashSet<_>>()
    );
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn serialized_element_has_table_and_column_only() {
    let change = AddAutoIncrement::new("T", "C", "INT").unwrap();
    let element = change.serialize();

    assert_eq!(element.attribute("tableName"), Some("T"));
    assert_eq!(element.attribute("columnName"), Some("C"));
    assert_eq!(element.attributes().len(), 2);
}

#[test]
fn serialized_element_drops_column_data_type() {
    let change = AddAutoIncrement::new("T", "C", "INT").unwrap();
    let xml = change.serialize().to_xml().unwrap();

    assert!(!xml.contains("columnDataType"));

    let reloaded = parse_changes(&xml).unwrap();
    assert_eq!(reloaded[0].table_name(), "T");
    assert_eq!(reloaded[0].column_name(), "C");
    assert_eq!(reloaded[0].column_data_type(), "");
}

// =============================================================================
// Changelog files
// =============================================================================

#[test]
fn load_changes_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CHANGELOG.as_bytes()).unwrap();

    let changes = load_changes(file.path()).unwrap();
    assert_eq!(changes, vec![person()]);
}

#[test]
fn load_changes_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_changes(&dir.path().join("missing.xml")).unwrap_err();
    assert!(matches!(err, MigrateError::Io(_)));
}
