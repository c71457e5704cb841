//! Database dialects.
//!
//! A dialect names the database product a change is rendered for. The set is
//! closed: every change matches on it exhaustively, so adding a variant forces
//! each change to decide how that database is handled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The database product a change targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    /// Oracle Database.
    #[serde(rename = "oracle")]
    Oracle,
    /// Microsoft SQL Server.
    #[serde(rename = "mssql", alias = "sqlserver")]
    MsSql,
    /// `PostgreSQL`.
    #[serde(rename = "postgresql", alias = "postgres")]
    Postgres,
    /// Apache Derby.
    #[serde(rename = "derby")]
    Derby,
    /// `HSQLDB`.
    #[serde(rename = "hsqldb", alias = "hsql")]
    Hsql,
    /// `InterSystems` Caché.
    #[serde(rename = "cache")]
    Cache,
    /// `MySQL`.
    #[serde(rename = "mysql")]
    MySql,
    /// Any database without dedicated handling.
    #[default]
    #[serde(rename = "generic")]
    Generic,
}

impl Dialect {
    /// All known dialects.
    pub const ALL: [Self; 8] = [
        Self::Oracle,
        Self::MsSql,
        Self::Postgres,
        Self::Derby,
        Self::Hsql,
        Self::Cache,
        Self::MySql,
        Self::Generic,
    ];

    /// Returns the dialect name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::MsSql => "mssql",
            Self::Postgres => "postgresql",
            Self::Derby => "derby",
            Self::Hsql => "hsqldb",
            Self::Cache => "cache",
            Self::MySql => "mysql",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = std::convert::Infallible;

    /// Parses a dialect name. Unrecognised names map to [`Dialect::Generic`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dialect = match s.trim().to_ascii_lowercase().as_str() {
            "oracle" => Self::Oracle,
            "mssql" | "sqlserver" | "sql-server" => Self::MsSql,
            "postgres" | "postgresql" | "pg" => Self::Postgres,
            "derby" => Self::Derby,
            "hsql" | "hsqldb" => Self::Hsql,
            "cache" => Self::Cache,
            "mysql" => Self::MySql,
            _ => Self::Generic,
        };
        Ok(dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("SQLServer".parse::<Dialect>(), Ok(Dialect::MsSql));
        assert_eq!("postgres".parse::<Dialect>(), Ok(Dialect::Postgres));
        assert_eq!(" HSQLDB ".parse::<Dialect>(), Ok(Dialect::Hsql));
    }

    #[test]
    fn test_unknown_name_is_generic() {
        assert_eq!("sybase".parse::<Dialect>(), Ok(Dialect::Generic));
        assert_eq!("".parse::<Dialect>(), Ok(Dialect::Generic));
    }

    #[test]
    fn test_json_uses_dialect_names() {
        for dialect in Dialect::ALL {
            let json = serde_json::to_string(&dialect).unwrap();
            assert_eq!(json, format!("\"{}\"", dialect.name()));
            assert_eq!(serde_json::from_str::<Dialect>(&json).unwrap(), dialect);
        }
        assert_eq!(
            serde_json::from_str::<Dialect>("\"hsql\"").unwrap(),
            Dialect::Hsql
        );
    }

    #[test]
    fn test_name_round_trips() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.name().parse::<Dialect>(), Ok(dialect));
        }
    }
}
