//! Core data types for Snowflake grant statement construction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Object types that an ALL-object grant can address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectCategory {
    Schema,
    Table,
    View,
    MaterializedView,
    Stage,
    ExternalTable,
    FileFormat,
    Function,
    Procedure,
    Sequence,
    Stream,
    Pipe,
    Task,
}

impl ObjectCategory {
    /// The Snowflake keyword text for this object type
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectCategory::Schema => "SCHEMA",
            ObjectCategory::Table => "TABLE",
            ObjectCategory::View => "VIEW",
            ObjectCategory::MaterializedView => "MATERIALIZED VIEW",
            ObjectCategory::Stage => "STAGE",
            ObjectCategory::ExternalTable => "EXTERNAL TABLE",
            ObjectCategory::FileFormat => "FILE FORMAT",
            ObjectCategory::Function => "FUNCTION",
            ObjectCategory::Procedure => "PROCEDURE",
            ObjectCategory::Sequence => "SEQUENCE",
            ObjectCategory::Stream => "STREAM",
            ObjectCategory::Pipe => "PIPE",
            ObjectCategory::Task => "TASK",
        }
    }

    /// All categories, in the order Snowflake documents them
    pub fn all() -> &'static [ObjectCategory] {
        &[
            ObjectCategory::Schema,
            ObjectCategory::Table,
            ObjectCategory::View,
            ObjectCategory::MaterializedView,
            ObjectCategory::Stage,
            ObjectCategory::ExternalTable,
            ObjectCategory::FileFormat,
            ObjectCategory::Function,
            ObjectCategory::Procedure,
            ObjectCategory::Sequence,
            ObjectCategory::Stream,
            ObjectCategory::Pipe,
            ObjectCategory::Task,
        ]
    }
}

impl fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized object type names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown object type: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for ObjectCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept FILE_FORMAT alongside FILE FORMAT for shell friendliness
        match s.trim().to_uppercase().replace('_', " ").as_str() {
            "SCHEMA" => Ok(ObjectCategory::Schema),
            "TABLE" => Ok(ObjectCategory::Table),
            "VIEW" => Ok(ObjectCategory::View),
            "MATERIALIZED VIEW" => Ok(ObjectCategory::MaterializedView),
            "STAGE" => Ok(ObjectCategory::Stage),
            "EXTERNAL TABLE" => Ok(ObjectCategory::ExternalTable),
            "FILE FORMAT" => Ok(ObjectCategory::FileFormat),
            "FUNCTION" => Ok(ObjectCategory::Function),
            "PROCEDURE" => Ok(ObjectCategory::Procedure),
            "SEQUENCE" => Ok(ObjectCategory::Sequence),
            "STREAM" => Ok(ObjectCategory::Stream),
            "PIPE" => Ok(ObjectCategory::Pipe),
            "TASK" => Ok(ObjectCategory::Task),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Whether a grant scope is a schema or a whole database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    Schema,
    Database,
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Schema => "SCHEMA",
            ScopeKind::Database => "DATABASE",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The boundary within which "all objects" is evaluated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantScope {
    /// Display name (the schema name, or the database name for
    /// database-level scopes)
    pub name: String,
    /// Fully quoted qualified name, `"db"."schema"` or `"db"`
    pub qualified_name: String,
    pub kind: ScopeKind,
}

impl GrantScope {
    /// Resolve a (database, schema) pair into a scope.
    ///
    /// An empty schema selects database scope. Identifiers are quoted
    /// as-is; an empty database yields literal `""` since validation is
    /// the caller's responsibility.
    pub fn resolve(database: &str, schema: &str) -> Self {
        if schema.is_empty() {
            Self::database(database)
        } else {
            Self {
                name: schema.to_string(),
                qualified_name: format!(r#""{}"."{}""#, database, schema),
                kind: ScopeKind::Schema,
            }
        }
    }

    /// Database-level scope for `database`
    pub fn database(database: &str) -> Self {
        Self {
            name: database.to_string(),
            qualified_name: format!(r#""{}""#, database),
            kind: ScopeKind::Database,
        }
    }
}
