use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use snowgrant_core::{AllGrantBuilder, GrantBuilder, GrantExecutable, ObjectCategory};

#[derive(Parser)]
#[command(name = "snowgrant")]
#[command(about = "Render Snowflake ALL-object grant statements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a GRANT statement
    Grant {
        #[command(flatten)]
        target: Target,
        /// Grantee role
        #[arg(short, long)]
        role: String,
        /// Privilege to grant (e.g. SELECT, USAGE)
        #[arg(short, long)]
        privilege: String,
        /// Allow the grantee to re-grant the privilege
        #[arg(long)]
        with_grant_option: bool,
    },
    /// Render REVOKE statements
    Revoke {
        #[command(flatten)]
        target: Target,
        /// Grantee role
        #[arg(short, long)]
        role: String,
        /// Privilege to revoke
        #[arg(short, long)]
        privilege: String,
    },
    /// Render the SHOW GRANTS statement for a scope
    Show {
        #[command(flatten)]
        target: Target,
    },
}

#[derive(clap::Args)]
struct Target {
    /// Database name
    #[arg(short, long)]
    database: String,

    /// Schema name; omit for a database-level scope
    #[arg(short, long, default_value = "")]
    schema: String,

    /// Object type (e.g. TABLE, PIPE, "FILE FORMAT")
    #[arg(long = "on", value_name = "TYPE")]
    category: ObjectCategory,
}

impl Target {
    fn builder(&self) -> AllGrantBuilder {
        match self.category {
            // Schemas are database-level objects; the schema flag does
            // not apply to them.
            ObjectCategory::Schema => AllGrantBuilder::schemas(&self.database),
            category => AllGrantBuilder::new(category, &self.database, &self.schema),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let statements = match &cli.command {
        Commands::Grant {
            target,
            role,
            privilege,
            with_grant_option,
        } => {
            let executable = target.builder().for_role(role);
            vec![executable.grant(privilege, *with_grant_option)]
        }
        Commands::Revoke {
            target,
            role,
            privilege,
        } => target.builder().for_role(role).revoke(privilege),
        Commands::Show { target } => vec![target.builder().show()],
    };

    match cli.format {
        Format::Text => {
            for statement in &statements {
                println!("{}", statement);
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&statements)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_builder_scope() {
        let target = Target {
            database: "DB".to_string(),
            schema: "SCHEMA".to_string(),
            category: ObjectCategory::Table,
        };
        assert_eq!(target.builder().name(), "SCHEMA");

        let target = Target {
            database: "DB".to_string(),
            schema: "".to_string(),
            category: ObjectCategory::Pipe,
        };
        assert_eq!(target.builder().name(), "DB");
    }

    #[test]
    fn test_schema_category_ignores_schema_flag() {
        let target = Target {
            database: "DB".to_string(),
            schema: "IGNORED".to_string(),
            category: ObjectCategory::Schema,
        };
        assert_eq!(target.builder().show(), r#"SHOW ALL GRANTS IN DATABASE "DB""#);
    }

    #[test]
    fn test_cli_parses_grant() {
        let cli = Cli::parse_from([
            "snowgrant",
            "grant",
            "--database",
            "DB",
            "--schema",
            "SCHEMA",
            "--on",
            "table",
            "--role",
            "ANALYST",
            "--privilege",
            "SELECT",
            "--with-grant-option",
        ]);
        match cli.command {
            Commands::Grant {
                target,
                role,
                privilege,
                with_grant_option,
            } => {
                assert_eq!(target.category, ObjectCategory::Table);
                assert_eq!(role, "ANALYST");
                assert_eq!(privilege, "SELECT");
                assert!(with_grant_option);
            }
            _ => panic!("Expected grant subcommand"),
        }
    }
}
