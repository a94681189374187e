//! Statement construction for ALL-object grants
//!
//! An ALL-object grant applies to every existing object of one type inside
//! a schema or database, e.g. `GRANT SELECT ON ALL TABLES IN SCHEMA ...`.
//! Everything here is a pure string computation over immutable values.

use crate::grant::{GrantBuilder, GrantExecutable};
use crate::types::{GrantScope, ObjectCategory, ScopeKind};
use serde::{Deserialize, Serialize};

/// Builder for grants on all existing objects of one type in a scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllGrantBuilder {
    scope: GrantScope,
    category: ObjectCategory,
}

impl AllGrantBuilder {
    /// Builder for all objects of `category` in the scope resolved from
    /// `(database, schema)`; an empty schema selects database scope.
    pub fn new(category: ObjectCategory, database: &str, schema: &str) -> Self {
        Self {
            scope: GrantScope::resolve(database, schema),
            category,
        }
    }

    /// Builder for all schemas in a database. Schema objects live at
    /// database level, so this never takes a schema argument.
    pub fn schemas(database: &str) -> Self {
        Self {
            scope: GrantScope::database(database),
            category: ObjectCategory::Schema,
        }
    }

    pub fn tables(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::Table, database, schema)
    }

    pub fn views(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::View, database, schema)
    }

    pub fn materialized_views(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::MaterializedView, database, schema)
    }

    pub fn stages(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::Stage, database, schema)
    }

    pub fn external_tables(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::ExternalTable, database, schema)
    }

    pub fn file_formats(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::FileFormat, database, schema)
    }

    pub fn functions(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::Function, database, schema)
    }

    pub fn procedures(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::Procedure, database, schema)
    }

    pub fn sequences(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::Sequence, database, schema)
    }

    pub fn streams(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::Stream, database, schema)
    }

    pub fn pipes(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::Pipe, database, schema)
    }

    pub fn tasks(database: &str, schema: &str) -> Self {
        Self::new(ObjectCategory::Task, database, schema)
    }

    /// The scope this builder addresses
    pub fn scope(&self) -> &GrantScope {
        &self.scope
    }

    /// The object type this builder addresses
    pub fn category(&self) -> ObjectCategory {
        self.category
    }

    /// Bind to a grantee role, keeping the concrete type
    pub fn for_role(&self, role: &str) -> ExistingGrantExecutable {
        ExistingGrantExecutable {
            grant_name: self.scope.qualified_name.clone(),
            grantee_name: role.to_string(),
            category: self.category,
            kind: self.scope.kind,
        }
    }
}

impl GrantBuilder for AllGrantBuilder {
    fn name(&self) -> &str {
        &self.scope.name
    }

    fn grant_type(&self) -> &'static str {
        self.category.as_str()
    }

    fn show(&self) -> String {
        format!(
            "SHOW ALL GRANTS IN {} {}",
            self.scope.kind, self.scope.qualified_name
        )
    }

    fn role(&self, role: &str) -> Box<dyn GrantExecutable> {
        Box::new(self.for_role(role))
    }

    /// ALL-object grants cannot target shares, so binding to a share is
    /// not applicable for this strategy.
    fn share(&self, _share: &str) -> Option<Box<dyn GrantExecutable>> {
        None
    }
}

/// A grant/revoke/show action on all objects of one type, bound to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingGrantExecutable {
    grant_name: String,
    grantee_name: String,
    category: ObjectCategory,
    kind: ScopeKind,
}

impl GrantExecutable for ExistingGrantExecutable {
    fn show(&self) -> String {
        format!("SHOW ALL GRANTS IN {} {}", self.kind, self.grant_name)
    }

    fn grant(&self, privilege: &str, with_grant_option: bool) -> String {
        // Pluralization is a literal trailing S on the keyword text, even
        // for multi-word types ("ALL FILE FORMATS"). Snowflake expects
        // exactly this form.
        let mut sql = format!(
            r#"GRANT {} ON ALL {}S IN {} {} TO ROLE "{}""#,
            privilege, self.category, self.kind, self.grant_name, self.grantee_name
        );
        if with_grant_option {
            sql.push_str(" WITH GRANT OPTION");
        }
        sql
    }

    fn revoke(&self, privilege: &str) -> Vec<String> {
        // Snowflake ignores REVOKE ... ON ALL <type>S for privileges that
        // were granted through the same form; the reconciler must not
        // assume access is actually removed.
        vec![format!(
            r#"REVOKE {} ON ALL {}S IN {} {} FROM ROLE "{}""#,
            privilege, self.category, self.kind, self.grant_name, self.grantee_name
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grant::{GrantBuilder, GrantExecutable};

    #[test]
    fn test_grant_on_all_tables_in_schema() {
        let executable = AllGrantBuilder::tables("DB", "SCHEMA").for_role("ANALYST");
        assert_eq!(
            executable.grant("SELECT", false),
            r#"GRANT SELECT ON ALL TABLES IN SCHEMA "DB"."SCHEMA" TO ROLE "ANALYST""#
        );
    }

    #[test]
    fn test_grant_with_grant_option() {
        let executable = AllGrantBuilder::pipes("DB", "").for_role("LOADER");
        assert_eq!(
            executable.grant("USAGE", true),
            r#"GRANT USAGE ON ALL PIPES IN DATABASE "DB" TO ROLE "LOADER" WITH GRANT OPTION"#
        );
    }

    #[test]
    fn test_revoke_is_a_single_statement() {
        let executable = AllGrantBuilder::tables("DB", "SCHEMA").for_role("ANALYST");
        assert_eq!(
            executable.revoke("SELECT"),
            vec![r#"REVOKE SELECT ON ALL TABLES IN SCHEMA "DB"."SCHEMA" FROM ROLE "ANALYST""#]
        );
    }

    #[test]
    fn test_show_from_builder_and_executable() {
        let builder = AllGrantBuilder::views("DB", "SCHEMA");
        assert_eq!(builder.show(), r#"SHOW ALL GRANTS IN SCHEMA "DB"."SCHEMA""#);
        assert_eq!(builder.for_role("ANALYST").show(), builder.show());
    }

    #[test]
    fn test_schemas_builder_is_database_scoped() {
        let builder = AllGrantBuilder::schemas("DB");
        assert_eq!(builder.show(), r#"SHOW ALL GRANTS IN DATABASE "DB""#);
        assert_eq!(builder.name(), "DB");
        assert_eq!(builder.grant_type(), "SCHEMA");
    }

    #[test]
    fn test_multi_word_categories_pluralize_verbatim() {
        let executable =
            AllGrantBuilder::materialized_views("DB", "SCHEMA").for_role("ANALYST");
        assert_eq!(
            executable.grant("SELECT", false),
            r#"GRANT SELECT ON ALL MATERIALIZED VIEWS IN SCHEMA "DB"."SCHEMA" TO ROLE "ANALYST""#
        );

        let executable = AllGrantBuilder::file_formats("DB", "SCHEMA").for_role("ETL");
        assert_eq!(
            executable.grant("USAGE", false),
            r#"GRANT USAGE ON ALL FILE FORMATS IN SCHEMA "DB"."SCHEMA" TO ROLE "ETL""#
        );
    }

    #[test]
    fn test_grant_type_matches_category_keyword() {
        for category in ObjectCategory::all() {
            let builder = AllGrantBuilder::new(*category, "DB", "SCHEMA");
            assert_eq!(builder.grant_type(), category.as_str());
        }
    }

    #[test]
    fn test_share_is_not_applicable() {
        for category in ObjectCategory::all() {
            let builder = AllGrantBuilder::new(*category, "DB", "SCHEMA");
            assert!(builder.share("PARTNER_SHARE").is_none());
        }
        assert!(AllGrantBuilder::schemas("DB").share("PARTNER_SHARE").is_none());
    }

    #[test]
    fn test_name_follows_scope() {
        assert_eq!(AllGrantBuilder::tables("DB", "SCHEMA").name(), "SCHEMA");
        assert_eq!(AllGrantBuilder::tables("DB", "").name(), "DB");
    }

    #[test]
    fn test_rendering_is_pure() {
        let executable = AllGrantBuilder::streams("DB", "SCHEMA").for_role("ANALYST");
        assert_eq!(executable.grant("SELECT", true), executable.grant("SELECT", true));
        assert_eq!(executable.revoke("SELECT"), executable.revoke("SELECT"));
        assert_eq!(executable.show(), executable.show());
    }

    #[test]
    fn test_role_binding_through_trait() {
        let builder: Box<dyn GrantBuilder> = Box::new(AllGrantBuilder::tasks("DB", "SCHEMA"));
        let executable = builder.role("SCHEDULER");
        assert_eq!(
            executable.grant("OPERATE", false),
            r#"GRANT OPERATE ON ALL TASKS IN SCHEMA "DB"."SCHEMA" TO ROLE "SCHEDULER""#
        );
    }
}
