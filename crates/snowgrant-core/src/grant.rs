//! Trait seam shared by the grant strategies
//!
//! The reconciliation layer composes several strategies (single-object
//! grants, future grants, ALL-object grants) behind these two traits and
//! only ever sees boxed trait objects.

/// A grant target bound to a scope, not yet bound to a grantee
pub trait GrantBuilder {
    /// Display name of the scope (schema name, or database name for
    /// database-level scopes)
    fn name(&self) -> &str;

    /// The object type keyword, used by callers for labeling
    fn grant_type(&self) -> &'static str;

    /// SQL listing every grant in the scope
    fn show(&self) -> String;

    /// Bind this target to a grantee role
    fn role(&self, role: &str) -> Box<dyn GrantExecutable>;

    /// Bind this target to a share. Strategies that cannot grant to
    /// shares return `None`; callers treat that as "not applicable",
    /// not as a failure.
    fn share(&self, share: &str) -> Option<Box<dyn GrantExecutable>>;
}

/// One concrete grant/revoke/show action against a bound grantee
pub trait GrantExecutable {
    /// SQL listing every grant in the scope
    fn show(&self) -> String;

    /// SQL granting `privilege` to the grantee
    fn grant(&self, privilege: &str, with_grant_option: bool) -> String;

    /// SQL revoking `privilege` from the grantee. Returned as a sequence
    /// because some strategies need several statements; order matters.
    fn revoke(&self, privilege: &str) -> Vec<String>;
}
