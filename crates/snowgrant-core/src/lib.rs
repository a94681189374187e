//! # Snowgrant Core
//!
//! SQL statement construction for Snowflake ALL-object privilege grants.

pub mod all_grant;
pub mod grant;
pub mod types;

pub use all_grant::*;
pub use grant::*;
pub use types::*;
