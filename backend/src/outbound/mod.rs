//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local store used when no database is configured
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **security**: Argon2 password hashing
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
pub mod security;
