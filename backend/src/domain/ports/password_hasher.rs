//! Port for one-way password hashing.
//!
//! Implementations are synchronous and CPU bound; services run them on the
//! blocking thread pool.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised by password hashers.
    pub enum PasswordHashError {
        /// Hashing the plaintext failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// The stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produce an encoded hash with a fresh salt.
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Check `password` against a stored hash.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError>;
}
