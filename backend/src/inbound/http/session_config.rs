//! Session cookie settings read from the process environment.
//!
//! Debug builds fall back to permissive defaults with a warning; release
//! builds refuse to start unless every toggle is present and valid.

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::{info, warn};
use zeroize::Zeroize;

const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";

const DEFAULT_KEY_PATH: &str = "/var/run/secrets/eatinery_session_key";
const MIN_KEY_LEN: usize = 64;
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Whether missing or malformed toggles are tolerated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Mode of the running binary.
    ///
    /// ```rust
    /// use eatinery::inbound::http::session_config::BuildMode;
    ///
    /// let expected = if cfg!(debug_assertions) {
    ///     BuildMode::Debug
    /// } else {
    ///     BuildMode::Release
    /// };
    /// assert_eq!(BuildMode::from_debug_assertions(), expected);
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    /// In debug builds log `warning` and return `fallback`; otherwise fail.
    fn tolerate<T>(
        self,
        fallback: T,
        error: SessionConfigError,
        warning: impl FnOnce(),
    ) -> Result<T, SessionConfigError> {
        match self {
            Self::Debug => {
                warning();
                Ok(fallback)
            }
            Self::Release => Err(error),
        }
    }
}

/// Cookie signing key and attributes for the session middleware.
pub struct SessionSettings {
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
}

/// Reasons the session configuration was rejected.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Resolve [`SessionSettings`] from `env`.
///
/// The key file defaults to `/var/run/secrets/eatinery_session_key`. When it
/// cannot be read, debug builds (or `SESSION_ALLOW_EPHEMERAL=1`) generate a
/// throwaway key so local sessions still work; such sessions do not survive a
/// restart.
///
/// # Errors
///
/// Returns [`SessionConfigError`] in release mode when a toggle is missing or
/// invalid, when the key file is unreadable or shorter than 64 bytes, or when
/// `SameSite=None` is requested without secure cookies.
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = read_flag(env, mode, COOKIE_SECURE_ENV, true)?;
    let same_site = read_same_site(env, mode, cookie_secure)?;
    let allow_ephemeral = match read_flag(env, mode, ALLOW_EPHEMERAL_ENV, false)? {
        true if mode == BuildMode::Release => {
            return Err(SessionConfigError::EphemeralNotAllowed);
        }
        flag => flag,
    };
    let key = read_key(env, mode, allow_ephemeral)?;
    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn read_flag<E: Env>(
    env: &E,
    mode: BuildMode,
    name: &'static str,
    default: bool,
) -> Result<bool, SessionConfigError> {
    let Some(value) = env.string(name) else {
        return mode.tolerate(default, SessionConfigError::MissingEnv { name }, || {
            warn!(variable = name, default, "session toggle not set; using default");
        });
    };
    if let Some(flag) = parse_flag(&value) {
        return Ok(flag);
    }
    let warning_value = value.clone();
    mode.tolerate(
        default,
        SessionConfigError::InvalidEnv {
            name,
            value,
            expected: BOOL_EXPECTED,
        },
        || warn!(variable = name, value = %warning_value, default, "invalid session toggle; using default"),
    )
}

fn read_same_site<E: Env>(
    env: &E,
    mode: BuildMode,
    cookie_secure: bool,
) -> Result<SameSite, SessionConfigError> {
    let fallback = match mode {
        BuildMode::Debug => SameSite::Lax,
        BuildMode::Release => SameSite::Strict,
    };
    let Some(value) = env.string(SAMESITE_ENV) else {
        return mode.tolerate(
            fallback,
            SessionConfigError::MissingEnv { name: SAMESITE_ENV },
            || warn!("SESSION_SAMESITE not set; using default"),
        );
    };
    match value.to_ascii_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" if cookie_secure => Ok(SameSite::None),
        "none" => mode.tolerate(
            SameSite::None,
            SessionConfigError::InsecureSameSiteNone,
            || warn!("SESSION_SAMESITE=None without secure cookies; browsers may drop them"),
        ),
        _ => {
            let warning_value = value.clone();
            mode.tolerate(
                fallback,
                SessionConfigError::InvalidEnv {
                    name: SAMESITE_ENV,
                    value,
                    expected: SAMESITE_EXPECTED,
                },
                || warn!(value = %warning_value, "invalid SESSION_SAMESITE; using default"),
            )
        }
    }
}

fn read_key<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| DEFAULT_KEY_PATH.to_owned()),
    );
    match std::fs::read(&path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            if length < MIN_KEY_LEN {
                bytes.zeroize();
                let shown = path.display().to_string();
                return mode.tolerate(
                    Key::generate(),
                    SessionConfigError::KeyTooShort {
                        path,
                        length,
                        min_len: MIN_KEY_LEN,
                    },
                    || warn!(path = %shown, length, "session key too short; generating an ephemeral key"),
                );
            }
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            info!(path = %path.display(), "loaded session key");
            Ok(key)
        }
        Err(source) if mode == BuildMode::Debug || allow_ephemeral => {
            warn!(
                path = %path.display(),
                error = %source,
                "session key unreadable; generating an ephemeral key"
            );
            Ok(Key::generate())
        }
        Err(source) => Err(SessionConfigError::KeyRead { path, source }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
