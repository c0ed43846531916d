//! Cookie session settings for flash feedback.
//!
//! The session only carries one-shot feedback between a redirect and the next
//! page, but the cookie is still signed and encrypted. Release builds require
//! every toggle to be set explicitly; debug builds fall back to defaults with
//! a warning.
//!
//! | Variable                  | Values                  | Debug default |
//! |---------------------------|-------------------------|---------------|
//! | `SESSION_KEY_FILE`        | path to key bytes       | ephemeral key |
//! | `SESSION_COOKIE_SECURE`   | `1/0/true/false/yes/no` | `true`        |
//! | `SESSION_SAMESITE`        | `Strict/Lax/None`       | `Lax`         |
//! | `SESSION_ALLOW_EPHEMERAL` | `1/0/true/false/yes/no` | `false`       |

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Build mode deciding how strictly settings are validated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// `Debug` when compiled with debug assertions.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    /// In debug builds log `message` and use `fallback`; in release builds
    /// fail with `error`.
    fn tolerate<T>(
        self,
        fallback: T,
        error: SessionConfigError,
        message: &str,
    ) -> Result<T, SessionConfigError> {
        match self {
            Self::Debug => {
                warn!(%error, "{message}");
                Ok(fallback)
            }
            Self::Release => Err(error),
        }
    }
}

/// Validated session cookie settings.
pub struct SessionSettings {
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
}

/// Invalid or missing session configuration.
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

/// Read session settings from `env`.
///
/// # Examples
/// ```
/// use mockable::MockEnv;
/// use todo_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|_| None);
///
/// let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");
/// assert!(settings.cookie_secure);
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = flag(env, mode, COOKIE_SECURE_ENV, true)?;
    let same_site = same_site(env, mode, cookie_secure)?;
    let allow_ephemeral = flag(env, mode, ALLOW_EPHEMERAL_ENV, false)?;
    if allow_ephemeral && mode == BuildMode::Release {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }
    let key = session_key(env, mode, allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn flag<E: Env>(
    env: &E,
    mode: BuildMode,
    name: &'static str,
    default: bool,
) -> Result<bool, SessionConfigError> {
    let Some(value) = env.string(name) else {
        return mode.tolerate(
            default,
            SessionConfigError::MissingEnv { name },
            "session flag not set; using default",
        );
    };
    match parse_bool(&value) {
        Some(parsed) => Ok(parsed),
        None => mode.tolerate(
            default,
            SessionConfigError::InvalidEnv {
                name,
                value,
                expected: BOOL_EXPECTED,
            },
            "invalid session flag; using default",
        ),
    }
}

fn same_site<E: Env>(
    env: &E,
    mode: BuildMode,
    cookie_secure: bool,
) -> Result<SameSite, SessionConfigError> {
    let default = match mode {
        BuildMode::Debug => SameSite::Lax,
        BuildMode::Release => SameSite::Strict,
    };
    let Some(value) = env.string(SAMESITE_ENV) else {
        return mode.tolerate(
            default,
            SessionConfigError::MissingEnv { name: SAMESITE_ENV },
            "SESSION_SAMESITE not set; using default",
        );
    };
    match value.to_ascii_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" if cookie_secure => Ok(SameSite::None),
        "none" => mode.tolerate(
            SameSite::None,
            SessionConfigError::InsecureSameSiteNone,
            "browsers may reject SameSite=None cookies without Secure",
        ),
        _ => mode.tolerate(
            default,
            SessionConfigError::InvalidEnv {
                name: SAMESITE_ENV,
                value,
                expected: SAMESITE_EXPECTED,
            },
            "invalid SESSION_SAMESITE; using default",
        ),
    }
}

fn session_key<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
    );

    let mut bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(source) if mode == BuildMode::Debug || allow_ephemeral => {
            warn!(path = %path.display(), error = %source, "using temporary session key");
            return Ok(Key::generate());
        }
        Err(source) => return Err(SessionConfigError::KeyRead { path, source }),
    };

    let length = bytes.len();
    let result = if mode == BuildMode::Release && length < SESSION_KEY_MIN_LEN {
        Err(SessionConfigError::KeyTooShort {
            path,
            length,
            min_len: SESSION_KEY_MIN_LEN,
        })
    } else {
        Ok(Key::derive_from(&bytes))
    };
    bytes.zeroize();
    result
}

#[cfg(test)]
mod tests;
