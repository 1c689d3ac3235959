//! Unit tests for session configuration parsing.

use std::collections::HashMap;

use mockable::MockEnv;
use rstest::rstest;
use uuid::Uuid;

use super::*;

struct KeyFile(PathBuf);

impl KeyFile {
    fn with_len(len: usize) -> Self {
        let path = std::env::temp_dir().join(format!("eatinery-session-key-{}", Uuid::new_v4()));
        std::fs::write(&path, vec![b'k'; len]).expect("write temporary key file");
        Self(path)
    }

    fn path(&self) -> String {
        self.0.to_string_lossy().into_owned()
    }
}

impl Drop for KeyFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn mock_env(vars: &[(&str, &str)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn release_env(key: &KeyFile, overrides: &[(&'static str, &'static str)]) -> MockEnv {
    let path = key.path();
    let mut vars: Vec<(&str, &str)> = vec![
        (KEY_FILE_ENV, path.as_str()),
        (COOKIE_SECURE_ENV, "1"),
        (SAMESITE_ENV, "Strict"),
        (ALLOW_EPHEMERAL_ENV, "0"),
    ];
    for (name, value) in overrides {
        vars.retain(|(existing, _)| existing != name);
        vars.push((name, value));
    }
    mock_env(&vars)
}

#[rstest]
fn release_accepts_complete_configuration() {
    let key = KeyFile::with_len(MIN_KEY_LEN);
    let env = release_env(&key, &[(SAMESITE_ENV, "lax")]);

    let settings = session_settings_from_env(&env, BuildMode::Release).expect("valid settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_rejects_missing_toggle(#[case] missing: &'static str) {
    let key = KeyFile::with_len(MIN_KEY_LEN);
    let path = key.path();
    let vars: Vec<(&str, &str)> = [
        (KEY_FILE_ENV, path.as_str()),
        (COOKIE_SECURE_ENV, "1"),
        (SAMESITE_ENV, "Strict"),
        (ALLOW_EPHEMERAL_ENV, "0"),
    ]
    .into_iter()
    .filter(|(name, _)| *name != missing)
    .collect();

    let err = session_settings_from_env(&mock_env(&vars), BuildMode::Release)
        .err()
        .expect("missing toggle is rejected");
    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(SAMESITE_ENV, "sideways")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
fn release_rejects_invalid_toggle(#[case] name: &'static str, #[case] value: &'static str) {
    let key = KeyFile::with_len(MIN_KEY_LEN);
    let env = release_env(&key, &[(name, value)]);

    let err = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("invalid toggle is rejected");
    assert!(matches!(err, SessionConfigError::InvalidEnv { name: n, .. } if n == name));
}

#[rstest]
fn release_rejects_short_key() {
    let key = KeyFile::with_len(MIN_KEY_LEN - 1);
    let env = release_env(&key, &[]);

    let err = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("short key is rejected");
    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort { length, .. } if length == MIN_KEY_LEN - 1
    ));
}

#[rstest]
fn release_rejects_same_site_none_without_secure_cookie() {
    let key = KeyFile::with_len(MIN_KEY_LEN);
    let env = release_env(&key, &[(COOKIE_SECURE_ENV, "0"), (SAMESITE_ENV, "None")]);

    let err = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("SameSite=None needs secure cookies");
    assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));
}

#[rstest]
fn release_rejects_ephemeral_keys() {
    let key = KeyFile::with_len(MIN_KEY_LEN);
    let env = release_env(&key, &[(ALLOW_EPHEMERAL_ENV, "yes")]);

    let err = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("ephemeral keys are refused");
    assert!(matches!(err, SessionConfigError::EphemeralNotAllowed));
}

#[rstest]
fn release_rejects_unreadable_key_file() {
    let missing = format!("/nonexistent/eatinery-{}", Uuid::new_v4());
    let env = mock_env(&[
        (KEY_FILE_ENV, missing.as_str()),
        (COOKIE_SECURE_ENV, "1"),
        (SAMESITE_ENV, "Strict"),
        (ALLOW_EPHEMERAL_ENV, "0"),
    ]);

    let err = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("unreadable key is rejected");
    assert!(matches!(err, SessionConfigError::KeyRead { .. }));
}

#[rstest]
fn debug_defaults_fill_every_gap() {
    let missing = format!("/nonexistent/eatinery-{}", Uuid::new_v4());
    let env = mock_env(&[(KEY_FILE_ENV, missing.as_str())]);

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case("None", "0", SameSite::None, false)]
#[case("bogus", "nope", SameSite::Lax, true)]
fn debug_tolerates_questionable_values(
    #[case] same_site: &str,
    #[case] secure: &str,
    #[case] expected_same_site: SameSite,
    #[case] expected_secure: bool,
) {
    let key = KeyFile::with_len(8);
    let path = key.path();
    let env = mock_env(&[
        (KEY_FILE_ENV, path.as_str()),
        (COOKIE_SECURE_ENV, secure),
        (SAMESITE_ENV, same_site),
    ]);

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug settings");
    assert_eq!(settings.same_site, expected_same_site);
    assert_eq!(settings.cookie_secure, expected_secure);
}

#[rstest]
#[case("1", Some(true))]
#[case(" TRUE ", Some(true))]
#[case("no", Some(false))]
#[case("y", None)]
fn parse_flag_accepts_documented_literals(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parse_flag(raw), expected);
}
