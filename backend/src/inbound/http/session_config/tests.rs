//! Unit tests for session configuration parsing.

use std::collections::HashMap;

use mockable::MockEnv;
use rstest::rstest;
use uuid::Uuid;

use super::*;

struct TempKeyFile {
    path: PathBuf,
}

impl TempKeyFile {
    fn new(len: usize) -> Self {
        let path = std::env::temp_dir().join(format!("todo-session-key-{}", Uuid::new_v4()));
        std::fs::write(&path, vec![b'k'; len]).expect("write key file");
        Self { path }
    }

    fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempKeyFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn mock_env(vars: &[(&str, String)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(name, value)| ((*name).to_owned(), value.clone()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn release_env(key: &TempKeyFile, overrides: &[(&str, &str)]) -> MockEnv {
    let mut vars = vec![
        (KEY_FILE_ENV, key.path_str()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ];
    for (name, value) in overrides {
        vars.retain(|(existing, _)| existing != name);
        vars.push((*name, (*value).to_owned()));
    }
    mock_env(&vars)
}

#[rstest]
fn release_accepts_complete_configuration() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let settings = session_settings_from_env(&release_env(&key, &[]), BuildMode::Release)
        .expect("valid release settings");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_rejects_missing_toggles(#[case] missing: &'static str) {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let vars: Vec<_> = [
        (KEY_FILE_ENV, key.path_str()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Lax".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ]
    .into_iter()
    .filter(|(name, _)| *name != missing)
    .collect();

    let result = session_settings_from_env(&mock_env(&vars), BuildMode::Release);
    assert!(matches!(
        result,
        Err(SessionConfigError::MissingEnv { name }) if name == missing
    ));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(SAMESITE_ENV, "sideways")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
fn release_rejects_invalid_values(#[case] name: &'static str, #[case] value: &str) {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let result = session_settings_from_env(&release_env(&key, &[(name, value)]), BuildMode::Release);
    assert!(matches!(
        result,
        Err(SessionConfigError::InvalidEnv { name: reported, .. }) if reported == name
    ));
}

#[rstest]
fn release_rejects_same_site_none_without_secure() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let env = release_env(&key, &[(COOKIE_SECURE_ENV, "0"), (SAMESITE_ENV, "None")]);
    assert!(matches!(
        session_settings_from_env(&env, BuildMode::Release),
        Err(SessionConfigError::InsecureSameSiteNone)
    ));
}

#[rstest]
fn release_rejects_ephemeral_keys() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let env = release_env(&key, &[(ALLOW_EPHEMERAL_ENV, "yes")]);
    assert!(matches!(
        session_settings_from_env(&env, BuildMode::Release),
        Err(SessionConfigError::EphemeralNotAllowed)
    ));
}

#[rstest]
fn release_rejects_short_key() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN - 1);
    assert!(matches!(
        session_settings_from_env(&release_env(&key, &[]), BuildMode::Release),
        Err(SessionConfigError::KeyTooShort { length, .. }) if length == SESSION_KEY_MIN_LEN - 1
    ));
}

#[rstest]
fn release_rejects_unreadable_key() {
    let env = mock_env(&[
        (KEY_FILE_ENV, format!("/nonexistent/{}", Uuid::new_v4())),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ]);
    assert!(matches!(
        session_settings_from_env(&env, BuildMode::Release),
        Err(SessionConfigError::KeyRead { .. })
    ));
}

#[rstest]
fn debug_falls_back_to_defaults() {
    let env = mock_env(&[(KEY_FILE_ENV, format!("/nonexistent/{}", Uuid::new_v4()))]);
    let settings =
        session_settings_from_env(&env, BuildMode::Debug).expect("debug tolerates gaps");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case("1", true)]
#[case("TRUE", true)]
#[case("y", true)]
#[case("no", false)]
#[case("0", false)]
fn boolean_spellings_are_accepted(#[case] raw: &str, #[case] expected: bool) {
    assert_eq!(parse_bool(raw), Some(expected));
}

#[rstest]
fn debug_allows_insecure_same_site_none() {
    let env = mock_env(&[
        (KEY_FILE_ENV, format!("/nonexistent/{}", Uuid::new_v4())),
        (COOKIE_SECURE_ENV, "0".to_owned()),
        (SAMESITE_ENV, "None".to_owned()),
    ]);
    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug tolerates");
    assert!(!settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::None);
}
