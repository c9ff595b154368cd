use std::fs;
use tempfile::TempDir;
use tether::config::{BoundsConfig, ConfigError, WrappersConfig, load_config, load_config_with_env};
use tether::prelude::*;

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum Profile {
    Score,
    Cvv,
    Missing,
}

const PROFILES: &str = r#"
[ranges.score]
lower = 0
upper = 100

[ranges.broken]
lower = 10
upper = 1

[min_lengths]
cvv = 3
"#;

fn write_profiles(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("tether.toml");
    fs::write(&path, PROFILES).expect("write config");
    path
}

#[test]
fn loads_profiles_from_file() {
    let dir = TempDir::new().unwrap();
    let cfg: WrappersConfig = load_config_with_env(Some(write_profiles(&dir)), Some(Default::default())).unwrap();

    assert_eq!(cfg.ranges.get_by(Profile::Score), Some(&BoundsConfig { lower: 0, upper: 100 }));
    assert_eq!(cfg.min_lengths.get_by(Profile::Cvv), Some(&3));
}

#[test]
fn environment_overrides_file_values() {
    let dir = TempDir::new().unwrap();
    let env = [("TETHER__RANGES__SCORE__UPPER".to_owned(), "50".to_owned())].into_iter().collect();

    let cfg: WrappersConfig = load_config_with_env(Some(write_profiles(&dir)), Some(env)).unwrap();
    assert_eq!(cfg.ranges["score"], BoundsConfig { lower: 0, upper: 50 });

    let score = cfg.constrained(Profile::Score, 75).unwrap();
    assert_eq!(*score.get(), 50);
}

#[test]
fn builds_wrappers_from_profiles() {
    let dir = TempDir::new().unwrap();
    let cfg: WrappersConfig = load_config(Some(write_profiles(&dir))).unwrap();

    let score = cfg.constrained(Profile::Score, 150).unwrap();
    assert_eq!(*score.get(), 100);

    let mut cvv = cfg.min_length(Profile::Cvv, "000").unwrap();
    assert!(!cvv.set("12"));
    assert_eq!(cvv.get(), "000");
}

#[test]
fn unknown_profiles_are_reported() {
    let cfg = WrappersConfig::default();

    let err = cfg.constrained(Profile::Missing, 0).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownProfile { .. }));
    assert_eq!(err.to_string(), "Unknown profile: missing");

    assert!(matches!(cfg.min_length(Profile::Missing, "x"), Err(ConfigError::UnknownProfile { .. })));
}

#[test]
fn inverted_profile_bounds_are_reported_with_label() {
    #[derive(Clone, Copy, IntoStaticStr)]
    enum Broken {
        #[strum(serialize = "broken")]
        Profile,
    }

    let dir = TempDir::new().unwrap();
    let cfg: WrappersConfig = load_config(Some(write_profiles(&dir))).unwrap();

    let err = cfg.constrained(Broken::Profile, 5).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidProfile { source: WrapperError::InvalidRange { .. }, .. }));
    assert!(err.to_string().starts_with("Invalid profile (broken): Invalid range: "));
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config::<WrappersConfig>(Some(dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Config { .. })));
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();

    let cfg: WrappersConfig = load_config_with_env(Some(&path), Some(Default::default())).unwrap();
    assert_eq!(cfg, WrappersConfig::default());
}
