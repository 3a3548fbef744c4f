//! Layered configuration loading: defaults, TOML file, environment.

use std::path::Path;

use figment::Jail;
use sailsim::{ConfigError, SailModel, SimConfig};

fn load(path: Option<&str>) -> Result<SimConfig, ConfigError> {
    SimConfig::load(path.map(Path::new))
}

#[test]
fn defaults_apply_without_overrides() {
    Jail::expect_with(|_jail| {
        let config = load(None).map_err(|e| e.to_string())?;
        assert_eq!(config, SimConfig::default());
        Ok(())
    });
}

#[test]
fn toml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "sail.toml",
            r#"
            [physics]
            boat_mass = 80.0
            sail_model = "instantaneous"

            [wind]
            speed = 9.5
            "#,
        )?;
        let config = load(Some("sail.toml")).map_err(|e| e.to_string())?;
        assert!((config.physics.boat_mass - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.physics.sail_model, SailModel::Instantaneous);
        assert!((config.wind.speed - 9.5).abs() < f64::EPSILON);
        assert!((config.wind.period - 120.0).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("sail.toml", "[navigation]\nseed = 3\narrival_radius = 5.0\n")?;
        jail.set_env("SAILSIM_NAVIGATION__SEED", "42");
        jail.set_env("SAILSIM_PHYSICS__MAX_SUBSTEP", "0.01");
        let config = load(Some("sail.toml")).map_err(|e| e.to_string())?;
        assert_eq!(config.navigation.seed, 42);
        assert!((config.navigation.arrival_radius - 5.0).abs() < f64::EPSILON);
        assert!((config.physics.max_substep - 0.01).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected_after_merging() {
    Jail::expect_with(|jail| {
        jail.set_env("SAILSIM_PHYSICS__BOAT_MASS", "-1");
        let err = load(None).expect_err("negative mass must be rejected");
        assert!(matches!(
            err,
            ConfigError::NotPositive {
                field: "physics.boat_mass",
                ..
            }
        ));
        Ok(())
    });
}

#[test]
fn malformed_file_is_an_extraction_error() {
    Jail::expect_with(|jail| {
        jail.create_file("sail.toml", "[physics]\nboat_mass = \"heavy\"\n")?;
        let err = load(Some("sail.toml")).expect_err("string mass must be rejected");
        assert!(matches!(err, ConfigError::Extract(_)));
        Ok(())
    });
}
