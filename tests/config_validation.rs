use responsive_analog::{Config, ConfigError, Instant, ResponsiveAnalog};

#[test]
fn test_default_config_is_valid() {
    assert_eq!(Config::default().validate(), Ok(()));
    assert!(ResponsiveAnalog::<u16>::try_new(Config::default()).is_ok());
}

#[test]
fn test_defaults_match_documented_values() {
    let config = Config::new(true, 0.05);

    assert_eq!(config.input_range, 1024);
    assert_eq!(config.snap_multiplier, 0.05);
    assert!(config.sleep_enabled);
    assert!(config.edge_snap_enabled);
    assert_eq!(config.sleep_delay.to_millis(), 500);
    assert_eq!(config.sleep_activity_threshold, 20);
    assert_eq!(config.awake_activity_threshold, 5);
}

#[test]
fn test_invalid_input_range() {
    let config = Config {
        input_range: 0,
        ..Config::default()
    };

    let result = ResponsiveAnalog::<u16>::try_new(config);
    assert!(matches!(result, Err(ConfigError::InvalidInputRange)));
}

#[test]
fn test_invalid_snap_multiplier() {
    for multiplier in [0.0, -0.5, 1.5, f32::NAN] {
        let config = Config::new(false, multiplier);

        let result = ResponsiveAnalog::<u16>::try_new(config);
        assert!(
            matches!(result, Err(ConfigError::InvalidSnapMultiplier)),
            "Multiplier {} should be rejected",
            multiplier
        );
    }

    assert_eq!(Config::new(false, 1.0).validate(), Ok(()));
}

#[test]
fn test_inverted_activity_thresholds() {
    let config = Config {
        sleep_activity_threshold: 4,
        awake_activity_threshold: 5,
        ..Config::default()
    };

    assert_eq!(config.validate(), Err(ConfigError::InvertedActivityThresholds));
}

#[test]
fn test_unvalidated_config_degrades_without_panicking() {
    let config = Config {
        input_range: 0,
        snap_multiplier: -1.0,
        sleep_activity_threshold: 0,
        awake_activity_threshold: 50,
        ..Config::default()
    };
    let mut channel = ResponsiveAnalog::new(config);

    for t in 0..2000 {
        let reading = channel.update(((t * 37) % 1024) as u16, Instant::from_ticks(t));
        assert_eq!(reading.value, 0);
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::InvalidInputRange.to_string(),
        "input_range must be greater than zero"
    );
    assert_eq!(
        ConfigError::InvalidSnapMultiplier.to_string(),
        "snap_multiplier must be in range (0.0, 1.0]"
    );
}
