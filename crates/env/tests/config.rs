use env::{Action, ControlBotEnv, Env, EnvConfig, EnvError, Observation, Pose};

#[test]
fn defaults_match_the_reference_vehicle() {
    let config = EnvConfig::default();
    assert_eq!(config.max_speed, 10.0);
    assert_eq!(config.field_size, 600.0);
    assert_eq!(config.track_width, 5.0);
    assert!(config.validate().is_ok());
    assert_eq!(config.start_pose(), Pose::new(300.0, 300.0, 0.0));
}

#[test]
fn empty_json_object_uses_defaults() {
    let config = EnvConfig::from_json_str("{}").unwrap();
    assert_eq!(config, EnvConfig::default());
}

#[test]
fn partial_json_overrides_named_fields() {
    let config = EnvConfig::from_json_str(r#"{ "field_size": 200.0, "track_width": 2.5 }"#).unwrap();
    assert_eq!(config.max_speed, 10.0);
    assert_eq!(config.field_size, 200.0);
    assert_eq!(config.track_width, 2.5);
}

#[test]
fn unknown_keys_and_bad_json_are_config_errors() {
    assert!(matches!(
        EnvConfig::from_json_str(r#"{ "wheel_base": 3.0 }"#),
        Err(EnvError::Config(_))
    ));
    assert!(matches!(EnvConfig::from_json_str("not json"), Err(EnvError::Config(_))));
}

#[test]
fn validation_names_the_offending_field() {
    let err = EnvConfig::from_json_str(r#"{ "max_speed": 0.0 }"#).unwrap_err();
    assert!(matches!(err, EnvError::InvalidConfig { field: "max_speed", .. }));

    let err = EnvConfig::from_json_str(r#"{ "field_size": -1.0 }"#).unwrap_err();
    assert!(matches!(err, EnvError::InvalidConfig { field: "field_size", .. }));

    let err = EnvConfig::from_json_str(r#"{ "track_width": 0.0 }"#).unwrap_err();
    assert!(matches!(err, EnvError::Domain(_)));
}

#[test]
fn bounds_are_closed() {
    let config = EnvConfig::default();
    assert!(config.in_bounds(Pose::new(0.0, 0.0, 0.0)));
    assert!(config.in_bounds(Pose::new(600.0, 600.0, 1.0)));
    assert!(!config.in_bounds(Pose::new(600.01, 300.0, 0.0)));
    assert!(!config.in_bounds(Pose::new(300.0, -0.01, 0.0)));
    assert!(!config.in_bounds(Pose::new(f32::NAN, 300.0, 0.0)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = EnvConfig::load("does/not/exist.json").unwrap_err();
    assert!(matches!(err, EnvError::Io(_)));
}

#[test]
fn round_trips_through_json() {
    let config = EnvConfig {
        max_speed: 4.0,
        field_size: 50.0,
        track_width: 1.5,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(EnvConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn actions_and_observations_use_named_json_fields() {
    let action: Action = serde_json::from_str(r#"{ "v_l": 1.5, "v_r": -2.0 }"#).unwrap();
    assert_eq!(action, Action::new(1.5, -2.0));
    assert!(serde_json::from_str::<Action>(r#"{ "v_l": 1.0 }"#).is_err());

    let mut env = ControlBotEnv::new(EnvConfig::default()).unwrap();
    env.reset(None);
    let obs = env.step(action).unwrap().observation;
    let json = serde_json::to_value(obs).unwrap();
    assert_eq!(json["dl"], 1.5);
    assert_eq!(json["dr"], -2.0);
    assert_eq!(serde_json::from_value::<Observation>(json).unwrap(), obs);
}
