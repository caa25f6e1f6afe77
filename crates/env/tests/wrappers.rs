//! Time-limit truncation and the environment registry.

use env::{
    Action, ControlBotEnv, Env, EnvConfig, EnvError, EpisodeState, Pose, Registry, TimeLimit,
    CONTROLBOT_V0,
};

#[test]
fn time_limit_truncates_on_the_last_allowed_step() {
    let inner = ControlBotEnv::new(EnvConfig::default()).unwrap();
    let mut env = TimeLimit::new(inner, 3);
    env.reset(None);

    let stop = Action::new(0.0, 0.0);
    assert!(!env.step(stop).unwrap().truncated);
    assert!(!env.step(stop).unwrap().truncated);
    let last = env.step(stop).unwrap();
    assert!(last.truncated);
    assert!(!last.terminated);
    assert!(last.done());
    assert_eq!(last.reward, 1.0);
    assert_eq!(env.elapsed_steps(), 3);
}

#[test]
fn time_limit_counter_restarts_on_reset() {
    let inner = ControlBotEnv::new(EnvConfig::default()).unwrap();
    let mut env = TimeLimit::new(inner, 2);
    env.reset(None);
    env.step(Action::new(1.0, 1.0)).unwrap();
    env.step(Action::new(1.0, 1.0)).unwrap();

    env.reset(None);
    assert_eq!(env.elapsed_steps(), 0);
    assert!(!env.step(Action::new(1.0, 1.0)).unwrap().truncated);
}

#[test]
fn termination_wins_over_truncation() {
    let mut inner = ControlBotEnv::new(EnvConfig::default()).unwrap();
    inner.reset_with_pose(Pose::new(0.0, 300.0, 0.0)).unwrap();
    let mut env = TimeLimit::new(inner, 1);

    let result = env.step(Action::new(-5.0, -5.0)).unwrap();
    assert!(result.terminated);
    assert!(!result.truncated);
    assert_eq!(env.inner().state(), EpisodeState::Terminated);
}

#[test]
fn rejected_steps_do_not_count_toward_the_limit() {
    let inner = ControlBotEnv::new(EnvConfig::default()).unwrap();
    let mut env = TimeLimit::new(inner, 1);
    env.reset(None);

    assert!(env.step(Action::new(50.0, 0.0)).is_err());
    assert_eq!(env.elapsed_steps(), 0);
    assert!(env.step(Action::new(0.0, 0.0)).unwrap().truncated);
}

#[test]
fn wrapper_forwards_sizes() {
    let inner = ControlBotEnv::new(EnvConfig::default()).unwrap();
    let env = TimeLimit::new(inner, 10);
    assert_eq!(env.obs_size(), 5);
    assert_eq!(env.action_size(), 2);
    assert_eq!(env.max_episode_steps(), 10);
}

#[test]
fn default_registry_makes_controlbot() {
    let registry = Registry::with_defaults();
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec![CONTROLBOT_V0]);

    let mut env = registry.make(CONTROLBOT_V0).unwrap();
    assert_eq!(env.state(), EpisodeState::Initialized);
    assert_eq!(*env.config(), EnvConfig::default());
    let (obs, _) = env.reset(None);
    assert_eq!((obs.x, obs.y), (300.0, 300.0));
}

#[test]
fn registry_instances_are_independent() {
    let registry = Registry::with_defaults();
    let mut a = registry.make(CONTROLBOT_V0).unwrap();
    let mut b = registry.make(CONTROLBOT_V0).unwrap();
    a.reset(None);
    b.reset(None);

    a.step(Action::new(5.0, 5.0)).unwrap();
    assert_eq!(a.pose().x, 305.0);
    assert_eq!(b.pose().x, 300.0);
}

#[test]
fn unknown_ids_are_reported() {
    let registry = Registry::with_defaults();
    let err = registry.make("ControlBot-v9").unwrap_err();
    assert!(matches!(err, EnvError::UnknownEnv(ref id) if id == "ControlBot-v9"));
}

#[test]
fn custom_registrations_replace_and_validate_on_make() {
    let mut registry = Registry::with_defaults();
    let small = EnvConfig {
        field_size: 20.0,
        ..EnvConfig::default()
    };
    assert_eq!(registry.register(CONTROLBOT_V0, small), Some(EnvConfig::default()));
    assert_eq!(registry.config(CONTROLBOT_V0), Some(&small));

    let broken = EnvConfig {
        track_width: 0.0,
        ..EnvConfig::default()
    };
    assert_eq!(registry.register("Broken-v0", broken), None);
    assert!(matches!(registry.make("Broken-v0"), Err(EnvError::Domain(_))));
}
