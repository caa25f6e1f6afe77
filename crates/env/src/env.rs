use crate::error::EnvError;
use std::collections::BTreeMap;

/// Auxiliary diagnostics attached to resets and steps. Empty for
/// [`crate::ControlBotEnv`].
pub type Info = BTreeMap<String, f32>;

/// Everything a single [`Env::step`] produces.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult<O> {
    pub observation: O,
    pub reward: f32,
    /// The episode reached a terminal state of the underlying task.
    pub terminated: bool,
    /// The episode was cut short by something outside the task, such as a
    /// [`crate::TimeLimit`].
    pub truncated: bool,
    pub info: Info,
}

impl<O> StepResult<O> {
    /// True when the caller should reset before stepping again.
    #[must_use]
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Episodic environment driven one action at a time.
///
/// An episode ends in one of two ways, reported separately by [`step`]:
/// `terminated` when the task itself reaches an end state (for ControlBot,
/// leaving the field), `truncated` when something outside the task cuts it
/// short. After either, the caller resets before stepping again.
///
/// Implementations are single-threaded state machines: both methods take
/// `&mut self` and complete synchronously.
///
/// [`step`]: Env::step
pub trait Env {
    type Action;
    type Observation;

    /// Reset the environment to its starting state and return the initial
    /// observation.
    ///
    /// `seed` reseeds the environment's random number generator when given.
    fn reset(&mut self, seed: Option<u64>) -> (Self::Observation, Info);

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Implementations reject actions that violate their action space and
    /// steps taken while no episode is active. A rejected step must leave the
    /// environment unchanged.
    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>, EnvError>;

    /// Number of scalars in a flattened observation.
    fn obs_size(&self) -> usize;

    /// Number of scalars in a flattened action.
    fn action_size(&self) -> usize;
}
