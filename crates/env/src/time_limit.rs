use crate::env::{Env, Info, StepResult};
use crate::error::EnvError;

/// Truncates episodes of the wrapped environment after a fixed number of
/// accepted steps.
///
/// The inner environment has no notion of episode length; this wrapper sets
/// [`StepResult::truncated`] once `max_episode_steps` steps have been taken
/// since the last reset, unless the same step already terminated.
pub struct TimeLimit<E> {
    inner: E,
    max_episode_steps: u64,
    elapsed_steps: u64,
}

impl<E: Env> TimeLimit<E> {
    #[must_use]
    pub fn new(inner: E, max_episode_steps: u64) -> Self {
        Self {
            inner,
            max_episode_steps,
            elapsed_steps: 0,
        }
    }

    #[must_use]
    pub const fn max_episode_steps(&self) -> u64 {
        self.max_episode_steps
    }

    #[must_use]
    pub const fn elapsed_steps(&self) -> u64 {
        self.elapsed_steps
    }

    #[must_use]
    pub const fn inner(&self) -> &E {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Env> Env for TimeLimit<E> {
    type Action = E::Action;
    type Observation = E::Observation;

    fn reset(&mut self, seed: Option<u64>) -> (Self::Observation, Info) {
        self.elapsed_steps = 0;
        self.inner.reset(seed)
    }

    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>, EnvError> {
        let mut result = self.inner.step(action)?;
        self.elapsed_steps += 1;
        if self.elapsed_steps >= self.max_episode_steps && !result.terminated {
            result.truncated = true;
        }
        Ok(result)
    }

    fn obs_size(&self) -> usize {
        self.inner.obs_size()
    }

    fn action_size(&self) -> usize {
        self.inner.action_size()
    }
}
