use std::sync::{Condvar, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitState {
    Idle,
    Running,
    Ready,
}

/// Single-flight guard for process-wide backend initialization (schema
/// creation, connection setup, ...).
///
/// Semantics:
/// - the first caller of [`initialize`](Self::initialize) runs the setup
///   closure;
/// - concurrent callers block until that attempt finishes and then observe
///   the outcome: success latches the guard, so they (and every later caller)
///   return `Ok` without running their closure;
/// - failure resets the guard, so the next caller retries with its own
///   closure. Each caller runs its closure at most once, so a persistent
///   fault surfaces as an error rather than a livelock.
#[derive(Debug, Default)]
pub struct InitGuard {
    state: Mutex<InitState>,
    cvar: Condvar,
}

impl Default for InitState {
    fn default() -> Self {
        InitState::Idle
    }
}

impl InitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a previous initialization attempt has succeeded.
    pub fn is_ready(&self) -> bool {
        self.state
            .lock()
            .map(|s| *s == InitState::Ready)
            .unwrap_or(false)
    }

    /// Run backend setup, single-flight across the process.
    pub fn initialize<F, E>(&self, setup: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        {
            let mut state = match self.state.lock() {
                Ok(s) => s,
                // A poisoned guard means a setup closure panicked while we
                // held the lock; treat the guard as idle and let this caller
                // try again.
                Err(poisoned) => poisoned.into_inner(),
            };

            loop {
                match *state {
                    InitState::Ready => return Ok(()),
                    InitState::Idle => {
                        *state = InitState::Running;
                        break;
                    }
                    InitState::Running => {
                        state = match self.cvar.wait(state) {
                            Ok(s) => s,
                            Err(poisoned) => poisoned.into_inner(),
                        };
                    }
                }
            }
        }

        // We are the leader; run setup without holding the lock.
        let outcome = setup();

        let mut state = match self.state.lock() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        };
        *state = if outcome.is_ok() {
            InitState::Ready
        } else {
            InitState::Idle
        };
        drop(state);
        self.cvar.notify_all();

        outcome
    }
}
