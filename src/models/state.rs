use std::fmt;

/// Lifecycle of a [`crate::Controller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Loading,
    Presenting,
    Finished,
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControllerState::Idle => "idle",
            ControllerState::Loading => "loading",
            ControllerState::Presenting => "presenting",
            ControllerState::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Final tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub correct_count: usize,
    pub total: usize,
}

impl Summary {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct_count as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}
