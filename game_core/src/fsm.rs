//! Match State Machine
//!
//! Owns the phase of a match and the legal moves between phases. Scoring,
//! cooldowns and serving are carried out by the engine around these
//! transitions.

use serde::Serialize;

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No match running, scores are zero
    Idle,
    /// Positions reset, ball about to move
    Serving,
    /// Ball in play
    Rallying,
    /// A point just ended; break before the next serve
    PointScored,
    /// Someone reached the winning score
    MatchOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// External start/continue trigger
    Start,
    /// Serve delay elapsed, ball starts moving
    BeginRally,
    /// Goal that does not end the match
    PointWon,
    /// Goal that reaches the winning score
    MatchWon,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_phase: Phase,
    action: MatchAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_phase(&self) -> Phase {
        self.from_phase
    }

    pub fn action(&self) -> MatchAction {
        self.action
    }
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    phase: Phase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Get current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_phase = self.phase;

        if let Some(next_phase) = self.next_phase(action) {
            self.phase = next_phase;
            log::debug!("match phase {:?} -> {:?} ({:?})", from_phase, next_phase, action);
            TransitionResult {
                success: true,
                from_phase,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_phase,
                action,
            }
        }
    }

    /// Get next phase for a given action (if valid)
    fn next_phase(&self, action: MatchAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::Idle, MatchAction::Start) => Some(Phase::Serving),

            (Phase::Serving, MatchAction::BeginRally) => Some(Phase::Rallying),

            (Phase::Rallying, MatchAction::PointWon) => Some(Phase::PointScored),
            (Phase::Rallying, MatchAction::MatchWon) => Some(Phase::MatchOver),

            (Phase::PointScored, MatchAction::Start) => Some(Phase::Serving),

            // Acknowledging a finished match goes back to Idle first
            (Phase::MatchOver, MatchAction::Start) => Some(Phase::Idle),

            // Invalid transition
            _ => None,
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
