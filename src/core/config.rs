//! Rule configuration.

use serde::{Deserialize, Serialize};

/// Tunable rule parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Fences each player may place over the whole game (default: 10).
    pub fence_budget: u8,

    /// Whether a straight jump also requires the boundary between the
    /// jumped pawn and the landing cell to be open (default: true).
    /// When false only the boundary next to the mover is checked.
    pub jump_checks_far_boundary: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fence_budget: 10,
            jump_checks_far_boundary: true,
        }
    }
}

impl RulesConfig {
    pub fn with_fence_budget(mut self, budget: u8) -> Self {
        self.fence_budget = budget;
        self
    }

    pub fn with_jump_far_boundary_check(mut self, enabled: bool) -> Self {
        self.jump_checks_far_boundary = enabled;
        self
    }
}
