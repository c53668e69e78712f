use crate::direction::Direction;
use crate::state::WorldPosition;

/// Control surface of the agent a decision core steers.
///
/// Implemented by the host game's entity. `kill` is fire-and-forget and must
/// be safe to call more than once.
pub trait AgentControl {
    /// Current absolute movement direction.
    fn facing(&self) -> Direction;

    fn position(&self) -> WorldPosition;

    /// Whether a move in `direction` is legal right now.
    fn can_move(&self, direction: Direction) -> bool;

    /// Terminates the agent for the rest of the episode.
    fn kill(&mut self);
}
