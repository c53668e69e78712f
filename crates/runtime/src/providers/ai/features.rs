//! Feature vector assembly.
//!
//! Four slots score forward/left/right/behind in the agent's frame; a fifth
//! carries the target-direction code. Local rewards and penalties are applied
//! through [`RuleChain`]s: ordered probes of the agent's absolute neighbors
//! where only the first matching rule adjusts its slot.

use maze_core::{BehaviorConfig, Direction, RelativeDirection};

use super::context::TickContext;

/// Scorer input for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector {
    slots: [f32; RelativeDirection::COUNT],
    target_code: f32,
}

impl FeatureVector {
    /// Base vector: `move_base` for every legal relative move, zero otherwise.
    pub fn from_mobility(ctx: &TickContext<'_>, move_base: f32) -> Self {
        let mut slots = [0.0; RelativeDirection::COUNT];
        for relative in [
            RelativeDirection::Forward,
            RelativeDirection::Left,
            RelativeDirection::Right,
            RelativeDirection::Behind,
        ] {
            if ctx.can_move(relative) {
                slots[relative.index()] = move_base;
            }
        }

        Self {
            slots,
            target_code: 0.0,
        }
    }

    pub fn from_slots(slots: [f32; RelativeDirection::COUNT]) -> Self {
        Self {
            slots,
            target_code: 0.0,
        }
    }

    pub fn get(&self, relative: RelativeDirection) -> f32 {
        self.slots[relative.index()]
    }

    /// Adds `delta` in double precision and narrows the sum back to `f32`.
    pub fn adjust(&mut self, relative: RelativeDirection, delta: f64) {
        let slot = &mut self.slots[relative.index()];
        *slot = (f64::from(*slot) + delta) as f32;
    }

    pub fn target_code(&self) -> f32 {
        self.target_code
    }

    /// Encodes the target direction into the fifth feature.
    ///
    /// The code is zero when a target exists and the no-direction code
    /// otherwise, so with the current encoding the feature is always zero.
    /// Scorers in use were trained against exactly this input.
    pub fn encode_target(&mut self, target: Option<Direction>) {
        self.target_code = match target {
            Some(_) => 0.0,
            None => Direction::code(target),
        };
    }

    pub fn to_array(&self) -> [f32; BehaviorConfig::FEATURE_COUNT] {
        let [forward, left, right, behind] = self.slots;
        [forward, left, right, behind, self.target_code]
    }
}

/// One link of a first-match chain: probe an absolute neighbor, credit a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborRule {
    pub probe: Direction,
    pub slot: RelativeDirection,
}

/// Probe order shared by the pellet reward and hotspot penalty chains.
pub const NEIGHBOR_RULES: [NeighborRule; 4] = [
    NeighborRule {
        probe: Direction::Up,
        slot: RelativeDirection::Forward,
    },
    NeighborRule {
        probe: Direction::Down,
        slot: RelativeDirection::Behind,
    },
    NeighborRule {
        probe: Direction::Left,
        slot: RelativeDirection::Left,
    },
    NeighborRule {
        probe: Direction::Right,
        slot: RelativeDirection::Right,
    },
];

/// Ordered rules evaluated until the first one whose condition holds.
#[derive(Clone, Copy, Debug)]
pub struct RuleChain<'r> {
    rules: &'r [NeighborRule],
    delta: f64,
}

impl<'r> RuleChain<'r> {
    pub const fn new(rules: &'r [NeighborRule], delta: f64) -> Self {
        Self { rules, delta }
    }

    /// Applies `delta` to the slot of the first rule whose probe satisfies
    /// `condition`. Returns the adjusted slot, if any.
    pub fn apply<F>(&self, features: &mut FeatureVector, mut condition: F) -> Option<RelativeDirection>
    where
        F: FnMut(Direction) -> bool,
    {
        let rule = self.rules.iter().find(|rule| condition(rule.probe))?;
        features.adjust(rule.slot, self.delta);
        Some(rule.slot)
    }
}
