use maze_core::TilePosition;

/// Append-only memory of tiles the agent was sampled on.
///
/// Entries are never pruned during an episode and repeated samples of the same
/// tile are all kept; growth is bounded by episode length, which the watchdogs
/// cap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HotspotMemory {
    tiles: Vec<TilePosition>,
}

impl HotspotMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tile: TilePosition) {
        self.tiles.push(tile);
    }

    pub fn contains(&self, tile: TilePosition) -> bool {
        self.tiles.contains(&tile)
    }

    /// Number of samples taken, counting repeats.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Samples in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &TilePosition> {
        self.tiles.iter()
    }
}
