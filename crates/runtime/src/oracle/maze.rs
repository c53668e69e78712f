//! Grid maze served through [`maze_core::MazeOracle`].
use maze_core::{
    DEFAULT_TILE_SIZE, MazeDimensions, MazeError, MazeOracle, TilePosition, TileState,
};

/// MazeOracle implementation backed by a dense tile grid.
///
/// Layout text lists rows from the top of the maze down, so the first line is
/// the highest `y` and the last line is `y = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMaze {
    dimensions: MazeDimensions,
    tiles: Vec<TileState>,
    tile_size: f32,
}

impl GridMaze {
    /// Creates a maze where every tile has the same state.
    pub fn filled(dimensions: MazeDimensions, state: TileState) -> Self {
        Self {
            dimensions,
            tiles: vec![state; dimensions.area()],
            tile_size: DEFAULT_TILE_SIZE,
        }
    }

    /// Parses an ASCII layout: `#` wall, `.` pellet, `o` power pellet,
    /// space or `-` empty floor.
    pub fn parse(layout: &str) -> Result<Self, MazeError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(MazeError::EmptyLayout);
        }

        let height = rows.len();
        let dimensions = MazeDimensions::new(width as u32, height as u32);
        let mut maze = Self::filled(dimensions, TileState::Empty);

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            let y = (height - 1 - row) as i32;
            for (x, glyph) in line.chars().enumerate() {
                let position = TilePosition::new(x as i32, y);
                let state = TileState::from_glyph(glyph)
                    .ok_or(MazeError::UnknownGlyph { glyph, position })?;
                maze.set_tile(position, state)?;
            }
        }

        Ok(maze)
    }

    pub fn with_tile_size(mut self, tile_size: f32) -> Result<Self, MazeError> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(MazeError::InvalidTileSize { tile_size });
        }
        self.tile_size = tile_size;
        Ok(self)
    }

    pub fn set_tile(&mut self, position: TilePosition, state: TileState) -> Result<(), MazeError> {
        let index = self
            .index(position)
            .ok_or(MazeError::OutOfBounds { position })?;
        self.tiles[index] = state;
        Ok(())
    }

    /// Clears a pellet from `position`, returning what was eaten.
    pub fn eat(&mut self, position: TilePosition) -> Option<TileState> {
        let index = self.index(position)?;
        let state = self.tiles[index];
        if !state.has_pellet() {
            return None;
        }
        self.tiles[index] = TileState::Empty;
        Some(state)
    }

    pub fn pellet_count(&self) -> usize {
        self.tiles.iter().filter(|state| state.has_pellet()).count()
    }

    /// Renders the maze back to layout text, top row first.
    pub fn render(&self) -> String {
        let (width, height) = (self.dimensions.width as i32, self.dimensions.height as i32);
        let mut out = String::with_capacity(self.tiles.len() + height as usize);
        for y in (0..height).rev() {
            for x in 0..width {
                let state = self.tile(TilePosition::new(x, y)).unwrap_or_default();
                out.push(state.glyph());
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, position: TilePosition) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

impl MazeOracle for GridMaze {
    fn dimensions(&self) -> MazeDimensions {
        self.dimensions
    }

    fn tile(&self, position: TilePosition) -> Option<TileState> {
        self.index(position).map(|index| self.tiles[index])
    }

    fn tile_size(&self) -> f32 {
        self.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{CoreError, Direction, ErrorSeverity};

    #[test]
    fn first_line_is_the_top_row() {
        let maze = GridMaze::parse("#.#\n# #\n#o#").unwrap();
        assert_eq!(maze.dimensions(), MazeDimensions::new(3, 3));
        assert_eq!(maze.tile(TilePosition::new(1, 2)), Some(TileState::Pellet));
        assert_eq!(maze.tile(TilePosition::new(1, 0)), Some(TileState::PowerPellet));
        assert_eq!(
            maze.neighbor(TilePosition::new(1, 1), Direction::Up),
            Some(TileState::Pellet)
        );
    }

    #[test]
    fn outside_tiles_are_unknown() {
        let maze = GridMaze::parse("#").unwrap();
        assert_eq!(maze.tile(TilePosition::new(1, 0)), None);
        assert_eq!(maze.tile(TilePosition::new(0, -1)), None);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = GridMaze::parse("###\n#\n###").unwrap_err();
        assert_eq!(
            err,
            MazeError::RaggedRow {
                row: 1,
                expected: 3,
                found: 1
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn rejects_unknown_glyphs_and_empty_layouts() {
        assert!(matches!(
            GridMaze::parse("#x#"),
            Err(MazeError::UnknownGlyph { glyph: 'x', .. })
        ));
        assert_eq!(GridMaze::parse(""), Err(MazeError::EmptyLayout));
    }

    #[test]
    fn eating_clears_pellets_once() {
        let mut maze = GridMaze::parse("#.o#").unwrap();
        assert_eq!(maze.pellet_count(), 2);
        assert_eq!(maze.eat(TilePosition::new(1, 0)), Some(TileState::Pellet));
        assert_eq!(maze.eat(TilePosition::new(1, 0)), None);
        assert_eq!(maze.pellet_count(), 1);
    }

    #[test]
    fn render_matches_layout() {
        let layout = "#####\n#. o#\n#####\n";
        assert_eq!(GridMaze::parse(layout).unwrap().render(), layout);
    }

    #[test]
    fn tile_size_must_be_positive() {
        let maze = GridMaze::parse("#").unwrap();
        assert!(maze.clone().with_tile_size(16.0).is_ok());
        assert!(matches!(
            maze.with_tile_size(0.0),
            Err(MazeError::InvalidTileSize { .. })
        ));
    }

    #[test]
    fn set_tile_out_of_bounds() {
        let mut maze = GridMaze::parse("#").unwrap();
        let position = TilePosition::new(3, 3);
        assert_eq!(
            maze.set_tile(position, TileState::Pellet),
            Err(MazeError::OutOfBounds { position })
        );
    }
}
