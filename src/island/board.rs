//! Board geometry.
//!
//! The board is a fixed 6x6 grid. Occupied cells hold a [`Tile`]; the rest
//! are [`Space::Empty`]. All neighbour queries silently skip cells that are
//! out of bounds or empty.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::SetupError;

use super::tile::{Tile, TileSpec};

/// Side length of the board.
pub const BOARD_SIZE: usize = 6;

/// Occupancy mask of the standard island.
pub const STANDARD_LAYOUT: [[bool; BOARD_SIZE]; BOARD_SIZE] = {
    const O: bool = false;
    const X: bool = true;
    [
        [O, O, X, X, O, O],
        [O, X, X, X, X, O],
        [X, X, X, X, X, X],
        [X, X, X, X, X, X],
        [O, X, X, X, X, O],
        [O, O, X, X, O, O],
    ]
};

/// A board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies an offset, returning `None` when it leaves the board.
    #[must_use]
    pub const fn offset(self, (dr, dc): (isize, isize)) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(dr) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(dc) else {
            return None;
        };
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Offset from `self` to `other`.
    #[must_use]
    pub const fn delta(self, other: Self) -> (isize, isize) {
        (
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        )
    }
}

/// A named set of offsets relative to a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reach {
    /// The coordinate itself.
    Same,
    /// The four orthogonal neighbours.
    Adjacent,
    /// The four diagonal neighbours.
    Diagonal,
    /// Orthogonal and diagonal neighbours plus orthogonal cells two steps away.
    DoubleAdjacent,
    /// Every cell but the coordinate itself.
    AllOther,
}

const SAME: [(isize, isize); 1] = [(0, 0)];
const ADJACENT: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const DOUBLE_ADJACENT: [(isize, isize); 12] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
];

impl Reach {
    /// Offsets in this set. Empty for [`Reach::AllOther`], which is not
    /// offset based.
    #[must_use]
    pub const fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Self::Same => &SAME,
            Self::Adjacent => &ADJACENT,
            Self::Diagonal => &DIAGONAL,
            Self::DoubleAdjacent => &DOUBLE_ADJACENT,
            Self::AllOther => &[],
        }
    }

    /// Returns whether `to` is within this set from `from`.
    #[must_use]
    pub fn contains(self, from: Coord, to: Coord) -> bool {
        match self {
            Self::AllOther => from != to,
            _ => self.offsets().contains(&from.delta(to)),
        }
    }
}

/// A cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// Open sea.
    Empty,
    /// A placed tile.
    Tile(Tile),
}

impl Space {
    /// Returns the tile, if any.
    #[must_use]
    pub const fn tile(&self) -> Option<&Tile> {
        match self {
            Self::Tile(tile) => Some(tile),
            Self::Empty => None,
        }
    }
}

/// The island board.
#[derive(Debug, Clone)]
pub struct Board {
    spaces: [[Space; BOARD_SIZE]; BOARD_SIZE],
    names: HashMap<&'static str, Coord>,
}

impl Board {
    /// Places tiles drawn at random from `pool` onto every occupied cell of
    /// `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NotEnoughTiles`] if the layout has more occupied
    /// cells than the pool has tiles.
    pub fn new<R: Rng + ?Sized>(
        layout: &[[bool; BOARD_SIZE]; BOARD_SIZE],
        pool: &[TileSpec],
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let needed = layout.iter().flatten().filter(|&&bit| bit).count();
        if needed > pool.len() {
            return Err(SetupError::NotEnoughTiles {
                needed,
                available: pool.len(),
            });
        }

        let mut tiles: Vec<TileSpec> = pool.to_vec();
        tiles.shuffle(rng);

        let mut spaces = [[Space::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut names = HashMap::new();
        for (row, bits) in layout.iter().enumerate() {
            for (col, &bit) in bits.iter().enumerate() {
                if !bit {
                    continue;
                }
                let Some(spec) = tiles.pop() else {
                    return Err(SetupError::NotEnoughTiles {
                        needed,
                        available: pool.len(),
                    });
                };
                let coord = Coord::new(row, col);
                names.insert(spec.name, coord);
                spaces[row][col] = Space::Tile(Tile::new(spec, coord));
            }
        }

        Ok(Self { spaces, names })
    }

    /// Returns the grid, row by row.
    #[must_use]
    pub const fn spaces(&self) -> &[[Space; BOARD_SIZE]; BOARD_SIZE] {
        &self.spaces
    }

    /// Returns the tile at `coord`.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.spaces.get(coord.row)?.get(coord.col)?.tile()
    }

    /// Returns the tile at `coord` for mutation.
    pub fn tile_at_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        match self.spaces.get_mut(coord.row)?.get_mut(coord.col)? {
            Space::Tile(tile) => Some(tile),
            Space::Empty => None,
        }
    }

    /// Returns where the tile called `name` sits.
    #[must_use]
    pub fn coord_of(&self, name: &str) -> Option<Coord> {
        self.names.get(name).copied()
    }

    /// Returns the tile called `name`.
    #[must_use]
    pub fn tile_named(&self, name: &str) -> Option<&Tile> {
        self.coord_of(name).and_then(|coord| self.tile_at(coord))
    }

    /// Iterates over every placed tile, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.spaces.iter().flatten().filter_map(Space::tile)
    }

    /// Returns the tiles within `reach` of `coord`.
    #[must_use]
    pub fn tiles_in(&self, coord: Coord, reach: Reach) -> Vec<&Tile> {
        if reach == Reach::AllOther {
            return self.all_other_tiles(coord);
        }
        reach
            .offsets()
            .iter()
            .filter_map(|&offset| coord.offset(offset))
            .filter_map(|c| self.tile_at(c))
            .collect()
    }

    /// Returns the tiles within any of `reaches` of `coord`, in order.
    #[must_use]
    pub fn tiles_within(&self, coord: Coord, reaches: &[Reach]) -> Vec<&Tile> {
        reaches
            .iter()
            .flat_map(|&reach| self.tiles_in(coord, reach))
            .collect()
    }

    /// Returns every placed tile except the one at `coord`.
    #[must_use]
    pub fn all_other_tiles(&self, coord: Coord) -> Vec<&Tile> {
        self.tiles().filter(|t| t.coord != coord).collect()
    }

    /// Returns the dry or flooded tiles reachable from `coord` by swimming
    /// through one or more orthogonal flooded or sunken tiles, nearest first.
    /// Directly adjacent standing tiles are included.
    #[must_use]
    pub fn swim_destinations(&self, coord: Coord) -> Vec<&Tile> {
        let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
        seen[coord.row][coord.col] = true;
        let mut queue = VecDeque::from([coord]);
        let mut found = Vec::new();

        while let Some(current) = queue.pop_front() {
            for tile in self.tiles_in(current, Reach::Adjacent) {
                let c = tile.coord;
                if seen[c.row][c.col] {
                    continue;
                }
                seen[c.row][c.col] = true;
                if !tile.is_sunken() {
                    found.push(tile);
                }
                if tile.is_flooded() || tile.is_sunken() {
                    queue.push_back(c);
                }
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::island::tile::TILES;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board() -> Board {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        Board::new(&STANDARD_LAYOUT, &TILES, &mut rng).unwrap()
    }

    #[test]
    fn places_one_tile_per_occupied_cell() {
        let board = board();
        assert_eq!(board.tiles().count(), 24);
        for (row, bits) in STANDARD_LAYOUT.iter().enumerate() {
            for (col, &bit) in bits.iter().enumerate() {
                let tile = board.tile_at(Coord::new(row, col));
                assert_eq!(tile.is_some(), bit);
                if let Some(tile) = tile {
                    assert_eq!(tile.coord, Coord::new(row, col));
                }
            }
        }
    }

    #[test]
    fn rejects_small_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let err = Board::new(&STANDARD_LAYOUT, &TILES[..10], &mut rng).unwrap_err();
        assert_eq!(
            err,
            SetupError::NotEnoughTiles {
                needed: 24,
                available: 10
            }
        );
    }

    #[test]
    fn corner_tile_neighbours_skip_sea() {
        let board = board();
        let corner = Coord::new(0, 2);
        let adjacent: Vec<Coord> = board
            .tiles_in(corner, Reach::Adjacent)
            .iter()
            .map(|t| t.coord)
            .collect();
        assert_eq!(adjacent, [Coord::new(1, 2), Coord::new(0, 3)]);

        let diagonal = board.tiles_in(corner, Reach::Diagonal);
        assert_eq!(diagonal.len(), 2);

        assert_eq!(board.tiles_in(corner, Reach::Same)[0].coord, corner);
        assert_eq!(board.tiles_in(corner, Reach::AllOther).len(), 23);
    }

    #[test]
    fn double_adjacent_from_centre() {
        let board = board();
        assert_eq!(
            board.tiles_in(Coord::new(2, 2), Reach::DoubleAdjacent).len(),
            12
        );
        assert!(Reach::DoubleAdjacent.contains(Coord::new(2, 2), Coord::new(4, 2)));
        assert!(!Reach::Adjacent.contains(Coord::new(2, 2), Coord::new(4, 2)));
    }

    #[test]
    fn swimming_crosses_water() {
        let mut board = board();
        let start = Coord::new(2, 0);
        for coord in [Coord::new(2, 1), Coord::new(2, 2)] {
            let tile = board.tile_at_mut(coord).unwrap();
            tile.sink();
            tile.sink();
        }
        let reach: Vec<Coord> = board
            .swim_destinations(start)
            .iter()
            .map(|t| t.coord)
            .collect();
        assert!(reach.contains(&Coord::new(3, 0)));
        assert!(reach.contains(&Coord::new(2, 3)));
        assert!(reach.contains(&Coord::new(1, 2)));
        assert!(!reach.contains(&Coord::new(2, 1)));
        assert!(!reach.contains(&Coord::new(2, 4)));
    }

    #[test]
    fn name_lookup_matches_placement() {
        let board = board();
        for tile in board.tiles() {
            assert_eq!(board.coord_of(tile.name), Some(tile.coord));
        }
        assert_eq!(board.coord_of("Atlantis"), None);
    }
}
