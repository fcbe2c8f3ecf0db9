use crate::rng::SplitMix64;
use crate::tile::Tile;
use crate::{Image, PuzzleError};

/// Tiles ordered by slot: `tiles[i].current_slot() == i` at all times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

/// Cut `image` into `rows × cols` tiles in solved order.
pub fn partition(image: &Image, rows: usize, cols: usize) -> Result<Board, PuzzleError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PuzzleError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    let board = Board::solved(rows, cols)?;
    log::debug!(
        "partitioned {}x{} image into {}x{} tiles",
        image.width(),
        image.height(),
        rows,
        cols
    );
    Ok(board)
}

impl Board {
    pub fn solved(rows: usize, cols: usize) -> Result<Self, PuzzleError> {
        let len = rows
            .checked_mul(cols)
            .filter(|&n| n > 0)
            .ok_or(PuzzleError::InvalidGrid { rows, cols })?;
        let mut tiles = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                tiles.push(Tile::new(row * cols + col, rows, cols));
            }
        }
        Ok(Self { rows, cols, tiles })
    }

    /// Board whose slot `i` holds the tile with canonical index `order[i]`.
    pub fn from_order(rows: usize, cols: usize, order: &[usize]) -> Result<Self, PuzzleError> {
        let mut board = Self::solved(rows, cols)?;
        let len = board.tiles.len();
        if order.len() != len {
            return Err(PuzzleError::NotAPermutation { len });
        }
        let mut seen = vec![false; len];
        for &idx in order {
            if idx >= len || seen[idx] {
                return Err(PuzzleError::NotAPermutation { len });
            }
            seen[idx] = true;
        }
        let tiles = order
            .iter()
            .map(|&idx| Tile::new(idx, rows, cols))
            .collect();
        board.tiles = tiles;
        board.renumber();
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_at(&self, slot: usize) -> Option<&Tile> {
        self.tiles.get(slot)
    }

    /// Canonical index of the tile in each slot.
    pub fn order(&self) -> Vec<usize> {
        self.tiles.iter().map(Tile::canonical_index).collect()
    }

    /// Fisher–Yates over the slots; every ordering is equally likely.
    pub fn shuffle(&mut self, rng: &mut SplitMix64) {
        for i in (1..self.tiles.len()).rev() {
            let j = rng.below(i + 1);
            self.tiles.swap(i, j);
        }
        self.renumber();
    }

    /// Exchange the tiles in two slots. Returns `false` without touching the
    /// board when the slots are equal or either one is empty.
    pub fn swap(&mut self, slot_a: usize, slot_b: usize) -> bool {
        if slot_a == slot_b || slot_a >= self.tiles.len() || slot_b >= self.tiles.len() {
            return false;
        }
        self.tiles.swap(slot_a, slot_b);
        self.tiles[slot_a].current_slot = slot_a;
        self.tiles[slot_b].current_slot = slot_b;
        true
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }

    /// First slot holding the wrong tile, paired with the slot where that
    /// tile belongs.
    pub fn first_misplaced(&self) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .find(|t| !t.is_home())
            .map(|t| (t.current_slot(), t.canonical_index()))
    }

    fn renumber(&mut self) {
        for (slot, tile) in self.tiles.iter_mut().enumerate() {
            tile.current_slot = slot;
        }
    }
}
