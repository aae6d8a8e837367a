use crate::error::ParseError;
use crossterm::style::Stylize;
use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    White,
    Black,
    Empty,
}

impl Tile {
    pub fn as_char(&self) -> char {
        match self {
            Tile::White => 'W',
            Tile::Black => 'B',
            Tile::Empty => 'E',
        }
    }

    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'W' => Some(Tile::White),
            'B' => Some(Tile::Black),
            'E' => Some(Tile::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An immutable row of tiles holding exactly one empty slot.
///
/// Moves never mutate an arrangement; [`Arrangement::swap`] returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arrangement {
    tiles: Vec<Tile>,
    empty: usize,
}

impl Arrangement {
    /// `n` black tiles, then `n` white tiles, then the empty slot.
    pub fn standard(n: usize) -> Result<Self, ParseError> {
        if n == 0 {
            return Err(ParseError::InvalidTileCount);
        }

        let mut tiles = vec![Tile::Black; n];
        tiles.extend(std::iter::repeat(Tile::White).take(n));
        tiles.push(Tile::Empty);

        Ok(Self { tiles, empty: 2 * n })
    }

    /// Same tiles as [`Arrangement::standard`], in random order.
    pub fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self, ParseError> {
        let mut tiles = Self::standard(n)?.tiles;
        tiles.shuffle(rng);

        let empty = tiles
            .iter()
            .position(|&tile| tile == Tile::Empty)
            .ok_or(ParseError::EmptySlotCount { found: 0 })?;

        Ok(Self { tiles, empty })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn empty_index(&self) -> usize {
        self.empty
    }

    /// Exchanges the tiles at `i` and `j`. Swapping twice with the same pair
    /// restores the original, and the order of `i` and `j` does not matter.
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&self, i: usize, j: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(i, j);

        let empty = if self.empty == i {
            j
        } else if self.empty == j {
            i
        } else {
            self.empty
        };

        Self { tiles, empty }
    }

    /// True when every white tile precedes every black tile. The empty slot
    /// may sit anywhere.
    pub fn is_terminal(&self) -> bool {
        let solid = self.tiles.iter().filter(|&&tile| tile != Tile::Empty);
        let mut seen_black = false;

        for &tile in solid {
            match tile {
                Tile::Black => seen_black = true,
                Tile::White if seen_black => return false,
                _ => {}
            }
        }

        true
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Renders the tiles with terminal colors, for diagnostics only.
    pub fn colored(&self) -> String {
        self.tiles
            .iter()
            .map(|tile| match tile {
                Tile::White => "W".black().on_white().to_string(),
                Tile::Black => "B".white().on_dark_grey().to_string(),
                Tile::Empty => "E".dim().to_string(),
            })
            .collect()
    }
}

impl FromStr for Arrangement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Tile::from_char(symbol).ok_or(ParseError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let empties: Vec<usize> = tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == Tile::Empty)
            .map(|(i, _)| i)
            .collect();

        match empties.as_slice() {
            [empty] => Ok(Self {
                empty: *empty,
                tiles,
            }),
            _ => Err(ParseError::EmptySlotCount {
                found: empties.len(),
            }),
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
