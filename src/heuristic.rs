//! Cost-to-go estimates for the search engine.
//!
//! Every estimator sees the candidate arrangement, the status of the node
//! being expanded, and the source and destination of the empty slot for the
//! move that produced the candidate.

use crate::history::NodeStatus;
use crate::puzzle::{Arrangement, Tile};
use clap::ValueEnum;

pub trait Heuristic {
    fn name(&self) -> &'static str;

    fn estimate(
        &self,
        candidate: &Arrangement,
        parent: &NodeStatus,
        source: usize,
        dest: usize,
    ) -> i64;
}

/// Always zero. Turns the search into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn name(&self) -> &'static str {
        "zero"
    }

    fn estimate(&self, _: &Arrangement, _: &NodeStatus, _: usize, _: usize) -> i64 {
        0
    }
}

/// For each black tile, how many white tiles still have to cross it.
///
/// The running white count starts at half the length rather than the true
/// white count.
#[derive(Debug, Clone, Copy, Default)]
pub struct RightTileCount;

impl Heuristic for RightTileCount {
    fn name(&self) -> &'static str {
        "right-tile-count"
    }

    fn estimate(&self, candidate: &Arrangement, _: &NodeStatus, _: usize, _: usize) -> i64 {
        let mut whites_right = (candidate.len() / 2) as i64;
        let mut estimate = 0;

        for tile in candidate.tiles() {
            match tile {
                Tile::Black => estimate += whites_right.max(0),
                Tile::White => whites_right -= 1,
                Tile::Empty => {}
            }
        }

        estimate
    }
}

/// Folds the parent's depth into the estimate, so the engine counts path
/// cost twice. Slow and not optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Awful;

impl Heuristic for Awful {
    fn name(&self) -> &'static str {
        "awful"
    }

    fn estimate(
        &self,
        candidate: &Arrangement,
        parent: &NodeStatus,
        source: usize,
        dest: usize,
    ) -> i64 {
        let half = candidate.len() / 2;
        let (left, right) = candidate.tiles().split_at(half);

        let jump = source.abs_diff(dest).saturating_sub(1);
        let misplaced = left.iter().filter(|&&t| t == Tile::Black).count()
            + right.iter().filter(|&&t| t == Tile::White).count();

        (parent.depth + jump + misplaced) as i64
    }
}

/// Distance of each black tile from the last position plus distance of
/// each white tile from the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosToEnd;

impl Heuristic for PosToEnd {
    fn name(&self) -> &'static str {
        "pos-to-end"
    }

    fn estimate(&self, candidate: &Arrangement, _: &NodeStatus, _: usize, _: usize) -> i64 {
        let last = candidate.len() as i64 - 1;

        candidate
            .tiles()
            .iter()
            .enumerate()
            .map(|(index, tile)| match tile {
                Tile::Black => last - index as i64,
                Tile::White => index as i64,
                Tile::Empty => 0,
            })
            .sum()
    }
}

/// Distance measured from the midpoint. Admissibility unknown.
///
/// The right-hand scan indexes from the cell after the midpoint. Its index
/// never exceeds the midpoint, so every right-hand term clamps to 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosToMid;

impl Heuristic for PosToMid {
    fn name(&self) -> &'static str {
        "pos-to-mid"
    }

    fn estimate(&self, candidate: &Arrangement, _: &NodeStatus, _: usize, _: usize) -> i64 {
        let center = (candidate.len() / 2) as i64;
        let tiles = candidate.tiles();
        let mut estimate = 0;

        for (index, tile) in tiles.iter().take(center as usize).enumerate() {
            if *tile == Tile::Black {
                estimate += (center - index as i64 - 1).max(1);
            }
        }
        for (index, tile) in tiles.iter().skip(center as usize + 1).enumerate() {
            if *tile == Tile::White {
                estimate += (index as i64 - center - 1).max(1);
            }
        }

        estimate
    }
}

/// Heuristic selector for the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HeuristicKind {
    Zero,
    #[default]
    RightTileCount,
    Awful,
    PosToEnd,
    PosToMid,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 5] = [
        HeuristicKind::Zero,
        HeuristicKind::RightTileCount,
        HeuristicKind::Awful,
        HeuristicKind::PosToEnd,
        HeuristicKind::PosToMid,
    ];

    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Zero => Box::new(Zero),
            HeuristicKind::RightTileCount => Box::new(RightTileCount),
            HeuristicKind::Awful => Box::new(Awful),
            HeuristicKind::PosToEnd => Box::new(PosToEnd),
            HeuristicKind::PosToMid => Box::new(PosToMid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arr(s: &str) -> Arrangement {
        s.parse().unwrap()
    }

    fn parent(depth: usize) -> NodeStatus {
        NodeStatus {
            depth,
            ..NodeStatus::start()
        }
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(Zero.estimate(&arr("BBBWWWE"), &parent(0), 6, 3), 0);
    }

    #[test]
    fn right_tile_count() {
        // half = 3; each B sees all three whites.
        assert_eq!(RightTileCount.estimate(&arr("BBBWWWE"), &parent(0), 0, 0), 9);
        assert_eq!(RightTileCount.estimate(&arr("WWWEBBB"), &parent(0), 0, 0), 0);
        assert_eq!(RightTileCount.estimate(&arr("BWBWE"), &parent(0), 0, 0), 3);
    }

    #[test]
    fn awful_folds_depth_and_jump() {
        // half = 3: left "BBB" has 3 blacks, right "WWWE" has 3 whites.
        let a = arr("BBBWWWE");
        assert_eq!(Awful.estimate(&a, &parent(0), 6, 6), 6);
        assert_eq!(Awful.estimate(&a, &parent(4), 6, 3), 4 + 2 + 6);
        assert_eq!(Awful.estimate(&arr("WWWEBBB"), &parent(0), 3, 2), 0);
    }

    #[test]
    fn pos_to_end() {
        // blacks at 0,1,2 -> 6+5+4, whites at 3,4,5 -> 12
        assert_eq!(PosToEnd.estimate(&arr("BBBWWWE"), &parent(0), 0, 0), 27);
        assert_eq!(PosToEnd.estimate(&arr("WBE"), &parent(0), 0, 0), 1);
    }

    #[test]
    fn pos_to_mid() {
        // center = 3: blacks at 0,1,2 -> 2+1+1; whites at 4,5 (k = 0,1) -> 1+1
        assert_eq!(PosToMid.estimate(&arr("BBBWWWE"), &parent(0), 0, 0), 6);
        assert_eq!(PosToMid.estimate(&arr("WWWEBBB"), &parent(0), 0, 0), 0);
    }

    #[test]
    fn pos_to_mid_right_half_counts_one_per_white() {
        // center = 5: blacks at 1..=4 -> 3+2+1+1; whites at 6..=10 (k = 0..=4)
        // give k - 6 <= -2, each clamped to 1.
        assert_eq!(PosToMid.estimate(&arr("EBBBBBWWWWW"), &parent(0), 0, 0), 12);
        // a lone white in the last cell of a long row still adds 1
        assert_eq!(PosToMid.estimate(&arr("EBBBBBBBBBBBBBBBBBBBW"), &parent(0), 0, 0), 38);
    }

    #[test]
    fn kinds_build_named_heuristics() {
        let names: Vec<&str> = HeuristicKind::ALL.iter().map(|k| k.build().name()).collect();
        assert_eq!(
            names,
            ["zero", "right-tile-count", "awful", "pos-to-end", "pos-to-mid"]
        );
        assert_eq!(HeuristicKind::default(), HeuristicKind::RightTileCount);
    }
}
