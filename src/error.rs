use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid symbol '{symbol}' at position {position} (expected 'W', 'B' or 'E')")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("arrangement must contain exactly one empty slot, found {found}")]
    EmptySlotCount { found: usize },

    #[error("tile count must be a positive integer")]
    InvalidTileCount,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("no terminal arrangement reachable after visiting {visited} arrangements")]
    NoSolution { visited: usize },

    #[error("heuristic '{heuristic}' returned negative estimate {estimate}")]
    NegativeEstimate {
        heuristic: &'static str,
        estimate: i64,
    },
}
