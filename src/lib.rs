pub mod error;
pub mod heuristic;
pub mod history;
pub mod puzzle;
pub mod search;

pub use error::{ParseError, SolveError};
pub use heuristic::{Heuristic, HeuristicKind};
pub use puzzle::{Arrangement, Tile};
pub use search::{RouteStep, SearchConfig, SearchStats, Solution, Solver};
