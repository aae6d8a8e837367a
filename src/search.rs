use crate::error::SolveError;
use crate::heuristic::Heuristic;
use crate::history::{History, NodeStatus};
use crate::puzzle::Arrangement;
use tracing::{debug, trace};

/// How far the empty slot may travel in one move, in either direction.
pub const DEFAULT_REACH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub reach: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            reach: DEFAULT_REACH,
        }
    }
}

/// Cost of moving the empty slot from `i` to `j`: one for a neighbour,
/// otherwise the number of cells jumped over.
pub fn step_cost(i: usize, j: usize) -> usize {
    i.abs_diff(j).saturating_sub(1).max(1)
}

/// One arrangement along a solution, paired with where the empty slot goes
/// next. The goal's step has no next position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStep {
    pub arrangement: Arrangement,
    pub next_empty: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes closed and expanded.
    pub expansions: usize,
    /// Distinct arrangements recorded.
    pub visited: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub route: Vec<RouteStep>,
    pub cost: usize,
    pub stats: SearchStats,
}

impl Solution {
    /// Empty-slot position after each move, in order.
    pub fn moves(&self) -> Vec<usize> {
        self.route.iter().filter_map(|step| step.next_empty).collect()
    }

    pub fn goal(&self) -> &Arrangement {
        // A route always holds at least the start.
        &self.route[self.route.len() - 1].arrangement
    }
}

/// Best-first search over arrangements. Closed nodes are never reopened, so
/// only the zero heuristic guarantees a cheapest route.
pub struct Solver {
    heuristic: Box<dyn Heuristic>,
    config: SearchConfig,
}

impl Solver {
    pub fn new(heuristic: Box<dyn Heuristic>, config: SearchConfig) -> Self {
        Self { heuristic, config }
    }

    pub fn heuristic_name(&self) -> &'static str {
        self.heuristic.name()
    }

    pub fn solve(&self, start: &Arrangement) -> Result<Solution, SolveError> {
        let mut history = History::new(start.clone());
        let mut slot = History::START;
        let mut expansions = 0;

        while !history.arrangement(slot).is_terminal() {
            expansions += 1;

            let current = history.arrangement(slot).clone();
            let status = history.close(slot);
            trace!(arrangement = %current, cost = status.cost, priority = status.priority, "expand");

            self.expand(&mut history, &current, &status)?;

            slot = match history.select_open() {
                Some(next) => next,
                None => {
                    debug!(
                        heuristic = self.heuristic.name(),
                        expansions,
                        visited = history.len(),
                        "open set exhausted"
                    );
                    return Err(SolveError::NoSolution {
                        visited: history.len(),
                    });
                }
            };
        }

        let current = history.arrangement(slot).clone();
        let cost = history.status(slot).cost;
        let route = reconstruct(&current, &history);
        let stats = SearchStats {
            expansions,
            visited: history.len(),
        };

        debug!(
            heuristic = self.heuristic.name(),
            cost,
            expansions = stats.expansions,
            visited = stats.visited,
            "solved"
        );
        for step in &route {
            trace!(arrangement = %step.arrangement, next_empty = ?step.next_empty, "route");
        }

        Ok(Solution { route, cost, stats })
    }

    fn expand(
        &self,
        history: &mut History,
        current: &Arrangement,
        status: &NodeStatus,
    ) -> Result<(), SolveError> {
        let i = current.empty_index();
        let lo = i.saturating_sub(self.config.reach);
        let hi = i
            .saturating_add(self.config.reach)
            .saturating_add(1)
            .min(current.len());

        for j in lo..hi {
            let candidate = current.swap(i, j);
            let cost = status.cost + step_cost(i, j);
            if !history.admits(&candidate, cost) {
                continue;
            }

            let estimate = self.heuristic.estimate(&candidate, status, i, j);
            let estimate = usize::try_from(estimate).map_err(|_| SolveError::NegativeEstimate {
                heuristic: self.heuristic.name(),
                estimate,
            })?;

            history.record(
                candidate,
                NodeStatus {
                    closed: false,
                    cost,
                    predecessor_empty: Some(i),
                    priority: cost + estimate,
                    depth: status.depth + 1,
                },
            );
        }

        Ok(())
    }
}

/// Walks predecessor links back from `goal` to the start.
pub fn reconstruct(goal: &Arrangement, history: &History) -> Vec<RouteStep> {
    let mut route = vec![RouteStep {
        arrangement: goal.clone(),
        next_empty: None,
    }];

    let mut current = goal.clone();
    while let Some(previous) = history.get(&current).and_then(|s| s.predecessor_empty) {
        let empty = current.empty_index();
        current = current.swap(previous, empty);
        route.push(RouteStep {
            arrangement: current.clone(),
            next_empty: Some(empty),
        });
    }

    route.reverse();
    route
}
