use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use tile_slide::{Arrangement, HeuristicKind, SearchConfig, Solution, Solver};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tile-slide")]
#[command(version, about = "Orders a row of black and white tiles by sliding the empty slot", long_about = None)]
struct Cli {
    /// Tile count n (n black, n white, one empty) or a literal row of W, B and E
    arrangement: Option<String>,

    /// Cost estimate guiding the search
    #[arg(long, value_enum, default_value_t)]
    heuristic: HeuristicKind,

    /// How far the empty slot may move in one step
    #[arg(long, default_value_t = tile_slide::search::DEFAULT_REACH)]
    reach: usize,

    /// Start from a random row with n tiles of each color
    #[arg(long, value_name = "N", conflicts_with = "arrangement")]
    shuffle: Option<usize>,

    /// Seed for --shuffle
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Run every heuristic on the same start
    #[arg(long, conflicts_with = "heuristic")]
    all: bool,

    /// Log search diagnostics and the route to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_start(cli: &Cli) -> Result<Arrangement> {
    if let Some(n) = cli.shuffle {
        let start = match cli.seed {
            Some(seed) => Arrangement::shuffled(n, &mut StdRng::seed_from_u64(seed))?,
            None => Arrangement::shuffled(n, &mut thread_rng())?,
        };
        return Ok(start);
    }

    let start = match cli.arrangement.as_deref() {
        None => Arrangement::standard(3)?,
        Some(arg) if !arg.is_empty() && arg.chars().all(|c| c.is_ascii_digit()) => {
            Arrangement::standard(arg.parse()?)?
        }
        Some(arg) => arg.parse()?,
    };
    Ok(start)
}

fn format_moves(solution: &Solution) -> String {
    solution
        .moves()
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn output_line(cli: &Cli, heuristic: &str, solution: &Solution) -> String {
    if cli.all {
        format!("{}: {}", heuristic, format_moves(solution))
    } else {
        format_moves(solution)
    }
}

fn show_route(solution: &Solution) {
    for step in &solution.route {
        match step.next_empty {
            Some(next) => eprintln!("\t{} {}", step.arrangement.colored(), next),
            None => eprintln!("\t{} -", step.arrangement.colored()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let start = parse_start(&cli)?;
    let config = SearchConfig { reach: cli.reach };
    tracing::debug!(start = %start, reach = config.reach, "starting search");

    let kinds = if cli.all {
        HeuristicKind::ALL.to_vec()
    } else {
        vec![cli.heuristic]
    };

    for kind in kinds {
        let solver = Solver::new(kind.build(), config);
        let solution = solver.solve(&start)?;

        if cli.verbose {
            show_route(&solution);
        }
        println!("{}", output_line(&cli, solver.heuristic_name(), &solution));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tile-slide").chain(args.iter().copied())).unwrap()
    }

    fn start(args: &[&str]) -> String {
        parse_start(&parse_args(args)).unwrap().to_string()
    }

    fn solve(cli: &Cli, kind: HeuristicKind) -> Solution {
        let start = parse_start(cli).unwrap();
        Solver::new(kind.build(), SearchConfig { reach: cli.reach })
            .solve(&start)
            .unwrap()
    }

    #[test]
    fn default_start() {
        assert_eq!(start(&[]), "BBBWWWE");
    }

    #[test]
    fn tile_count_expands() {
        assert_eq!(start(&["2"]), "BBWWE");
        assert_eq!(start(&["4"]), "BBBBWWWWE");
    }

    #[test]
    fn literal_row_is_taken_as_is() {
        assert_eq!(start(&["WBWEB"]), "WBWEB");
    }

    #[test]
    fn bad_starts_are_rejected() {
        assert!(parse_start(&parse_args(&["0"])).is_err());
        assert!(parse_start(&parse_args(&["BWX"])).is_err());
        assert!(parse_start(&parse_args(&["BWEE"])).is_err());
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let first = start(&["--shuffle", "3", "--seed", "42"]);
        let second = start(&["--shuffle", "3", "--seed", "42"]);
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
        assert_eq!(first.matches('B').count(), 3);
        assert_eq!(first.matches('W').count(), 3);
    }

    #[test]
    fn conflicting_flags_are_refused() {
        let with = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("tile-slide").chain(args.iter().copied()))
        };
        assert!(with(&["--seed", "1"]).is_err());
        assert!(with(&["BWE", "--shuffle", "2"]).is_err());
        assert!(with(&["--all", "--heuristic", "zero"]).is_err());
    }

    #[test]
    fn flags_select_heuristic_and_reach() {
        let cli = parse_args(&["--heuristic", "pos-to-mid", "--reach", "2"]);
        assert_eq!(cli.heuristic, HeuristicKind::PosToMid);
        assert_eq!(cli.reach, 2);
        assert_eq!(parse_args(&[]).heuristic, HeuristicKind::RightTileCount);
    }

    #[test]
    fn terminal_start_prints_empty_line() {
        let cli = parse_args(&["WBE"]);
        let solution = solve(&cli, cli.heuristic);
        assert_eq!(output_line(&cli, "right-tile-count", &solution), "");
    }

    #[test]
    fn moves_are_space_separated() {
        let cli = parse_args(&["BWE", "--heuristic", "zero"]);
        let solution = solve(&cli, cli.heuristic);
        assert_eq!(output_line(&cli, "zero", &solution), "0");

        let cli = parse_args(&["BBBWWWE"]);
        let solution = solve(&cli, cli.heuristic);
        let line = output_line(&cli, "right-tile-count", &solution);
        let parsed: Vec<usize> = line.split(' ').map(|m| m.parse().unwrap()).collect();
        assert_eq!(parsed, solution.moves());
    }

    #[test]
    fn all_prefixes_heuristic_name() {
        let cli = parse_args(&["BWE", "--all"]);
        let solution = solve(&cli, HeuristicKind::Zero);
        assert_eq!(output_line(&cli, "zero", &solution), "zero: 0");

        let cli = parse_args(&["WBE", "--all"]);
        let solution = solve(&cli, HeuristicKind::Awful);
        assert_eq!(output_line(&cli, "awful", &solution), "awful: ");
    }
}
