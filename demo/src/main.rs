//! faregrid-demo: price every route between two cells of a map and buy one.
//!
//! Usage:
//!   faregrid-demo demo/maps/town.txt --start 0,0 --goal 8,9
//!   faregrid-demo demo/maps/town.csv --start 0,0 --goal 8,9 --choose greedy
//!   faregrid-demo demo/maps/town.txt --start 0,0 --goal 8,9 --quick --config demo/faregrid.toml
//!   RUST_LOG=debug faregrid-demo demo/maps/town.txt --start 0,0 --goal 6,4 --cheapest

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use faregrid_core::{Grid, Position};
use faregrid_dispatch::{
    DispatchConfig, Dispatcher, Evaluation, Purchase, Purse, Selection, StepQueue, Wallet,
};
use faregrid_paths::{StrategyKind, apply};

/// Price and buy a route across a grid map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map file: `.csv` (floor-block layer, -1 or empty is floor) or ASCII
    /// (`.` floor, `#` wall)
    map: PathBuf,

    /// Start cell as row,col
    #[arg(short, long, value_parser = parse_cell)]
    start: Position,

    /// Goal cell as row,col
    #[arg(short, long, value_parser = parse_cell)]
    goal: Position,

    /// TOML dispatcher configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting wallet balance
    #[arg(short, long, default_value_t = faregrid_dispatch::DEFAULT_BALANCE)]
    balance: u32,

    /// Buy the route of this strategy from the menu
    #[arg(long, conflicts_with_all = ["cheapest", "quick"])]
    choose: Option<StrategyKind>,

    /// Buy the cheapest route on the menu
    #[arg(long, conflicts_with = "quick")]
    cheapest: bool,

    /// Skip the menu and buy the configured quick route
    #[arg(long)]
    quick: bool,

    /// Print the menu as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn parse_cell(s: &str) -> Result<Position, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got \u{201c}{s}\u{201d}"))?;
    let row = r.trim().parse::<i32>().map_err(|e| format!("bad row: {e}"))?;
    let col = c.trim().parse::<i32>().map_err(|e| format!("bad column: {e}"))?;
    Ok((row, col).into())
}

fn load_map(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read map {}", path.display()))?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let grid = if is_csv {
        Grid::from_csv(&text)
    } else {
        Grid::parse(&text)
    };
    grid.with_context(|| format!("invalid map {}", path.display()))
}

fn print_menu(eval: &Evaluation) {
    println!("{} -> {}: {}", eval.start, eval.goal, eval.status);
    for (i, o) in eval.options.iter().enumerate() {
        let mark = if o.is_available() { ' ' } else { 'x' };
        println!("{mark} [{i}] {:<13} {}", o.strategy.name(), o.status());
        println!("        {}", o.strategy.description());
    }
}

/// The map with `path` drawn over it: `S` start, `G` goal, `*` the route.
fn render_route(grid: &Grid, path: &[Position]) -> String {
    let mut rows: Vec<Vec<char>> = grid.to_string().lines().map(|l| l.chars().collect()).collect();
    let last = path.len().saturating_sub(1);
    for (i, p) in path.iter().enumerate() {
        let Some(cell) = rows
            .get_mut(p.row as usize)
            .and_then(|row| row.get_mut(p.col as usize))
        else {
            continue;
        };
        *cell = match i {
            0 => 'S',
            i if i == last => 'G',
            _ => '*',
        };
    }
    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_purchase(d: &Dispatcher<Purse, StepQueue>, start: Position, bought: &Purchase) {
    let keys: String = bought.steps.iter().map(|s| s.key()).collect();
    println!();
    println!("bought {} for {}", bought.strategy, bought.fare);
    println!("steps ({}): {keys}", bought.steps.len());
    println!("balance: {}", d.wallet().balance());
    println!();
    println!("{}", render_route(d.grid(), &apply(start, &bought.steps)));
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let grid = load_map(&args.map)?;
    let config = match &args.config {
        Some(path) => DispatchConfig::load(path)?,
        None => DispatchConfig::default(),
    };
    log::info!(
        "map {}: {}x{}, {} walkable cells",
        args.map.display(),
        grid.rows(),
        grid.cols(),
        grid.walkable_count()
    );

    let mut d = Dispatcher::new(grid, config, Purse::new(args.balance), StepQueue::new())?;

    if args.quick {
        let bought = d.quick_route(args.start, args.goal)?;
        print_purchase(&d, args.start, &bought);
        return Ok(());
    }

    let eval = d.evaluate(args.start, args.goal);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&eval)?);
    } else {
        print_menu(&eval);
    }

    let choice = match (args.choose, args.cheapest) {
        (Some(kind), _) => eval.position_of(kind),
        (None, true) => eval.cheapest().map(|(i, _)| i),
        (None, false) => {
            d.respond(Selection::Close)?;
            return Ok(());
        }
    };
    let Some(index) = choice else {
        d.respond(Selection::Cancel)?;
        bail!("nothing to buy: {}", eval.status);
    };

    let Some(bought) = d.respond(Selection::Choose(index))? else {
        bail!("selection produced no purchase");
    };
    print_purchase(&d, args.start, &bought);
    Ok(())
}
