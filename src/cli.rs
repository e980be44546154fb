use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use grid_search::render::DEFAULT_FRAME_DELAY;
use grid_search::{Algorithm, CostModel, Variant};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Animate A*, Dijkstra, greedy or breadth-first search on a character grid map.
#[derive(Parser, Debug)]
#[command(name = "grid_search", version, about)]
pub struct Cli {
    /// Board file. Unless --costs is given, the cost model comes from the board type in the
    /// file name `<name>-<type>-...`: type 1 is unit cost, type 2 is weighted.
    pub board: PathBuf,

    /// Search algorithm
    #[arg(value_enum)]
    pub algorithm: AlgorithmArg,

    /// Cost model, overriding the board type
    #[arg(long, value_enum)]
    pub costs: Option<CostArg>,

    /// Pause between animation frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Skip the animation and print only the final board
    #[arg(long)]
    pub headless: bool,

    /// Mark open cells on every frame, not only on the final one
    #[arg(long)]
    pub show_open: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmArg {
    /// Best-first on the heuristic alone
    Greedy,
    Astar,
    Dijkstra,
    Bfs,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Algorithm {
        match arg {
            AlgorithmArg::Greedy => Algorithm::Greedy,
            AlgorithmArg::Astar => Algorithm::Astar,
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::Bfs => Algorithm::Bfs,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostArg {
    Unit,
    Weighted,
}

impl From<CostArg> for CostModel {
    fn from(arg: CostArg) -> CostModel {
        match arg {
            CostArg::Unit => CostModel::Unit,
            CostArg::Weighted => CostModel::Weighted,
        }
    }
}

/// Everything a run needs once the command line is resolved.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub board: PathBuf,
    pub variant: Variant,
    /// [None] when running headless.
    pub frame_delay: Option<Duration>,
    pub show_open: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<RunConfig> {
        let costs = match self.costs {
            Some(costs) => costs.into(),
            None => match board_type(&self.board) {
                Some(costs) => costs,
                None => bail!(
                    "don't recognize board type of {} (expected <name>-1-... or <name>-2-..., or pass --costs)",
                    self.board.display()
                ),
            },
        };
        Ok(RunConfig {
            variant: Variant::new(self.algorithm.into(), costs),
            frame_delay: (!self.headless).then(|| Duration::from_millis(self.delay_ms)),
            show_open: self.show_open,
            board: self.board,
        })
    }
}

/// The cost model encoded in a board file name such as `board-2-1.txt`.
pub fn board_type(path: &Path) -> Option<CostModel> {
    let name = path.file_name()?.to_str()?;
    match name.split('-').nth(1)? {
        "1" => Some(CostModel::Unit),
        "2" => Some(CostModel::Weighted),
        _ => None,
    }
}
