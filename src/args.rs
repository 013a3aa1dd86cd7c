use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Minimum clicks to clear minesweeper boards
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct MineclicksArgs {
    /// more logging, repeat for more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// write the log to this file instead of stderr
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// print `Case #n: clicks` for every board in a test file
    Solve {
        /// test file, `-` for stdin
        #[arg(default_value = "A-large-practice.in")]
        input: PathBuf,
        /// write answers here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// print each solved board after its answer
        #[arg(long)]
        show: bool,
    },
    /// step through the clicks of every board in the terminal
    View {
        /// test file, `-` for stdin
        #[arg(default_value = "A-large-practice.in")]
        input: PathBuf,
    },
    /// write a random test file
    Generate(GenerateArgs),
}

#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct GenerateArgs {
    /// amount of test cases
    #[arg(short, long, default_value_t = 10)]
    pub cases: u32,
    /// width and height of each board
    #[arg(short, long, default_value_t = 50)]
    pub size: u16,
    /// amount of mines per board
    #[arg(short, long, default_value_t = 500)]
    pub mines: u32,
    /// seed for reproducible files
    #[arg(long)]
    pub seed: Option<u64>,
    /// write the file here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn clamped(mut self) -> Self {
        self.cases = self.cases.clamp(1, 100);
        self.size = self.size.clamp(1, 300);
        let max_mines = self.size as u32 * self.size as u32;
        self.mines = self.mines.min(max_mines);
        self
    }
}
