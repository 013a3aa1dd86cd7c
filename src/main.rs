use args::{Command, GenerateArgs, MineclicksArgs};
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{OptionExt, WrapErr};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use replay::Replay;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

mod action;
mod args;
mod cell;
mod cell_content;
mod generate;
mod grid;
mod input;
mod output;
mod replay;
mod ui;
mod util;
mod visibility;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = MineclicksArgs::parse();
    init_logger(&args)?;

    match args.command {
        Command::Solve {
            input,
            output,
            show,
        } => solve(&input, output.as_deref(), show),
        Command::View { input } => view(&input),
        Command::Generate(generate_args) => generate(generate_args),
    }
}

fn init_logger(args: &MineclicksArgs) -> Result<()> {
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    match (&args.log, &args.command) {
        (Some(path), _) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        // stderr would draw over the viewer
        (None, Command::View { .. }) => {}
        (None, _) => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

/// Writes to `path`, or stdout when there is none.
fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path).wrap_err_with(|| {
            format!("failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    })
}

fn solve(input_path: &Path, output_path: Option<&Path>, show: bool) -> Result<()> {
    // nothing is printed unless the whole file parses
    let grids = input::read_cases(input_path)?;
    let answers = output::solve_all(grids);
    let total: usize = answers.iter().map(|a| a.clicks.len()).sum();
    info!("solved {} cases, {total} clicks in total", answers.len());

    let mut out = create_output(output_path)?;
    output::write_answers(&mut out, &answers, show)
}

fn view(input_path: &Path) -> Result<()> {
    let grids = input::read_cases(input_path)?;
    let replay = Replay::new(output::solve_all(grids))
        .ok_or_eyre(format!("{} has no cases to view", input_path.display()))?;
    ui::main(replay)
}

fn generate(args: GenerateArgs) -> Result<()> {
    let args = args.clamped();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    info!(
        "generating {} boards of {}x{} with {} mines",
        args.cases, args.size, args.size, args.mines
    );
    let text = generate::test_file(&mut rng, args.cases, args.size, args.mines);

    let mut out = create_output(args.output.as_deref())?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
