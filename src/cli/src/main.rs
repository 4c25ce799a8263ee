#![warn(clippy::pedantic)]

mod cubie_file;

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::{eyre::WrapErr, owo_colors::OwoColorize};
use engine::{CommandEngine, Session, SolveOutcome, config::Config};
use env_logger::TimestampPrecision;
use facelets::{CubieCube, MoveTokens, OddLengthPolicy, Turn, encode};
use itertools::Itertools;
use log::{LevelFilter, info};

use crate::cubie_file::CubieFile;

/// Translates 3x3x3 cube descriptions into facelet strings and solves them with an external engine
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(
        long,
        short = 'c',
        default_value = "cubelink.toml",
        value_name = "CONFIG"
    )]
    config: PathBuf,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the facelet string of a cube file
    Encode {
        /// TOML file with a `cubies` list of 27 orientation lists
        cubies: PathBuf,
    },
    /// Split a raw engine move string into moves, one per line
    Decode {
        /// The move string, e.g. "LUURRDDL"
        raw: String,
        /// Drop a dangling last character instead of failing
        #[arg(long)]
        truncate: bool,
    },
    /// Turn a solved cube and print the turns and the resulting facelets
    Scramble {
        /// Turns to apply, e.g. "DR RU UL LD". Random turns are used otherwise.
        #[arg(long, short)]
        moves: Option<String>,
        /// How many random turns to apply
        #[arg(long, default_value_t = 20)]
        count: usize,
        /// Seed for the random turns
        #[arg(long)]
        seed: Option<u64>,
        /// Print the scrambled cube as a cube file instead
        #[arg(long)]
        cube_file: bool,
    },
    /// Report whether the cube in a file is solved
    Check {
        /// TOML file with a `cubies` list of 27 orientation lists
        cubies: PathBuf,
    },
    /// Solve the cube in a file with the configured engine
    Solve {
        /// TOML file with a `cubies` list of 27 orientation lists
        cubies: PathBuf,
    },
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Encode { cubies } => {
            let file = CubieFile::read(&cubies)?;
            println!("{}", encode(&file.cubies)?);
        }
        Commands::Decode { raw, truncate } => {
            let policy = if truncate {
                OddLengthPolicy::Truncate
            } else {
                config.odd_length
            };

            for token in MoveTokens::new(&raw, policy)? {
                println!("{token}");
            }
        }
        Commands::Scramble {
            moves,
            count,
            seed,
            cube_file,
        } => {
            let mut cube = CubieCube::solved();

            let turns = if let Some(moves) = moves {
                let turns = moves
                    .split_whitespace()
                    .map(str::parse::<Turn>)
                    .collect::<Result<Vec<_>, _>>()?;
                cube.apply(turns.iter().copied());
                turns
            } else {
                let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
                cube.scramble(&mut rng, count)
            };

            if cube_file {
                let file: CubieFile = cube.cubies().iter().collect();
                print!("{}", file.to_toml()?);
            } else {
                println!("{}", turns.iter().join(" "));
                println!("{}", encode(cube.cubies())?);
            }
        }
        Commands::Check { cubies } => {
            let file = CubieFile::read(&cubies)?;
            let mut session = Session::new(CommandEngine::from_config(&config.engine));
            session.load_cube(&file.cubies)?;

            if session.is_solved() {
                println!("{}", "Solved".green());
            } else {
                println!("{}", "Not solved".yellow());
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Solve { cubies } => {
            let file = CubieFile::read(&cubies)?;
            let engine = CommandEngine::from_config(&config.engine);
            info!("Using solving engine {}", engine.program());

            let mut session =
                Session::new(engine).with_odd_length_policy(config.odd_length);
            session.load_cube(&file.cubies)?;

            match session.solve().wrap_err("Failed to run the solving engine")? {
                SolveOutcome::Solved(moves) if moves.is_empty() => {
                    println!("{}", "Already solved".green());
                }
                SolveOutcome::Solved(moves) => {
                    eprintln!("Solving in {} moves", moves.len());
                    println!("{}", moves.iter().join(" "));
                }
                SolveOutcome::Failed { status } => {
                    eprintln!(
                        "{}",
                        format!("The solving engine could not solve the cube (status {status})")
                            .red()
                    );
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
