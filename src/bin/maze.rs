use std::process;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use maze_dfs::{CLIArgs, PathDisplay, Solver};

fn main() {
    let args = CLIArgs::parse();
    init_logger(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("{:#}", e);
        process::exit(-1);
    }
}

fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(args: &CLIArgs) -> Result<()> {
    let options = args.options();
    let maze = maze_dfs::read_maze(&args.input_path, options)?;

    println!("size: {}, {}", maze.width, maze.height);
    println!("start: {}, {}", maze.start.col(), maze.start.row());
    println!("end: {}, {}", maze.end.col(), maze.end.row());
    print!("{}", maze.grid);

    let outcome = Solver::new(maze.grid, options)?.run()?;
    if outcome.is_solved() {
        println!("\nThe maze has a solution.");
        println!("The amount of coins collected: {}", outcome.coin_n);
        if let Some(path) = outcome.path.filter(|_| args.path) {
            println!("The path from start to end:");
            println!("{}", PathDisplay(&path));
        }
    } else {
        println!("\nThis maze has no solution.");
    }

    Ok(())
}
