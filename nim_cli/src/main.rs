use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};

mod commands;

#[derive(Subcommand, Debug)]
enum Command {
    Play(play::Args),
    Analyze(analyze::Args),
}

#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Play(args) => play::run(&args),
        Command::Analyze(args) => analyze::run(&args),
    }
}
