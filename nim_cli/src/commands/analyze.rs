use anyhow::Result;
use clap::{self, Parser};
use nim::{position::Position, strategy};
use serde::{Deserialize, Serialize};

/// Evaluate a position: nim-sum, Grundy value, and the computer's reply.
#[derive(Debug, Clone, Parser)]
pub struct Args {
    /// Position to evaluate, e.g. `1/3/5/7`
    #[arg(long, default_value_t = Position::standard())]
    position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Report {
    position: Position,
    nim_sum: u32,
    grundy_value: String,
    player_to_move_wins: bool,
    best_move: Option<String>,
    after: Option<Position>,
}

pub fn run(args: &Args) -> Result<()> {
    let position = args.position;
    let nim_sum = position.nim_sum();
    let best = strategy::best_move(&position).ok();

    let report = Report {
        position,
        nim_sum: nim_sum.value(),
        grundy_value: position.grundy_value().to_string(),
        player_to_move_wins: !nim_sum.is_zero(),
        best_move: best.map(|mv| mv.to_string()),
        after: best.map(|mv| position.try_apply(mv)).transpose()?,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
