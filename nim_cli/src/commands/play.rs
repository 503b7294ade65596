use std::io::{self, BufRead, Write, stdin, stdout};

use anyhow::Result;
use clap::{self, Parser};
use nim::{
    engine::{Engine, Player},
    moves::Move,
};

/// Play an interactive game against the computer.
///
/// Rows are picked by their 1-based number; whoever takes the last
/// matchstick wins.
#[derive(Debug, Clone, Parser)]
pub struct Args {}

pub fn run(_args: &Args) -> Result<()> {
    println!("Nim: four rows of matchsticks, take any number from one row.");
    println!("Whoever takes the last matchstick wins.");

    let mut engine = Engine::new();
    let mut lines = stdin().lock().lines();

    loop {
        println!();
        render(&engine);

        let Some(row) = prompt_u32(&mut lines, "Row (1-4): ")? else {
            break;
        };
        let Some(take) = prompt_u32(&mut lines, "Matchsticks to take: ")? else {
            break;
        };
        let mv = Move {
            heap: (row as usize).wrapping_sub(1),
            take,
        };
        if let Err(err) = engine.apply_move(Player::Human, mv) {
            println!("{err}");
            continue;
        }
        if engine.is_terminal() {
            break;
        }

        let reply = engine.compute_ai_move()?;
        println!("Computer takes {reply}");
        engine.apply_move(Player::Ai, reply)?;
        if engine.is_terminal() {
            break;
        }
    }

    println!();
    render(&engine);
    match engine.winner() {
        Some(Player::Human) => println!("You win!"),
        Some(Player::Ai) => println!("The computer wins."),
        None => println!("Game abandoned."),
    }
    Ok(())
}

fn render(engine: &Engine) {
    for (row, &sticks) in engine.heaps().iter().enumerate() {
        println!("row {}: {}", row + 1, "| ".repeat(sticks as usize));
    }
}

/// Prompt until the user types a number; `None` on end of input
fn prompt_u32(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<u32>> {
    loop {
        print!("{prompt}");
        stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.trim().parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("That is not a number."),
        }
    }
}
