//! Display functions for game results

use super::formatters::{kind_label, points_delta, spaced_letters, word_list};
use crate::game::{Hints, MoveResult};
use crate::server::Response;
use colored::Colorize;

/// Print the current word and running score
pub fn print_turn(current: &str, score: u32, used: usize) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Current word: {}   Score: {}   Words played: {used}",
        spaced_letters(current).bright_yellow().bold(),
        score.to_string().bright_cyan().bold()
    );
    println!("────────────────────────────────────────────────────────────");
}

/// Print the outcome of a submitted move
pub fn print_move_result(word: &str, result: &MoveResult) {
    match result.kind {
        Some(kind) if result.accepted => {
            println!(
                "✅ {} [{}] {}",
                word.to_uppercase().bright_white().bold(),
                kind_label(kind).bright_cyan(),
                points_delta(result.points).green().bold()
            );
            println!("   {}", result.message);
        }
        _ => println!("❌ {}", result.message.red()),
    }
}

/// Print hints grouped by rule
pub fn print_hints(hints: &Hints) {
    println!("\n💡 {}", "Hints:".bright_cyan().bold());
    println!("   Original rule: {}", word_list(&hints.original).bright_white());
    println!("   Modified rule: {}", word_list(&hints.modified).bright_white());
    println!("   {}", "(hinted words earn half points)".bright_black());
}

/// Print the end-of-game banner
pub fn print_game_over(score: u32, history: &[&str]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "        🏁  G A M E   O V E R  🏁        ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  No more words can be made. Final score: {}",
        score.to_string().bright_yellow().bold()
    );
    if !history.is_empty() {
        println!("  Chain: {}", history.join(" → ").bright_white());
    }
    println!();
}

/// Print a protocol response, either as raw JSON or human-readable
pub fn print_response(response: &Response, json: bool) {
    if json {
        match serde_json::to_string_pretty(response) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Could not encode response: {e}"),
        }
        return;
    }

    match response {
        Response::Start(start) => {
            println!("Start word: {}", start.word.bright_yellow().bold());
        }
        Response::Move(result) => {
            if result.success {
                let label = result.classification.as_deref().unwrap_or("move");
                println!(
                    "✅ {} [{}] {}",
                    result.message,
                    label.bright_cyan(),
                    points_delta(result.points.unwrap_or(0)).green().bold()
                );
                if result.game_over {
                    println!("{}", "🏁 No moves remain: game over".bright_yellow());
                }
            } else {
                println!("❌ {}", result.message.red());
            }
        }
        Response::Hint(hints) => {
            println!("Original rule: {}", word_list(&hints.original_rule_hints));
            println!("Modified rule: {}", word_list(&hints.modified_rule_hints));
            if hints.game_over {
                println!("{}", "🏁 No moves remain: game over".bright_yellow());
            }
        }
        Response::Check(check) => {
            if check.valid {
                println!("✅ {} is a valid word", check.word.bright_white().bold());
            } else {
                println!("❌ {} is not a valid word", check.word.bright_white().bold());
            }
        }
        Response::Failure(failure) => println!("❌ {}", failure.message.red()),
    }
}
