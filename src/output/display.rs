//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::BenchmarkResult;
use crate::session::{GameResult, Outcome};
use crate::stats::StatsSummary;
use chrono::NaiveDate;
use colored::Colorize;

/// Print the board of a finished game and how it ended
pub fn print_game_result(result: &GameResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} game on {}",
        result.mode.to_string().to_uppercase().bright_yellow().bold(),
        result.date
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (guess, feedback)) in result.history.iter().enumerate() {
        println!(
            "  {} {}  {}",
            (i + 1).to_string().bright_black(),
            colored_row(guess, feedback),
            feedback.to_emoji()
        );
    }

    println!();
    match &result.outcome {
        Outcome::Solved => println!(
            "{}",
            format!(
                "✅ Solved {} in {} {}!",
                result.answer_text().to_uppercase(),
                result.attempts,
                if result.attempts == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            format!(
                "❌ Out of guesses. The answer was {}",
                result.answer_text().to_uppercase()
            )
            .red()
            .bold()
        ),
        Outcome::NoCandidates => println!(
            "{}",
            format!(
                "❌ No dictionary word fits the clues. The answer was {}",
                result.answer_text().to_uppercase()
            )
            .red()
            .bold()
        ),
        Outcome::Crashed { reason } => {
            println!("{}", format!("💥 Game crashed: {reason}").red().bold());
        }
    }
}

/// Print the result of a batch run
#[allow(clippy::cast_precision_loss)]
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let summary = &result.summary;
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", summary.played);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", summary.win_rate()).bright_yellow().bold()
    );
    if let Some(average) = summary.average_guesses() {
        println!("   Average guesses:  {average:.2} (won games)");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    print_distribution(summary);
}

/// Print win rate and guess distribution from the results store
pub fn print_stats_summary(summary: &StatsSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if summary.played == 0 {
        println!("\nNo games recorded yet.");
        return;
    }

    println!("\n   Played:   {}", summary.played);
    println!("   Won:      {}", summary.won.to_string().green());
    println!("   Lost:     {}", summary.lost().to_string().red());
    println!(
        "   Success:  {}",
        format!("{:.2}%", summary.win_rate()).bright_yellow().bold()
    );

    print_distribution(summary);
}

/// Print the answer recorded for a date
pub fn print_recorded_answer(date: Option<NaiveDate>, answer: Option<&str>) {
    let when = date.map_or_else(|| "first recorded game".to_string(), |d| d.to_string());
    match answer {
        Some(answer) => println!("Answer for {when}: {}", answer.to_uppercase().bold()),
        None => println!("No answer recorded for {when}"),
    }
}

#[allow(clippy::cast_precision_loss)]
fn print_distribution(summary: &StatsSummary) {
    if summary.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &summary.distribution {
        let pct = count as f64 / summary.played as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
