//! Display functions for command results

use super::formatters::{create_progress_bar, share_grid, tile_row};
use crate::commands::{AnalysisResult, BenchmarkResult, ReplayResult};
use crate::game::GameStatus;
use colored::Colorize;

/// Number of groups listed by the analysis report
const GROUPS_SHOWN: usize = 10;
/// Members listed per group
const MEMBERS_SHOWN: usize = 6;

/// Print the result of replaying a guess sequence
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "REPLAY".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            tile_row(step.record.feedback()),
            step.record.pattern().to_emoji()
        );
        println!(
            "  Candidates: {} → {}",
            step.pool_before, step.pool_after
        );
    }

    let state = &result.final_state;
    println!();
    match state.status() {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", state.history().len())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!(
                "❌ Out of guesses, the word was {}",
                state.target().map(ToString::to_string).unwrap_or_default()
            )
            .red()
            .bold()
        ),
        GameStatus::InProgress => {
            println!("Game in progress: {} words remain", state.pool_size());
            if state.pool_size() <= MEMBERS_SHOWN {
                let words: Vec<&str> = state.pool().iter().map(|w| w.text()).collect();
                println!("  {}", words.join(", ").bright_white());
            }
        }
    }

    if result.skipped > 0 {
        println!(
            "{}",
            format!("{} guesses ignored after the game ended", result.skipped).yellow()
        );
    }

    if state.is_over() {
        println!("\n{}", share_grid(state.history()));
    }
}

/// Print the partition of the pool by a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.guess.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!("   Feedback groups: {}", result.group_count());
    println!(
        "   Worst case:      {}",
        format!("{} remain", result.worst_case()).bright_yellow()
    );
    if result.can_win() {
        println!("   Can win outright");
    }

    if let Some(pick) = result.adversary_pick() {
        println!(
            "\n😈 Adversary answers {} and keeps {} words",
            pick.pattern().to_emoji(),
            pick.len()
        );
    }

    println!("\n📈 {}", "Largest groups:".bright_cyan().bold());
    let largest = result.worst_case() as f64;
    for group in result.groups.iter().take(GROUPS_SHOWN) {
        let bar = create_progress_bar(group.len() as f64, largest, 20);
        let sample: Vec<&str> = group
            .members
            .iter()
            .take(MEMBERS_SHOWN)
            .map(|w| w.text())
            .collect();
        let more = if group.len() > MEMBERS_SHOWN { ", …" } else { "" };

        println!(
            "   {} {} {:5}  {}{}",
            group.pattern().to_emoji(),
            bar.green(),
            group.len(),
            sample.join(", ").bright_black(),
            more.bright_black()
        );
    }

    if result.groups.len() > GROUPS_SHOWN {
        println!(
            "   … and {} smaller groups",
            result.groups.len() - GROUPS_SHOWN
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    if let Some((opener, guesses)) = &result.hardest_opener {
        println!("   Hardest opener:   {opener} ({guesses} guesses)");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
