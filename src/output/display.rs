//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, feedback_to_boxes, word_sample};
use crate::commands::{AnalysisResult, AverageResult, OpenerResult, SolveResult};
use crate::core::Word;
use crate::solver::Score;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar in the shared style, or a hidden one when `visible` is false
#[must_use]
pub fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb
}

fn banner(title: &str, subject: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    match subject {
        Some(subject) => println!(
            " {} {} ",
            title.bright_cyan().bold(),
            subject.to_uppercase().bright_yellow().bold()
        ),
        None => println!(" {} ", title.bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());
}

fn print_score_details(score: &Score) {
    println!(
        "  Expected:    {:.3} candidates remain",
        score.expected_size()
    );
    println!("  Worst case:  {} candidates", score.worst_case_size());
    println!("  Entropy:     {:.3} bits", score.entropy());
    println!("  Clusters:    {}", score.cluster_count());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let round = &step.round;
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(round.guess.guess(), round.feedback),
            feedback_to_boxes(round.feedback)
        );

        if verbose {
            let candidates = step.state.candidates();
            println!(
                "  Candidates:  {} ({})",
                round.candidates_before,
                word_sample(candidates.iter(), candidates.len(), 5)
            );
            print_score_details(&round.guess);
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} guesses!", result.steps.len())
            .green()
            .bold()
    );
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult, clusters_shown: usize) {
    let score = &result.score;
    banner("GUESS ANALYSIS:", Some(score.guess().text()));

    println!("\n📊 Against {} possible answers:", score.candidate_count());
    if score.is_candidate() {
        println!("   {}", "Could be the answer itself".green());
    }
    print_score_details(score);

    let clusters = score.sorted_clusters();
    if let Some(&(_, largest)) = clusters.first() {
        println!("\n📈 {}", "Largest clusters:".bright_cyan().bold());
        for &(feedback, size) in clusters.iter().take(clusters_shown) {
            let bar = create_progress_bar(size as f64, largest as f64, 30);
            println!("   {} {} {size:5}", feedback_to_boxes(feedback), bar.green());
        }
        if clusters.len() > clusters_shown {
            println!("   … {} more", clusters.len() - clusters_shown);
        }
    }

    if let Some(worst) = &result.worst_case {
        let candidates = worst.state.candidates();
        println!(
            "\n⚠️  Worst feedback {} leaves {}: {}",
            feedback_to_boxes(worst.feedback),
            candidates.len(),
            word_sample(candidates.iter(), candidates.len(), 8)
        );
        if let Some(next) = worst.state.choose_next_guess() {
            println!("   Best follow-up: {next}");
        }
    }
}

/// Print the result of an average run
pub fn print_average_result(result: &AverageResult) {
    let report = &result.report;
    banner("AVERAGE RESULTS", None);

    let attempted = report.attempted();
    let seconds = result.duration.as_secs_f64();
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Opening:          {}", result.opening.text().to_uppercase());
    println!("   Words tested:     {attempted}");
    match report.average() {
        Some(average) => println!(
            "   Average guesses:  {}",
            format!("{average:.3}").bright_yellow().bold()
        ),
        None => println!("   Average guesses:  {}", "n/a".red()),
    }
    println!("   Time taken:       {seconds:.2}s");
    if seconds > 0.0 {
        println!("   Words/second:     {:.1}", attempted as f64 / seconds);
    }

    let distribution = report.distribution();
    if !distribution.is_empty() {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guesses, &count) in &distribution {
            let pct = (count as f64 / attempted as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guesses:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    let hardest = report.hardest(5);
    if !hardest.is_empty() {
        println!("\n🧗 {}", "Hardest answers:".bright_cyan().bold());
        for trace in hardest {
            let path: Vec<&str> = trace.guesses().map(Word::text).collect();
            println!("   {} ({}): {}", trace.answer, trace.guess_count(), path.join(" → "));
        }
    }

    if !report.failures.is_empty() {
        println!(
            "\n{}",
            format!("❌ {} answers failed:", report.failures.len())
                .red()
                .bold()
        );
        for (answer, err) in &report.failures {
            println!("   {answer}: {err}");
        }
    }
}

/// Print a window of ranked openers
pub fn print_openers(results: &[OpenerResult]) {
    banner("OPENING GUESSES", None);

    let simulated = results.iter().any(|r| r.simulation.is_some());
    if simulated {
        println!(
            "\n {:>5}  {:<8} {:>10} {:>8} {:>9} {:>6} {:>5}",
            "rank", "guess", "expected", "worst", "average", "max", "fail"
        );
    } else {
        println!(
            "\n {:>5}  {:<8} {:>10} {:>8} {:>9}",
            "rank", "guess", "expected", "worst", "entropy"
        );
    }

    for result in results {
        let score = &result.score;
        let marker = if score.is_candidate() { "*" } else { " " };
        let guess = format!("{}{marker}", score.guess());
        match result.simulation {
            Some(simulation) => println!(
                " {:>5}  {:<8} {:>10.3} {:>8} {:>9} {:>6} {:>5}",
                result.rank,
                guess,
                score.expected_size(),
                score.worst_case_size(),
                simulation
                    .average
                    .map_or_else(|| "n/a".to_string(), |a| format!("{a:.3}")),
                simulation.max_guesses,
                simulation.failures
            ),
            None => println!(
                " {:>5}  {:<8} {:>10.3} {:>8} {:>9.3}",
                result.rank,
                guess,
                score.expected_size(),
                score.worst_case_size(),
                score.entropy()
            ),
        }
    }
    println!("\n {} marks a possible answer", "*".bright_yellow());
}
