// Colored terminal output for aggregated rationale tables.

use colored::Colorize;

use crate::aggregate::PhraseCount;
use crate::output::truncate_chars;

/// Display the most frequent rationales after a vectorize run.
pub fn display_top_rationales(rows: &[PhraseCount], limit: usize) {
    if rows.is_empty() {
        println!("No rationale phrases extracted.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top rationales ({} distinct) ===", rows.len()).bold()
    );
    println!();
    println!(
        "  {:>6}  {:<12} {}",
        "Count".dimmed(),
        "Label".dimmed(),
        "Rationale".dimmed(),
    );
    println!("  {}", "-".repeat(60).dimmed());

    for row in rows.iter().take(limit) {
        println!(
            "  {:>6}  {:<12} {}",
            row.count,
            row.label,
            truncate_chars(&row.phrase, 60),
        );
    }
    println!();
}
