//! Formatting utilities for terminal output

use crate::solver::Ladder;

/// Words per line when printing a ladder
pub const PRINT_WIDTH: usize = 5;

/// Format a ladder as arrow-separated words, `per_line` words to a line
#[must_use]
pub fn ladder_lines(ladder: &Ladder, per_line: usize) -> Vec<String> {
    let words: Vec<&str> = ladder.iter().map(|w| w.text()).collect();
    let chunks: Vec<String> = words
        .chunks(per_line.max(1))
        .map(|chunk| chunk.join(" -> "))
        .collect();

    let last = chunks.len().saturating_sub(1);
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, line)| if i < last { format!("{line} ->") } else { line })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSet;
    use crate::solver::shortest_path;

    fn long_ladder() -> Ladder {
        let set = WordSet::build(
            ["cold", "cord", "card", "ward", "warm", "worm", "word", "wore", "bore"],
            4,
        );
        shortest_path(&set, "cold", "warm").unwrap()
    }

    #[test]
    fn ladder_lines_single_line() {
        let set = WordSet::build(["cat", "cot", "cog", "dog"], 3);
        let ladder = shortest_path(&set, "cat", "dog").unwrap();
        assert_eq!(ladder_lines(&ladder, PRINT_WIDTH), vec!["cat -> cot -> cog -> dog"]);
    }

    #[test]
    fn ladder_lines_wraps() {
        let ladder = long_ladder();
        assert_eq!(ladder.len(), 5);
        let lines = ladder_lines(&ladder, 2);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" ->"));
        assert!(!lines[2].ends_with(" ->"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
