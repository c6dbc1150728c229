//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::{BoardState, Cell};

/// Render the board in the classic `| X | O |   |` row format
pub fn render_board(state: &BoardState) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            let cells: Vec<String> = (0..3)
                .map(|col| match state.get(row * 3 + col) {
                    Cell::Empty => " ".to_string(),
                    cell => cell.to_char().to_string(),
                })
                .collect();
            format!("| {} |", cells.join(" | "))
        })
        .collect();
    rows.join("\n")
}

/// Render the numbered reference grid shown before the first move
pub fn render_positions() -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            let nums: Vec<String> = (0..3).map(|col| (row * 3 + col).to_string()).collect();
            format!("| {} |", nums.join(" | "))
        })
        .collect();
    format!("Board valid positions\n{}", rows.join("\n"))
}

/// Create a progress bar for a self-play series
pub fn create_series_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
