//! Main menu and game-over screens as plain text rows.

use crate::core::difficulty::Mode;

const MENU_INDENT: usize = 20;
const GAME_OVER_INDENT: usize = 25;

fn indented(indent: usize, text: &str) -> String {
    format!("{}{}", " ".repeat(indent), text)
}

/// Main menu. `best` is the best score across modes and the mode it was set in.
pub fn main_menu_lines(best: (Mode, u32)) -> Vec<String> {
    let (best_mode, best_score) = best;
    let high_score = if best_score > 0 {
        format!("High Score: {} ({} Mode)", best_score, best_mode.name())
    } else {
        "High Score: 0".to_string()
    };

    let mut lines = vec![String::new(), String::new()];
    lines.push(indented(MENU_INDENT, "Flappy Bird Main Menu"));
    lines.push(indented(MENU_INDENT, &high_score));
    lines.push(String::new());
    for (i, mode) in Mode::ALL.iter().enumerate() {
        lines.push(indented(
            MENU_INDENT,
            &format!("{}. {} Mode", i + 1, mode.name()),
        ));
    }
    lines.push(indented(MENU_INDENT, &format!("{}. Exit", Mode::ALL.len() + 1)));
    lines
}

/// Game-over screen. `mode_best` is the stored best for the mode just played.
pub fn game_over_lines(score: u32, mode: Mode, mode_best: u32) -> Vec<String> {
    let mut lines = vec![String::new(), String::new()];
    lines.push(indented(GAME_OVER_INDENT, "##### GAME OVER #####"));
    lines.push(indented(GAME_OVER_INDENT, &format!("Your score: {}", score)));
    if mode_best > 0 {
        lines.push(indented(
            GAME_OVER_INDENT,
            &format!("High Score ({}): {}", mode.name(), mode_best),
        ));
    }
    lines.push(String::new());
    lines.push(indented(GAME_OVER_INDENT, "1. Play Again"));
    lines.push(indented(GAME_OVER_INDENT, "2. Return to Menu"));
    lines.push(indented(GAME_OVER_INDENT, "3. Exit"));
    lines
}
