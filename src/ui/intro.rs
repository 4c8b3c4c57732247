//! Intro screen: banner art on the empty board and a fake loading bar.

use crate::core::constants::*;
use std::time::Duration;

pub const BAR_FILL: char = '█';

/// Steps drawn by the loading bar; the bar holds two fewer cells than its length.
pub const LOADING_STEPS: usize = LOADING_BAR_LENGTH - 2;

const ART: [&str; 8] = [
    r"  ______ _                    _  ____  _  ____        _ ",
    r" |  ____| |                  (_)|    )(_)|    \      | |",
    r" | |__  | | __ _ _ __ _ _ __  _ | () / _ | () |    __| |",
    r" |  __| | |/ _` | '_  \| '_ \| ||   | | ||  _ \  /  _| |",
    r" | |    | | (_| | |_) || |_) | || () \| || | \ \ | (_| |",
    r" |_|    |_|\___,|_.__/_| .__/|_||____)|_||_|  |_|\__,|_|",
    r"                | |    | |                              ",
    r"                |_|    |_|                              ",
];

const ART_TOP_ROW: usize = 2;

pub const CONTINUE_PROMPT: &str = "Press any key to continue...";

/// Delay between loading bar steps.
pub fn step_delay() -> Duration {
    Duration::from_secs_f64(LOADING_TIME_SECONDS / LOADING_BAR_LENGTH as f64)
}

/// The bordered board with the banner art centered near the top.
pub fn banner_screen() -> Vec<String> {
    let width = SCREEN_WIDTH as usize;
    let height = SCREEN_HEIGHT as usize;
    let inner = width - 2;
    let pad = width.saturating_sub(ART[0].len()) / 2;

    let border = BORDER_CHAR.to_string();
    let mut rows: Vec<String> = (0..height)
        .map(|row| {
            if row == 0 || row == height - 1 {
                border.repeat(width)
            } else {
                format!("{border}{}{border}", " ".repeat(inner))
            }
        })
        .collect();

    for (i, art_line) in ART.iter().enumerate() {
        let row = ART_TOP_ROW + i;
        if row >= height - 1 {
            break;
        }
        let body: String = format!("{}{}", " ".repeat(pad), art_line)
            .chars()
            .take(inner)
            .collect();
        rows[row] = format!("{border}{body:<inner$}{border}");
    }
    rows
}

/// Loading bar after `step` of `LOADING_STEPS` steps.
pub fn loading_bar(step: usize) -> String {
    let step = step.min(LOADING_STEPS);
    let indent = (SCREEN_WIDTH as usize).saturating_sub(LOADING_BAR_LENGTH + 10) / 2;
    format!(
        "{}Loading: [{}{}]",
        " ".repeat(indent),
        BAR_FILL.to_string().repeat(step),
        " ".repeat(LOADING_STEPS - step)
    )
}

/// Full intro frame. With `prompt`, the continue prompt is shown below the bar.
pub fn intro_frame(step: usize, prompt: bool) -> Vec<String> {
    let mut lines = banner_screen();
    lines.push(loading_bar(step));
    if prompt {
        lines.push(String::new());
        lines.push(CONTINUE_PROMPT.to_string());
    }
    lines
}
