//! ASCII frame composition for the playing field.
//!
//! A frame is `SCREEN_HEIGHT` rows: the bordered board on the left, then one
//! space and the score panel on the right.

use crate::core::constants::*;
use crate::core::game_state::Game;
use crate::core::pipe::Pipe;

const HEIGHT: usize = SCREEN_HEIGHT as usize;
const WIDTH: usize = SCREEN_WIDTH as usize;

/// Mutable character grid for one frame.
pub type Grid = Vec<Vec<char>>;

/// Bordered board with a blank interior.
pub fn create_empty_screen() -> Grid {
    (0..HEIGHT)
        .map(|row| {
            if row == 0 || row == HEIGHT - 1 {
                vec![BORDER_CHAR; WIDTH]
            } else {
                let mut line = vec![EMPTY_CHAR; WIDTH];
                line[0] = BORDER_CHAR;
                line[WIDTH - 1] = BORDER_CHAR;
                line
            }
        })
        .collect()
}

/// Overlay a pipe's visible columns. Pipe row `y` lands on screen row `y + 1`;
/// the borders are never overwritten.
pub fn draw_pipe(grid: &mut Grid, pipe: &Pipe) {
    for column in pipe.visible_columns() {
        for (y, glyph) in column.glyphs.iter().enumerate() {
            let row = y + 1;
            if row < HEIGHT - 1 {
                grid[row][column.x as usize] = *glyph;
            }
        }
    }
}

pub fn draw_bird(grid: &mut Grid, bird_y: f64) {
    let row = (bird_y.floor().max(0.0) as usize).min(HEIGHT - 1);
    grid[row][BIRD_X as usize] = BIRD_CHAR;
}

/// Largest score the three-digit panel shows; higher scores display as this.
const MAX_PANEL_SCORE: u32 = 999;

/// Score box, padded with blank rows to the board height.
pub fn score_panel(score: u32) -> Vec<String> {
    let middle = format!("# SCORE: {:<3}#", score.min(MAX_PANEL_SCORE));
    let edge = BORDER_CHAR.to_string().repeat(middle.chars().count());
    let blank = " ".repeat(middle.chars().count());

    let mut panel = vec![edge.clone(), middle, edge];
    panel.resize(HEIGHT, blank);
    panel
}

/// Compose a full frame from pipes, bird and score.
pub fn compose_frame(pipes: &[Pipe], bird_y: f64, score: u32) -> Vec<String> {
    let mut grid = create_empty_screen();
    for pipe in pipes {
        draw_pipe(&mut grid, pipe);
    }
    draw_bird(&mut grid, bird_y);

    grid.iter()
        .zip(score_panel(score))
        .map(|(row, panel)| {
            let mut line: String = row.iter().collect();
            line.push(' ');
            line.push_str(&panel);
            line
        })
        .collect()
}

pub fn render_frame(game: &Game) -> Vec<String> {
    compose_frame(&game.pipes, game.bird_y, game.score)
}
