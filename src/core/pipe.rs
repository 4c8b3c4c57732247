//! A single pipe obstacle: a bottom and a top column pair with a gap between.
//!
//! Pipe rows are pipe-local, `0..SCREEN_HEIGHT`. The renderer shifts them down
//! one row to clear the top border.

use super::constants::*;
use rand::Rng;

const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// One full-height glyph column of a pipe at screen column `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeColumn {
    pub x: u16,
    pub glyphs: [char; HEIGHT],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipe {
    /// Screen column of the leftmost glyph. Goes negative while scrolling off.
    pub x: i32,
    pub bottom_height: u16,
    pub top_height: u16,
    pub gap: u16,
    /// Set once the bird has passed this pipe.
    pub scored: bool,
}

/// Largest gap that still leaves room for a minimum-height bottom pipe.
fn max_gap() -> u16 {
    SCREEN_HEIGHT - 2 - MIN_PIPE_HEIGHT
}

fn clamp_gap(gap: u16) -> u16 {
    gap.clamp(MIN_GAP_HEIGHT, max_gap())
}

impl Pipe {
    /// Spawn a pipe at `x` with a uniformly random bottom height in
    /// `MIN_PIPE_HEIGHT..=MAX_PIPE_HEIGHT`, narrowed to `SCREEN_HEIGHT - 2 - gap`
    /// when the gap is too tall to leave room for the full range. With the
    /// default gap of 8 the tallest bottom pipe is 10.
    pub fn new<R: Rng>(x: i32, gap: u16, rng: &mut R) -> Self {
        let gap = clamp_gap(gap);
        let max_bottom = MAX_PIPE_HEIGHT.min(SCREEN_HEIGHT - 2 - gap);
        let bottom = rng.gen_range(MIN_PIPE_HEIGHT..=max_bottom);
        Self::with_heights(x, bottom, gap)
    }

    /// Build a pipe with a known bottom height. The bottom is lowered if it
    /// would leave no room for the gap.
    pub fn with_heights(x: i32, bottom_height: u16, gap: u16) -> Self {
        let mut pipe = Self {
            x,
            bottom_height,
            top_height: 0,
            gap: 0,
            scored: false,
        };
        pipe.set_gap(gap);
        pipe
    }

    /// Change the gap height, keeping `top + gap + bottom + 2 == SCREEN_HEIGHT`.
    pub fn set_gap(&mut self, gap: u16) {
        self.gap = clamp_gap(gap);
        let room = SCREEN_HEIGHT - 2 - self.gap;
        self.bottom_height = self.bottom_height.min(room);
        self.top_height = room - self.bottom_height;
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    /// First column to the right of the pipe.
    pub fn trailing_edge(&self) -> i32 {
        self.x + PIPE_WIDTH as i32
    }

    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() <= 0
    }

    pub fn overlaps_column(&self, column: i32) -> bool {
        self.x <= column && column < self.trailing_edge()
    }

    /// Glyph columns that are inside the screen this frame.
    pub fn visible_columns(&self) -> Vec<PipeColumn> {
        (0..PIPE_WIDTH)
            .filter_map(|offset| {
                let x = self.x + offset as i32;
                if (0..SCREEN_WIDTH as i32).contains(&x) {
                    Some(PipeColumn {
                        x: x as u16,
                        glyphs: self.column_glyphs(offset),
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Whether the glyph at `(column, row)` is a side or cap glyph.
    /// Fill and gap glyphs are passable.
    pub fn is_solid_at(&self, column: i32, row: i32) -> bool {
        if !self.overlaps_column(column) || !(0..SCREEN_WIDTH as i32).contains(&column) {
            return false;
        }
        if !(0..HEIGHT as i32).contains(&row) {
            return false;
        }
        let glyph = self.column_glyphs((column - self.x) as u16)[row as usize];
        glyph == PIPE_SIDE || glyph == PIPE_CAP
    }

    fn column_glyphs(&self, offset: u16) -> [char; HEIGHT] {
        let mut column = [EMPTY_CHAR; HEIGHT];
        let body = if offset == 0 || offset == PIPE_WIDTH - 1 {
            PIPE_SIDE
        } else {
            PIPE_FILL
        };

        let bottom_start = HEIGHT - self.bottom_height as usize - 1;
        for glyph in &mut column[bottom_start..HEIGHT - 1] {
            *glyph = body;
        }
        if bottom_start >= 2 {
            column[bottom_start - 1] = PIPE_CAP;
        }

        let top_end = (self.top_height as usize + 1).min(HEIGHT - 1);
        for glyph in &mut column[..=top_end] {
            *glyph = body;
        }
        if top_end < HEIGHT - 1 {
            column[top_end] = PIPE_CAP;
        }

        column
    }
}
