//! Per-game simulation state and the fixed-timestep tick.
//!
//! `Game::tick` covers everything up to rendering: difficulty drift, gap
//! shrink, physics, input, pipe movement, scoring, culling and spawning.
//! Collision is checked separately with `Game::check_collision` once the
//! frame has been composed.

use super::config::GameConfig;
use super::constants::*;
use super::pipe::Pipe;
use rand::Rng;

/// What happened during one tick, before the collision check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Running,
    /// At least one pipe was passed this tick.
    Scored(u32),
}

/// Main game state. Owned by the game loop and rebuilt for every game.
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,

    // Bird state
    /// Row position (float for smooth physics). Row 0 is the top border.
    pub bird_y: f64,
    /// Rows/sec, positive = downward.
    pub bird_velocity: f64,

    pub pipes: Vec<Pipe>,
    pub score: u32,

    /// Gap height given to newly spawned pipes.
    pub gap_height: u16,
    /// Elapsed seconds at the last gap shrink (or game start).
    pub last_gap_shrink: f64,

    // Live difficulty, starts at the preset and drifts in endless mode
    pub time_step: f64,
    pub gravity: f64,
    pub pipe_spacing: u16,
    pub dynamic_gap_shift: bool,

    pub tick_count: u64,
}

impl Game {
    /// Start a game with one pipe just off the right edge.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let difficulty = config.difficulty;
        Self {
            config,
            bird_y: (SCREEN_HEIGHT / 2) as f64,
            bird_velocity: 0.0,
            pipes: vec![Pipe::new(SCREEN_WIDTH as i32, config.initial_gap, rng)],
            score: 0,
            gap_height: config.initial_gap,
            last_gap_shrink: 0.0,
            time_step: difficulty.time_step,
            gravity: difficulty.gravity,
            pipe_spacing: difficulty.pipe_spacing,
            dynamic_gap_shift: difficulty.dynamic_gap_shift,
            tick_count: 0,
        }
    }

    /// Advance one tick. `elapsed` is wall-clock seconds since the game started;
    /// `jump` is whether the jump key was pending this tick.
    pub fn tick<R: Rng>(&mut self, elapsed: f64, jump: bool, rng: &mut R) -> TickEvent {
        self.tick_count += 1;

        self.apply_drift(elapsed);
        self.apply_gap_shrink(elapsed);
        self.apply_physics();
        if jump {
            self.jump();
        }

        for pipe in &mut self.pipes {
            pipe.move_left();
        }
        let scored = self.score_passed_pipes();
        self.pipes.retain(|p| !p.is_off_screen());
        self.spawn_if_needed(rng);

        if scored > 0 {
            TickEvent::Scored(scored)
        } else {
            TickEvent::Running
        }
    }

    /// Endless mode: recompute spacing, time step and gravity from elapsed time.
    fn apply_drift(&mut self, elapsed: f64) {
        let difficulty = self.config.difficulty;
        if !difficulty.endless {
            return;
        }
        self.pipe_spacing = difficulty.pipe_spacing_at(elapsed);
        self.time_step = difficulty.time_step_at(elapsed);
        self.gravity = difficulty.gravity_at(elapsed);
        if elapsed > self.config.endless_shrink_cutoff {
            self.dynamic_gap_shift = true;
        }
    }

    /// Narrow the gap for future pipes once per shrink interval.
    fn apply_gap_shrink(&mut self, elapsed: f64) {
        let difficulty = self.config.difficulty;
        if !difficulty.shrink_gap {
            return;
        }
        if elapsed - self.last_gap_shrink <= self.config.gap_shrink_interval {
            return;
        }
        if difficulty.endless && elapsed > self.config.endless_shrink_cutoff {
            return;
        }
        if self.gap_height > self.config.min_gap {
            self.gap_height -= 1;
            self.last_gap_shrink = elapsed;
        }
    }

    fn apply_physics(&mut self) {
        self.bird_velocity += self.gravity * self.time_step;
        self.bird_y += self.bird_velocity * self.time_step;
        self.bird_y = self.bird_y.clamp(1.0, (SCREEN_HEIGHT - 2) as f64);
    }

    /// Jump impulse replaces the current velocity.
    pub fn jump(&mut self) {
        self.bird_velocity = self.config.jump_strength;
    }

    fn score_passed_pipes(&mut self) -> u32 {
        let bird_x = BIRD_X as i32;
        let mut scored = 0;
        for pipe in &mut self.pipes {
            if !pipe.scored && pipe.trailing_edge() < bird_x {
                pipe.scored = true;
                scored += 1;
            }
        }
        self.score += scored;
        scored
    }

    fn spawn_if_needed<R: Rng>(&mut self, rng: &mut R) {
        let threshold = SCREEN_WIDTH as i32 - self.pipe_spacing as i32 - PIPE_WIDTH as i32;
        let should_spawn = match self.pipes.last() {
            None => true,
            Some(last) => last.x <= threshold,
        };
        if should_spawn {
            self.pipes
                .push(Pipe::new(SCREEN_WIDTH as i32, self.gap_height, rng));
        }
    }

    /// Screen row the bird is drawn on.
    pub fn bird_row(&self) -> u16 {
        self.bird_y.floor() as u16
    }

    /// Whether the bird's cell hits a pipe side or cap. Uses pipe geometry,
    /// not the rendered frame, so the bird glyph never masks a hit.
    pub fn check_collision(&self) -> bool {
        let column = BIRD_X as i32;
        // Pipe rows are offset by the top border.
        let row = self.bird_row() as i32 - 1;
        self.pipes
            .iter()
            .filter(|pipe| pipe.overlaps_column(column))
            .any(|pipe| pipe.is_solid_at(column, row))
    }
}
