// Board geometry
pub const SCREEN_HEIGHT: u16 = 20;
pub const SCREEN_WIDTH: u16 = 70;
pub const BIRD_X: u16 = SCREEN_WIDTH / 4;

// Glyphs
pub const BORDER_CHAR: char = '#';
pub const BIRD_CHAR: char = '*';
pub const PIPE_SIDE: char = '|';
pub const PIPE_FILL: char = ' ';
pub const PIPE_CAP: char = '=';
pub const EMPTY_CHAR: char = ' ';

// Pipes
pub const PIPE_WIDTH: u16 = 3;
pub const MIN_PIPE_HEIGHT: u16 = 3;
pub const MAX_PIPE_HEIGHT: u16 = 11;
pub const GAP_HEIGHT: u16 = 8;
pub const MIN_GAP_HEIGHT: u16 = 4;
pub const GAP_SHRINK_INTERVAL_SECONDS: f64 = 10.0;

// Physics (rows/sec and rows/sec^2)
pub const JUMP_STRENGTH: f64 = -9.5;
pub const BASE_GRAVITY: f64 = 9.8;

// Endless drift
pub const ENDLESS_MIN_PIPE_SPACING: u16 = 20;
pub const ENDLESS_SPACING_STEP_SECONDS: f64 = 10.0;
pub const ENDLESS_MIN_TIME_STEP: f64 = 0.06;
pub const ENDLESS_TIME_STEP_DECREMENT: f64 = 0.005;
pub const ENDLESS_MAX_GRAVITY: f64 = BASE_GRAVITY * 1.6;
pub const ENDLESS_GRAVITY_INCREMENT: f64 = 0.2;
pub const ENDLESS_PHYSICS_STEP_SECONDS: f64 = 15.0;
pub const ENDLESS_SHRINK_CUTOFF_SECONDS: f64 = 45.0;

// Crash pause, in ticks of the current time step
pub const CRASH_PAUSE_TICKS: u32 = 10;

// Intro loading bar
pub const LOADING_BAR_LENGTH: usize = 30;
pub const LOADING_TIME_SECONDS: f64 = 3.0;

// Persistence
pub const HIGHSCORE_FILE: &str = "highscore.json";
pub const LOG_FILE: &str = "flappy.log";
pub const HOME_ENV_VAR: &str = "FLAPPY_HOME";
pub const LOG_ENV_VAR: &str = "FLAPPY_LOG";
