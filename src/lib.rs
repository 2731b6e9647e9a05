//! Breakout simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state, level builder, collisions, tick)
//!
//! The crate owns no frame timing: an external scheduler invokes
//! [`sim::tick()`] once per display refresh with that frame's
//! [`sim::TickInput`], then reads [`sim::GameState::snapshot`] for drawing.
//! Pausing is a predicate the tick checks and contributes no mutation for;
//! stopping, rescheduling and logger setup belong to the host.

pub mod sim;

pub use sim::{
    GameEvent, GameState, LevelConfig, LevelError, PaddleDir, Snapshot, TickInput, tick,
};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;
    /// Border margin excluded from brick/paddle/ball travel
    pub const WALL_SIZE: f32 = 12.0;

    /// Brick defaults - 14 columns of 24x8 bricks with a 2px gap
    pub const BRICK_COLUMNS: usize = 14;
    pub const BRICK_WIDTH: f32 = 24.0;
    pub const BRICK_HEIGHT: f32 = 8.0;
    pub const BRICK_GAP: f32 = 2.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 15.0;
    /// Per-tick, per-axis speed while in flight
    pub const BALL_SPEED: f32 = 6.0;
    /// Fixed launch point the ball starts from and returns to after a miss
    pub const BALL_LAUNCH_X: f32 = 130.0;
    pub const BALL_LAUNCH_Y: f32 = 260.0;
    pub const BALL_FILL: &str = "black";

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = BRICK_WIDTH * 2.0;
    pub const PADDLE_HEIGHT: f32 = BRICK_HEIGHT;
    pub const PADDLE_Y: f32 = PLAYFIELD_HEIGHT - PLAYFIELD_HEIGHT / 6.0;
    /// Per-tick paddle speed while a direction is held
    pub const PADDLE_SPEED: f32 = 10.0;
    pub const PADDLE_FILL: &str = "cyan";
}
