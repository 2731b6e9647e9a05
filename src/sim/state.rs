//! Game state and core simulation types
//!
//! One session-scoped [`GameState`] holds everything; the host owns it between
//! ticks and there is exactly one mutator per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{LevelConfig, LevelError};
use crate::consts::*;

/// Axis-aligned box, the base shape for every body on the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A destructible brick. Immutable once built; removal is the only mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Color name from the level's code table, passed through to the renderer
    pub color: String,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal velocity, set from input each tick
    pub dx: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                PLAYFIELD_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
                PADDLE_Y,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            dx: 0.0,
        }
    }
}

/// The ball. Idle means zero velocity, waiting for a launch command; there is
/// exactly one ball per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    /// Per-axis speed used to reconstruct velocity on launch
    pub speed: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            rect: Rect::new(BALL_LAUNCH_X, BALL_LAUNCH_Y, BALL_SIZE, BALL_SIZE),
            vel: Vec2::ZERO,
            speed: BALL_SPEED,
        }
    }
}

impl Ball {
    /// Whether the ball is waiting for a launch command
    pub fn is_idle(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Put the ball in flight, down-right
    pub fn launch(&mut self) {
        self.vel = Vec2::splat(self.speed);
    }

    /// Return to the fixed launch point and go idle (after a miss)
    pub fn reset(&mut self) {
        self.rect.pos = Vec2::new(BALL_LAUNCH_X, BALL_LAUNCH_Y);
        self.vel = Vec2::ZERO;
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live bricks, row-major as built. This ordering is the collision scan
    /// order and only ever shrinks within a playthrough.
    pub bricks: Vec<Brick>,
    /// Current playthrough score, reset on each launch
    pub score: u32,
    /// Best score this session, monotonically non-decreasing
    pub high_score: u32,
    /// Tick counter
    pub time_ticks: u64,
    /// Level the brick set was built from, kept so `reset` can rebuild it
    config: LevelConfig,
}

impl GameState {
    /// Build a fresh session from a level configuration. Fails fast if the
    /// layout references a color code missing from the table.
    pub fn new(config: LevelConfig) -> Result<Self, LevelError> {
        let bricks = config.build_bricks()?;
        log::info!("level built: {} bricks", bricks.len());
        Ok(Self {
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks,
            score: 0,
            high_score: 0,
            time_ticks: 0,
            config,
        })
    }

    /// Session with the classic layout: three blank rows, then paired
    /// red/orange/green/yellow rows.
    pub fn classic() -> Self {
        Self::new(LevelConfig::default()).expect("default level layout is self-consistent")
    }

    /// Start a new game: rebuild the brick set and reset ball, paddle and
    /// score. The session high score survives.
    pub fn reset(&mut self) {
        // config was validated in new()
        self.bricks = self
            .config
            .build_bricks()
            .expect("level config validated at construction");
        self.paddle = Paddle::default();
        self.ball = Ball::default();
        self.score = 0;
        self.time_ticks = 0;
        log::info!("session reset, high score {}", self.high_score);
    }

    /// Drawable bodies plus scores for the renderer. The idle ball is not
    /// drawn; draw order is ball, bricks, paddle.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let mut bodies = Vec::with_capacity(self.bricks.len() + 2);
        if !self.ball.is_idle() {
            bodies.push(DrawBody {
                rect: self.ball.rect,
                fill: BALL_FILL,
            });
        }
        for brick in &self.bricks {
            bodies.push(DrawBody {
                rect: brick.rect,
                fill: &brick.color,
            });
        }
        bodies.push(DrawBody {
            rect: self.paddle.rect,
            fill: PADDLE_FILL,
        });
        Snapshot {
            bodies,
            score: self.score,
            high_score: self.high_score,
        }
    }
}

/// One drawable rectangle handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawBody<'a> {
    pub rect: Rect,
    pub fill: &'a str,
}

/// Read-only view of everything the renderer needs after a tick
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub bodies: Vec<DrawBody<'a>>,
    pub score: u32,
    pub high_score: u32,
}
