//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed per-tick step only
//! - Stable brick order (row-major as built)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{BounceAxis, brick_bounce_axis, rects_overlap};
pub use level::{LevelConfig, LevelError};
pub use state::{Ball, Brick, DrawBody, GameState, Paddle, Rect, Snapshot};
pub use tick::{GameEvent, PaddleDir, TickInput, tick};
