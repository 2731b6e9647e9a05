//! Level definitions and the brick builder
//!
//! Levels are data, not behavior: an ordered row layout of single-character
//! color codes plus a code -> color-name table. Swapping the config swaps the
//! level without touching the step function.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{Brick, Rect};
use crate::consts::*;

/// Level configuration error
#[derive(Debug, Error)]
pub enum LevelError {
    /// A layout cell references a code missing from the color table. Rejected
    /// at build time; the renderer cannot recover a sensible color later.
    #[error("unknown color code {code:?} at row {row}, column {col}")]
    UnknownColorCode { code: char, row: usize, col: usize },
    #[error("invalid level JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Declarative level layout plus brick geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// One string per row; each char is a color code, `' '` leaves the cell
    /// empty, an empty string leaves the whole row blank.
    pub rows: Vec<String>,
    /// Color code -> color name
    pub colors: HashMap<char, String>,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Gap between neighboring bricks
    pub gap: f32,
    /// Margin reserved for the playfield border
    pub wall_inset: f32,
}

impl Default for LevelConfig {
    /// The classic field: three blank rows, then two rows each of red,
    /// orange, green and yellow, fourteen bricks wide.
    fn default() -> Self {
        let mut rows = vec![String::new(); 3];
        for code in ["R", "R", "O", "O", "G", "G", "Y", "Y"] {
            rows.push(code.repeat(BRICK_COLUMNS));
        }
        let colors = HashMap::from([
            ('R', "red".to_string()),
            ('O', "orange".to_string()),
            ('G', "green".to_string()),
            ('Y', "yellow".to_string()),
        ]);
        Self {
            rows,
            colors,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            gap: BRICK_GAP,
            wall_inset: WALL_SIZE,
        }
    }
}

impl LevelConfig {
    /// Parse a level from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the brick entities for this level, row-major, left to right and
    /// top to bottom. Pure and deterministic: the same config always yields
    /// the same brick set and ordering.
    pub fn build_bricks(&self) -> Result<Vec<Brick>, LevelError> {
        let mut bricks = Vec::new();
        for (row, codes) in self.rows.iter().enumerate() {
            for (col, code) in codes.chars().enumerate() {
                if code == ' ' {
                    continue;
                }
                let color = self
                    .colors
                    .get(&code)
                    .ok_or(LevelError::UnknownColorCode { code, row, col })?;
                bricks.push(Brick {
                    rect: Rect::new(
                        self.wall_inset + col as f32 * (self.brick_width + self.gap),
                        self.wall_inset + row as f32 * (self.brick_height + self.gap),
                        self.brick_width,
                        self.brick_height,
                    ),
                    color: color.clone(),
                });
            }
        }
        Ok(bricks)
    }
}
