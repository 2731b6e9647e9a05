//! Per-frame simulation step
//!
//! The host's animation scheduler calls [`tick`] once per display refresh and
//! reads a snapshot afterwards. The function never blocks and carries no
//! timing knowledge of its own.

use super::collision::{BounceAxis, brick_bounce_axis, rects_overlap};
use super::state::GameState;
use crate::consts::*;

/// Paddle control intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleDir {
    Left,
    #[default]
    Stop,
    Right,
}

impl PaddleDir {
    /// Signed horizontal velocity for this intent
    pub fn velocity(self) -> f32 {
        match self {
            PaddleDir::Left => -PADDLE_SPEED,
            PaddleDir::Stop => 0.0,
            PaddleDir::Right => PADDLE_SPEED,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub paddle_dir: PaddleDir,
    /// Launch the idle ball; ignored while in flight
    pub launch: bool,
    /// Pause predicate owned by the host; a paused tick mutates nothing
    pub paused: bool,
}

/// State transitions surfaced to the host (score display, audio cues)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball left the idle state; the score was reset for the new playthrough
    BallLaunched,
    /// A brick was removed; carries the updated score
    BrickDestroyed { score: u32 },
    /// Ball fell past the bottom boundary and returned to the launch point
    BallMissed,
}

/// Advance the simulation by one tick.
///
/// Order while running: launch handling, paddle motion and clamp, ball
/// motion, wall resolution and miss check, paddle collision, brick scan with
/// at most one resolution.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.paused {
        return events;
    }

    // Launch only makes sense while idle. It starts a new playthrough, so the
    // current score resets; the session high score is untouched.
    if input.launch && state.ball.is_idle() {
        state.ball.launch();
        state.score = 0;
        log::debug!("ball launched at tick {}", state.time_ticks);
        events.push(GameEvent::BallLaunched);
    }

    // Paddle: apply input velocity, then clamp to the walls (no bounce).
    state.paddle.dx = input.paddle_dir.velocity();
    state.paddle.rect.pos.x += state.paddle.dx;
    if state.paddle.rect.left() < WALL_SIZE {
        state.paddle.rect.pos.x = WALL_SIZE;
    } else if state.paddle.rect.right() > PLAYFIELD_WIDTH - WALL_SIZE {
        state.paddle.rect.pos.x = PLAYFIELD_WIDTH - WALL_SIZE - state.paddle.rect.size.x;
    }

    // Ball advances on both axes at once; discrete stepping, not swept.
    state.ball.rect.pos += state.ball.vel;

    // Side and top walls reflect; the clamp keeps the ball from visually
    // penetrating the border.
    let ball = &mut state.ball;
    if ball.rect.left() < WALL_SIZE {
        ball.rect.pos.x = WALL_SIZE;
        ball.vel.x = -ball.vel.x;
    } else if ball.rect.right() > PLAYFIELD_WIDTH - WALL_SIZE {
        ball.rect.pos.x = PLAYFIELD_WIDTH - WALL_SIZE - ball.rect.size.x;
        ball.vel.x = -ball.vel.x;
    }
    if ball.rect.top() < WALL_SIZE {
        ball.rect.pos.y = WALL_SIZE;
        ball.vel.y = -ball.vel.y;
    }

    // There is no bottom wall: falling past the playfield is a miss, which is
    // normal gameplay, not a failure.
    if ball.rect.top() > PLAYFIELD_HEIGHT {
        ball.reset();
        log::debug!("ball missed, back to launch point");
        events.push(GameEvent::BallMissed);
    }

    // Paddle bounce: flip dy and lift the ball flush with the paddle top so
    // the same collision cannot fire again next tick.
    if rects_overlap(&state.ball.rect, &state.paddle.rect) {
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.rect.pos.y = state.paddle.rect.top() - state.ball.rect.size.y;
    }

    // Brick scan in build order; the first overlap wins and ends the scan, so
    // at most one brick is destroyed per tick even when the ball straddles a
    // seam between two bricks.
    for i in 0..state.bricks.len() {
        if !rects_overlap(&state.ball.rect, &state.bricks[i].rect) {
            continue;
        }
        state.score += 1;
        if state.score > state.high_score {
            state.high_score = state.score;
        }
        let brick = state.bricks.remove(i);
        // No push-out here (unlike the paddle): velocity reversal plus
        // forward motion separates the ball over the next frames.
        match brick_bounce_axis(&state.ball.rect, state.ball.speed, &brick.rect) {
            BounceAxis::Vertical => state.ball.vel.y = -state.ball.vel.y,
            BounceAxis::Horizontal => state.ball.vel.x = -state.ball.vel.x,
        }
        log::debug!(
            "{} brick destroyed at ({}, {}), score {}",
            brick.color,
            brick.rect.pos.x,
            brick.rect.pos.y,
            state.score
        );
        events.push(GameEvent::BrickDestroyed { score: state.score });
        break;
    }

    state.time_ticks += 1;
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::LevelConfig;
    use glam::Vec2;
    use proptest::prelude::*;

    fn tiny_level(rows: &[&str], brick_w: f32, brick_h: f32) -> GameState {
        let config = LevelConfig {
            rows: rows.iter().map(|r| r.to_string()).collect(),
            brick_width: brick_w,
            brick_height: brick_h,
            gap: 0.0,
            wall_inset: 100.0,
            ..LevelConfig::default()
        };
        GameState::new(config).unwrap()
    }

    #[test]
    fn launch_requires_idle_ball() {
        let mut state = GameState::classic();
        state.score = 3;
        state.high_score = 5;

        let input = TickInput {
            launch: true,
            ..TickInput::default()
        };
        let events = tick(&mut state, &input);
        assert!(events.contains(&GameEvent::BallLaunched));
        assert_eq!(state.ball.vel, Vec2::splat(BALL_SPEED));
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 5);

        // Already in flight: launch is a no-op
        let events = tick(&mut state, &input);
        assert!(!events.contains(&GameEvent::BallLaunched));
    }

    #[test]
    fn miss_resets_ball_to_launch_point() {
        let mut state = GameState::classic();
        state.ball.rect.pos = Vec2::new(200.0, 398.0);
        state.ball.vel = Vec2::new(4.0, 6.0);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::BallMissed));
        assert!(state.ball.is_idle());
        assert_eq!(state.ball.rect.pos, Vec2::new(BALL_LAUNCH_X, BALL_LAUNCH_Y));
    }

    #[test]
    fn paddle_bounce_flips_dy_and_removes_overlap() {
        let mut state = GameState::classic();
        let paddle_top = state.paddle.rect.top();
        state.ball.rect.pos = Vec2::new(
            state.paddle.rect.pos.x,
            paddle_top - state.ball.rect.size.y - 4.0,
        );
        state.ball.vel = Vec2::new(0.0, 6.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, -6.0);
        assert!((state.ball.rect.bottom() - paddle_top).abs() < 1e-4);
    }

    #[test]
    fn brick_hit_from_below_flips_dy_and_scores() {
        let mut state = tiny_level(&["R"], 1.0, 1.0);
        // Brick occupies (100, 100)..(101, 101)
        state.ball.rect.pos = Vec2::new(95.0, 84.0);
        state.ball.vel = Vec2::new(0.0, 6.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::BrickDestroyed { score: 1 }]);
        assert!(state.bricks.is_empty());
        assert_eq!(state.ball.vel, Vec2::new(0.0, -6.0));
        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
    }

    #[test]
    fn seam_overlap_destroys_only_first_brick() {
        // Two 10x10 bricks side by side; the ball straddles the seam. The
        // scan stops at the first hit, so only one brick goes per tick.
        let mut state = tiny_level(&["RR"], 10.0, 10.0);
        state.ball.rect.pos = Vec2::new(103.0, 89.0);
        state.ball.vel = Vec2::new(0.0, 6.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.len(), 1);
        assert_eq!(state.bricks.len(), 1);
        assert_eq!(state.bricks[0].rect.pos.x, 110.0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn paddle_stays_clamped_at_left_wall() {
        let mut state = GameState::classic();
        state.paddle.rect.pos.x = WALL_SIZE;

        let input = TickInput {
            paddle_dir: PaddleDir::Left,
            ..TickInput::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.rect.pos.x, WALL_SIZE);
    }

    #[test]
    fn paddle_right_clamp_uses_paddle_width() {
        let mut state = GameState::classic();
        state.paddle.rect.pos.x = PLAYFIELD_WIDTH - WALL_SIZE - state.paddle.rect.size.x;

        let input = TickInput {
            paddle_dir: PaddleDir::Right,
            ..TickInput::default()
        };
        tick(&mut state, &input);
        assert_eq!(
            state.paddle.rect.right(),
            PLAYFIELD_WIDTH - WALL_SIZE
        );
    }

    #[test]
    fn side_wall_reflects_ball() {
        let mut state = GameState::classic();
        state.ball.rect.pos = Vec2::new(WALL_SIZE + 2.0, 200.0);
        state.ball.vel = Vec2::new(-6.0, 6.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.rect.pos.x, WALL_SIZE);
        assert_eq!(state.ball.vel.x, 6.0);
    }

    #[test]
    fn top_wall_reflects_ball() {
        let mut state = GameState::classic();
        state.bricks.clear();
        state.ball.rect.pos = Vec2::new(200.0, WALL_SIZE + 2.0);
        state.ball.vel = Vec2::new(6.0, -6.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.rect.pos.y, WALL_SIZE);
        assert_eq!(state.ball.vel.y, 6.0);
    }

    #[test]
    fn paused_tick_mutates_nothing() {
        let mut state = GameState::classic();
        state.ball.launch();
        let ball_pos = state.ball.rect.pos;
        let paddle_pos = state.paddle.rect.pos;

        let input = TickInput {
            paddle_dir: PaddleDir::Right,
            launch: true,
            paused: true,
        };
        let events = tick(&mut state, &input);
        assert!(events.is_empty());
        assert_eq!(state.ball.rect.pos, ball_pos);
        assert_eq!(state.paddle.rect.pos, paddle_pos);
        assert_eq!(state.time_ticks, 0);
    }

    fn dir_strategy() -> impl Strategy<Value = PaddleDir> {
        prop_oneof![
            Just(PaddleDir::Left),
            Just(PaddleDir::Stop),
            Just(PaddleDir::Right),
        ]
    }

    fn input_sequence() -> impl Strategy<Value = Vec<(PaddleDir, bool)>> {
        prop::collection::vec((dir_strategy(), any::<bool>()), 1..400)
    }

    proptest! {
        /// Paddle and ball stay inside the walls after every tick.
        #[test]
        fn prop_bodies_stay_inside_walls(cmds in input_sequence()) {
            let mut state = GameState::classic();
            for (paddle_dir, launch) in cmds {
                let input = TickInput { paddle_dir, launch, paused: false };
                tick(&mut state, &input);

                prop_assert!(state.paddle.rect.left() >= WALL_SIZE);
                prop_assert!(state.paddle.rect.right() <= PLAYFIELD_WIDTH - WALL_SIZE);
                prop_assert!(state.ball.rect.left() >= WALL_SIZE);
                prop_assert!(state.ball.rect.right() <= PLAYFIELD_WIDTH - WALL_SIZE);
                prop_assert!(state.ball.rect.top() >= WALL_SIZE);
            }
        }

        /// Brick count never grows, at most one brick goes per tick, and the
        /// score moves in lockstep with destruction events.
        #[test]
        fn prop_bricks_shrink_one_at_a_time(cmds in input_sequence()) {
            let mut state = GameState::classic();
            let mut prev_bricks = state.bricks.len();
            for (paddle_dir, launch) in cmds {
                let input = TickInput { paddle_dir, launch, paused: false };
                let prev_score = state.score;
                let was_idle = state.ball.is_idle();
                let events = tick(&mut state, &input);

                let destroyed = events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                    .count();
                prop_assert!(destroyed <= 1);
                prop_assert_eq!(prev_bricks - state.bricks.len(), destroyed);
                if destroyed == 1 {
                    let base = if launch && was_idle { 0 } else { prev_score };
                    prop_assert_eq!(state.score, base + 1);
                }
                prev_bricks = state.bricks.len();
            }
        }

        /// High score dominates the current score and never decreases.
        #[test]
        fn prop_high_score_is_monotone(cmds in input_sequence()) {
            let mut state = GameState::classic();
            let mut prev_high = state.high_score;
            for (paddle_dir, launch) in cmds {
                let input = TickInput { paddle_dir, launch, paused: false };
                tick(&mut state, &input);

                prop_assert!(state.high_score >= state.score);
                prop_assert!(state.high_score >= prev_high);
                prev_high = state.high_score;
            }
        }

        /// A launch event fires exactly when the ball was idle and the launch
        /// command was given.
        #[test]
        fn prop_launch_iff_idle(cmds in input_sequence()) {
            let mut state = GameState::classic();
            for (paddle_dir, launch) in cmds {
                let was_idle = state.ball.is_idle();
                let input = TickInput { paddle_dir, launch, paused: false };
                let events = tick(&mut state, &input);

                let launched = events.contains(&GameEvent::BallLaunched);
                prop_assert_eq!(launched, launch && was_idle);
            }
        }
    }
}
