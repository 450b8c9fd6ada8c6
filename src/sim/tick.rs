//! Per-frame simulation tick
//!
//! Order within a frame is fixed and behavior-affecting:
//! paddle → ball integration → side walls → ceiling → bottom exit →
//! paddle bounce → first overlapping brick.

use super::collision::{bounce_direction, circle_rect_overlap, paddle_bounce, paddle_hit_position};
use super::geometry::integrate;
use super::state::{GameEvent, GameOutcome, GamePhase, GameState};
use crate::clamp;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Pause toggle (edge, not level)
    pub pause: bool,
}

impl TickInput {
    /// Held direction: -1 left, 1 right, 0 for neither or both
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance the game state by one frame of `dt` seconds
///
/// Degenerate deltas (non-positive, non-finite or longer than
/// `max_frame_dt`) skip the frame without touching the state.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.pause && !state.is_game_over() {
        state.toggle_pause();
        log::info!("{}", if state.is_paused() { "Paused" } else { "Resumed" });
    }

    if !dt.is_finite() || dt <= 0.0 || dt > state.settings.max_frame_dt {
        log::debug!("Skipping frame with dt={}", dt);
        return;
    }

    state.frames += 1;

    // Paddle responds in every phase
    update_paddle(state, input, dt);

    if state.phase != GamePhase::Playing {
        return;
    }

    state.ball.pos = integrate(state.ball.pos, state.ball.vel, dt);

    resolve_side_walls(state);
    resolve_ceiling(state);

    if resolve_bottom_exit(state) {
        return;
    }

    resolve_paddle(state);
    resolve_bricks(state);
}

/// Accelerate toward the held direction, or coast down with friction
fn update_paddle(state: &mut GameState, input: &TickInput, dt: f32) {
    let settings = &state.settings;
    let paddle = &mut state.paddle;

    let direction = input.direction();
    if direction != 0.0 {
        let target = direction * settings.paddle_max_speed;
        let max_step = settings.paddle_acceleration * dt;
        paddle.vel += clamp(target - paddle.vel, -max_step, max_step);
    } else {
        // Friction is tuned per 60 Hz frame
        paddle.vel *= settings.paddle_friction.powf(dt * 60.0);
        if paddle.vel.abs() < settings.paddle_stop_threshold {
            paddle.vel = 0.0;
        }
    }

    let half_width = paddle.width / 2.0;
    paddle.pos.x = clamp(
        paddle.pos.x + paddle.vel * dt,
        settings.wall_left + half_width,
        settings.wall_right - half_width,
    );
}

fn resolve_side_walls(state: &mut GameState) {
    let ball = &mut state.ball;
    let (left, right) = (state.settings.wall_left, state.settings.wall_right);

    if ball.pos.x - ball.radius < left {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = left + ball.radius;
        state.events.push(GameEvent::WallBounce);
    } else if ball.pos.x + ball.radius > right {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = right - ball.radius;
        state.events.push(GameEvent::WallBounce);
    }
}

fn resolve_ceiling(state: &mut GameState) {
    let ball = &mut state.ball;
    let ceiling = state.settings.ceiling;

    if ball.pos.y + ball.radius > ceiling {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ceiling - ball.radius;
        state.events.push(GameEvent::WallBounce);
    }
}

/// Returns true if the game just ended
fn resolve_bottom_exit(state: &mut GameState) -> bool {
    if state.ball.pos.y >= state.settings.bottom_boundary {
        return false;
    }

    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        lives_remaining: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver(GameOutcome::Lost);
        state.events.push(GameEvent::GameOver(GameOutcome::Lost));
        log::info!("Game over: out of lives (score {})", state.score);
        return true;
    }

    log::info!("Life lost, {} remaining", state.lives);
    state.reset_ball();
    false
}

/// Only a descending ball bounces, so one contact cannot bounce twice
fn resolve_paddle(state: &mut GameState) {
    let ball = &mut state.ball;
    let paddle = &state.paddle;

    if ball.vel.y >= 0.0 || !circle_rect_overlap(ball.pos, ball.radius, &paddle.rect()) {
        return;
    }

    let hit_position = paddle_hit_position(ball.pos.x, paddle.pos.x, paddle.width);
    ball.vel = paddle_bounce(
        ball.vel,
        hit_position,
        state.settings.paddle_speed_multiplier,
    );
    // Lift out of the paddle so the next frame starts clear of it
    ball.pos.y = paddle.top() + ball.radius;

    state.events.push(GameEvent::PaddleHit { hit_position });
}

/// At most one brick interaction per frame: the first live brick in id order
fn resolve_bricks(state: &mut GameState) {
    let ball = &mut state.ball;

    let Some(brick) = state
        .bricks
        .iter_mut()
        .filter(|b| !b.destroyed)
        .find(|b| circle_rect_overlap(ball.pos, ball.radius, &b.rect()))
    else {
        return;
    };

    ball.vel = bounce_direction(ball.pos, ball.vel, &brick.rect());

    let id = brick.id;
    if !brick.damage() {
        state.events.push(GameEvent::BrickDamaged { id });
        return;
    }

    let points = brick.tier.points();
    state.add_score(points);
    state.events.push(GameEvent::BrickDestroyed { id, points });
    log::debug!("Brick {} destroyed (+{}, score {})", id, points, state.score);

    if state.all_bricks_destroyed() {
        state.phase = GamePhase::GameOver(GameOutcome::Won);
        state.events.push(GameEvent::GameOver(GameOutcome::Won));
        log::info!("All bricks cleared, final score {}", state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    /// Game with every brick gone except `keep`
    fn state_with_bricks(keep: &[u32]) -> GameState {
        let mut state = GameState::new(12345);
        for brick in &mut state.bricks {
            if !keep.contains(&brick.id) {
                brick.health = 0;
                brick.destroyed = true;
            }
        }
        state
    }

    #[test]
    fn test_ball_integrates_while_playing() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default(), DT);
        let expected = Vec2::new(0.0, -0.3) + Vec2::new(0.3, 0.4) * DT;
        assert!((state.ball.pos - expected).length() < 1e-6);
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_degenerate_dt_skips_frame() {
        let mut state = GameState::new(1);
        let before = state.ball.pos;

        for dt in [0.0, -0.016, 5.0, f32::NAN, f32::INFINITY] {
            tick(&mut state, &TickInput { right: true, ..Default::default() }, dt);
        }

        assert_eq!(state.ball.pos, before);
        assert_eq!(state.paddle.vel, 0.0);
        assert_eq!(state.frames, 0);

        // Next good frame simulates normally
        tick(&mut state, &TickInput::default(), DT);
        assert_ne!(state.ball.pos, before);
    }

    #[test]
    fn test_pause_freezes_ball_but_not_paddle() {
        let mut state = GameState::new(1);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, DT);
        assert_eq!(state.phase, GamePhase::Paused);

        let ball_pos = state.ball.pos;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &right, DT);
        }
        assert_eq!(state.ball.pos, ball_pos);
        assert!(state.paddle.pos.x > 0.0);

        // Unpause
        tick(&mut state, &pause, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_ne!(state.ball.pos, ball_pos);
    }

    #[test]
    fn test_paddle_accelerates_then_coasts_to_stop() {
        let mut state = GameState::new(1);
        let left = TickInput {
            left: true,
            ..Default::default()
        };

        tick(&mut state, &left, DT);
        // One frame of acceleration: 8.0 * dt
        assert!((state.paddle.vel - (-8.0 * DT)).abs() < 1e-5);

        for _ in 0..60 {
            tick(&mut state, &left, DT);
        }
        assert!((state.paddle.vel - (-1.5)).abs() < 1e-5);

        let mut frames = 0;
        while state.paddle.vel != 0.0 {
            tick(&mut state, &TickInput::default(), DT);
            frames += 1;
            assert!(frames < 200, "paddle never stopped");
        }
    }

    #[test]
    fn test_both_directions_held_coasts() {
        let mut state = GameState::new(1);
        state.paddle.vel = 1.0;
        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &both, DT);
        assert!((state.paddle.vel - 0.85).abs() < 1e-5);
    }

    #[test]
    fn test_side_wall_bounce_clamps_inside() {
        let mut state = state_with_bricks(&[]);
        state.ball.pos = Vec2::new(0.98, 0.0);
        state.ball.vel = Vec2::new(0.5, 0.1);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.ball.vel.x, -0.5);
        assert_eq!(state.ball.pos.x, 1.0 - state.ball.radius);
        assert!(state.events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut state = state_with_bricks(&[]);
        state.ball.pos = Vec2::new(0.0, 0.98);
        state.ball.vel = Vec2::new(0.1, 0.5);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.ball.vel.y, -0.5);
        assert_eq!(state.ball.pos.y, 1.0 - state.ball.radius);
    }

    #[test]
    fn test_ball_out_of_bottom_costs_one_life_and_reserves() {
        let mut state = GameState::new(12345);
        state.ball.pos = Vec2::new(0.0, -0.3);
        state.ball.vel = Vec2::new(0.0, -0.4);
        // Paddle out of the ball's path
        state.paddle.pos.x = 0.8;

        let mut frames = 0;
        while state.lives == 3 {
            tick(&mut state, &TickInput::default(), DT);
            frames += 1;
            assert!(frames < 500, "ball never left the play area");
        }

        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos.y, -0.3);
        assert_eq!(state.ball.vel.y, 0.4);
        assert!(state.events.contains(&GameEvent::LifeLost { lives_remaining: 2 }));
    }

    #[test]
    fn test_last_life_lost_is_game_over() {
        let mut state = GameState::new(1);
        state.lives = 1;
        state.ball.pos = Vec2::new(0.0, -0.999);
        state.ball.vel = Vec2::new(0.0, -0.4);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver(GameOutcome::Lost));
        assert!(state.events.contains(&GameEvent::GameOver(GameOutcome::Lost)));

        // Terminal: ball no longer moves, pause does nothing, paddle still moves
        let ball_pos = state.ball.pos;
        tick(
            &mut state,
            &TickInput {
                pause: true,
                right: true,
                ..Default::default()
            },
            DT,
        );
        assert_eq!(state.ball.pos, ball_pos);
        assert_eq!(state.phase, GamePhase::GameOver(GameOutcome::Lost));
        assert!(state.paddle.vel > 0.0);
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let mut state = state_with_bricks(&[]);
        state.paddle.pos.x = 0.2;
        state.ball.pos = Vec2::new(0.2, state.paddle.top() + 0.02);
        state.ball.vel = Vec2::new(0.0, -0.5);

        tick(&mut state, &TickInput::default(), DT);

        assert!(state.ball.vel.x.abs() < 1e-6);
        assert!((state.ball.vel.y - 0.5 * 1.02).abs() < 1e-5);
        assert_eq!(state.ball.pos.y, state.paddle.top() + state.ball.radius);
    }

    #[test]
    fn test_rising_ball_passes_through_paddle() {
        let mut state = state_with_bricks(&[]);
        state.ball.pos = Vec2::new(0.0, state.paddle.pos.y);
        state.ball.vel = Vec2::new(0.0, 0.4);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.ball.vel, Vec2::new(0.0, 0.4));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_brick_hit_destroys_scores_and_bounces() {
        // Top-right brick, hit on its right side while moving left
        let mut state = GameState::new(1);
        let brick = state.bricks[7].clone();
        let right_edge = brick.pos.x + brick.width / 2.0;
        state.ball.pos = Vec2::new(right_edge + 0.025, brick.pos.y);
        state.ball.vel = Vec2::new(-0.3, 0.1);

        tick(&mut state, &TickInput::default(), DT);

        assert!(state.bricks[7].destroyed);
        assert_eq!(state.score, 10);
        // Horizontal hit: x flipped, y kept
        assert_eq!(state.ball.vel, Vec2::new(0.3, 0.1));
        assert!(state.events.contains(&GameEvent::BrickDestroyed { id: 7, points: 10 }));
    }

    #[test]
    fn test_only_first_overlapping_brick_is_hit() {
        // Ball in the gap between rows 0 and 1 overlaps both
        let mut state = GameState::new(1);
        let upper = state.bricks[0].clone();
        let lower = state.bricks[8].clone();
        state.ball.pos = Vec2::new(upper.pos.x, (upper.pos.y + lower.pos.y) / 2.0);
        state.ball.vel = Vec2::new(0.0, 0.1);

        tick(&mut state, &TickInput::default(), DT);

        assert!(state.bricks[0].destroyed);
        assert!(!state.bricks[8].destroyed);
        assert_eq!(state.score, 10);
        assert_eq!(state.ball.vel, Vec2::new(0.0, -0.1));
    }

    #[test]
    fn test_two_hit_brick_scores_as_downgraded_tier() {
        let mut state = state_with_bricks(&[32, 33]);
        let brick = state.bricks[32].clone();
        let below = brick.pos.y - brick.height / 2.0 - 0.02;

        state.ball.pos = Vec2::new(brick.pos.x, below);
        state.ball.vel = Vec2::new(0.0, 0.1);
        tick(&mut state, &TickInput::default(), DT);
        assert!(!state.bricks[32].destroyed);
        assert_eq!(state.score, 0);
        assert!(state.events.contains(&GameEvent::BrickDamaged { id: 32 }));

        state.ball.pos = Vec2::new(brick.pos.x, below);
        state.ball.vel = Vec2::new(0.0, 0.1);
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.bricks[32].destroyed);
        assert_eq!(state.score, 20);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_last_brick_wins() {
        let mut state = state_with_bricks(&[20]);
        let brick = state.bricks[20].clone();
        state.ball.pos = Vec2::new(brick.pos.x, brick.pos.y - brick.height / 2.0 - 0.02);
        state.ball.vel = Vec2::new(0.0, 0.1);

        tick(&mut state, &TickInput::default(), DT);

        assert!(state.all_bricks_destroyed());
        assert_eq!(state.phase, GamePhase::GameOver(GameOutcome::Won));
        assert!(state.events.contains(&GameEvent::GameOver(GameOutcome::Won)));

        // No further ball simulation
        let pos = state.ball.pos;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ball.pos, pos);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                right: true,
                ..Default::default()
            },
        ];

        for frame in 0..3000 {
            let input = &inputs[(frame / 40) % inputs.len()];
            tick(&mut state1, input, DT);
            tick(&mut state2, input, DT);
        }

        assert_eq!(state1.frames, state2.frames);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.paddle.pos, state2.paddle.pos);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            steps in proptest::collection::vec((any::<bool>(), any::<bool>(), 0.001f32..0.1), 1..300),
        ) {
            let mut state = GameState::new(3);
            let half = state.paddle.width / 2.0;
            for (left, right, dt) in steps {
                tick(&mut state, &TickInput { left, right, pause: false }, dt);
                prop_assert!(state.paddle.pos.x >= -1.0 + half);
                prop_assert!(state.paddle.pos.x <= 1.0 - half);
            }
        }

        #[test]
        fn prop_score_never_decreases(
            steps in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..600),
        ) {
            let mut state = GameState::new(5);
            let mut last = 0;
            for (left, right) in steps {
                tick(&mut state, &TickInput { left, right, pause: false }, DT);
                prop_assert!(state.score >= last);
                last = state.score;
            }
        }
    }
}
