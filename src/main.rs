//! Brick Breaker headless runner
//!
//! Plays a game with a simple autopilot at a simulated 60 Hz and logs the
//! result. Usage: `brick-breaker [settings.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::platform::{InputState, KeyCode};
    use brick_breaker::ui::LogSink;
    use brick_breaker::{Game, Settings};

    /// Give up after ten simulated minutes
    const MAX_FRAMES: u64 = 60 * 60 * 10;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = args
        .next()
        .map(|path| Settings::load_or_default(path))
        .unwrap_or_default();
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("Brick Breaker (headless) starting with seed {}", seed);

    let mut game = Game::new(seed, settings);
    let mut input = InputState::new();

    for frame in 0..MAX_FRAMES {
        // Autopilot: keep the paddle under the ball
        let state = game.state();
        let offset = state.ball.pos.x - state.paddle.pos.x;
        input.release(KeyCode::ArrowLeft);
        input.release(KeyCode::ArrowRight);
        if offset < -state.paddle.width * 0.25 {
            input.press(KeyCode::ArrowLeft);
        } else if offset > state.paddle.width * 0.25 {
            input.press(KeyCode::ArrowRight);
        }

        game.frame(frame as f64 * FRAME_MS, &input);

        if game.state().is_game_over() {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "Finished after {} frames, {} bricks left",
        state.frames,
        state.bricks_remaining()
    );
    game.publish_status(&mut LogSink);
    println!(
        "score={} lives={} outcome={:?}",
        state.score,
        state.lives,
        state.outcome()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser shell in this crate; embed the library instead
}
