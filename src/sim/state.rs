//! Game state and core simulation types
//!
//! One `GameState` per session. The simulation loop is its only writer; the
//! renderer and HUD read it after the tick has finished.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Lives exhausted
    Lost,
    /// Every brick destroyed
    Won,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball and bricks simulate
    Playing,
    /// Ball frozen, paddle still responds to input
    Paused,
    /// Terminal: no more ball simulation
    GameOver(GameOutcome),
}

/// Something that happened during a tick, for HUD, logging and audio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side wall or the ceiling
    WallBounce,
    /// Ball bounced off the paddle at the given hit position (-1..1)
    PaddleHit { hit_position: f32 },
    /// Brick took a hit and survived
    BrickDamaged { id: u32 },
    /// Brick destroyed, points awarded
    BrickDestroyed { id: u32, points: u64 },
    /// Ball left the bottom of the play area
    LifeLost { lives_remaining: u32 },
    /// Game entered its terminal phase
    GameOver(GameOutcome),
}

/// Brick category: drives starting health, score value and sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickTier {
    /// Yellow, 10 points
    Low,
    /// Green, 20 points
    Mid,
    /// Blue, 30 points, takes two hits
    High,
}

impl BrickTier {
    /// Atlas sprite name for this tier
    pub fn sprite_name(&self) -> &'static str {
        match self {
            BrickTier::Low => "brick_yellow",
            BrickTier::Mid => "brick_green",
            BrickTier::High => "brick_blue",
        }
    }

    /// Points awarded when a brick of this tier is destroyed
    pub fn points(&self) -> u64 {
        match self {
            BrickTier::Low => 10,
            BrickTier::Mid => 20,
            BrickTier::High => 30,
        }
    }

    pub fn initial_health(&self) -> u8 {
        match self {
            BrickTier::High => 2,
            _ => 1,
        }
    }

    /// Tier for a grid row, counted from the top
    pub fn for_row(row: usize) -> Self {
        match row {
            0 | 1 => BrickTier::Low,
            2 | 3 => BrickTier::Mid,
            _ => BrickTier::High,
        }
    }
}

/// A brick entity
///
/// Destroyed bricks stay in the collection so ids and iteration order are
/// stable for the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub tier: BrickTier,
    pub health: u8,
    /// Set exactly when `health` reaches 0
    pub destroyed: bool,
}

impl Brick {
    pub fn new(id: u32, pos: Vec2, tier: BrickTier) -> Self {
        Self {
            id,
            pos,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            tier,
            health: tier.initial_health(),
            destroyed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::new(self.width, self.height))
    }

    /// Take one hit. Returns true if this hit destroyed the brick.
    ///
    /// A two-hit brick left on its last hit drops to the mid tier, which
    /// changes its sprite and the points it will award.
    pub fn damage(&mut self) -> bool {
        let was_destroyed = self.destroyed;
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.destroyed = true;
        }
        if self.health == 1 && self.tier == BrickTier::High {
            self.tier = BrickTier::Mid;
        }
        self.destroyed && !was_destroyed
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_VEL_X, BALL_SERVE_SPEED),
            radius: BALL_RADIUS,
        }
    }
}

/// The player's paddle (moves along x only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position; y never changes
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity
    pub vel: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(0.0, PADDLE_START_Y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            vel: 0.0,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::new(self.width, self.height))
    }

    /// Top surface y coordinate
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}

/// Source of the random draw used when the ball is re-served
///
/// Returns a value in [0, 1). Tests substitute a fixed source to get a
/// deterministic trajectory.
pub trait ServeSource {
    fn serve_draw(&mut self) -> f32;
}

impl ServeSource for Pcg32 {
    fn serve_draw(&mut self) -> f32 {
        self.random::<f32>()
    }
}

fn fresh_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Build the fixed brick grid, ids in row-major order from the top-left
pub fn brick_layout() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    let mut id = 0;

    for row in 0..BRICK_ROWS {
        let tier = BrickTier::for_row(row);
        for col in 0..BRICK_COLS {
            let x = BRICK_START_X + col as f32 * (BRICK_WIDTH + BRICK_SPACING);
            let y = BRICK_START_Y - row as f32 * (BRICK_HEIGHT + BRICK_SPACING);
            bricks.push(Brick::new(id, Vec2::new(x, y), tier));
            id += 1;
        }
    }

    bricks
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the serve RNG was created from
    pub seed: u64,
    /// Physics tuning
    pub settings: Settings,
    pub ball: Ball,
    pub paddle: Paddle,
    /// All bricks, destroyed ones included (sorted by id)
    pub bricks: Vec<Brick>,
    /// Never decreases during a game
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    /// Simulated frame counter
    pub frames: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// RNG for ball re-serves
    #[serde(skip, default = "fresh_rng")]
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        let lives = settings.starting_lives;
        Self {
            seed,
            settings,
            ball: Ball::default(),
            paddle: Paddle::default(),
            bricks: brick_layout(),
            score: 0,
            lives,
            phase: GamePhase::Playing,
            frames: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Flip between Playing and Paused. No effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            over @ GamePhase::GameOver(_) => over,
        };
    }

    pub fn add_score(&mut self, points: u64) {
        self.score += points;
    }

    /// True iff every brick is destroyed
    pub fn all_bricks_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }

    /// Number of bricks still standing
    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }

    /// Re-serve the ball with a fresh random horizontal speed
    pub fn reset_ball(&mut self) {
        let draw = self.rng.serve_draw();
        self.serve_ball(draw);
    }

    /// Re-serve the ball using an external random source
    pub fn reset_ball_from<S: ServeSource + ?Sized>(&mut self, source: &mut S) {
        let draw = source.serve_draw();
        self.serve_ball(draw);
    }

    /// Place the ball at the start position, moving up
    ///
    /// `draw` in [0, 1) picks the horizontal speed uniformly across the
    /// configured spread, centered on zero.
    pub fn serve_ball(&mut self, draw: f32) {
        self.ball.pos = Vec2::new(BALL_START_X, BALL_START_Y);
        self.ball.vel = Vec2::new(
            (draw - 0.5) * self.settings.serve_spread,
            self.settings.serve_speed,
        );
    }
}
