//! Status line output
//!
//! The game reports raw values and short messages; how they are shown is up
//! to the host (DOM element, terminal, overlay text).

use serde::{Deserialize, Serialize};

use crate::sim::{GameOutcome, GamePhase, GameState};

/// Presentation hint for a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusStyle {
    Normal,
    Success,
    Error,
}

impl StatusStyle {
    /// CSS-style class name
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusStyle::Normal => "normal",
            StatusStyle::Success => "success",
            StatusStyle::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusLine {
    pub text: String,
    pub style: StatusStyle,
}

impl StatusLine {
    fn new(text: impl Into<String>, style: StatusStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Where status lines go
pub trait StatusSink {
    fn set_status(&mut self, text: &str, style: StatusStyle);
}

/// Raw values for a HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub lives: u32,
    pub paused: bool,
    pub outcome: Option<GameOutcome>,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            lives: state.lives,
            paused: state.is_paused(),
            outcome: state.outcome(),
        }
    }
}

/// Status lines for the current state
pub fn status_lines(state: &GameState) -> Vec<StatusLine> {
    let mut lines = vec![
        StatusLine::new(format!("Lives: {}", state.lives), StatusStyle::Normal),
        StatusLine::new(format!("Score: {}", state.score), StatusStyle::Normal),
    ];

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::Paused => lines.push(StatusLine::new("Paused", StatusStyle::Normal)),
        GamePhase::GameOver(GameOutcome::Won) => {
            lines.push(StatusLine::new("You win!", StatusStyle::Success))
        }
        GamePhase::GameOver(GameOutcome::Lost) => {
            lines.push(StatusLine::new("Game over", StatusStyle::Error))
        }
    }

    lines
}

/// Send the current status lines to a sink
pub fn publish(state: &GameState, sink: &mut impl StatusSink) {
    for line in status_lines(state) {
        sink.set_status(&line.text, line.style);
    }
}

/// Sink that writes status lines to the log
#[derive(Debug, Default)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn set_status(&mut self, text: &str, style: StatusStyle) {
        match style {
            StatusStyle::Error => log::warn!("{}", text),
            _ => log::info!("{}", text),
        }
    }
}
