//! Input commands and their sources.
//!
//! Platform events (SDL2 in the live window, a scripted queue in tests) are
//! translated into [`InputEvent`]s before they reach the engine, so the
//! engine never sees a platform type.

use std::collections::VecDeque;

use crate::geometry::Point2D;
use crate::render::line::LineAlgorithm;
use crate::scene::DrawMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary-button click at a surface coordinate.
    PointerClick(Point2D),
    SelectAlgorithm(LineAlgorithm),
    SelectMode(DrawMode),
    Quit,
}

/// Anything the engine can pull commands from once per frame.
pub trait InputSource {
    /// Drain the commands that arrived since the last poll, in arrival order.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Map a key to its command. Letters are matched case-insensitively.
///
/// | Key | Command |
/// |-----|---------|
/// | F | Brute-force lines |
/// | D | DDA lines |
/// | B | Bresenham lines |
/// | L | Line mode |
/// | C | Circle mode |
pub fn command_for_key(key: char) -> Option<InputEvent> {
    let key = key.to_ascii_uppercase();
    if let Some(algorithm) = LineAlgorithm::ALL.into_iter().find(|a| a.hotkey() == key) {
        return Some(InputEvent::SelectAlgorithm(algorithm));
    }
    [DrawMode::Line, DrawMode::Circle]
        .into_iter()
        .find(|m| m.hotkey() == key)
        .map(InputEvent::SelectMode)
}

/// Replays a fixed list of frames, one per poll, then asks to quit.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Vec<InputEvent>>,
    {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
