pub mod engine;
pub mod error;
pub mod map;
pub mod session;

use engine::{Choice, INVALID_OPTION, Output, parse_choice, render_room, try_move};
use map::{MansionMap, Room};

pub use error::{MapError, SessionError};
pub use map::{build_mansion, load_map_from_file, load_map_from_str};

pub const LEFT_MANSION: &str = ">> You chose to leave the mansion. Exploration over.";
pub const INPUT_CLOSED: &str = ">> Input closed. Leaving the mansion.";

/// How an exploration finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    DeadEnd,
    Left,
    InputClosed,
}

/// Walks a map from its root. The cursor only ever moves down to a child.
pub struct Explorer<'m> {
    current: &'m Room,
    moves: usize,
    ending: Option<Ending>,
}

impl<'m> Explorer<'m> {
    /// Returns `None` when the map has no root to start from.
    pub fn new(map: &'m MansionMap) -> Option<Self> {
        let root = map.root()?;
        Some(Explorer {
            current: root,
            moves: 0,
            ending: None,
        })
    }

    pub fn current(&self) -> &'m Room {
        self.current
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn is_finished(&self) -> bool {
        self.ending.is_some()
    }

    /// Renders the entry room. A root without paths ends things right here.
    pub fn initialize(&mut self) -> Output {
        let mut out = Output::new();
        self.enter(&mut out);
        out
    }

    /// Process a single line of input; returns (output, finished?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();

        if self.is_finished() || input.trim().is_empty() {
            return (out, self.is_finished());
        }

        match parse_choice(input) {
            Some(Choice::Leave) => {
                out.event(LEFT_MANSION);
                self.ending = Some(Ending::Left);
                return (out, true);
            }
            Some(Choice::Go(dir)) => {
                if try_move(&mut out, &mut self.current, dir) {
                    self.moves += 1;
                }
            }
            None => {
                tracing::debug!(input = input.trim(), "unrecognised choice");
                return self.reject_input();
            }
        }

        self.enter(&mut out);
        (out, self.is_finished())
    }

    /// Refuses a line without looking at it, e.g. one too long to keep.
    pub fn reject_input(&mut self) -> (Output, bool) {
        let mut out = Output::new();
        if self.is_finished() {
            return (out, true);
        }
        out.warn(INVALID_OPTION);
        self.enter(&mut out);
        (out, self.is_finished())
    }

    /// Input ran out before the explorer reached an ending.
    pub fn close_input(&mut self) -> Output {
        let mut out = Output::new();
        if !self.is_finished() {
            out.event(INPUT_CLOSED);
            self.ending = Some(Ending::InputClosed);
        }
        out
    }

    fn enter(&mut self, out: &mut Output) {
        render_room(out, self.current);
        if self.current.is_leaf() {
            tracing::debug!(room = %self.current.name(), moves = self.moves, "dead end");
            self.ending = Some(Ending::DeadEnd);
        }
    }
}
