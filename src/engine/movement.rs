use crate::engine::output::Output;
use crate::map::{Direction, Room};

pub const EXIT_LABEL: &str = "(Q)uit the mansion";
pub const PROMPT: &str = "Choose a path (l/r/q): ";
pub const INVALID_OPTION: &str =
    "[WARNING] Invalid option. Use 'l' (left), 'r' (right) or 'q' (quit).";

/// What one line of player input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Go(Direction),
    Leave,
}

/// Parses a whole input line. Matching ignores case and surrounding
/// whitespace; anything else, including extra words, is rejected.
pub fn parse_choice(input: &str) -> Option<Choice> {
    let token = input.trim().to_lowercase();
    match token.as_str() {
        "l" | "left" => Some(Choice::Go(Direction::Left)),
        "r" | "right" => Some(Choice::Go(Direction::Right)),
        "q" | "quit" | "exit" => Some(Choice::Leave),
        _ => None,
    }
}

pub fn path_label(dir: Direction) -> &'static str {
    match dir {
        Direction::Left => "(L)eft",
        Direction::Right => "(R)ight",
    }
}

/// Advances `cursor` one level if `dir` leads anywhere. Returns whether it
/// moved; a missing path leaves the cursor where it was.
pub fn try_move<'m>(out: &mut Output, cursor: &mut &'m Room, dir: Direction) -> bool {
    let here: &'m Room = *cursor;
    match here.child(dir) {
        Some(next) => {
            out.event(format!(">> You went {}.", dir));
            tracing::debug!(from = %here.name(), to = %next.name(), %dir, "moved");
            *cursor = next;
            true
        }
        None => {
            out.warn(format!("[WARNING] There is no path to the {} in this room.", dir));
            tracing::debug!(room = %here.name(), %dir, "no path that way");
            false
        }
    }
}
