use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::engine::{DEAD_END, Output, OutputBlock, PROMPT};
use crate::error::{MapResult, SessionError};
use crate::map::{self, MansionMap};
use crate::{Ending, Explorer};

/// Longest input line kept, newline included. The rest of a longer line is
/// read and thrown away.
pub const MAX_LINE_BYTES: usize = 256;

pub const CRITICAL_NO_ROOT: &str =
    "[CRITICAL] The map root was not created. Exploration is impossible.";

/// Where the mansion comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MapSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl MapSource {
    /// First positional argument, if any, names a map file.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        match args.next() {
            Some(path) if !path.trim().is_empty() => MapSource::File(PathBuf::from(path)),
            _ => MapSource::Builtin,
        }
    }

    pub fn load(&self) -> MapResult<MansionMap> {
        match self {
            MapSource::Builtin => Ok(map::build_mansion()),
            MapSource::File(path) => map::load_map_from_file(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// `None` when exploration never started.
    pub ending: Option<Ending>,
    pub moves: usize,
    pub rooms_released: usize,
}

/// Builds the map, explores it over `input`, then releases it.
///
/// A map that fails to build is returned as an error before anything is
/// explored or released.
pub fn run<R: BufRead, W: Write>(
    source: &MapSource,
    input: R,
    out: &mut W,
) -> Result<SessionReport, SessionError> {
    writeln!(out, ">> Building the mansion map...")?;
    let mansion = source.load()?;
    run_with_map(mansion, input, out)
}

/// Explores an already built map, then releases it however exploration ended.
pub fn run_with_map<R: BufRead, W: Write>(
    mansion: MansionMap,
    input: R,
    out: &mut W,
) -> Result<SessionReport, SessionError> {
    let (ending, moves) = match Explorer::new(&mansion) {
        Some(mut explorer) => {
            match mansion.title() {
                "" => writeln!(out, ">> Map built successfully.")?,
                title => writeln!(out, ">> Map of {} built successfully.", title)?,
            }
            writeln!(out, ">> The {} is ready.", explorer.current().name())?;
            explore(&mut explorer, input, out)?;
            (explorer.ending(), explorer.moves())
        }
        None => {
            tracing::error!("map has no root");
            writeln!(out, "{}", CRITICAL_NO_ROOT)?;
            (None, 0)
        }
    };

    let rooms_released = map::release(mansion);
    writeln!(out)?;
    writeln!(out, ">> Mansion memory released ({} rooms).", rooms_released)?;
    out.flush()?;

    Ok(SessionReport {
        ending,
        moves,
        rooms_released,
    })
}

fn explore<R: BufRead, W: Write>(
    explorer: &mut Explorer<'_>,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- EXPLORATION START ---")?;
    flush_output(out, explorer.initialize())?;

    let mut line: Vec<u8> = Vec::new();

    while !explorer.is_finished() {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        let (bytes_read, cut) = read_line_capped(&mut input, &mut line, MAX_LINE_BYTES)?;
        if bytes_read == 0 {
            writeln!(out)?;
            flush_output(out, explorer.close_input())?;
            break;
        }

        let (step_out, _) = if cut {
            tracing::debug!(bytes = bytes_read, "input line too long");
            explorer.reject_input()
        } else {
            // Undecodable bytes just make the line unrecognisable.
            explorer.step(&String::from_utf8_lossy(&line))
        };
        flush_output(out, step_out)?;
    }

    Ok(())
}

/// Reads up to and including the next newline, keeping at most `limit` bytes
/// in `buf`. Returns the bytes consumed (0 at end of input) and whether the
/// line was cut short.
fn read_line_capped<R: BufRead>(
    input: &mut R,
    buf: &mut Vec<u8>,
    limit: usize,
) -> io::Result<(usize, bool)> {
    let mut consumed = 0;
    let mut cut = false;

    loop {
        let available = match input.fill_buf() {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }

        let (chunk, done) = match available.iter().position(|&b| b == b'\n') {
            Some(i) => (&available[..=i], true),
            None => (available, false),
        };

        let room = limit.saturating_sub(buf.len());
        if chunk.len() > room {
            cut = true;
        }
        buf.extend_from_slice(&chunk[..chunk.len().min(room)]);

        let n = chunk.len();
        input.consume(n);
        consumed += n;
        if done {
            break;
        }
    }

    Ok((consumed, cut))
}

fn flush_output<W: Write>(w: &mut W, out: Output) -> io::Result<()> {
    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                writeln!(w)?;
                writeln!(w, "{}", t)?;
            }
            OutputBlock::Event(ev) if ev == DEAD_END => {
                writeln!(w)?;
                writeln!(w, "{}", ev)?;
            }
            OutputBlock::Event(line) | OutputBlock::Warning(line) => {
                writeln!(w, "{}", line)?;
            }
            OutputBlock::Paths(paths) => {
                writeln!(w, "{}", paths)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], MapSource::Builtin)]
    #[case(vec![""], MapSource::Builtin)]
    #[case(vec!["maps/mansion.toml"], MapSource::File(PathBuf::from("maps/mansion.toml")))]
    #[case(vec!["a.toml", "ignored"], MapSource::File(PathBuf::from("a.toml")))]
    fn source_from_args(#[case] args: Vec<&str>, #[case] expected: MapSource) {
        let args = args.into_iter().map(String::from);
        assert_eq!(MapSource::from_args(args), expected);
    }

    #[rstest]
    #[case(b"l\nr\n", 4, "l\n", 2, false)]
    #[case(b"abcdef\nr\n", 4, "abcd", 7, true)]
    #[case(b"abc", 4, "abc", 3, false)]
    #[case(b"", 4, "", 0, false)]
    fn capped_reads(
        #[case] input: &[u8],
        #[case] limit: usize,
        #[case] kept: &str,
        #[case] consumed: usize,
        #[case] cut: bool,
    ) {
        let mut reader = std::io::Cursor::new(input);
        let mut buf = Vec::new();
        let result = read_line_capped(&mut reader, &mut buf, limit).unwrap();
        assert_eq!(result, (consumed, cut));
        assert_eq!(buf, kept.as_bytes());
    }

    #[rstest]
    fn long_line_is_skipped_whole() {
        // tiny buffer so the line spans many fill_buf calls
        let data = format!("{}\nr\n", "x".repeat(10_000));
        let mut reader = std::io::BufReader::with_capacity(16, data.as_bytes());
        let mut buf = Vec::new();

        let (consumed, cut) = read_line_capped(&mut reader, &mut buf, 8).unwrap();
        assert_eq!((consumed, cut), (10_001, true));
        assert_eq!(buf.len(), 8);

        buf.clear();
        let (consumed, cut) = read_line_capped(&mut reader, &mut buf, 8).unwrap();
        assert_eq!((consumed, cut), (2, false));
        assert_eq!(buf, b"r\n");
    }

    #[rstest]
    fn dead_end_gets_its_own_paragraph() {
        let mut out = Output::new();
        out.title("You are in: Pantry");
        out.event(DEAD_END);

        let mut buf = Vec::new();
        flush_output(&mut buf, out).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            format!("\nYou are in: Pantry\n\n{}\n", DEAD_END)
        );
    }
}
