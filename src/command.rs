//! Line-oriented command interpreter driving a filter.
//!
//! One command per line, the command word separated from its argument by
//! the first space:
//!
//! ```text
//! reset
//! insert some string
//! testmembership some string
//! ```
//!
//! `test` is accepted for `testmembership`, and `exit` ends an
//! interactive session.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::bloom::BloomFilter;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reset,
    Insert(String),
    Test(String),
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse one line.  Returns `None` for blank lines.
    ///
    /// The argument is everything after the first space, so it can
    /// contain spaces of its own.  A command without an argument gets an
    /// empty one.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            return None;
        }
        let (word, arg) = match line.split_once(' ') {
            Some((word, arg)) => (word, arg),
            None => (line, ""),
        };
        let cmd = match word {
            "reset" => Command::Reset,
            "insert" => Command::Insert(arg.to_string()),
            "testmembership" | "test" => Command::Test(arg.to_string()),
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        };
        Some(cmd)
    }
}

/// Where commands come from.  `exit` is only honored interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    File,
    Interactive,
}

/// Run every command read from `reader` against `filter`, writing
/// membership results to `out`, one `true`/`false` per line.  Lines
/// that are not valid UTF-8 are skipped with a warning.
pub fn run_commands<R, W>(reader: R, out: &mut W, filter: &mut BloomFilter, mode: Mode) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    let interactive = mode == Mode::Interactive;
    if interactive {
        prompt(out)?;
    }
    for (lineno, raw) in reader.split(b'\n').enumerate() {
        let line = match String::from_utf8(raw?) {
            Ok(line) => line,
            Err(_) => {
                warn!(line = lineno + 1, "skipping line that is not valid utf-8");
                if interactive {
                    prompt(out)?;
                }
                continue;
            }
        };
        match Command::parse(&line) {
            None => {}
            Some(Command::Reset) => filter.reset(),
            Some(Command::Insert(s)) => filter.insert(&s),
            Some(Command::Test(s)) => {
                writeln!(out, "{}", filter.test_membership(&s))?;
            }
            Some(Command::Exit) if interactive => {
                debug!("exit requested");
                return Ok(());
            }
            Some(Command::Exit) => warn!("ignoring 'exit' outside interactive mode"),
            Some(Command::Unknown(word)) => warn!(command = %word, "ignoring unknown command"),
        }
        if interactive {
            prompt(out)?;
        }
    }
    out.flush()
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Run the commands in the file at `path`.
pub fn run_file<P, W>(path: P, out: &mut W, filter: &mut BloomFilter) -> Result<()>
    where P: AsRef<Path>,
          W: Write
{
    let path = path.as_ref();
    let io_err = |source| Error::Io { path: path.to_path_buf(), source: source };
    let file = File::open(path).map_err(io_err)?;
    debug!(path = %path.display(), "running command file");
    run_commands(BufReader::new(file), out, filter, Mode::File).map_err(io_err)
}

/// Run an interactive session, prompting before every line until
/// `exit` or end of input.
pub fn run_interactive<R, W>(reader: R, out: &mut W, filter: &mut BloomFilter) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    run_commands(reader, out, filter, Mode::Interactive)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{run_commands, run_interactive, Command, Mode};
    use crate::bloom::BloomFilter;
    use crate::config::HasherKind;
    use crate::hashing::HashFamily;

    fn filter(kind: HasherKind, num_bits: usize, seeds: &[u64]) -> BloomFilter {
        BloomFilter::new(num_bits, HashFamily::from_seeds(kind, seeds, false)).unwrap()
    }

    fn run(input: &str, f: &mut BloomFilter, mode: Mode) -> String {
        let mut out = Vec::new();
        run_commands(Cursor::new(input), &mut out, f, mode).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse() {
        assert_eq!(Command::parse("reset"), Some(Command::Reset));
        assert_eq!(Command::parse("insert foo"), Some(Command::Insert("foo".to_string())));
        assert_eq!(Command::parse("insert two words"),
                   Some(Command::Insert("two words".to_string())));
        assert_eq!(Command::parse("testmembership bar\r"),
                   Some(Command::Test("bar".to_string())));
        assert_eq!(Command::parse("test bar"), Some(Command::Test("bar".to_string())));
        assert_eq!(Command::parse("insert"), Some(Command::Insert(String::new())));
        assert_eq!(Command::parse("insert "), Some(Command::Insert(String::new())));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
        assert_eq!(Command::parse("delete foo"), Some(Command::Unknown("delete".to_string())));
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn command_file_scenario() {
        let mut f = filter(HasherKind::Djb2, 100, &[2, 3]);
        let out = run("reset\ninsert foo\ntestmembership foo\ntestmembership bar\n", &mut f, Mode::File);
        assert_eq!(out, "true\nfalse\n");
    }

    #[test]
    fn short_strings_collide_under_sfold() {
        let mut f = filter(HasherKind::Sfold, 100, &[2, 3]);
        let out = run("insert foo\ntest bar\n", &mut f, Mode::File);
        assert_eq!(out, "true\n");
    }

    #[test]
    fn reset_between_tests() {
        let mut f = filter(HasherKind::Sfold, 1000, &[2, 3, 5, 7]);
        let out = run("insert hello\ntest hello\nreset\ntest hello\n", &mut f, Mode::File);
        assert_eq!(out, "true\nfalse\n");
    }

    #[test]
    fn unknown_and_exit_in_file_mode_are_skipped() {
        let mut f = filter(HasherKind::Sfold, 1000, &[2, 3, 5, 7]);
        let out = run("bogus hello\nexit\ninsert hello\n\ntest hello\n", &mut f, Mode::File);
        assert_eq!(out, "true\n");
    }

    #[test]
    fn invalid_utf8_lines_are_skipped() {
        let mut f = filter(HasherKind::Sfold, 1000, &[2, 3, 5, 7]);
        let mut input = b"insert hello\n".to_vec();
        input.extend_from_slice(b"insert \xff\xfe\n");
        input.extend_from_slice(b"test hello\ntest world\n");
        let mut out = Vec::new();
        run_commands(Cursor::new(input), &mut out, &mut f, Mode::File).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "true\nfalse\n");
    }

    #[test]
    fn interactive_stops_at_exit() {
        let mut f = filter(HasherKind::Sfold, 1000, &[2, 3, 5, 7]);
        let mut out = Vec::new();
        let input = "insert hello\ntest hello\nexit\ntest world\n";
        run_interactive(Cursor::new(input), &mut out, &mut f).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> > true\n> ");
    }

    #[test]
    fn interactive_stops_at_eof() {
        let mut f = filter(HasherKind::Sfold, 1000, &[2, 3, 5, 7]);
        let out = run("test world", &mut f, Mode::Interactive);
        assert_eq!(out, "> false\n> ");
    }
}
