//! Simple interactive CLI mode
//!
//! Text-based ladder puzzle without TUI. The player types one word per line,
//! or `UNDO` to take back the last entry.

use crate::core::WordSet;
use crate::output::formatters::{PRINT_WIDTH, ladder_lines};
use crate::puzzle::{Outcome, PuzzleConfig, PuzzleSession, UNDO_COMMAND};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Generate a puzzle and play it on stdin/stdout
///
/// # Errors
///
/// Returns an error if no puzzle can be generated or on an I/O error while
/// reading input or writing the board.
pub fn run_simple<R: Rng + ?Sized>(
    words: &WordSet,
    config: &PuzzleConfig,
    rng: &mut R,
) -> Result<Option<Outcome>> {
    let session = PuzzleSession::generate(words, config, rng)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive a session from line input until it completes or input ends
///
/// Returns `None` if input ended before the ladder was complete.
///
/// # Errors
///
/// Returns an error on an I/O failure.
pub fn play_session<I: BufRead, O: Write>(
    mut session: PuzzleSession<'_>,
    input: &mut I,
    output: &mut O,
) -> Result<Option<Outcome>> {
    writeln!(
        output,
        "Fill in the ladder from {} to {}, one letter change per step.",
        session.start().text().bright_yellow().bold(),
        session.end().text().bright_yellow().bold()
    )?;
    write_slots(&session, output)?;

    while session.finish().is_none() {
        write!(output, "Enter next word, or \"{UNDO_COMMAND}\" to undo : ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nEOF used to exit program.")?;
            return Ok(None);
        }

        match session.apply(&line) {
            Ok(_) => write_slots(&session, output)?,
            Err(rejection) => writeln!(output, "{}", rejection.to_string().red())?,
        }
    }

    let outcome = session.finish();
    match outcome {
        Some(Outcome::Win) => writeln!(output, "{}", "You win!".green().bold())?,
        Some(Outcome::Lose) => {
            writeln!(output, "{}", "You lose...".red().bold())?;
            writeln!(output, "One shortest ladder was:")?;
            for line in ladder_lines(session.solution(), PRINT_WIDTH) {
                writeln!(output, "  {line}")?;
            }
        }
        None => {}
    }

    Ok(outcome)
}

fn write_slots<O: Write>(session: &PuzzleSession<'_>, output: &mut O) -> io::Result<()> {
    writeln!(output)?;
    for (i, slot) in session.render_slots().iter().enumerate() {
        if i == session.cursor() && session.finish().is_none() {
            writeln!(output, "{slot}  <")?;
        } else {
            writeln!(output, "{slot}")?;
        }
    }
    writeln!(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary() -> WordSet {
        WordSet::build(["cold", "cord", "core", "code", "card"], 4)
    }

    fn play(set: &WordSet, script: &str) -> (Option<Outcome>, String) {
        let session = PuzzleSession::with_endpoints(set, "cold", "code", 4).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = play_session(session, &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn scripted_win() {
        let set = dictionary();
        let (outcome, transcript) = play(&set, "cord\ncore\n");
        assert_eq!(outcome, Some(Outcome::Win));
        assert!(transcript.contains("You win!"));
    }

    #[test]
    fn scripted_loss_reveals_solution() {
        let set = dictionary();
        let (outcome, transcript) = play(&set, "cord\ncard\n");
        assert_eq!(outcome, Some(Outcome::Lose));
        assert!(transcript.contains("You lose..."));
        assert!(transcript.contains("cold -> cord -> core -> code"));
    }

    #[test]
    fn rejections_and_undo_are_reported() {
        let set = dictionary();
        let (outcome, transcript) = play(&set, "UNDO\nco\ncore\ncord\nUNDO\ncord\ncore\n");
        assert_eq!(outcome, Some(Outcome::Win));
        assert!(transcript.contains("Nothing to undo."));
        assert!(transcript.contains("That word is too short!"));
        assert!(transcript.contains("That is not a valid move!"));
    }

    #[test]
    fn eof_ends_session() {
        let set = dictionary();
        let (outcome, transcript) = play(&set, "cord\n");
        assert_eq!(outcome, None);
        assert!(transcript.contains("EOF used to exit program."));
    }
}
