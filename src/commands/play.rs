//! Interactive console mode
//!
//! Suggests a guess each round and reads back the feedback the game showed.
//! Typos and impossible feedback are reported and asked for again instead of
//! ending the session.

use crate::core::{Clue, Feedback, Word};
use crate::error::{Error, ErrorKind};
use crate::output::formatters::{feedback_to_boxes, word_sample};
use crate::solver::{GameState, Score, SolverConfig};
use anyhow::Context;
use std::io::{BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Solved { guesses: usize },
    Quit,
    OutOfRounds,
}

enum Input {
    Clue(Clue),
    Undo,
    Quit,
}

/// Run the interactive loop until the puzzle is solved or the user quits
///
/// Each line of input is one of:
/// - feedback for the suggested guess, e.g. `.*.-*` or `⬜🟩⬜🟨🟩`
/// - `<word> <feedback>` when a different word was played
/// - `undo` to take back the last clue, `quit` to stop
///
/// # Errors
///
/// Returns an error on I/O failure, or if the game reaches a state with no
/// admissible guess.
pub fn run_play<R: BufRead, W: Write>(
    initial: &GameState,
    opening: Option<&Score>,
    config: &SolverConfig,
    mut input: R,
    mut out: W,
) -> anyhow::Result<PlayOutcome> {
    let mut state = initial.clone().with_ranking(config.ranking);
    let mut previous: Vec<GameState> = Vec::new();

    writeln!(
        out,
        "Enter feedback as * (right spot), - (wrong spot), . (absent); \
         or '<word> <feedback>' if you played another word. 'undo' and 'quit' also work."
    )?;

    loop {
        let round = state.history().len() + 1;
        if round > config.max_rounds {
            writeln!(out, "Out of rounds after {} guesses.", config.max_rounds)?;
            return Ok(PlayOutcome::OutOfRounds);
        }

        writeln!(
            out,
            "\nCandidates: {} ({})",
            state.candidates().len(),
            word_sample(state.candidates().iter(), state.candidates().len(), 5)
        )?;

        let suggestion = match opening {
            Some(opening) if round == 1 => opening.clone(),
            _ => state.choose_next_guess().ok_or(Error::NoOptions)?,
        };
        writeln!(
            out,
            "Guess {round}: {} (expected {:.2} left, at worst {})",
            suggestion.guess(),
            suggestion.expected_size(),
            suggestion.worst_case_size()
        )?;

        let clue = loop {
            write!(out, "Feedback: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line).context("cannot read feedback")? == 0 {
                return Ok(PlayOutcome::Quit);
            }

            match read_input(&line, suggestion.guess(), &state) {
                Ok(Input::Clue(clue)) => break Some(clue),
                Ok(Input::Undo) => {
                    if let Some(earlier) = previous.pop() {
                        state = earlier;
                        writeln!(out, "Undone.")?;
                        break None;
                    }
                    writeln!(out, "Nothing to undo.")?;
                }
                Ok(Input::Quit) => return Ok(PlayOutcome::Quit),
                Err(err) => writeln!(out, "{err}")?,
            }
        };
        let Some(clue) = clue else {
            continue;
        };

        if clue.feedback().is_solved() {
            writeln!(out, "Solved in {round}!")?;
            return Ok(PlayOutcome::Solved { guesses: round });
        }

        match state.advance(&clue, config.hard_mode) {
            Ok(next) => {
                writeln!(out, "  {} {}", clue.guess(), feedback_to_boxes(clue.feedback()))?;
                previous.push(std::mem::replace(&mut state, next));
            }
            Err(err) if err.kind() == ErrorKind::Unsolvable => {
                writeln!(out, "{err}; check the feedback and try again")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Interpret one line of user input
fn read_input(line: &str, suggested: &Word, state: &GameState) -> Result<Input, Error> {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        "undo" | "u" => return Ok(Input::Undo),
        _ => {}
    }

    let (guess, feedback) = match line.trim_start().split_once(' ') {
        Some((word, feedback)) if word.bytes().all(|b| b.is_ascii_alphabetic()) => {
            (Word::new(word)?, feedback)
        }
        _ => (suggested.clone(), line),
    };

    let feedback: Feedback = feedback.parse()?;
    let clue = Clue::new(guess, feedback)?;
    if clue.guess().len() != state.word_len() {
        return Err(Error::LengthMismatch {
            expected: state.word_len(),
            found: clue.guess().len(),
        });
    }
    Ok(Input::Clue(clue))
}
