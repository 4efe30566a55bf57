//! Line-oriented game loop over any reader/writer pair.

use crate::command::Command;
use crate::render::Renderer;
use hotseat_engine::{all_legal_moves, GameSession, SelectOutcome};
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

const HELP: &str = "\
Enter a square such as e2 to select a piece, then its destination.
Entering any other square cancels the selection.
  moves   list every legal move for the side to move
  reset   start a new game
  quit    leave";

/// Feeds player input into a [`GameSession`] and prints the result.
pub struct Terminal<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    renderer: Renderer,
    session: GameSession,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W, renderer: Renderer, session: GameSession) -> Self {
        Self {
            reader,
            writer,
            renderer,
            session,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), TerminalError> {
        self.draw()?;
        loop {
            write!(self.writer, "{}> ", self.session.turn())?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                break;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.writer, "{}", e)?;
                    continue;
                }
            };

            match command {
                Command::Select(square) => {
                    let outcome = self.session.select(square);
                    self.report(square, outcome)?;
                    if outcome != SelectOutcome::Ignored {
                        self.draw()?;
                    }
                }
                Command::Reset => {
                    self.session.reset();
                    tracing::info!("new game started");
                    self.draw()?;
                }
                Command::Moves => self.list_moves()?,
                Command::Help => writeln!(self.writer, "{}", HELP)?,
                Command::Quit => break,
                Command::Empty => {}
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), TerminalError> {
        write!(self.writer, "{}", self.renderer.screen(&self.session))?;
        Ok(())
    }

    fn report(
        &mut self,
        square: hotseat_core::Square,
        outcome: SelectOutcome,
    ) -> Result<(), TerminalError> {
        match outcome {
            SelectOutcome::Ignored if self.session.is_over() => {
                writeln!(self.writer, "The game is over; type 'reset' to play again.")?;
            }
            SelectOutcome::Ignored => {
                writeln!(
                    self.writer,
                    "No {} piece on {}.",
                    self.session.turn(),
                    square
                )?;
            }
            SelectOutcome::Selected if self.session.destinations().is_empty() => {
                writeln!(self.writer, "{} has no legal moves.", square)?;
            }
            SelectOutcome::Selected => {}
            SelectOutcome::Deselected => writeln!(self.writer, "Selection cleared.")?,
            SelectOutcome::Moved(applied) => writeln!(self.writer, "Played {}.", applied)?,
        }
        Ok(())
    }

    fn list_moves(&mut self) -> Result<(), TerminalError> {
        let moves = all_legal_moves(self.session.turn(), self.session.board());
        if moves.is_empty() {
            writeln!(self.writer, "No legal moves.")?;
        } else {
            let list: Vec<String> = moves.iter().map(|m| m.to_coordinate()).collect();
            writeln!(self.writer, "{} legal moves: {}", list.len(), list.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GlyphStyle};
    use hotseat_core::Color;
    use hotseat_engine::GameStatus;
    use std::io::Cursor;

    fn run(input: &str, session: GameSession) -> (GameSession, String) {
        let renderer = Renderer::new(&Config {
            glyphs: GlyphStyle::Ascii,
            ..Config::default()
        });
        let mut out = Vec::new();
        let session = {
            let mut terminal =
                Terminal::new(Cursor::new(input.as_bytes()), &mut out, renderer, session);
            terminal.run().unwrap();
            terminal.session().clone()
        };
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plays_fools_mate() {
        let (session, out) = run("f2\nf3\ne7\ne5\ng2\ng4\nd8\nh4\ne2\n", GameSession::new());
        assert_eq!(session.status(), GameStatus::Checkmate);
        assert_eq!(session.winner(), Some(Color::Black));
        assert!(out.contains("Played d8-h4."));
        assert!(out.contains("Checkmate! Black wins!"));
        assert!(out.contains("The game is over"));
    }

    #[test]
    fn reports_bad_input() {
        let (session, out) = run("e7\nbogus\ne2\ne5\n", GameSession::new());
        assert!(out.contains("No White piece on e7."));
        assert!(out.contains("unknown command 'bogus'"));
        assert!(out.contains("Selection cleared."));
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn lists_moves_and_resets() {
        let (session, out) = run("moves\ne2\ne4\nreset\nquit\ne2\n", GameSession::new());
        assert!(out.contains("20 legal moves:"));
        assert!(out.contains("e2e4"));
        // Input after quit is never read.
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn pinned_piece_reports_no_moves() {
        let session = GameSession::from_fen("4k3/4r3/8/8/8/4B3/8/4K3 w").unwrap();
        let (_, out) = run("e3\n", session);
        assert!(out.contains("e3 has no legal moves."));
    }
}
