use std::io::{self, BufRead, Write};
use std::time::Duration;

use common::{GameSession, MoveOutcome, log};

use crate::input::{Command, parse_command};
use crate::renderer::render_board;

/// Drives a [`GameSession`] from line-based input. Rendering and the bot's
/// pause live here; the rules stay in the session.
pub struct TerminalApp<R: BufRead, W: Write> {
    session: GameSession,
    input: R,
    output: W,
    bot_delay: Duration,
}

impl<R: BufRead, W: Write> TerminalApp<R, W> {
    pub fn new(session: GameSession, input: R, output: W, bot_delay: Duration) -> Self {
        Self {
            session,
            input,
            output,
            bot_delay,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs until the player quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.draw()?;

            if self.session.is_bot_turn() {
                if !self.bot_delay.is_zero() {
                    std::thread::sleep(self.bot_delay);
                }
                if let Some((position, outcome)) = self.session.play_bot_turn() {
                    writeln!(self.output, "AI plays {}", position)?;
                    self.report(outcome)?;
                    continue;
                }
                writeln!(self.output, "AI Error: Could not find a valid move.")?;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                log!("Input closed, leaving");
                return Ok(());
            }

            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Reset) => self.session.reset(),
                Ok(Command::Move(position)) => {
                    if self.session.game().is_game_over() {
                        writeln!(self.output, "Game over. Press 'r' to restart.")?;
                        continue;
                    }
                    let outcome = self.session.submit_human_move(position);
                    if outcome == MoveOutcome::Rejected {
                        let size = self.session.game().size();
                        if position.row >= size || position.col >= size {
                            writeln!(self.output, "Invalid move: {} is off the board.", position)?;
                        } else {
                            writeln!(self.output, "Invalid move: Square already taken.")?;
                        }
                    }
                    self.report(outcome)?;
                }
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(self.session.game()))?;
        writeln!(self.output, "{}", self.session.status_message())?;
        if self.session.game().status().is_terminal() {
            writeln!(self.output, "Press 'r' to Restart, 'q' to quit")?;
        } else if self.session.is_human_turn() {
            writeln!(self.output, "Enter 'row col', 'r' to restart, 'q' to quit")?;
        }
        Ok(())
    }

    fn report(&mut self, outcome: MoveOutcome) -> io::Result<()> {
        if let MoveOutcome::Won { line: Some(line), .. } = outcome {
            writeln!(self.output, "Winning line: {} -> {}", line.start, line.end)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{BotStrategy, GameMode, Player, Position, RandomBot, SessionRng};
    use std::io::Cursor;

    struct FirstMoveBot;

    impl BotStrategy for FirstMoveBot {
        fn choose_move(&mut self, moves: &[Position]) -> Option<Position> {
            moves.first().copied()
        }
    }

    fn run_script(
        session: GameSession,
        script: &str,
    ) -> (TerminalApp<Cursor<Vec<u8>>, Vec<u8>>, String) {
        let mut app = TerminalApp::new(
            session,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            Duration::ZERO,
        );
        app.run().unwrap();
        let output = String::from_utf8(app.output.clone()).unwrap();
        (app, output)
    }

    #[test]
    fn test_pvp_win_through_input() {
        let session = GameSession::new(
            GameMode::PlayerVsPlayer,
            Player::O,
            Box::new(RandomBot::new(SessionRng::new(1))),
        );
        let script = "0 0\n1 0\n0 1\n1 1\n0 2\n1 2\n0 3\n1 3\n0 4\nq\n";
        let (app, output) = run_script(session, script);

        assert_eq!(app.session().game().winner(), Some(Player::X));
        assert!(output.contains("Player X wins!"));
        assert!(output.contains("Winning line: (0, 0) -> (0, 4)"));
        assert!(output.contains("Press 'r' to Restart, 'q' to quit"));
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let session = GameSession::new(GameMode::PlayerVsPlayer, Player::O, Box::new(FirstMoveBot));
        let (app, output) = run_script(session, "0 0\n0 0\n12 3\nhello\n");

        assert!(output.contains("Invalid move: Square already taken."));
        assert!(output.contains("Invalid move: (12, 3) is off the board."));
        assert!(output.contains("Expected 'row col', got 'hello'"));
        assert_eq!(app.session().game().current_player(), Player::O);
    }

    #[test]
    fn test_bot_answers_human_move() {
        let session = GameSession::new(GameMode::PlayerVsBot, Player::O, Box::new(FirstMoveBot));
        let (app, output) = run_script(session, "5 5\n");

        assert!(output.contains("AI plays (0, 0)"));
        assert_eq!(app.session().game().current_player(), Player::X);
        assert_eq!(app.session().game().valid_moves().len(), 142);
    }

    #[test]
    fn test_reset_and_moves_after_game_over() {
        let session = GameSession::new(GameMode::PlayerVsPlayer, Player::O, Box::new(FirstMoveBot));
        let script = "0 0\n1 0\n0 1\n1 1\n0 2\n1 2\n0 3\n1 3\n0 4\n5 5\nr\n";
        let (app, output) = run_script(session, script);

        assert!(output.contains("Game over. Press 'r' to restart."));
        assert!(!app.session().game().is_game_over());
        assert_eq!(app.session().game().valid_moves().len(), 144);
    }
}
