//! Line-oriented menu loop over a [`GameState`].

use std::io::{self, BufRead, Write};

use crate::game::GameState;
use crate::log_dev;
use crate::types::Piece;

/// One menu choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play,
    Reserve,
    UseReservation,
    Swap,
    Undo,
    Invert,
    Enqueue,
    Push,
    Show,
    Exit,
}

/// Why a menu line was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    NotANumber,
    UnknownOption(i64),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let number = line
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseError::NotANumber)?;
        match number {
            0 => Ok(Self::Exit),
            1 => Ok(Self::Play),
            2 => Ok(Self::Reserve),
            3 => Ok(Self::UseReservation),
            4 => Ok(Self::Swap),
            5 => Ok(Self::Undo),
            6 => Ok(Self::Invert),
            7 => Ok(Self::Enqueue),
            8 => Ok(Self::Push),
            9 => Ok(Self::Show),
            other => Err(ParseError::UnknownOption(other)),
        }
    }
}

const MENU: &str = "\
Menu:
1 - Play piece (dequeue from queue)
2 - Reserve piece (pop stack -> reservation)
3 - Use reserved piece (back on top of stack)
4 - Swap stack top with queue front
5 - Undo last play
6 - Invert queue and stack (top <-> front)
7 - Add piece to queue
8 - Push piece onto stack
9 - Show state
0 - Exit";

/// Drives one session until `0` or end of input.
pub struct Session<R, W> {
    input: R,
    output: W,
    /// Reprint the menu before every prompt rather than once.
    repeat_menu: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, repeat_menu: bool) -> Self {
        Self {
            input,
            output,
            repeat_menu,
        }
    }

    /// Next line without its terminator, or `None` at end of input. Bytes
    /// that are not UTF-8 decode to U+FFFD instead of failing the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        while raw.last().is_some_and(|&b| b == b'\n' || b == b'\r') {
            raw.pop();
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Missing input yields an empty name.
    fn read_piece(&mut self, prompt: &str) -> io::Result<Piece> {
        self.prompt(prompt)?;
        let name = self.read_line()?.unwrap_or_default();
        Ok(Piece::new(name))
    }

    pub fn run(&mut self, game: &mut GameState) -> io::Result<()> {
        writeln!(self.output, "=== Piece Inventory ===")?;
        let mut first = true;
        loop {
            if first || self.repeat_menu {
                writeln!(self.output, "\n{MENU}")?;
                first = false;
            }
            self.prompt("Choice: ")?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                log_dev!("[SESSION] end of input");
                break;
            };
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(ParseError::NotANumber) => {
                    writeln!(self.output, "Invalid input.")?;
                    continue;
                }
                Err(ParseError::UnknownOption(number)) => {
                    log_dev!("[SESSION] unknown option {number}");
                    writeln!(self.output, "Invalid option.")?;
                    continue;
                }
            };
            log_dev!("[SESSION] command {command:?}");
            if command == Command::Exit {
                writeln!(self.output, "Exiting. Good luck!")?;
                break;
            }
            self.execute(game, command)?;
        }
        self.output.flush()
    }

    fn execute(&mut self, game: &mut GameState, command: Command) -> io::Result<()> {
        let message = match command {
            Command::Play => match game.play() {
                Ok(piece) => format!("[Play] Played piece: {piece}"),
                Err(err) => format!("[Play] Failed: {err}."),
            },
            Command::Reserve => match game.reserve() {
                Ok(piece) => format!("[Reserve] Reserved piece: {piece}"),
                Err(err) => format!("[Reserve] Failed: {err}."),
            },
            Command::UseReservation => match game.use_reservation() {
                Ok(()) => "[Use Reservation] Piece put back on top of the stack.".to_string(),
                Err(err) => format!("[Use Reservation] Failed: {err}."),
            },
            Command::Swap => match game.swap_top_and_front() {
                Ok(()) => "[Swap] Stack top and queue front exchanged.".to_string(),
                Err(err) => format!("[Swap] Failed: {err}."),
            },
            Command::Undo => match game.undo() {
                Ok(piece) => format!("[Undo] Piece '{piece}' is back at the queue front."),
                Err(err) => format!("[Undo] Failed: {err}."),
            },
            Command::Invert => match game.invert_queue_and_stack() {
                Ok(()) => "[Invert] Queue and stack inverted.".to_string(),
                Err(err) => format!("[Invert] Failed: {err}."),
            },
            Command::Enqueue => {
                let piece = self.read_piece("Name of piece to enqueue: ")?;
                let label = piece.name().to_string();
                match game.enqueue_piece(piece) {
                    Ok(()) => format!("[Enqueue] Piece '{label}' added to queue."),
                    Err(err) => format!("[Enqueue] Failed: {err}."),
                }
            }
            Command::Push => {
                let piece = self.read_piece("Name of piece to push: ")?;
                let label = piece.name().to_string();
                match game.push_piece(piece) {
                    Ok(()) => format!("[Push] Piece '{label}' pushed."),
                    Err(err) => format!("[Push] Failed: {err}."),
                }
            }
            Command::Show => format!("\n{}", game.snapshot()),
            Command::Exit => return Ok(()),
        };
        writeln!(self.output, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Capacities;

    fn run_script(script: &str, capacities: Capacities) -> (String, GameState) {
        let mut game = GameState::new(capacities);
        let mut output = Vec::new();
        Session::new(script.as_bytes(), &mut output, false)
            .run(&mut game)
            .expect("session failed");
        (String::from_utf8(output).expect("utf8 output"), game)
    }

    #[test]
    fn parses_menu_numbers() {
        assert_eq!(Command::parse(" 4 "), Ok(Command::Swap));
        assert_eq!(Command::parse("0"), Ok(Command::Exit));
        assert_eq!(Command::parse("12"), Err(ParseError::UnknownOption(12)));
        assert_eq!(Command::parse("-1"), Err(ParseError::UnknownOption(-1)));
        assert_eq!(Command::parse("abc"), Err(ParseError::NotANumber));
        assert_eq!(Command::parse(""), Err(ParseError::NotANumber));
    }

    #[test]
    fn invalid_lines_do_not_touch_state() {
        let (output, game) = run_script("7\nA\nxyz\n42\n0\n", Capacities::default());
        assert!(output.contains("Invalid input."));
        assert!(output.contains("Invalid option."));
        assert_eq!(game.queue().len(), 1);
    }

    #[test]
    fn enqueue_play_and_undo_through_menu() {
        let (output, game) = run_script(
            "7\nA\n7\nB\n1\n5\n5\n9\n0\n",
            Capacities { queue: 3, stack: 3 },
        );
        assert!(output.contains("[Enqueue] Piece 'A' added to queue."));
        assert!(output.contains("[Play] Played piece: A"));
        assert!(output.contains("[Undo] Piece 'A' is back at the queue front."));
        assert!(output.contains("[Undo] Failed: no play to undo."));
        assert!(output.contains("  [0] A\n  [1] B\n"));
        assert!(output.contains("Exiting. Good luck!"));
        assert_eq!(game.snapshot().queue_names(), vec!["A", "B"]);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (output, game) = run_script("8\nX\n2", Capacities::default());
        assert!(output.contains("[Push] Piece 'X' pushed."));
        assert!(output.contains("[Reserve] Reserved piece: X"));
        assert!(!output.contains("Exiting"));
        assert_eq!(game.reserved().map(Piece::name), Some("X"));
    }

    #[test]
    fn missing_name_gives_empty_piece() {
        let (output, game) = run_script("7\n", Capacities::default());
        assert!(output.contains("[Enqueue] Piece '' added to queue."));
        assert_eq!(game.queue().len(), 1);
    }

    #[test]
    fn non_utf8_lines_are_rejected_or_decoded() {
        let mut game = GameState::new(Capacities::default());
        let mut output = Vec::new();
        let script: &[u8] = b"7\nA\n\xff\n7\npe\xe7a\n9\n0\n";
        Session::new(script, &mut output, false)
            .run(&mut game)
            .expect("session failed");
        let output = String::from_utf8(output).expect("utf8 output");

        assert!(output.contains("Invalid input."));
        assert!(output.contains("Exiting. Good luck!"));
        assert_eq!(game.snapshot().queue_names(), vec!["A", "pe\u{FFFD}a"]);
    }

    #[test]
    fn menu_printed_once_when_not_repeating() {
        let (output, _) = run_script("9\n9\n0\n", Capacities::default());
        assert_eq!(output.matches("Menu:").count(), 1);
    }
}
