/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, warn};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::CallDirection;

/// A user command for the simulation, one per input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Call { floor: u8, direction: CallDirection },
    Panel { elevator: usize, floor: u8 },
    Reset,
    Status,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidArgument(String),
    TrailingInput(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::UnknownCommand(word) => write!(f, "unknown command '{}'", word),
            CommandError::MissingArgument(name) => write!(f, "missing argument <{}>", name),
            CommandError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            CommandError::TrailingInput(rest) => write!(f, "unexpected input '{}'", rest),
        }
    }
}

impl std::error::Error for CommandError {}

fn argument<'a, T: FromStr>(
    words: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<T, CommandError> {
    let word = words.next().ok_or(CommandError::MissingArgument(name))?;
    word.parse::<T>()
        .map_err(|_| CommandError::InvalidArgument(format!("<{}> = '{}'", name, word)))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match keyword.as_str() {
            "call" => Command::Call {
                floor: argument(&mut words, "floor")?,
                direction: argument(&mut words, "direction")?,
            },
            "go" | "panel" => Command::Panel {
                elevator: argument(&mut words, "elevator")?,
                floor: argument(&mut words, "floor")?,
            },
            "reset" => Command::Reset,
            "status" => Command::Status,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::UnknownCommand(keyword)),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(CommandError::TrailingInput(rest.join(" ")));
        }
        Ok(command)
    }
}

/**
 * Reads commands line by line and forwards them to the simulation.
 *
 * Blank lines are skipped and malformed ones are logged and dropped. Returns after `quit`,
 * at the end of the input, or when the simulation has stopped listening.
 */
pub fn read_commands<R: BufRead>(reader: R, command_tx: cbc::Sender<Command>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read command: {}", e);
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                debug!("Parsed command {:?}", command);
                if command_tx.send(command).is_err() {
                    return;
                }
                if command == Command::Quit {
                    return;
                }
            }
            Err(e) => warn!("Ignoring '{}': {}", line.trim(), e),
        }
    }
}
