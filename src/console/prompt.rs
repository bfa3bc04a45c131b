//! Line-based prompts over an explicit input and output.

use crate::games::fox_hounds::{Coordinate, Dimension, Figure, make_coordinate};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Main menu entries, numbered as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::FromRepr)]
#[repr(u8)]
pub enum MenuChoice {
    /// Play a move for the side on turn.
    #[strum(to_string = "Move")]
    Move = 1,
    /// Write the game to a new file.
    #[strum(to_string = "Save Game")]
    Save = 2,
    /// Replace the game with one from a file.
    #[strum(to_string = "Load Game")]
    Load = 3,
    /// Leave the program.
    #[strum(to_string = "Exit")]
    Exit = 4,
}

impl MenuChoice {
    /// Menu text listing every entry.
    pub fn menu() -> String {
        let entries: Vec<String> = Self::iter()
            .map(|choice| format!("{}. {}", choice as u8, choice))
            .collect();
        let count = Self::iter().count();
        format!("\n{}\n\nEnter 1 - {}:", entries.join("\n"), count)
    }

    /// Parses the menu number typed by the player.
    pub fn parse(text: &str) -> Option<Self> {
        let number = text.split_whitespace().next()?.parse::<u8>().ok()?;
        Self::from_repr(number)
    }
}

/// Reads `text` as a cell, keeping it only if it lies on the board.
#[instrument]
pub fn in_range(dimension: Dimension, text: &str) -> Option<Coordinate> {
    text.to_ascii_uppercase()
        .parse::<Coordinate>()
        .ok()
        .filter(|coordinate| coordinate.is_on_board(dimension))
}

/// Console handle owning the input source and the output sink.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output, mainly for inspecting it in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes text as is.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Writes one line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    /// Reads one line without its line break.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] once the input is exhausted.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Asks for the board size. Anything unusable, including no answer at
    /// all, falls back to the default size.
    #[instrument(skip(self))]
    pub fn dimension_query(&mut self) -> io::Result<Dimension> {
        self.say("Please enter the dimensions of the board")?;
        match self.read_line() {
            Ok(line) => Ok(Dimension::parse_lenient(&line)),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(Dimension::default()),
            Err(err) => Err(err),
        }
    }

    /// Shows the main menu until a valid entry is picked.
    #[instrument(skip(self))]
    pub fn main_menu_query(&mut self, figure_to_move: Figure) -> io::Result<MenuChoice> {
        loop {
            self.say(&format!("{} to move", figure_to_move))?;
            self.say(&MenuChoice::menu())?;

            let line = self.read_line()?;
            if let Some(choice) = MenuChoice::parse(&line) {
                debug!(%choice, "Menu choice");
                return Ok(choice);
            }
            self.say("Please enter valid number.")?;
        }
    }

    /// Asks for an origin and a destination until both name cells on the board.
    #[instrument(skip(self))]
    pub fn position_query(&mut self, dimension: Dimension) -> io::Result<(Coordinate, Coordinate)> {
        let dim = i32::from(dimension.get());
        let last_cell = make_coordinate(dim, dim);
        loop {
            self.say("Provide origin and destination coordinates.")?;
            self.say(&format!("Enter two positions between A1-{}:\n", last_cell))?;

            let line = self.read_line()?;
            let pair: Vec<&str> = line.split_whitespace().collect();
            if let [origin, destination] = pair.as_slice()
                && let (Some(origin), Some(destination)) =
                    (in_range(dimension, origin), in_range(dimension, destination))
            {
                return Ok((origin, destination));
            }
            self.say("ERROR: Please enter valid coordinate pair separated by space.")?;
        }
    }

    /// Asks for a file path.
    #[instrument(skip(self))]
    pub fn file_query(&mut self) -> io::Result<PathBuf> {
        self.say("Enter file path:")?;
        let line = self.read_line()?;
        Ok(PathBuf::from(line.trim()))
    }
}
