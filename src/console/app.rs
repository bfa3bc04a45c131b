//! The interactive game loop.

use super::prompt::{Console, MenuChoice};
use super::render::{BoardStyle, render_board};
use crate::games::fox_hounds::{Game, GameStatus, Move, MoveError, load_game, save_game};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Menu-driven session: one game, one console.
pub struct App<R, W> {
    console: Console<R, W>,
    game: Game,
    style: BoardStyle,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates a session around a console and a fresh or restored game.
    pub fn new(console: Console<R, W>, game: Game, style: BoardStyle) -> Self {
        Self {
            console,
            game,
            style,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gives back the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs menu rounds until someone wins, the player exits, or the input
    /// runs dry. Returns the status the game ended in.
    ///
    /// # Errors
    ///
    /// Only console I/O errors other than end of input are returned.
    #[instrument(skip(self), fields(dimension = %self.game.dimension()))]
    pub fn run(&mut self) -> io::Result<GameStatus> {
        info!("Session started");
        loop {
            match self.round() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {}
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("Input closed, leaving session");
                    return Ok(self.game.status());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One pass through the main menu. Returns a status once the session is over.
    fn round(&mut self) -> io::Result<Option<GameStatus>> {
        self.console.say("\n#################################\n")?;
        self.show_board()?;

        match self.console.main_menu_query(self.game.turn())? {
            MenuChoice::Move => {
                let status = self.move_loop()?;
                if status.is_over() {
                    return self.finish(status).map(Some);
                }
            }
            MenuChoice::Save => self.save_loop()?,
            MenuChoice::Load => {
                // A loaded record may already be decided.
                if let Some(status) = self.load_loop()?
                    && status.is_over()
                {
                    return self.finish(status).map(Some);
                }
            }
            MenuChoice::Exit => {
                info!("Player exited");
                return Ok(Some(self.game.status()));
            }
        }
        Ok(None)
    }

    /// Shows the final board and announces the winner.
    fn finish(&mut self, status: GameStatus) -> io::Result<GameStatus> {
        self.show_board()?;
        self.console.say(&status.to_string())?;
        Ok(status)
    }

    fn show_board(&mut self) -> io::Result<()> {
        let board = render_board(self.game.positions(), self.game.dimension(), self.style);
        self.console.print(&board)
    }

    /// Keeps asking until the side on turn supplies a legal move.
    fn move_loop(&mut self) -> io::Result<GameStatus> {
        loop {
            let (origin, destination) = self.console.position_query(self.game.dimension())?;
            let action = Move::new(self.game.turn(), origin, destination);
            match self.game.make_move(action) {
                Ok(status) => {
                    debug!(%action, "Move played");
                    return Ok(status);
                }
                Err(MoveError::GameOver) => {
                    self.console.say(&format!("ERROR: {}", MoveError::GameOver))?;
                    return Ok(self.game.status());
                }
                Err(err) => {
                    debug!(%action, %err, "Move rejected");
                    self.console.say(&format!("ERROR: {}", err))?;
                }
            }
        }
    }

    fn save_loop(&mut self) -> io::Result<()> {
        let path = self.console.file_query()?;
        let result = save_game(
            self.game.dimension(),
            self.game.positions(),
            self.game.turn(),
            &path,
        );
        if let Err(err) = result {
            warn!(%err, "Save failed");
            self.console.say(&format!("ERROR: Saving file failed. {}", err))?;
        }
        Ok(())
    }

    /// Returns the restored status, or `None` if nothing was loaded.
    fn load_loop(&mut self) -> io::Result<Option<GameStatus>> {
        let path = self.console.file_query()?;
        let result = load_game(self.game.dimension(), &path)
            .and_then(|record| self.game.restore(record));
        match result {
            Ok(status) => Ok(Some(status)),
            Err(err) => {
                warn!(%err, "Load failed");
                self.console.say(&format!("ERROR: Loading from file failed. {}", err))?;
                Ok(None)
            }
        }
    }
}
