//! Game state and turn sequencing.

use super::action::{Move, MoveError, MoveRecord};
use super::config::GameConfig;
use super::contracts::{Contract, PlayContract};
use super::rings::RotationError;
use super::rotation::RotationEngine;
use super::rules;
use super::types::{Cell, Grid, Outcome, Player};
use tracing::{debug, info, instrument};

/// A game session: board, player to move and outcome.
///
/// `play_at` is the only way to change the board. Every move places the
/// current player's piece, orbits every ring by the configured step count,
/// evaluates the board and, if the game is still running, passes the turn.
/// Once the game is won or drawn it refuses further moves until `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) engine: RotationEngine,
    pub(crate) grid: Grid,
    pub(crate) current_player: Player,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
    pub(crate) last_move: Option<MoveRecord>,
}

impl GameState {
    /// Creates a new game for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::UnsupportedSize` if the configured board size
    /// has no ring decomposition. The size is checked here, once, so that no
    /// move can fail on geometry.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, RotationError> {
        let engine = RotationEngine::new(*config.board_size())?;
        info!(
            board_size = config.board_size(),
            rotation_steps = config.rotation_steps(),
            rings = engine.rings().len(),
            "Creating new game"
        );
        Ok(Self {
            grid: Grid::new(engine.size()),
            config,
            engine,
            current_player: Player::One,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            last_move: None,
        })
    }

    /// Places the current player's piece at `(row, col)`, then orbits the
    /// board and evaluates it.
    ///
    /// Returns the outcome after the move.
    ///
    /// # Errors
    ///
    /// Checked in this order, before anything changes:
    /// - `MoveError::GameOver` once the game is decided
    /// - `MoveError::OutOfBounds` for coordinates off the board
    /// - `MoveError::CellOccupied` if the cell holds a piece
    ///
    /// A move whose result breaks one of the `OrbitInvariants` is undone and
    /// reported as `MoveError::InvariantViolation`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let action = Move::new(self.current_player, row, col);
        PlayContract::pre(self, &action)?;

        let mut placed = self.grid.clone();
        placed.set(row, col, Cell::Occupied(action.player));
        let rotated = self.engine.rotate(&placed, *self.config.rotation_steps())?;
        let outcome = rules::evaluate(&rotated);

        let record = MoveRecord {
            action,
            grid_after: rotated.clone(),
        };
        let next_player = if outcome.is_terminal() {
            action.player
        } else {
            action.player.opponent()
        };

        // Commit, keeping what the move replaced until the contract agrees.
        let previous = (
            std::mem::replace(&mut self.grid, rotated),
            std::mem::replace(&mut self.outcome, outcome),
            std::mem::replace(&mut self.current_player, next_player),
            self.last_move.replace(record),
        );
        self.history.push(action);

        if let Err(e) = PlayContract::post(&action, self) {
            self.history.pop();
            (self.grid, self.outcome, self.current_player, self.last_move) = previous;
            return Err(e);
        }

        match outcome {
            Outcome::InProgress => debug!(%action, "Move applied"),
            _ => info!(%action, %outcome, moves = self.history.len(), "Game decided"),
        }
        Ok(outcome)
    }

    /// Starts a fresh game in place: empty board, player one to move.
    ///
    /// Configuration is kept. Never fails and may be called at any time.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), outcome = %self.outcome, "Resetting game");
        self.grid = Grid::new(self.engine.size());
        self.current_player = Player::One;
        self.outcome = Outcome::InProgress;
        self.history.clear();
        self.last_move = None;
    }

    /// Builds a game by playing `moves` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the configuration error, or the first refused move. A move
    /// after the game is decided is refused with `GameOver`.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(config: GameConfig, moves: &[(usize, usize)]) -> Result<Self, MoveError> {
        let mut game = Self::new(config)?;
        for &(row, col) in moves {
            game.play_at(row, col)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player whose turn it is. After the game is decided this
    /// is the player who made the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the ring decomposition in use.
    pub fn engine(&self) -> &RotationEngine {
        &self.engine
    }

    /// Moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The last accepted move and the board it produced.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Empty cells, or nothing once the game is decided.
    pub fn valid_moves(&self) -> Vec<(usize, usize)> {
        if self.outcome.is_terminal() {
            Vec::new()
        } else {
            self.grid.empty_cells()
        }
    }
}

impl Default for GameState {
    /// A 4×4 board orbiting one step per move.
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            engine: RotationEngine::default(),
            grid: Grid::new(4),
            current_player: Player::One,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            last_move: None,
        }
    }
}
