//! The turn state machine: move validation and execution, forced captures,
//! capture chains, promotion and game-end detection.

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    Engine,
    board::{Board, MAX_PIECES},
    error::{EngineFault, MoveRejection, SetupError},
    event::GameEvent,
    geometry::{can_capture, can_step},
    types::*,
    variant::Variant,
};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// `by_resignation` is set when the loser still had pieces but no move.
    Won { winner: Player, by_resignation: bool },
    /// A computer move was rejected by the executor; the game was stopped.
    EngineFault,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won { winner, .. } => Some(winner),
            Outcome::EngineFault => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// No game in progress (before start or after `end_game`).
    Idle,
    InProgress,
    Over(Outcome),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    #[default]
    One,
    Two,
    Random,
}

impl From<Player> for FirstPlayer {
    fn from(p: Player) -> Self {
        match p {
            Player::One => FirstPlayer::One,
            Player::Two => FirstPlayer::Two,
        }
    }
}

/// What an accepted `submit_move` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
    pub promoted: bool,
    /// Set when the same piece must capture again before the turn passes.
    pub chain: Option<Square>,
}

/// One game session: board, piece counts and turn state.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    counts: [u32; 2],
    active: Player,
    status: Status,
    obligated: [Vec<Square>; 2],
    chain: Option<Square>,
    customizing: bool,
    events: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::empty(),
            counts: [0, 0],
            active: Player::One,
            status: Status::Idle,
            obligated: [Vec::new(), Vec::new()],
            chain: None,
            customizing: false,
            events: Vec::new(),
        }
    }

    /// Opens a session for `variant`, failing for variants without rules.
    pub fn for_variant(variant: Variant) -> Result<Self, SetupError> {
        variant.ensure_supported()?;
        Ok(Self::new())
    }

    /// Starts a game from an arbitrary position with `to_move` first.
    pub fn from_board(board: Board, to_move: Player) -> Result<Self, SetupError> {
        let mut game = Game::new();
        game.begin_customization()?;
        for sq in Square::all() {
            if let Some(pc) = board.piece_at(sq) {
                game.place(sq, Some(pc))?;
            }
        }
        game.start(FirstPlayer::from(to_move))?;
        Ok(game)
    }

    // -------------------------------------------------------------------------
    // Setup and lifecycle
    // -------------------------------------------------------------------------

    /// Fills the board with the opening arrangement. Does nothing while the
    /// board is being customized or a game is in progress, since the turn
    /// state belongs to the board it was computed on.
    pub fn setup_standard_board(&mut self) {
        if self.customizing || self.status == Status::InProgress {
            return;
        }
        self.board = Board::standard();
        self.counts = [MAX_PIECES, MAX_PIECES];
    }

    /// Clears the board and enables `place`.
    pub fn begin_customization(&mut self) -> Result<(), SetupError> {
        if self.status == Status::InProgress {
            return Err(SetupError::GameInProgress);
        }
        self.end_game();
        self.customizing = true;
        Ok(())
    }

    pub fn is_customizing(&self) -> bool {
        self.customizing
    }

    /// Puts `piece` on `sq` (or clears it), keeping the piece counts in step.
    pub fn place(&mut self, sq: Square, piece: Option<Piece>) -> Result<(), SetupError> {
        if !self.customizing {
            return Err(SetupError::NotCustomizing);
        }
        if let Some(pc) = piece
            && pc.rank == Rank::Man
            && sq.row() == pc.owner.promotion_row()
        {
            return Err(SetupError::ManOnPromotionRow { square: sq });
        }
        if let Some(old) = self.board.piece_at(sq) {
            self.counts[old.owner.idx()] -= 1;
        }
        if let Some(pc) = piece {
            self.counts[pc.owner.idx()] += 1;
        }
        self.board.set_piece(sq, piece);
        Ok(())
    }

    /// Starts play with a random first player drawn from the thread RNG.
    pub fn start(&mut self, first: FirstPlayer) -> Result<Player, SetupError> {
        self.start_with_rng(first, &mut rand::thread_rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        first: FirstPlayer,
        rng: &mut R,
    ) -> Result<Player, SetupError> {
        if self.status == Status::InProgress {
            return Err(SetupError::GameInProgress);
        }
        if self.customizing {
            for p in Player::ALL {
                if self.counts[p.idx()] == 0 {
                    return Err(SetupError::MissingPieces { player: p });
                }
            }
            self.customizing = false;
        } else {
            self.setup_standard_board();
        }

        self.active = match first {
            FirstPlayer::One => Player::One,
            FirstPlayer::Two => Player::Two,
            FirstPlayer::Random => {
                if rng.gen_bool(0.5) {
                    Player::One
                } else {
                    Player::Two
                }
            }
        };
        self.status = Status::InProgress;
        self.chain = None;
        info!(
            "game started: {} to move, {} vs {} pieces",
            self.active, self.counts[0], self.counts[1]
        );
        self.events.push(GameEvent::TurnChanged {
            player: self.active,
        });
        self.refresh_obligations();
        self.detect_stalemate();
        Ok(self.active)
    }

    /// Abandons any game and returns to the idle state.
    pub fn end_game(&mut self) {
        self.board = Board::empty();
        self.counts = [0, 0];
        self.active = Player::One;
        self.status = Status::Idle;
        for list in &mut self.obligated {
            list.clear();
        }
        self.chain = None;
        self.customizing = false;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn is_in_progress(&self) -> bool {
        self.status == Status::InProgress
    }
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Over(o) => Some(o),
            _ => None,
        }
    }
    /// The player to move, while a game is in progress.
    pub fn active_player(&self) -> Option<Player> {
        self.is_in_progress().then_some(self.active)
    }
    pub fn non_active_player(&self) -> Option<Player> {
        self.active_player().map(Player::other)
    }
    pub fn piece_count(&self, player: Player) -> u32 {
        self.counts[player.idx()]
    }
    /// Pieces of `player` that must capture this turn.
    pub fn obligated_pieces(&self, player: Player) -> &[Square] {
        &self.obligated[player.idx()]
    }
    pub fn in_chain(&self) -> bool {
        self.chain.is_some()
    }
    pub fn chain_square(&self) -> Option<Square> {
        self.chain
    }

    /// Drains queued notifications.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // -------------------------------------------------------------------------
    // Move submission
    // -------------------------------------------------------------------------

    /// Validates and applies one step or one jump for the player to move.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveReport, MoveRejection> {
        match self.validate(from, to) {
            Ok(piece) => Ok(self.execute(from, to, piece)),
            Err(reason) => {
                debug!("rejected {from}-{to}: {reason}");
                self.events.push(GameEvent::InvalidMove { reason });
                if reason.is_chain_violation()
                    && let Some(square) = self.chain
                {
                    self.events.push(GameEvent::MustContinueChain { square });
                }
                if reason.is_obligation_violation() {
                    self.events.push(GameEvent::MustCapture {
                        squares: self.obligated[self.active.idx()].clone(),
                    });
                }
                Err(reason)
            }
        }
    }

    fn validate(&self, from: Square, to: Square) -> Result<Piece, MoveRejection> {
        if self.status != Status::InProgress {
            return Err(MoveRejection::GameNotInProgress);
        }
        let piece = match self.board.piece_at(from) {
            Some(pc) if pc.owner == self.active => pc,
            _ => return Err(MoveRejection::WrongOwner),
        };

        let dr = to.row() - from.row();
        let dc = to.col() - from.col();
        let distance = dr.abs();

        if piece.rank != Rank::King && dr.signum() != self.active.forward() {
            return Err(MoveRejection::NonForwardMove);
        }
        if distance != dc.abs() {
            return Err(MoveRejection::NonDiagonalMove);
        }
        if distance > 2 {
            return Err(MoveRejection::DistanceOutOfRange);
        }
        if !self.board.is_empty(to) {
            return Err(MoveRejection::DestinationOccupied);
        }

        match self.chain {
            Some(chain) => {
                if from != chain {
                    return Err(MoveRejection::MustContinueChainWithSamePiece);
                }
                if distance == 1 {
                    return Err(MoveRejection::ChainRequiresCapture);
                }
            }
            None => {
                let obligated = &self.obligated[self.active.idx()];
                if !obligated.is_empty() {
                    if !obligated.contains(&from) {
                        return Err(MoveRejection::MustUseObligatedPiece);
                    }
                    if distance == 1 {
                        return Err(MoveRejection::ObligatedMoveMustCapture);
                    }
                }
            }
        }

        if distance == 2 {
            let jumped = midpoint(from, to).and_then(|mid| self.board.owner_at(mid));
            if jumped != Some(self.active.other()) {
                return Err(MoveRejection::MidSquareNotOpponent);
            }
        }
        Ok(piece)
    }

    fn execute(&mut self, from: Square, to: Square, piece: Piece) -> MoveReport {
        let mover = self.active;
        let captured = midpoint(from, to);

        self.board.set_piece(from, None);
        self.board.set_piece(to, Some(piece));
        match captured {
            Some(mid) => {
                self.board.set_piece(mid, None);
                let count = &mut self.counts[mover.other().idx()];
                *count = count.saturating_sub(1);
                debug!("{mover} captured {from}x{to} over {mid}");
                self.events.push(GameEvent::CaptureApplied {
                    from,
                    to,
                    captured: mid,
                });
            }
            None => {
                debug!("{mover} moved {from}-{to}");
                self.events.push(GameEvent::MoveApplied { from, to });
            }
        }

        let promoted = self.board.promote_if_due(to);
        if promoted {
            self.events.push(GameEvent::Promoted { square: to });
        }

        if captured.is_some() {
            let rank = if promoted { Rank::King } else { piece.rank };
            self.chain = can_capture(&self.board, to, mover, rank).then_some(to);
        }

        let report = MoveReport {
            from,
            to,
            captured,
            promoted,
            chain: self.chain,
        };

        if let Some(loser) = Player::ALL.into_iter().find(|p| self.counts[p.idx()] == 0) {
            self.finish(loser.other(), false);
            return report;
        }

        if self.chain.is_none() {
            self.active = mover.other();
            self.events.push(GameEvent::TurnChanged {
                player: self.active,
            });
        }
        self.refresh_obligations();
        if self.chain.is_none() {
            self.detect_stalemate();
        }
        report
    }

    /// Recomputes which of the active player's pieces can capture right now.
    /// The other player's list is always cleared.
    fn refresh_obligations(&mut self) {
        for list in &mut self.obligated {
            list.clear();
        }
        let active = self.active;
        let board = &self.board;
        let found: Vec<Square> = board
            .pieces_of(active)
            .filter(|&(sq, pc)| can_capture(board, sq, active, pc.rank))
            .map(|(sq, _)| sq)
            .collect();
        self.obligated[active.idx()] = found;
    }

    /// Ends the game if the active player has no step and no capture.
    fn detect_stalemate(&mut self) {
        let active = self.active;
        if !self.obligated[active.idx()].is_empty() {
            return;
        }
        let board = &self.board;
        let can_move = board.pieces_of(active).any(|(sq, pc)| {
            can_step(board, sq, active, pc.rank) || can_capture(board, sq, active, pc.rank)
        });
        if !can_move {
            self.finish(active.other(), true);
        }
    }

    fn finish(&mut self, winner: Player, by_resignation: bool) {
        info!(
            "{winner} wins{}",
            if by_resignation {
                " (opponent cannot move)"
            } else {
                ""
            }
        );
        self.status = Status::Over(Outcome::Won {
            winner,
            by_resignation,
        });
        self.chain = None;
        for list in &mut self.obligated {
            list.clear();
        }
        self.events.push(GameEvent::GameWon {
            winner,
            by_resignation,
        });
    }

    // -------------------------------------------------------------------------
    // Computer moves
    // -------------------------------------------------------------------------

    /// Plays a complete move (every leg of a chain) through `submit_move`.
    ///
    /// A rejected leg means the generator and the executor disagree; the game
    /// is stopped with [`Outcome::EngineFault`] rather than guessing.
    pub fn play_move(&mut self, mv: &Move) -> Result<(), EngineFault> {
        if !self.is_in_progress() {
            return Err(EngineFault::NotInProgress);
        }
        for (from, to) in mv.legs() {
            if let Err(reason) = self.submit_move(from, to) {
                return Err(self.fault(EngineFault::Rejected { from, to, reason }));
            }
        }
        if self.is_in_progress() && self.chain.is_some() {
            return Err(self.fault(EngineFault::ChainLeftOpen));
        }
        Ok(())
    }

    /// Asks `engine` for a move for the player to move and plays it.
    pub fn play_engine(&mut self, engine: &mut dyn Engine) -> Result<Move, EngineFault> {
        let Some(player) = self.active_player() else {
            return Err(EngineFault::NotInProgress);
        };
        let result = engine.search(&self.board, player);
        let Some(mv) = result.best_move else {
            return Err(self.fault(EngineFault::NoMove { player }));
        };
        debug!(
            "{} chose {mv} for {player} (score {}, {} nodes)",
            engine.name(),
            result.score,
            result.nodes
        );
        self.play_move(&mv)?;
        Ok(mv)
    }

    fn fault(&mut self, fault: EngineFault) -> EngineFault {
        warn!("stopping game: {fault}");
        self.status = Status::Over(Outcome::EngineFault);
        self.chain = None;
        for list in &mut self.obligated {
            list.clear();
        }
        self.events.push(GameEvent::EngineFault);
        fault
    }
}
