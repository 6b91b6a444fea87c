//! Turn state machine.
//!
//! [`Game`] owns the live [`Position`] and drives it one command at a time:
//! select a piece, move it, settle a pending promotion. Every command either
//! applies fully or is rejected with a [`CommandError`] and leaves the game
//! exactly as it was.

use crate::check::{has_king, is_in_check};
use crate::legality;
use crate::policy::MovePolicy;
use crate::position::{PieceRef, PositionError};
use crate::promotion::{self, promotion_status, PromotionStatus};
use crate::rules::{DrawReason, GameResult, RuleConfig};
use crate::{MoveList, Position, SquareSet};
use shogi_core::{Move, PieceKind, Player, Square};
use std::collections::BTreeMap;
use thiserror::Error;

/// Where the game is within a turn.
///
/// `TurnStart` and `TurnEnd` are passed through inside a single command, so
/// callers only ever observe `Selecting`, `AwaitingPromotionChoice` and
/// `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    TurnStart,
    Selecting,
    AwaitingPromotionChoice,
    TurnEnd,
    GameOver(GameResult),
}

/// Error type for rejected game commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("the game is over")]
    GameOver,

    #[error("a promotion decision is pending")]
    PromotionPending,

    #[error("no promotion decision is pending")]
    NoPromotionPending,

    #[error("no piece at {0}")]
    NoPieceAt(Square),

    #[error("the piece at {0} belongs to the opponent")]
    NotYourPiece(Square),

    #[error("it is not {0}'s turn")]
    NotYourTurn(Player),

    #[error("no {0} in hand")]
    NotInHand(PieceKind),

    #[error("no piece is selected")]
    NothingSelected,

    #[error("{0} is not a legal destination")]
    IllegalDestination(Square),

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Kind of the captured piece as it stood on the board.
    pub captured: Option<PieceKind>,
    /// The mover must now accept or decline promotion.
    pub promotion_pending: bool,
    /// The piece was promoted (always true for a mandatory promotion).
    pub promoted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    piece: PieceRef,
    destinations: SquareSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingPromotion {
    from: Square,
    to: Square,
}

/// A shogi game driven turn by turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Position restored by [`Game::reset`].
    start: Position,
    config: RuleConfig,
    phase: Phase,
    /// Full rounds, starting at 1.
    move_count: u32,
    selection: Option<Selection>,
    pending: Option<PendingPromotion>,
    /// Moves played so far, promotion choice included.
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting position.
    pub fn new() -> Self {
        Self::with_config(RuleConfig::default())
    }

    /// Creates a new game from the standard starting position with custom rules.
    pub fn with_config(config: RuleConfig) -> Self {
        Self::start(Position::startpos(), config)
    }

    /// Creates a game from a custom position.
    ///
    /// The position must pass [`Position::validate`]. The start-of-turn
    /// evaluation runs immediately, so a position that is already mate is
    /// returned in [`Phase::GameOver`].
    pub fn from_position(position: Position, config: RuleConfig) -> Result<Self, PositionError> {
        position.validate()?;
        Ok(Self::start(position, config))
    }

    /// Creates a game from a SFEN string.
    pub fn from_sfen(sfen: &str, config: RuleConfig) -> Result<Self, PositionError> {
        Self::from_position(Position::from_sfen(sfen)?, config)
    }

    fn start(position: Position, config: RuleConfig) -> Self {
        let mut game = Game {
            position: position.clone(),
            start: position,
            config,
            phase: Phase::TurnStart,
            move_count: 1,
            selection: None,
            pending: None,
            history: Vec::new(),
        };
        game.begin_turn();
        game
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the rules this game is played under.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Returns the current phase.
    pub fn current_phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.position.side_to_move
    }

    /// Returns true if `player`'s King is attacked.
    pub fn check_status(&self, player: Player) -> bool {
        is_in_check(&self.position.board, player)
    }

    /// Returns the game result if the game is over.
    pub fn game_result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game_result().is_some()
    }

    /// Returns the number of pieces of each kind in `player`'s hand.
    pub fn hand_contents(&self, player: Player) -> BTreeMap<PieceKind, usize> {
        self.position.hand(player).contents()
    }

    /// Returns the legal destinations of the referenced piece.
    pub fn legal_destinations(&self, piece: PieceRef) -> SquareSet {
        self.position.legal_destinations(piece, &self.config)
    }

    /// Returns every legal move of the player to move.
    ///
    /// Empty unless the game is waiting for a selection.
    pub fn legal_moves(&self) -> MoveList {
        if self.phase != Phase::Selecting {
            return MoveList::new();
        }
        legality::legal_moves(&self.position, self.current_player(), &self.config)
    }

    /// Returns the current round number, starting at 1.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the selected piece and its legal destinations.
    pub fn selection(&self) -> Option<(PieceRef, SquareSet)> {
        self.selection.map(|s| (s.piece, s.destinations))
    }

    /// Returns the current position as SFEN, numbered by plies played.
    pub fn to_sfen(&self) -> String {
        self.position.to_sfen(self.history.len() as u32 + 1)
    }

    /// Selects a piece of the player to move and returns its legal destinations.
    pub fn select(&mut self, piece: PieceRef) -> Result<SquareSet, CommandError> {
        let destinations = self.selectable(piece)?;
        self.selection = Some(Selection {
            piece,
            destinations,
        });
        tracing::debug!(piece = ?piece, destinations = destinations.count(), "Piece selected");
        Ok(destinations)
    }

    /// Moves the selected piece to `to`.
    pub fn move_selected(&mut self, to: Square) -> Result<MoveOutcome, CommandError> {
        self.ensure_selecting()?;
        let selection = self.selection.ok_or(CommandError::NothingSelected)?;
        if !selection.destinations.contains(to) {
            return Err(CommandError::IllegalDestination(to));
        }
        self.perform(selection.piece, to)
    }

    /// Selects `piece` and moves it to `to` in one command.
    pub fn execute_move(&mut self, piece: PieceRef, to: Square) -> Result<MoveOutcome, CommandError> {
        let destinations = self.selectable(piece)?;
        if !destinations.contains(to) {
            return Err(CommandError::IllegalDestination(to));
        }
        self.perform(piece, to)
    }

    /// Accepts or declines the pending promotion and ends the turn.
    pub fn resolve_promotion(&mut self, accept: bool) -> Result<(), CommandError> {
        match self.phase {
            Phase::AwaitingPromotionChoice => {}
            Phase::GameOver(_) => return Err(CommandError::GameOver),
            _ => return Err(CommandError::NoPromotionPending),
        }
        let pending = self.pending.take().ok_or(CommandError::NoPromotionPending)?;

        if let Some(piece) = self.position.board.piece_at_mut(pending.to) {
            piece.kind = promotion::resolve(piece.kind, accept);
        }
        tracing::debug!(square = %pending.to, accept, "Promotion resolved");

        self.history.push(Move::Board {
            from: pending.from,
            to: pending.to,
            promote: accept,
        });
        self.end_turn();
        Ok(())
    }

    /// Plays a complete move, promotion choice included.
    pub fn play(&mut self, m: Move) -> Result<MoveOutcome, CommandError> {
        self.ensure_selecting()?;
        let player = self.current_player();
        if !legality::is_legal(&self.position, player, m, &self.config) {
            return Err(CommandError::IllegalMove(m));
        }

        let piece = match m {
            Move::Board { from, .. } => PieceRef::Board(from),
            Move::Drop { kind, .. } => PieceRef::Hand(player, kind),
        };
        let mut outcome = self.perform(piece, m.to())?;
        if outcome.promotion_pending {
            self.resolve_promotion(m.is_promotion())?;
            outcome.promotion_pending = false;
            outcome.promoted = m.is_promotion();
        }
        Ok(outcome)
    }

    /// Asks `policy` for a move and plays it.
    ///
    /// Returns `Ok(None)` if the policy declined to move.
    pub fn play_policy<P>(&mut self, policy: &mut P) -> Result<Option<Move>, CommandError>
    where
        P: MovePolicy + ?Sized,
    {
        self.ensure_selecting()?;
        let legal = self.legal_moves();
        let Some(m) = policy.choose_move(&self.position, legal.as_slice()) else {
            return Ok(None);
        };
        self.play(m)?;
        Ok(Some(m))
    }

    /// Resigns the game for the player to move.
    pub fn resign(&mut self) -> Result<(), CommandError> {
        self.ensure_selecting()?;
        let winner = self.current_player().opponent();
        self.finish(GameResult::Resignation { winner });
        Ok(())
    }

    /// Restores the starting position for a rematch.
    pub fn reset(&mut self) {
        self.position = self.start.clone();
        self.move_count = 1;
        self.selection = None;
        self.pending = None;
        self.history.clear();
        tracing::debug!("Game reset");
        self.begin_turn();
    }

    fn ensure_selecting(&self) -> Result<(), CommandError> {
        match self.phase {
            Phase::Selecting => Ok(()),
            Phase::AwaitingPromotionChoice => Err(CommandError::PromotionPending),
            Phase::GameOver(_) => Err(CommandError::GameOver),
            Phase::TurnStart | Phase::TurnEnd => {
                unreachable!("transient phase observed between commands")
            }
        }
    }

    /// Checks that `piece` may be selected now and returns its destinations.
    fn selectable(&self, piece: PieceRef) -> Result<SquareSet, CommandError> {
        self.ensure_selecting()?;
        let player = self.current_player();
        match piece {
            PieceRef::Board(sq) => match self.position.board.piece_at(sq) {
                None => return Err(CommandError::NoPieceAt(sq)),
                Some(p) if p.owner != player => return Err(CommandError::NotYourPiece(sq)),
                Some(_) => {}
            },
            PieceRef::Hand(owner, _) if owner != player => {
                return Err(CommandError::NotYourTurn(owner));
            }
            PieceRef::Hand(_, kind) if !self.position.hand(player).contains(kind) => {
                return Err(CommandError::NotInHand(kind));
            }
            PieceRef::Hand(..) => {}
        }
        Ok(self.legal_destinations(piece))
    }

    /// Executes an already validated move of `piece` to `to`.
    fn perform(&mut self, piece: PieceRef, to: Square) -> Result<MoveOutcome, CommandError> {
        let player = self.current_player();
        let (m, status) = match piece {
            PieceRef::Board(from) => {
                let kind = self
                    .position
                    .board
                    .piece_at(from)
                    .map(|p| p.kind)
                    .ok_or(CommandError::NoPieceAt(from))?;
                let status =
                    promotion_status(kind, player, from, to, self.config.promotion_zone_depth);
                let promote = status == PromotionStatus::Mandatory;
                (Move::Board { from, to, promote }, status)
            }
            PieceRef::Hand(_, kind) => (Move::drop(kind, to), PromotionStatus::Unavailable),
        };

        let captured = self.position.apply_move(m)?;
        self.selection = None;
        tracing::debug!(player = %player, mv = %m, "Move executed");
        if let Some(kind) = captured {
            tracing::debug!(player = %player, captured = %kind, "Piece captured");
        }

        let mut outcome = MoveOutcome {
            captured,
            promotion_pending: false,
            promoted: m.is_promotion(),
        };

        if let (Move::Board { from, to, .. }, PromotionStatus::Optional) = (m, status) {
            self.pending = Some(PendingPromotion { from, to });
            outcome.promotion_pending = true;
            self.set_phase(Phase::AwaitingPromotionChoice);
        } else {
            self.history.push(m);
            self.end_turn();
        }
        Ok(outcome)
    }

    fn end_turn(&mut self) {
        self.set_phase(Phase::TurnEnd);
        self.selection = None;
        self.position.side_to_move = self.position.side_to_move.opponent();
        if self.position.side_to_move == Player::First {
            self.move_count += 1;
        }
        self.begin_turn();
    }

    fn begin_turn(&mut self) {
        self.set_phase(Phase::TurnStart);
        let player = self.current_player();
        debug_assert!(
            has_king(&self.position.board, player),
            "{} has no King at turn start",
            player
        );

        if !legality::has_legal_move(&self.position, player, &self.config) {
            let result = if self.check_status(player) {
                GameResult::Checkmate {
                    winner: player.opponent(),
                }
            } else {
                GameResult::Draw(DrawReason::Stalemate)
            };
            self.finish(result);
            return;
        }

        if self.move_count > self.config.move_limit {
            self.finish(GameResult::Draw(DrawReason::MoveLimit));
            return;
        }

        self.set_phase(Phase::Selecting);
    }

    fn finish(&mut self, result: GameResult) {
        self.selection = None;
        self.pending = None;
        tracing::info!(result = %result, move_count = self.move_count, "Game over");
        self.set_phase(Phase::GameOver(result));
    }

    fn set_phase(&mut self, phase: Phase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "Phase transition");
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::FirstMove;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank)
    }

    fn kings_only(side_to_move: Player) -> Position {
        let mut position = Position::empty();
        position.put(sq(8, 0), Player::First, PieceKind::King).unwrap();
        position.put(sq(0, 8), Player::Second, PieceKind::King).unwrap();
        position.side_to_move = side_to_move;
        position
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.current_phase(), Phase::Selecting);
        assert_eq!(game.current_player(), Player::First);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.game_result(), None);
        assert_eq!(game.legal_moves().len(), 30);
        assert!(!game.check_status(Player::First));
    }

    #[test]
    fn select_then_move() {
        let mut game = Game::new();
        let dests = game.select(PieceRef::Board(sq(2, 2))).unwrap();
        assert_eq!(dests, SquareSet::from_square(sq(2, 3)));
        assert_eq!(game.selection(), Some((PieceRef::Board(sq(2, 2)), dests)));

        let outcome = game.move_selected(sq(2, 3)).unwrap();
        assert_eq!(outcome, MoveOutcome::default());
        assert_eq!(game.current_player(), Player::Second);
        assert_eq!(game.current_phase(), Phase::Selecting);
        assert_eq!(game.history(), &[Move::normal(sq(2, 2), sq(2, 3))]);
        assert_eq!(game.selection(), None);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn rejected_commands_leave_state_unchanged() {
        let mut game = Game::new();
        game.select(PieceRef::Board(sq(2, 2))).unwrap();
        let before = game.clone();

        assert_eq!(
            game.select(PieceRef::Board(sq(2, 6))),
            Err(CommandError::NotYourPiece(sq(2, 6)))
        );
        assert_eq!(
            game.select(PieceRef::Board(sq(4, 4))),
            Err(CommandError::NoPieceAt(sq(4, 4)))
        );
        assert_eq!(
            game.select(PieceRef::Hand(Player::First, PieceKind::Pawn)),
            Err(CommandError::NotInHand(PieceKind::Pawn))
        );
        assert_eq!(
            game.select(PieceRef::Hand(Player::Second, PieceKind::Pawn)),
            Err(CommandError::NotYourTurn(Player::Second))
        );
        assert_eq!(
            game.move_selected(sq(2, 4)),
            Err(CommandError::IllegalDestination(sq(2, 4)))
        );
        assert_eq!(
            game.execute_move(PieceRef::Board(sq(1, 1)), sq(5, 5)),
            Err(CommandError::IllegalDestination(sq(5, 5)))
        );
        assert_eq!(
            game.resolve_promotion(true),
            Err(CommandError::NoPromotionPending)
        );
        assert_eq!(
            game.play(Move::normal(sq(2, 2), sq(2, 4))),
            Err(CommandError::IllegalMove(Move::normal(sq(2, 2), sq(2, 4))))
        );

        assert_eq!(game, before);
    }

    #[test]
    fn move_without_selection_is_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.move_selected(sq(2, 3)),
            Err(CommandError::NothingSelected)
        );
    }

    #[test]
    fn checkmate_at_turn_start() {
        let mut position = kings_only(Player::Second);
        position.put(sq(0, 7), Player::First, PieceKind::Gold).unwrap();
        position.put(sq(0, 0), Player::First, PieceKind::Lance).unwrap();

        let game = Game::from_position(position, RuleConfig::default()).unwrap();
        assert!(game.check_status(Player::Second));
        assert_eq!(
            game.current_phase(),
            Phase::GameOver(GameResult::Checkmate {
                winner: Player::First
            })
        );
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn no_moves_without_check_is_stalemate() {
        let mut position = kings_only(Player::Second);
        position.put(sq(1, 6), Player::First, PieceKind::Gold).unwrap();
        position.put(sq(2, 7), Player::First, PieceKind::Silver).unwrap();

        let game = Game::from_position(position, RuleConfig::default()).unwrap();
        assert!(!game.check_status(Player::Second));
        assert_eq!(
            game.game_result(),
            Some(GameResult::Draw(DrawReason::Stalemate))
        );
    }

    #[test]
    fn mate_by_play_ends_the_game() {
        let mut position = kings_only(Player::First);
        position.put(sq(0, 6), Player::First, PieceKind::Gold).unwrap();
        position.put(sq(0, 0), Player::First, PieceKind::Lance).unwrap();

        let mut game = Game::from_position(position, RuleConfig::default()).unwrap();
        game.play(Move::normal(sq(0, 6), sq(0, 7))).unwrap();
        assert_eq!(
            game.game_result(),
            Some(GameResult::Checkmate {
                winner: Player::First
            })
        );
        assert_eq!(game.play(Move::normal(sq(0, 8), sq(1, 8))), Err(CommandError::GameOver));
    }

    #[test]
    fn move_limit_forces_a_draw() {
        let config = RuleConfig {
            move_limit: 2,
            ..RuleConfig::default()
        };
        let mut game = Game::with_config(config);
        game.play(Move::normal(sq(2, 2), sq(2, 3))).unwrap();
        game.play(Move::normal(sq(2, 6), sq(2, 5))).unwrap();
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.current_phase(), Phase::Selecting);

        game.play(Move::normal(sq(6, 2), sq(6, 3))).unwrap();
        game.play(Move::normal(sq(6, 6), sq(6, 5))).unwrap();
        assert_eq!(game.move_count(), 3);
        assert_eq!(
            game.game_result(),
            Some(GameResult::Draw(DrawReason::MoveLimit))
        );
    }

    #[test]
    fn pawn_on_last_rank_promotes_unconditionally() {
        let mut position = kings_only(Player::First);
        position.put(sq(4, 7), Player::First, PieceKind::Pawn).unwrap();
        let mut game = Game::from_position(position, RuleConfig::default()).unwrap();

        let outcome = game.execute_move(PieceRef::Board(sq(4, 7)), sq(4, 8)).unwrap();
        assert!(outcome.promoted);
        assert!(!outcome.promotion_pending);
        assert_eq!(game.current_phase(), Phase::Selecting);
        assert_eq!(game.current_player(), Player::Second);
        assert_eq!(
            game.position().board.piece_at(sq(4, 8)).map(|p| p.kind),
            Some(PieceKind::Tokin)
        );
        assert_eq!(game.history(), &[Move::promoting(sq(4, 7), sq(4, 8))]);
    }

    #[test]
    fn declining_rook_promotion_restores_kind() {
        let mut position = kings_only(Player::First);
        position.put(sq(4, 4), Player::First, PieceKind::Rook).unwrap();
        let mut game = Game::from_position(position, RuleConfig::default()).unwrap();

        let outcome = game.execute_move(PieceRef::Board(sq(4, 4)), sq(4, 6)).unwrap();
        assert!(outcome.promotion_pending);
        assert!(!outcome.promoted);
        assert_eq!(game.current_phase(), Phase::AwaitingPromotionChoice);
        assert_eq!(game.current_player(), Player::First);
        assert_eq!(
            game.select(PieceRef::Board(sq(8, 0))),
            Err(CommandError::PromotionPending)
        );

        game.resolve_promotion(false).unwrap();
        assert_eq!(
            game.position().board.piece_at(sq(4, 6)).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(game.current_player(), Player::Second);
        assert_eq!(game.history(), &[Move::normal(sq(4, 4), sq(4, 6))]);
    }

    #[test]
    fn accepting_rook_promotion() {
        let mut position = kings_only(Player::First);
        position.put(sq(4, 4), Player::First, PieceKind::Rook).unwrap();
        let mut game = Game::from_position(position, RuleConfig::default()).unwrap();

        game.select(PieceRef::Board(sq(4, 4))).unwrap();
        let outcome = game.move_selected(sq(4, 6)).unwrap();
        assert!(outcome.promotion_pending);
        game.resolve_promotion(true).unwrap();
        assert_eq!(
            game.position().board.piece_at(sq(4, 6)).map(|p| p.kind),
            Some(PieceKind::Dragon)
        );
        assert_eq!(game.history(), &[Move::promoting(sq(4, 4), sq(4, 6))]);
    }

    #[test]
    fn capture_fills_the_hand() {
        let mut game = Game::new();
        game.play(Move::normal(sq(2, 2), sq(2, 3))).unwrap();
        game.play(Move::normal(sq(6, 6), sq(6, 5))).unwrap();
        let outcome = game.play(Move::promoting(sq(1, 1), sq(7, 7))).unwrap();

        assert_eq!(outcome.captured, Some(PieceKind::Bishop));
        assert!(outcome.promoted);
        assert_eq!(
            game.hand_contents(Player::First),
            BTreeMap::from([(PieceKind::Bishop, 1)])
        );
        assert_eq!(game.history().last().map(|m| m.to_usi()), Some("8h2b+".to_string()));
    }

    #[test]
    fn unplayable_positions_are_rejected() {
        // the rook on 5e already attacks the waiting King on 5a
        assert_eq!(
            Game::from_sfen("4k4/9/9/9/4R4/9/9/9/4K4 b - 1", RuleConfig::default()),
            Err(PositionError::OpponentInCheck(Player::Second))
        );
        assert_eq!(
            Game::from_position(Position::empty(), RuleConfig::default()),
            Err(PositionError::MissingKing(Player::First))
        );

        let game = Game::from_sfen("4k4/9/9/9/4R4/9/9/9/4K4 w - 1", RuleConfig::default()).unwrap();
        assert!(game.check_status(Player::Second));
        assert_eq!(game.current_phase(), Phase::Selecting);
    }

    #[test]
    fn drop_from_hand() {
        let mut position = kings_only(Player::First);
        position.put_in_hand(Player::First, PieceKind::Silver).unwrap();
        let mut game = Game::from_position(position, RuleConfig::default()).unwrap();

        let dests = game
            .select(PieceRef::Hand(Player::First, PieceKind::Silver))
            .unwrap();
        assert_eq!(dests.count(), 79);
        game.move_selected(sq(4, 4)).unwrap();
        assert!(game.hand_contents(Player::First).is_empty());
        assert_eq!(game.history(), &[Move::drop(PieceKind::Silver, sq(4, 4))]);
    }

    #[test]
    fn resign_and_reset() {
        let mut game = Game::new();
        game.play(Move::normal(sq(2, 2), sq(2, 3))).unwrap();
        game.resign().unwrap();
        assert_eq!(
            game.game_result(),
            Some(GameResult::Resignation {
                winner: Player::First
            })
        );
        assert_eq!(game.resign(), Err(CommandError::GameOver));
        assert_eq!(
            game.select(PieceRef::Board(sq(2, 6))),
            Err(CommandError::GameOver)
        );

        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn policy_plays_until_the_limit() {
        let config = RuleConfig {
            move_limit: 5,
            ..RuleConfig::default()
        };
        let mut game = Game::with_config(config);
        let mut policy = FirstMove;
        while !game.is_game_over() {
            assert!(game.play_policy(&mut policy).unwrap().is_some());
        }
        assert!(game.history().len() <= 10);
        assert_eq!(game.play_policy(&mut policy), Err(CommandError::GameOver));
    }

    #[test]
    fn sfen_tracks_plies() {
        let mut game = Game::new();
        game.play(Move::normal(sq(2, 2), sq(2, 3))).unwrap();
        assert_eq!(
            game.to_sfen(),
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/2P6/PP1PPPPPP/1B5R1/LNSGKGSNL w - 2"
        );
    }
}
