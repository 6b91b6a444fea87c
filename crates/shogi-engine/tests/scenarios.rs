//! End-to-end rule scenarios driven through the public API.

use shogi_core::{BoardLayout, Move, PieceKind, Player, Square, INITIAL_CODES};
use shogi_engine::policy::FirstMove;
use shogi_engine::{
    CommandError, DrawReason, Game, GameResult, Phase, PieceRef, Position, RuleConfig, SquareSet,
};

fn sq(file: u8, rank: u8) -> Square {
    Square::new(file, rank)
}

fn play_usi(game: &mut Game, moves: &[&str]) {
    for usi in moves {
        let m = Move::from_usi(usi).unwrap();
        game.play(m).unwrap_or_else(|e| panic!("{usi}: {e}"));
    }
}

#[test]
fn initial_setup_matches_code_table() {
    let layout = BoardLayout::initial();
    assert_eq!(layout.to_codes(), INITIAL_CODES);
    let position = Position::from_codes(&INITIAL_CODES, Player::First).unwrap();
    assert_eq!(position.board, Position::startpos().board);
    assert_eq!(layout.occupied().count(), 40);
}

#[test]
fn rook_on_open_file_checks_the_king() {
    let mut position = Position::empty();
    position.put(sq(4, 8), Player::First, PieceKind::King).unwrap();
    position.put(sq(4, 0), Player::Second, PieceKind::Rook).unwrap();
    position.put(sq(0, 0), Player::Second, PieceKind::King).unwrap();

    let game = Game::from_position(position, RuleConfig::default()).unwrap();
    assert!(game.check_status(Player::First));
    assert_eq!(game.current_phase(), Phase::Selecting);

    let escapes = game.legal_destinations(PieceRef::Board(sq(4, 8)));
    let expected: SquareSet = [sq(3, 8), sq(5, 8), sq(3, 7), sq(5, 7)].into_iter().collect();
    assert_eq!(escapes, expected);

    // only King moves are legal while in check here
    assert!(game
        .legal_moves()
        .as_slice()
        .iter()
        .all(|m| m.from() == Some(sq(4, 8))));
}

#[test]
fn nifu_only_affects_the_pawns_file() {
    let mut base = Position::empty();
    base.put(sq(4, 0), Player::First, PieceKind::King).unwrap();
    base.put(sq(4, 8), Player::Second, PieceKind::King).unwrap();
    base.put_in_hand(Player::First, PieceKind::Pawn).unwrap();
    let without = base.legal_destinations(PieceRef::Hand(Player::First, PieceKind::Pawn), &RuleConfig::default());

    let mut with_pawn = base.clone();
    with_pawn.put(sq(6, 3), Player::First, PieceKind::Pawn).unwrap();
    let with = with_pawn.legal_destinations(
        PieceRef::Hand(Player::First, PieceKind::Pawn),
        &RuleConfig::default(),
    );

    for square in Square::all() {
        if square.file() == 6 {
            assert!(!with.contains(square), "{square} should be excluded");
        } else {
            assert_eq!(with.contains(square), without.contains(square), "{square}");
        }
    }
}

#[test]
fn pawn_drop_mate_is_rejected_by_the_game() {
    let mut position = Position::empty();
    position.put(sq(4, 8), Player::Second, PieceKind::King).unwrap();
    position.put(sq(3, 8), Player::Second, PieceKind::Lance).unwrap();
    position.put(sq(5, 8), Player::Second, PieceKind::Lance).unwrap();
    position.put(sq(3, 7), Player::Second, PieceKind::Pawn).unwrap();
    position.put(sq(5, 7), Player::Second, PieceKind::Pawn).unwrap();
    position.put(sq(3, 6), Player::First, PieceKind::Silver).unwrap();
    position.put(sq(0, 0), Player::First, PieceKind::King).unwrap();
    position.put_in_hand(Player::First, PieceKind::Pawn).unwrap();
    let mut game = Game::from_position(position, RuleConfig::default()).unwrap();

    let pawn = PieceRef::Hand(Player::First, PieceKind::Pawn);
    let dests = game.select(pawn).unwrap();
    assert!(!dests.contains(sq(4, 7)));
    assert_eq!(
        game.move_selected(sq(4, 7)),
        Err(CommandError::IllegalDestination(sq(4, 7)))
    );
    assert_eq!(
        game.play(Move::drop(PieceKind::Pawn, sq(4, 7))),
        Err(CommandError::IllegalMove(Move::drop(PieceKind::Pawn, sq(4, 7))))
    );
    assert_eq!(game.current_player(), Player::First);
}

#[test]
fn gold_drop_mate_ends_the_game() {
    let mut position = Position::empty();
    position.put(sq(4, 8), Player::Second, PieceKind::King).unwrap();
    position.put(sq(4, 6), Player::First, PieceKind::Pawn).unwrap();
    position.put(sq(0, 0), Player::First, PieceKind::King).unwrap();
    position.put_in_hand(Player::First, PieceKind::Gold).unwrap();
    let mut game = Game::from_position(position, RuleConfig::default()).unwrap();

    game.play(Move::drop(PieceKind::Gold, sq(4, 7))).unwrap();
    assert!(game.check_status(Player::Second));
    assert_eq!(
        game.game_result(),
        Some(GameResult::Checkmate {
            winner: Player::First
        })
    );
}

#[test]
fn bishop_exchange_opening() {
    let mut game = Game::new();
    play_usi(&mut game, &["7g7f", "3c3d", "8h2b+", "3a2b"]);

    assert_eq!(game.move_count(), 3);
    assert_eq!(game.hand_contents(Player::First).get(&PieceKind::Bishop), Some(&1));
    assert_eq!(game.hand_contents(Player::Second).get(&PieceKind::Bishop), Some(&1));
    assert_eq!(
        game.to_sfen(),
        "lnsgkg1nl/1r5s1/pppppp1pp/6p2/9/2P6/PP1PPPPPP/7R1/LNSGKGSNL b Bb 5"
    );

    play_usi(&mut game, &["B*4e"]);
    assert!(game.hand_contents(Player::First).is_empty());
    assert_eq!(
        game.position().board.piece_at(sq(5, 4)).map(|p| p.kind),
        Some(PieceKind::Bishop)
    );
}

#[test]
fn sfen_game_continues_from_position() {
    let game = Game::from_sfen(
        "lnsgkg1nl/1r5s1/pppppp1pp/6p2/9/2P6/PP1PPPPPP/7R1/LNSGKGSNL b Bb 5",
        RuleConfig::default(),
    )
    .unwrap();
    assert_eq!(game.current_player(), Player::First);
    assert!(game
        .legal_moves()
        .as_slice()
        .iter()
        .any(|m| m.is_drop()));
}

#[test]
fn short_move_limit_from_config_file_text() {
    let config = RuleConfig::from_toml_str("move_limit = 3").unwrap();
    let mut game = Game::with_config(config);
    let mut policy = FirstMove;
    while game.play_policy(&mut policy).is_ok() {}

    assert_eq!(
        game.game_result(),
        Some(GameResult::Draw(DrawReason::MoveLimit))
    );
    assert_eq!(game.history().len(), 6);
}
