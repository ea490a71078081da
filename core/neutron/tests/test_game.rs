//! 回合狀態機與勝負判定測試

use neutron::constants::SOLDIERS_PER_COLOR;
use neutron::core_types::{Cell, Color, Position};
use neutron::error::{BoardError, ErrorKind, Result};
use neutron::loader::load_from_ascii;
use neutron::logic::board::NeutronBoard;
use neutron::logic::game::{Game, Phase, Player, winner_of};
use neutron::logic::strategy::{
    Move, RandomStrategy, RuleBasedStrategy, Side, Strategy, StrategyKind,
};
use std::collections::VecDeque;

fn pos(x: usize, y: usize) -> Position {
    Position::new(x, y)
}

/// 依序回傳預先指定的落點（from, to）
struct Scripted {
    moves: VecDeque<(Position, Position)>,
}

impl Scripted {
    fn new(moves: &[(Position, Position)]) -> Box<Self> {
        Box::new(Self {
            moves: moves.iter().copied().collect(),
        })
    }

    fn next(&mut self, board: &NeutronBoard, side: Side, neutron: bool) -> Result<Move> {
        let (from, to) = self.moves.pop_front().expect("腳本用完了");
        let piece = if neutron {
            board.neutron()
        } else {
            board
                .soldiers_of(side.color)
                .into_iter()
                .find(|s| s.pos == from)
                .expect("腳本指定的士兵不存在")
        };
        Ok(Move { piece, to })
    }
}

impl Strategy for Scripted {
    fn choose_neutron_move(&mut self, board: &NeutronBoard, side: Side) -> Result<Move> {
        self.next(board, side, true)
    }

    fn choose_soldier_move(&mut self, board: &NeutronBoard, side: Side) -> Result<Move> {
        self.next(board, side, false)
    }
}

fn player(color: Color, strategy: Box<dyn Strategy>) -> Player {
    Player::new(Side::for_color(color), strategy)
}

#[test]
fn test_initial_round_skips_neutron() {
    let white = player(Color::White, Scripted::new(&[(pos(0, 4), pos(0, 1))]));
    let black = player(
        Color::Black,
        Scripted::new(&[(pos(2, 2), pos(3, 1)), (pos(4, 0), pos(4, 3))]),
    );
    let mut game = Game::new(NeutronBoard::new(), white, black);

    assert_eq!(game.phase(), Phase::SoldierMove);
    assert!(game.is_initial_round());
    assert_eq!(game.current_player().color(), Color::White);

    // 白方第一回合只移動士兵
    assert_eq!(game.step().unwrap(), Phase::NeutronMove);
    assert_eq!(game.board().cell(pos(0, 1)), Cell::White);
    assert_eq!(game.board().neutron().pos, pos(2, 2));
    assert_eq!(game.current_player().color(), Color::Black);
    assert!(!game.is_initial_round());

    // 黑方先推中子再移動士兵
    assert_eq!(game.step().unwrap(), Phase::SoldierMove);
    assert_eq!(game.board().neutron().pos, pos(3, 1));
    assert_eq!(game.current_player().color(), Color::Black);
    assert_eq!(game.step().unwrap(), Phase::NeutronMove);
    assert_eq!(game.board().cell(pos(4, 3)), Cell::Black);
    assert_eq!(game.current_player().color(), Color::White);
    assert_eq!(game.round(), 2);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_play_round_switches_player() {
    let white = player(Color::White, Box::new(RandomStrategy::seeded(1)));
    let black = player(Color::Black, Box::new(RandomStrategy::seeded(2)));
    let mut game = Game::new(NeutronBoard::new(), white, black);

    // 第一回合不會有人獲勝（中子沒動，士兵也圍不住中子）
    assert_eq!(game.play_round().unwrap(), None);
    assert_eq!(game.current_player().color(), Color::Black);
    assert_eq!(game.phase(), Phase::NeutronMove);
}

#[test]
fn test_win_by_trap_on_soldier_move() {
    let board = load_from_ascii(
        r#"
B . . . .
. B B B .
. B N W .
. . W W .
W . . . W
    "#,
    )
    .unwrap();
    let white = player(Color::White, Box::new(RuleBasedStrategy::seeded(1)));
    let black = player(Color::Black, Box::new(RuleBasedStrategy::seeded(2)));
    let mut game = Game::new(board, white, black);

    assert_eq!(game.step().unwrap(), Phase::Finished(Color::White));
    assert_eq!(game.winner(), Some(Color::White));
    // 勝方仍是目前玩家，棋盤停在最後局面
    assert_eq!(game.current_player().color(), Color::White);
    assert_eq!(game.board().cell(pos(1, 3)), Cell::White);
}

#[test]
fn test_win_by_neutron_into_home_row() {
    let board = load_from_ascii(
        r#"
B B B B B
W . . . .
. . N . .
. . . . .
. W W W W
    "#,
    )
    .unwrap();
    let black = player(Color::Black, Scripted::new(&[(pos(4, 0), pos(4, 3))]));
    let white = player(Color::White, Box::new(RuleBasedStrategy::seeded(3)));
    let mut game = Game::new(board, black, white);

    assert_eq!(game.step().unwrap(), Phase::NeutronMove);
    assert_eq!(game.step().unwrap(), Phase::Finished(Color::White));
    assert_eq!(game.board().neutron().pos, pos(0, 4));
    assert_eq!(game.run().unwrap(), Color::White);
}

#[test]
fn test_finished_game_does_not_move() {
    let board = load_from_ascii(
        r#"
B . . . .
. B B B .
. B N W .
. . W W .
W . . . W
    "#,
    )
    .unwrap();
    let white = player(Color::White, Box::new(RuleBasedStrategy::seeded(1)));
    let black = player(Color::Black, Scripted::new(&[]));
    let mut game = Game::new(board, white, black);

    game.step().unwrap();
    let finished = game.board().clone();
    assert_eq!(game.step().unwrap(), Phase::Finished(Color::White));
    assert_eq!(game.board(), &finished);
    assert_eq!(game.play_round().unwrap(), Some(Color::White));
}

#[test]
fn test_row_mapping_is_fixed() {
    // 中子到第 0 列一律黑方勝，第 4 列一律白方勝，與移動者無關
    let row0 = load_from_ascii(
        r#"
. . N . .
. . . . .
B B B B B
. . . . .
W W W W W
    "#,
    )
    .unwrap();
    assert_eq!(winner_of(&row0, Color::White), Some(Color::Black));
    assert_eq!(winner_of(&row0, Color::Black), Some(Color::Black));

    let row4 = load_from_ascii(
        r#"
B B B B B
. . . . .
W W W W W
. . . . .
. . N . .
    "#,
    )
    .unwrap();
    assert_eq!(winner_of(&row4, Color::Black), Some(Color::White));

    assert_eq!(winner_of(&NeutronBoard::new(), Color::White), None);
}

#[test]
fn test_trap_has_priority_over_row() {
    // 中子在黑方底線但被圍住，移動者（白方）獲勝
    let board = load_from_ascii(
        r#"
N B . . .
W W . . .
. . . B B
. . . W B
. . W W B
    "#,
    )
    .unwrap();
    assert!(board.is_neutron_trapped());
    assert_eq!(winner_of(&board, Color::White), Some(Color::White));
}

#[test]
fn test_wrong_piece_rejected() {
    // 士兵回合卻移動中子
    struct MovesNeutron;
    impl Strategy for MovesNeutron {
        fn choose_neutron_move(&mut self, board: &NeutronBoard, _side: Side) -> Result<Move> {
            Ok(Move {
                piece: board.neutron(),
                to: Position::new(2, 1),
            })
        }
        fn choose_soldier_move(&mut self, board: &NeutronBoard, side: Side) -> Result<Move> {
            self.choose_neutron_move(board, side)
        }
    }

    let white = player(Color::White, Box::new(MovesNeutron));
    let black = player(Color::Black, Box::new(MovesNeutron));
    let mut game = Game::new(NeutronBoard::new(), white, black);
    let err = game.step().unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Board(BoardError::NotYourPiece { .. })
    ));
    // 錯誤帶有是哪一方、哪一步的 context
    let message = err.to_string();
    assert!(message.contains("white 移動士兵（第 0 回合）"), "{message}");
    assert!(message.contains("game.rs:"), "{message}");
    assert_eq!(game.board(), &NeutronBoard::new());
    assert_eq!(game.phase(), Phase::SoldierMove);
}

#[test]
fn test_full_games_keep_invariants() {
    let kinds = [
        (StrategyKind::Random, StrategyKind::Random),
        (StrategyKind::Strategy, StrategyKind::Random),
        (StrategyKind::Random, StrategyKind::Strategy),
        (StrategyKind::Strategy, StrategyKind::Strategy),
    ];
    for (idx, (first, second)) in kinds.into_iter().enumerate() {
        for seed in 0..5 {
            let white = player(Color::White, first.build(Some(seed)));
            let black = player(Color::Black, second.build(Some(seed + 100)));
            let mut game = Game::new(NeutronBoard::new(), white, black);

            for _ in 0..10_000 {
                let phase = match game.step() {
                    Ok(phase) => phase,
                    // 某方士兵全被卡住時策略無法出手
                    Err(e) => {
                        assert!(
                            matches!(e.kind(), ErrorKind::Board(BoardError::NoLegalMove { .. })),
                            "Case {idx} seed {seed}: {e}"
                        );
                        break;
                    }
                };
                let board = game.board();
                assert_eq!(board.count(Cell::White), SOLDIERS_PER_COLOR);
                assert_eq!(board.count(Cell::Black), SOLDIERS_PER_COLOR);
                assert_eq!(board.count(Cell::Neutron), 1);
                if let Phase::Finished(winner) = phase {
                    assert_eq!(game.winner(), Some(winner));
                    break;
                }
            }
        }
    }
}
