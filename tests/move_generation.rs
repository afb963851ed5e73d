use backgammon::backgammon::{Board, Color, Dice, Game, Move, Player, Position};
use backgammon::config::GameConfig;

fn player(color: Color) -> Player {
    Player::new(color.to_string(), color)
}

/// A position with some blots, stacks and a checker of each color on the bar.
fn busy_board() -> Board {
    Board::from_signed([
        -2, 1, 0, 2, -1, 0, 3, 0, -1, 0, 0, 2, -3, 0, 1, 0, -2, 0, 2, -1, 0, 2, 0, -2,
    ])
    .with_bar(Color::White, 1)
    .with_bar(Color::Black, 1)
}

#[test]
fn bar_overrides_everything() {
    for color in Color::BOTH {
        let board = busy_board();
        let player = player(color);
        for dice in Dice::ALL {
            assert_eq!(
                player.available_moves(&board, &dice),
                player.available_moves_from_bar(&board, &dice)
            );
            assert!(player.legal_moves(&board, &dice).iter().all(|mv| mv.from() == Position::Bar));
        }
    }
}

#[test]
fn final_move_predicates_partition_destinations() {
    let board = busy_board().with_bar(Color::White, 0).with_bar(Color::Black, 0);
    for color in Color::BOTH {
        let player = player(color);
        for from in 0..24i8 {
            for die in 1..=6u8 {
                let to = from + color.direction() * die as i8;
                if !(0..24).contains(&to) {
                    assert!(!player.is_legal_final_move(&board, from, to, die));
                    continue;
                }
                let point = board.point(to as u8);
                let open = point.is_empty() || point.is_owned_by(color);
                let blot = point.is_owned_by(color.opposite()) && point.count() == 1;
                assert_eq!(player.is_legal_final_move(&board, from, to, die), open);
                assert_eq!(player.is_legal_final_hit(&board, from, to, die), blot);
            }
        }
    }
}

#[test]
fn bear_off_eligibility_matches_outside_count() {
    let board = Board::empty()
        .with_checkers(19, Color::White, 10)
        .with_checkers(22, Color::White, 5)
        .with_checkers(4, Color::Black, 15);
    assert!(player(Color::White).can_bear_off_checkers(&board));
    assert!(player(Color::Black).can_bear_off_checkers(&board));

    let board = board.with_checkers(17, Color::White, 1).with_checkers(19, Color::White, 9);
    assert!(!player(Color::White).can_bear_off_checkers(&board));
}

#[test]
fn hit_takes_away_bear_off_eligibility() {
    let board = Board::empty()
        .with_checkers(20, Color::White, 1)
        .with_checkers(18, Color::White, 14)
        .with_checkers(22, Color::Black, 2)
        .with_checkers(23, Color::Black, 13);
    let mut game = Game::from_board(&GameConfig::default().with_first(Color::Black), board);
    assert!(game.player(Color::White).can_bear_off_checkers(game.board()));

    game.set_dice(Dice::new(2, 1)).unwrap();
    assert_eq!(game.play(Move::between(22, 20)), Ok(Some(20)));
    assert!(!game.player(Color::White).can_bear_off_checkers(game.board()));
    assert_eq!(game.player(Color::White).checkers_at_home(), 14);
}

#[test]
fn applied_move_is_not_offered_again() {
    for color in Color::BOTH {
        for dice in Dice::ALL {
            let player = player(color);
            let board = Board::new();
            for mv in player.legal_moves(&board, &dice) {
                let mut next = board;
                next.apply_move(color, mv).unwrap();
                assert_ne!(next, board);
                let again = player.legal_moves(&next, &dice);
                let source_left = mv.from().point().is_some_and(|p| next.point(p).is_owned_by(color));
                if !source_left {
                    assert!(!again.contains(&mv), "{color} {dice}: {mv} offered twice");
                }
            }
        }
    }
}

#[test]
fn opening_six_five() {
    let moves = player(Color::White).available_moves(&Board::new(), &Dice::new(6, 5));
    assert!(moves.contains(&Move::between(0, 6)));
    assert!(moves.contains(&Move::between(11, 16)));
    assert!(!moves.contains(&Move::between(0, 5)));
    assert!(!moves.contains(&Move::between(18, 23)));
    assert!(moves.iter().all(|mv| !Board::new().point(mv.to().point().unwrap()).blocks(Color::White)));

    let black = player(Color::Black).available_moves(&Board::new(), &Dice::new(6, 5));
    assert!(black.contains(&Move::between(23, 17)));
    assert!(black.contains(&Move::between(12, 7)));
    assert!(!black.contains(&Move::between(23, 18)));
}

#[test]
fn entering_from_bar_with_three_four() {
    let board = Board::new().with_checkers(0, Color::White, 1).with_bar(Color::White, 1);
    let dice = Dice::new(3, 4);
    let moves = player(Color::White).available_moves(&board, &dice);
    assert_eq!(moves, vec![Move::enter(2), Move::enter(3)]);

    let blocked = board.with_checkers(2, Color::Black, 2).with_checkers(3, Color::Black, 3);
    assert!(player(Color::White).available_moves(&blocked, &dice).is_empty());
    assert!(player(Color::White).legal_moves(&blocked, &dice).is_empty());
}

#[test]
fn blot_is_a_hit_not_a_plain_move() {
    let board = Board::empty()
        .with_checkers(4, Color::White, 2)
        .with_checkers(9, Color::Black, 1)
        .with_checkers(10, Color::Black, 2);
    let dice = Dice::new(5, 6);
    let white = player(Color::White);
    assert_eq!(white.available_hits(&board, &dice), vec![Move::between(4, 9)]);
    assert!(!white.available_moves(&board, &dice).contains(&Move::between(4, 9)));
    assert_eq!(white.legal_moves(&board, &dice), vec![Move::between(4, 9)]);
}

#[test]
fn full_game_with_seed_keeps_fifteen_checkers() {
    let mut game = Game::new(&GameConfig::default().with_seed(2024));
    for _ in 0..200 {
        if game.roll().is_err() {
            break;
        }
        while game.dice().is_some() {
            match game.legal_moves().first().copied() {
                Some(mv) => {
                    game.play(mv).unwrap();
                }
                None => game.pass().unwrap(),
            }
            for color in Color::BOTH {
                assert_eq!(game.board().checker_count(color), 15);
            }
        }
    }
}
