#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use chess_arbiter::{check, legality, Game, Move, Role};

#[derive(Debug, Arbitrary)]
struct Data {
    candidates: Vec<Move>,
    promotion: Option<Role>,
}

fuzz_target!(|data: Data| {
    let mut game = Game::new();

    for candidate in data.candidates {
        let legals = legality::legal_moves_of(game.board(), game.turn());
        let legal = game.is_legal(candidate.from, candidate.to);
        assert_eq!(legals.contains(&candidate), legal);

        let mover = game.turn();
        let before = game.clone();
        match game.play(candidate.from, candidate.to, data.promotion) {
            Ok(_) => assert!(!check::in_check(game.board(), mover)),
            Err(_) => assert_eq!(game, before),
        }
    }
});
