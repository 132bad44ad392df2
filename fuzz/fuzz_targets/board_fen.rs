#![no_main]

use libfuzzer_sys::fuzz_target;
use chess_arbiter::Board;

fuzz_target!(|data: &[u8]| {
    let Ok(board) = Board::from_ascii_board_fen(data) else {
        return;
    };
    let roundtripped = Board::from_board_fen(&board.board_fen()).expect("roundtrip");
    assert_eq!(board.board_fen(), roundtripped.board_fen());
});
