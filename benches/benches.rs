use iai::black_box;
use chess_arbiter::{check, legality, perft::perft, Board, Color, Game, Square};

fn bench_shallow_perft() {
    let board = Board::standard();
    assert_eq!(black_box(perft(black_box(&board), Color::White, 3)), 8_902);
}

fn bench_kiwipete() {
    let board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R"
        .parse()
        .expect("valid board fen");
    assert_eq!(perft(black_box(&board), Color::White, 2), 2_039);
}

fn bench_generate_moves() {
    let board: Board = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1"
        .parse()
        .expect("valid board fen");
    assert_eq!(legality::legal_moves_of(black_box(&board), Color::Black).len(), 39);
}

fn bench_is_checkmate() -> bool {
    let board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR"
        .parse()
        .expect("valid board fen");
    check::is_checkmate(black_box(&board), Color::White)
}

fn bench_play() -> Game {
    let moves = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
        ("e1", "g1"),
        ("f8", "c5"),
    ];

    let mut game = black_box(Game::new());
    for (from, to) in black_box(moves) {
        let from: Square = from.parse().expect("valid square");
        let to: Square = to.parse().expect("valid square");
        game.play(from, to, None).expect("legal move");
    }
    game
}

iai::main!(
    bench_shallow_perft,
    bench_kiwipete,
    bench_generate_moves,
    bench_is_checkmate,
    bench_play,
);
