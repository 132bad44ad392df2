use chess_arbiter::{Move, Square};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    notation: String,
    x: Option<u32>,
    y: Option<u32>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    square: Option<Square>,
    error: Option<String>,
}

#[test]
fn test_square_notation() {
    let mut reader = csv::Reader::from_path("tests/notation.csv").expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");
        let parsed = Square::from_algebraic(&record.notation);

        match (record.x, record.y, record.square, record.error) {
            (Some(x), Some(y), Some(square), None) => {
                let parsed = parsed.expect("valid square");
                assert_eq!(parsed, Square::new(x, y), "line {}", i + 1);
                assert_eq!(parsed, square, "line {}", i + 1);
                assert_eq!(
                    parsed.to_algebraic(),
                    record.notation.to_ascii_lowercase(),
                    "line {}",
                    i + 1
                );
            }
            (None, None, None, Some(error)) => {
                assert_eq!(
                    format!("{:?}", parsed.expect_err("invalid square")),
                    error,
                    "line {}",
                    i + 1
                );
            }
            _ => panic!("malformed record on line {}", i + 1),
        }
    }
}

#[test]
fn test_move_notation() {
    let m: Move = "e2e4".parse().expect("valid move");
    assert_eq!(m, Move::new(Square::new(4, 1), Square::new(4, 3)));
    assert_eq!(m.to_string(), "e2e4");

    let m: Move = "aa10zz99".parse().expect("valid move");
    assert_eq!(m.from, Square::new(26, 9));
    assert_eq!(m.to, Square::new(51, 98));
    assert_eq!(m.to_string(), "aa10zz99");

    assert!("e2".parse::<Move>().is_err());
    assert!("e2e".parse::<Move>().is_err());
    assert!("e2e4e".parse::<Move>().is_err());
}

#[test]
fn test_algebraic_roundtrip() {
    for x in (0..120).chain([26 * 30 + 25]) {
        for y in (0..40).chain([u32::MAX]) {
            let square = Square::new(x, y);
            assert_eq!(Square::from_algebraic(&square.to_algebraic()), Ok(square));
        }
    }
}
