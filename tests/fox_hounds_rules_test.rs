//! Property tests for the board model and rules engine across every board size.

use fox_hounds::{
    BoardError, Coordinate, Dimension, Figure, MAX_DIM, MIN_DIM, Positions, apply_move,
    initial_positions, is_hound_win, is_valid_move, is_winner, make_coordinate, winner,
};
use std::collections::HashSet;

fn dimensions() -> impl Iterator<Item = u32> {
    u32::from(MIN_DIM)..=u32::from(MAX_DIM)
}

fn board(text: &str) -> Positions {
    let pieces = text
        .split(' ')
        .map(|token| token.parse::<Coordinate>().expect("valid coordinate"))
        .collect();
    Positions::from_vec(pieces).expect("at least one piece")
}

#[test]
fn test_initial_layout_for_every_dimension() {
    for d in dimensions() {
        let positions = initial_positions(d).expect("valid dimension");
        let dim = Dimension::new(d).unwrap();
        let d = d as i32;

        assert_eq!(positions.len(), (d / 2 + 1) as usize);

        let distinct: HashSet<_> = positions.as_slice().iter().collect();
        assert_eq!(distinct.len(), positions.len(), "dimension {}", d);
        assert!(positions.as_slice().iter().all(|c| c.is_on_board(dim)));

        for (i, hound) in positions.hounds().iter().enumerate() {
            assert_eq!(*hound, make_coordinate(2 + 2 * i as i32, 1));
        }

        let expected_lateral = if (d / 2 + 1 + d) % 2 == 0 { d / 2 + 2 } else { d / 2 + 1 };
        assert_eq!(positions.fox(), make_coordinate(expected_lateral, d));
    }
}

#[test]
fn test_initial_layout_rejects_out_of_range() {
    for d in [0, 1, 3, 27, 100] {
        assert_eq!(initial_positions(d), Err(BoardError::InvalidDimension(d)));
    }
}

#[test]
fn test_occupied_destinations_always_rejected() {
    for d in dimensions() {
        let positions = initial_positions(d).unwrap();
        let dim = Dimension::new(d).unwrap();
        for &origin in positions.as_slice() {
            for &destination in positions.as_slice() {
                for figure in [Figure::Fox, Figure::Hound] {
                    assert!(!is_valid_move(dim, &positions, figure, origin, destination));
                }
            }
        }
    }
}

#[test]
fn test_fox_move_shape() {
    let dim = Dimension::default();
    let positions = board("B1 D1 F1 H1 D4");
    let fox = positions.fox();
    for d_lat in -2..=2 {
        for d_vert in -2..=2 {
            let destination = fox.offset(d_lat, d_vert);
            let expected = d_lat.abs() == 1 && d_vert.abs() == 1;
            assert_eq!(
                is_valid_move(dim, &positions, Figure::Fox, fox, destination),
                expected,
                "{} -> {}",
                fox,
                destination
            );
        }
    }
}

#[test]
fn test_hound_move_shape() {
    let dim = Dimension::default();
    let positions = board("B1 D4 F1 H1 E8");
    let hound = Coordinate::new(4, 4);
    for d_lat in -2..=2 {
        for d_vert in -2..=2 {
            let destination = hound.offset(d_lat, d_vert);
            let expected = d_lat.abs() == 1 && d_vert == 1;
            assert_eq!(
                is_valid_move(dim, &positions, Figure::Hound, hound, destination),
                expected,
                "{} -> {}",
                hound,
                destination
            );
        }
    }
}

#[test]
fn test_standard_board_examples() {
    let positions = initial_positions(8).unwrap();
    let dim = Dimension::default();
    assert_eq!(positions.to_string(), "B1 D1 F1 H1 E8");

    let e8 = "E8".parse().unwrap();
    assert!(is_valid_move(dim, &positions, Figure::Fox, e8, "D7".parse().unwrap()));
    assert!(!is_valid_move(dim, &positions, Figure::Fox, e8, "E7".parse().unwrap()));
}

#[test]
fn test_moves_stay_within_bounds_on_edges() {
    let dim = Dimension::new(4).unwrap();
    let positions = board("B1 D1 D4");
    let fox = positions.fox();
    // Only C3 is both on the board and empty.
    let legal: Vec<_> = fox
        .diagonals()
        .into_iter()
        .filter(|dest| is_valid_move(dim, &positions, Figure::Fox, fox, *dest))
        .collect();
    assert_eq!(legal, vec![Coordinate::new(3, 3)]);
}

#[test]
fn test_fox_win_takes_priority() {
    let positions = board("B2 D1 F1 H1 A1");
    let dim = Dimension::default();
    assert!(is_hound_win(dim, &positions));
    assert_eq!(winner(&positions, dim), Some(Figure::Fox));
    assert!(is_winner(&positions, dim));
}

#[test]
fn test_hound_win_when_fox_boxed_in() {
    let dim = Dimension::default();
    let positions = board("C3 E3 C5 E5 D4");
    assert_eq!(winner(&positions, dim), Some(Figure::Hound));

    let freed = apply_move(positions, Coordinate::new(5, 5), Coordinate::new(6, 6));
    assert_eq!(winner(&freed, dim), None);
}
