use facelets::{
    CUBIE_COUNT, CubieCube, FaceletString, OddLengthPolicy, SOLVED_FACELETS, Turn, decode,
    decode_moves, encode,
};
use itertools::Itertools;
use log::info;

#[test_log::test]
fn solved_cube_encodes_to_the_canonical_string() {
    let cube = CubieCube::solved();

    assert_eq!(encode(cube.cubies()).unwrap().to_string(), SOLVED_FACELETS);
}

#[test_log::test]
fn every_single_turn_changes_the_facelets() {
    let facelets = Turn::ALL
        .into_iter()
        .map(|turn| {
            let mut cube = CubieCube::solved();
            cube.turn(turn);
            encode(cube.cubies()).unwrap()
        })
        .collect_vec();

    for (turn, f) in Turn::ALL.into_iter().zip(&facelets) {
        assert!(!f.is_solved(), "{turn}");
    }

    // No two turns give the same picture.
    assert_eq!(facelets.iter().unique().count(), Turn::ALL.len());
}

#[test_log::test]
fn engine_style_solution_restores_the_cube() {
    let mut cube = CubieCube::solved();
    cube.apply([Turn::DR, Turn::RU, Turn::UL, Turn::LD]);

    let scrambled = encode(cube.cubies()).unwrap();
    assert!(!scrambled.is_solved());

    let moves = decode_moves("LUURRDDL", OddLengthPolicy::Reject).unwrap();
    assert_eq!(moves, ["LU", "UR", "RD", "DL"]);

    cube.apply_tokens(&moves).unwrap();
    assert_eq!(encode(cube.cubies()).unwrap(), FaceletString::solved());
}

#[test_log::test]
fn scrambles_round_trip_through_the_inverse_map() {
    let mut rng = fastrand::Rng::with_seed(0x5EED);

    for _ in 0..50 {
        let mut cube = CubieCube::solved();
        let count = rng.usize(15..=30);
        let turns = cube.scramble(&mut rng, count);

        let facelets = encode(cube.cubies()).unwrap();
        let cubies = decode(&facelets);
        assert_eq!(cubies.len(), CUBIE_COUNT);
        assert_eq!(encode(&cubies).unwrap(), facelets);

        // Every colour still shows up nine times.
        let counts = facelets.values().iter().counts();
        assert!(counts.values().all(|&n| n == 9), "{counts:?}");

        // Undo the scramble.
        cube.apply(turns.iter().rev().map(|turn| turn.inverse()));
        assert!(encode(cube.cubies()).unwrap().is_solved());

        info!("Round-tripped {count} turns");
    }
}

#[test_log::test]
fn facelet_strings_parse_back() {
    let mut cube = CubieCube::solved();
    cube.apply([Turn::FC, Turn::UR, Turn::BA]);

    let facelets = encode(cube.cubies()).unwrap();
    let parsed: FaceletString = facelets.to_string().parse().unwrap();

    assert_eq!(parsed, facelets);
}
