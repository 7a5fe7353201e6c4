//! do_move / undo_move の往復と駒の保存をランダムな進行で確かめる

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use simple_shogi_core::movegen::{generate, generate_legal};
use simple_shogi_core::{Color, Move, Position, PieceType};

/// 盤上と両者の手駒にある駒を、色と成りを区別せずに数える
fn piece_census(pos: &Position) -> [u32; PieceType::NUM + 1] {
    let mut counts = [0u32; PieceType::NUM + 1];
    for (_, pc) in pos.pieces() {
        counts[pc.piece_type().unpromote() as usize] += 1;
    }
    for color in Color::ALL {
        for (pt, n) in pos.hand(color).iter() {
            counts[pt as usize] += n;
        }
    }
    counts
}

fn check_all_moves_round_trip(pos: &mut Position) {
    let before = pos.clone();
    let census = piece_census(pos);
    let moves: Vec<Move> = generate(pos).collect();

    for mv in moves {
        pos.do_move(mv);
        assert_eq!(pos.side_to_move(), before.side_to_move().opponent());
        assert_eq!(pos.ply(), before.ply() + 1);
        assert_eq!(piece_census(pos), census, "census changed by {mv:?}");
        pos.undo_move(mv);
        assert_eq!(*pos, before, "undo of {mv:?} did not restore {}", before.to_sfen());
    }
}

fn random_walk(start: &str, seed: u64, max_plies: usize) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut pos = Position::from_sfen(start).unwrap();
    let origin = pos.clone();
    let mut played = Vec::new();

    for _ in 0..max_plies {
        check_all_moves_round_trip(&mut pos);

        let legal = generate_legal(&mut pos);
        if legal.is_empty() {
            break;
        }
        let mv = legal[rng.random_range(0..legal.len())];
        pos.do_move(mv);
        played.push(mv);
    }

    // まとめて巻き戻すと開始局面に戻る
    for mv in played.into_iter().rev() {
        pos.undo_move(mv);
    }
    assert_eq!(pos, origin);
}

#[test]
fn random_walks_from_startpos() {
    for seed in 0..6 {
        random_walk(simple_shogi_core::SFEN_HIRATE, seed, 80);
    }
}

#[test]
fn random_walks_with_hands() {
    let sfen = "ln1g3nl/1r3kg2/p2pppsp1/2ps2p1p/1p7/2P1P1P2/PPSP1P2P/2G1K2R1/LN3GSNL b B2Pbp 25";
    for seed in 100..104 {
        random_walk(sfen, seed, 60);
    }
}

#[test]
fn random_walks_from_endgame() {
    let sfen = "4k4/9/4+P4/9/9/9/9/9/+r3K3+B b RGSNL2Pgsnl3p 40";
    for seed in 200..204 {
        random_walk(sfen, seed, 60);
    }
}

#[test]
fn drops_never_create_double_pawn() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let mut pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 9P9p 1").unwrap();

    for _ in 0..40 {
        let us = pos.side_to_move();
        let pawn_drops =
            generate(&pos).filter(|mv| mv.is_drop() && mv.piece().piece_type() == PieceType::Pawn);
        for mv in pawn_drops {
            let file = mv.to().unwrap().file();
            assert!(!pos.has_pawn_on_file(us, file), "{mv:?} is a double pawn");
        }

        let legal = generate_legal(&mut pos);
        if legal.is_empty() {
            break;
        }
        let mv = legal[rng.random_range(0..legal.len())];
        pos.do_move(mv);
    }
}
