use hupai_core::{parse_tiles, validate_hand, WinPattern};

macro_rules! winning_case {
    ($name:ident, $ids:expr, $pattern:expr) => {
        #[test]
        fn $name() {
            let tiles = parse_tiles($ids).expect("parse");
            assert_eq!(validate_hand(&tiles).pattern(), Some($pattern), "{}", $ids);
        }
    };
}

macro_rules! losing_case {
    ($name:ident, $ids:expr) => {
        #[test]
        fn $name() {
            let tiles = parse_tiles($ids).expect("parse");
            let result = validate_hand(&tiles);
            assert!(!result.is_winning(), "{} -> {:?}", $ids, result);
        }
    };
}

use WinPattern::{SevenPairs, Standard};

// Standard shapes.
winning_case!(all_pungs, "m1 m1 m1 p2 p2 p2 s3 s3 s3 z4 z4 z4 z5 z5", Standard);
winning_case!(all_chows, "m1 m2 m3 p4 p5 p6 s7 s8 s9 m4 m5 m6 z1 z1", Standard);
winning_case!(full_flush, "m1 m2 m3 m4 m5 m6 m7 m8 m9 m2 m3 m4 m9 m9", Standard);
winning_case!(half_flush, "s1 s2 s3 s4 s5 s6 z1 z1 z1 z2 z2 z2 z3 z3", Standard);
winning_case!(terminal_pungs, "m1 m1 m1 m9 m9 m9 p1 p1 p1 p9 p9 p9 z1 z1", Standard);
winning_case!(triple_pungs, "m2 m2 m2 p2 p2 p2 s2 s2 s2 z1 z1 z1 z2 z2", Standard);
winning_case!(triple_chows, "m1 m2 m3 p1 p2 p3 s1 s2 s3 z1 z1 z1 z2 z2", Standard);
winning_case!(mixed_suits, "m3 m4 m5 p6 p7 p8 s2 s2 s2 z1 z1 z1 z5 z5", Standard);
winning_case!(outside_chows, "m7 m8 m9 p7 p8 p9 s1 s2 s3 m1 m2 m3 z1 z1", Standard);
winning_case!(pure_straight, "m1 m2 m3 m4 m5 m6 m7 m8 m9 p1 p2 p3 z1 z1", Standard);
winning_case!(double_chow, "m2 m2 m3 m3 m4 m4 p5 p6 p7 s1 s2 s3 z1 z1", Standard);
winning_case!(two_double_chows, "m2 m2 m3 m3 m4 m4 p5 p5 p6 p6 p7 p7 z1 z1", SevenPairs);
winning_case!(nine_gates_on_one, "m1 m1 m1 m1 m2 m3 m4 m5 m6 m7 m8 m9 m9 m9", Standard);
winning_case!(nine_gates_on_five, "m1 m1 m1 m2 m3 m4 m5 m5 m6 m7 m8 m9 m9 m9", Standard);
winning_case!(four_copies_split, "m2 m3 m4 m3 m4 m5 m3 m3 p1 p2 p3 s1 s2 s3", Standard);
winning_case!(shifted_chows, "m2 m3 m4 m3 m4 m5 m4 m5 m6 s1 s1 s1 z1 z1", Standard);
winning_case!(pung_and_chows_one_suit, "m1 m2 m3 m4 m5 m6 m7 m7 m7 p1 p2 p3 z1 z1", Standard);
winning_case!(pure_wait_shape, "m2 m3 m4 m4 m5 m6 m4 m4 p1 p2 p3 s1 s2 s3", Standard);
winning_case!(honor_pungs, "z1 z1 z1 z2 z2 z2 z3 z3 z3 z4 z4 z4 m9 m9", Standard);
winning_case!(legacy_ids, "c1 c1 c1 c2 c3 c4 d5 d5 d5 b7 b8 b9 h1 h1", Standard);
winning_case!(
    flowers_are_ignored,
    "m1 m1 m1 m2 m3 m4 p5 p5 p5 s7 s8 s9 z1 z1 f1 f2 f3 f4 f5 f6 f7 f8",
    Standard
);

// Seven pairs.
winning_case!(one_suit_pairs, "m1 m1 m2 m2 m3 m3 m4 m4 m5 m5 m6 m6 m7 m7", SevenPairs);
winning_case!(honor_pairs, "z1 z1 z2 z2 z3 z3 z4 z4 z5 z5 z6 z6 z7 z7", SevenPairs);
winning_case!(mixed_pairs, "m1 m1 p9 p9 s4 s4 z1 z1 z3 z3 z5 z5 z7 z7", SevenPairs);
winning_case!(quad_as_two_pairs, "m1 m1 m1 m1 p2 p2 s3 s3 z4 z4 z5 z5 z6 z6", SevenPairs);

// Shapes that are not supported or not complete.
losing_case!(thirteen_orphans, "m1 m9 p1 p9 s1 s9 z1 z2 z3 z4 z5 z6 z7 z7");
losing_case!(no_pair, "m1 m2 m3 p4 p5 p6 s7 s8 s9 m4 m5 m6 z1 z2");
losing_case!(two_pairs_missing_set, "m1 m2 m3 p4 p5 p6 s7 s8 s9 z1 z1 z2 z2 z3");
losing_case!(six_pairs_two_singles, "m1 m1 m2 m2 m3 m3 m4 m4 m5 m5 m6 m6 z1 z2");
losing_case!(pairs_broken_by_run, "m1 m2 m3 m3 m4 m4 m5 m5 m6 m6 m7 m7 m8 m8");
losing_case!(chow_missing_tile, "m1 m2 p1 p2 p3 s1 s2 s3 z1 z1 z1 z2 z2 z2");
losing_case!(four_singles_left, "m1 m2 m3 p1 p2 p3 s1 s2 s3 z1 z2 z3 z4 z5");
losing_case!(flower_pung_does_not_count, "f1 f1 f1 m1 m2 m3 p1 p2 p3 s1 s2 s3 z1 z1");
losing_case!(wrapped_run, "m8 m9 m1 p2 p2 p2 s3 s3 s3 z4 z4 z4 z5 z5");
losing_case!(cross_suit_run, "m9 p1 p2 p2 p2 p2 s3 s3 s3 z4 z4 z4 z5 z5");
losing_case!(honor_run, "z1 z2 z3 p2 p2 p2 s3 s3 s3 z4 z4 z4 z5 z5");
losing_case!(same_rank_across_suits, "m1 p1 s1 p2 p2 p2 s3 s3 s3 z4 z4 z4 z5 z5");
losing_case!(gapped_run, "m1 m3 m5 p2 p2 p2 s3 s3 s3 z4 z4 z4 z5 z5");
losing_case!(thirteen_tiles, "m1 m2 m3 p4 p5 p6 s7 s8 s9 m4 m5 m6 z1");
losing_case!(fifteen_tiles, "m1 m2 m3 p4 p5 p6 s7 s8 s9 m4 m5 m6 z1 z1 z2");
losing_case!(
    twenty_tiles,
    "m1 m1 m1 m2 m2 m2 m3 m3 m3 m4 m4 m4 m5 m5 m5 m6 m6 m6 z1 z1"
);
losing_case!(single_pair, "m1 m1");
losing_case!(empty_hand, "");
losing_case!(five_copies, "m1 m1 m1 m1 m1 p1 p2 p3 s1 s2 s3 z1 z1 z1");
losing_case!(random_mash, "m1 f3 s7 z2 p9 p4 m5 f8 s1 z6 z7 m3 p2 f1");
