use gesture_janken::game::{judge, Move, Outcome};

#[test]
fn beats_table() {
    assert!(Move::Rock.beats(Move::Scissors));
    assert!(Move::Paper.beats(Move::Rock));
    assert!(Move::Scissors.beats(Move::Paper));
}

#[test]
fn relation_is_asymmetric_and_ties_on_equal() {
    for a in Move::ALL {
        for b in Move::ALL {
            if a == b {
                assert!(!a.beats(b));
                assert_eq!(judge(a, b), Outcome::Draw);
            } else {
                // exactly one side wins
                assert_ne!(a.beats(b), b.beats(a), "{a} vs {b}");
                let expected = if a.beats(b) { Outcome::PlayerWins } else { Outcome::AiWins };
                assert_eq!(judge(a, b), expected);
            }
        }
    }
}

#[test]
fn each_move_beats_exactly_one_other() {
    for a in Move::ALL {
        let wins = Move::ALL.iter().filter(|&&b| a.beats(b)).count();
        assert_eq!(wins, 1, "{a}");
    }
}

#[test]
fn finger_count_lookup() {
    assert_eq!(Move::from_finger_count(0), Some(Move::Rock));
    assert_eq!(Move::from_finger_count(2), Some(Move::Scissors));
    assert_eq!(Move::from_finger_count(5), Some(Move::Paper));
    for n in [1, 3, 4, 6] {
        assert_eq!(Move::from_finger_count(n), None);
    }
}

#[test]
fn codes_match_asset_numbering() {
    assert_eq!(Move::Rock.code(), 1);
    assert_eq!(Move::Paper.code(), 2);
    assert_eq!(Move::Scissors.code(), 3);
    for m in Move::ALL {
        assert_eq!(Move::from_code(m.code()), Some(m));
    }
    assert_eq!(Move::from_code(0), None);
    assert_eq!(Move::from_code(4), None);
}
