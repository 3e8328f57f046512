use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rust_dice_initiative::{
    common::{NonZeroUInt, Sign, UInt},
    evaluate, evaluate_initiative, evaluate_multi,
    parse::{self, ast::TermKind},
    Error, Roller, Roster,
};

/// Hands out a fixed list of rolls, clamped into range.
struct Scripted(Vec<UInt>);

impl Roller for Scripted {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        let x = if self.0.is_empty() { 1 } else { self.0.remove(0) };
        x.clamp(1, sides.get())
    }
}

#[test]
fn scripted_rolls_show_up_in_order() {
    let result = evaluate("2d6 - 1d8 + 3", Scripted(vec![1, 4, 8])).unwrap();
    let values: Vec<_> = result.contributions.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![1, 4, -8, 3]);
    let highlighted: Vec<_> = result.contributions.iter().map(|c| c.highlighted).collect();
    assert_eq!(highlighted, vec![true, false, true, false]);
    assert_eq!(result.total, 1 + 4 - 8 + 3);
}

#[test]
fn zero_quantity_or_faces_is_malformed() {
    let mut rng = StdRng::seed_from_u64(3);
    assert!(evaluate("0d6", &mut rng).unwrap_err().is_malformed());
    assert!(evaluate("1d0", &mut rng).unwrap_err().is_malformed());
    assert!(evaluate_initiative("1d20+0d4", &mut rng).unwrap_err().is_malformed());
}

#[test]
fn huge_quantity_fails_before_rolling() {
    let limit = rust_dice_initiative::roll::DEFAULT_MAX_ROLLS;
    let err = evaluate("2147483647d6", StdRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(err, Error::TooManyRolls { limit });
    let err = evaluate_initiative("1d20+2147483647d6", StdRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(err, Error::TooManyRolls { limit });
    let err = evaluate_multi(2, "600d6", StdRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(err, Error::TooManyRolls { limit });
    assert!(evaluate("1000d6", StdRng::seed_from_u64(1)).is_ok());
}

#[test]
fn multi_gives_independent_results() {
    let mut rng = StdRng::seed_from_u64(11);
    let results = evaluate_multi(3, "1d20+2", &mut rng).unwrap();
    assert_eq!(results.len(), 3);
    for r in results.iter() {
        assert_eq!(r.contributions.len(), 2);
        assert_eq!(r.total, r.contributions[0].value + 2);
    }
    assert!(evaluate_multi(0, "1d20", &mut rng).unwrap_err().is_malformed());
}

#[test]
fn natural_20_beats_big_modifier() {
    let mut roster = Roster::new();
    let b = evaluate_initiative("1d20+10", Scripted(vec![19])).unwrap();
    let a = evaluate_initiative("1d20", Scripted(vec![20])).unwrap();
    roster.add("B", b);
    roster.add("A", a);
    let names: Vec<_> = roster.list().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn remove_reports_missing_name() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut roster = Roster::new();
    roster.add("Bob", evaluate_initiative("1d20", &mut rng).unwrap());
    assert!(roster.remove("Alice").is_err());
    assert!(roster.remove("bob").is_ok());
}

proptest! {
    #[test]
    fn flat_only_is_deterministic(values in prop::collection::vec((any::<bool>(), 0..10_000i32), 0..8), seed in any::<u64>()) {
        let notation: String = values
            .iter()
            .map(|(neg, x)| format!("{}{}", if *neg { '-' } else { '+' }, x))
            .collect();
        let expected: i32 = values.iter().map(|(neg, x)| if *neg { -x } else { *x }).sum();
        let result = evaluate(&notation, StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(result.total, expected);
        prop_assert!(result.contributions.iter().all(|c| !c.highlighted));
    }

    #[test]
    fn draws_stay_on_the_die(num in 1u32..20, sides in 1u32..100, seed in any::<u64>()) {
        let notation = format!("{}d{}", num, sides);
        let result = evaluate(&notation, StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(result.contributions.len(), num as usize);
        for c in &result.contributions {
            prop_assert!((1..=sides as i32).contains(&c.value));
            prop_assert_eq!(c.highlighted, c.value == 1 || c.value == sides as i32);
        }
    }

    #[test]
    fn negative_dice_never_add(num in 1u32..10, sides in 1u32..50, seed in any::<u64>()) {
        let notation = format!("-{}d{}", num, sides);
        let terms = parse::parse(&notation).unwrap();
        prop_assert!(terms.iter().all(|t| t.sign.is_negative() && !t.is_flat()));
        let result = evaluate(&notation, StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(result.contributions.iter().all(|c| c.value < 0));
    }

    #[test]
    fn initiative_splits_d20_and_modifier(modifier in -50i32..50, seed in any::<u64>()) {
        let notation = format!("1d20{:+}", modifier);
        let outcome = evaluate_initiative(&notation, StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!((1..=20).contains(&outcome.isolated_d20));
        prop_assert_eq!(outcome.modifier_sum, modifier);
        prop_assert_eq!(outcome.total, outcome.isolated_d20 + modifier);
    }
}

#[test]
fn parsed_terms_keep_their_signs() {
    let terms = parse::parse("1d20 - 2 + d4").unwrap();
    let signs: Vec<_> = terms.iter().map(|t| t.sign).collect();
    assert_eq!(signs, vec![Sign::Pos, Sign::Neg, Sign::Pos]);
    assert!(matches!(terms[2].kind, TermKind::Dice(d) if d.num.get() == 1 && d.sides.get() == 4));
}
