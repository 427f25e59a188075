use proptest::prelude::*;
use sthenos::catalog::Category;
use sthenos::scorer::{
    BasePoints, DifficultyLevel, ExtraPoints, PositionModifier, ScoreInput, Scorer,
};

// --- STRATEGIES ---

fn arb_position() -> impl Strategy<Value = PositionModifier> {
    prop_oneof![
        Just(PositionModifier::Tuck),
        Just(PositionModifier::TuckAdvanced),
        Just(PositionModifier::OneLeg),
        Just(PositionModifier::Straddle),
        Just(PositionModifier::Half),
        Just(PositionModifier::Full),
    ]
}

fn arb_extra() -> impl Strategy<Value = ExtraPoints> {
    prop_oneof![
        Just(ExtraPoints::None),
        Just(ExtraPoints::Quarter),
        Just(ExtraPoints::Half),
    ]
}

fn arb_level() -> impl Strategy<Value = DifficultyLevel> {
    prop_oneof![
        Just(DifficultyLevel::Beginner),
        Just(DifficultyLevel::Amateur),
        Just(DifficultyLevel::Professional),
    ]
}

prop_compose! {
    fn arb_base()(
        kind in 0u8..4,
        base in 0.0..5.0f64,
        position in arb_position()
    ) -> (Category, BasePoints) {
        match kind {
            0 => (Category::Freestyle, BasePoints::Flat { base }),
            1 => (Category::Balance, BasePoints::Flat { base }),
            2 => (Category::Statics, BasePoints::Static { base, position }),
            _ => (
                Category::PowerMoves,
                BasePoints::PowerMove { static_base_points: base / 3.0, position },
            ),
        }
    }
}

prop_compose! {
    fn arb_input()(
        (category, base) in arb_base(),
        cleanliness in 1u8..=10,
        extra in arb_extra()
    ) -> ScoreInput {
        ScoreInput { category, base, cleanliness, extra }
    }
}

fn extra_rank(extra: ExtraPoints) -> u8 {
    match extra {
        ExtraPoints::None => 0,
        ExtraPoints::Quarter => 1,
        ExtraPoints::Half => 2,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_score_is_finite_and_non_negative(
        input in arb_input(),
        occurrence in 1u32..8,
        level in arb_level()
    ) {
        let score = Scorer::default().score(&input, occurrence, level);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0, "negative score {}", score);
    }

    #[test]
    fn test_monotone_in_cleanliness(
        input in arb_input(),
        other in 1u8..=10,
        occurrence in 1u32..5,
        level in arb_level()
    ) {
        let scorer = Scorer::default();
        let (lo, hi) = if other < input.cleanliness {
            (other, input.cleanliness)
        } else {
            (input.cleanliness, other)
        };
        let low = scorer.score(&ScoreInput { cleanliness: lo, ..input }, occurrence, level);
        let high = scorer.score(&ScoreInput { cleanliness: hi, ..input }, occurrence, level);
        prop_assert!(low <= high + 1e-12, "{} > {}", low, high);
    }

    #[test]
    fn test_monotone_in_extras(
        input in arb_input(),
        a in arb_extra(),
        b in arb_extra(),
        occurrence in 1u32..5,
        level in arb_level()
    ) {
        let scorer = Scorer::default();
        let (lo, hi) = if extra_rank(a) <= extra_rank(b) { (a, b) } else { (b, a) };
        let low = scorer.score(&ScoreInput { extra: lo, ..input }, occurrence, level);
        let high = scorer.score(&ScoreInput { extra: hi, ..input }, occurrence, level);
        prop_assert!(low <= high + 1e-12, "{} > {}", low, high);
    }

    #[test]
    fn test_decay_ratios(input in arb_input(), level in arb_level()) {
        let scorer = Scorer::default();
        let first = scorer.score(&input, 1, level);
        let second = scorer.score(&input, 2, level);
        let third = scorer.score(&input, 3, level);
        let fourth = scorer.score(&input, 4, level);

        if input.category.decays_on_repeat() {
            prop_assert!((second - first * 0.66).abs() < 1e-9);
            prop_assert!((third - first * 0.33).abs() < 1e-9);
            prop_assert_eq!(fourth, 0.0);
        } else {
            prop_assert_eq!(fourth, first);
        }
    }

    #[test]
    fn test_position_never_increases_past_full(input in arb_input(), level in arb_level()) {
        let scorer = Scorer::default();
        let full = match input.base {
            BasePoints::Static { base, .. } => BasePoints::Static { base, position: PositionModifier::Full },
            BasePoints::PowerMove { static_base_points, .. } => BasePoints::PowerMove {
                static_base_points,
                position: PositionModifier::Full,
            },
            other => other,
        };
        let score = scorer.score(&input, 1, level);
        let best = scorer.score(&ScoreInput { base: full, ..input }, 1, level);
        prop_assert!(score <= best + 1e-12);
    }
}
