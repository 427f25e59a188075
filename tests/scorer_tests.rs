use rstest::rstest;
use sthenos::catalog::{Catalog, Category, Exercise, PowerMoveGroup};
use sthenos::config::ScoringRules;
use sthenos::scorer::{
    BasePoints, DifficultyLevel, ExtraPoints, PositionModifier, ScoreInput, Scorer,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn input(category: Category, base: BasePoints, cleanliness: u8, extra: ExtraPoints) -> ScoreInput {
    ScoreInput {
        category,
        base,
        cleanliness,
        extra,
    }
}

#[test]
fn test_planche_full_amateur() {
    let catalog = Catalog::standard();
    let scorer = Scorer::default();
    let base = catalog.base_value(Category::Statics, "Planche").unwrap();

    let planche = input(
        Category::Statics,
        BasePoints::Static {
            base,
            position: PositionModifier::Full,
        },
        10,
        ExtraPoints::None,
    );
    assert_close(scorer.score(&planche, 1, DifficultyLevel::Amateur), 1.5);
}

#[test]
fn test_repeated_freestyle_planche_beginner() {
    let scorer = Scorer::default();
    let planche = input(
        Category::Freestyle,
        BasePoints::Flat { base: 1.5 },
        8,
        ExtraPoints::None,
    );
    assert_close(scorer.score(&planche, 2, DifficultyLevel::Beginner), 1.188);
}

#[test]
fn test_maltese_power_move_professional() {
    let catalog = Catalog::standard();
    let scorer = Scorer::default();
    let entry = catalog
        .power_move(PowerMoveGroup::Push, Exercise::Press, "Maltese")
        .unwrap();

    let maltese = input(
        Category::PowerMoves,
        BasePoints::PowerMove {
            static_base_points: entry.static_base_points().unwrap(),
            position: PositionModifier::Straddle,
        },
        10,
        ExtraPoints::Quarter,
    );
    let details = scorer.score_details(&maltese, 1, DifficultyLevel::Professional);
    assert_close(details.base_points, 0.75);
    assert_close(details.score, 0.64375);
}

#[rstest]
#[case(PositionModifier::Tuck)]
#[case(PositionModifier::TuckAdvanced)]
#[case(PositionModifier::OneLeg)]
#[case(PositionModifier::Straddle)]
#[case(PositionModifier::Half)]
#[case(PositionModifier::Full)]
fn test_super_static_ignores_position(#[case] position: PositionModifier) {
    let scorer = Scorer::default();
    let catalog = Catalog::standard();
    let entry = catalog
        .entry(Category::Statics, "Victorian Cross (Super)")
        .unwrap();
    assert!(entry.is_super);

    // The position a judge picks never reaches a super element's score
    let sup = input(
        Category::Statics,
        BasePoints::Super {
            base: entry.base_value,
        },
        7,
        ExtraPoints::Half,
    );
    let regular = input(
        Category::Statics,
        BasePoints::Static {
            base: entry.base_value,
            position,
        },
        7,
        ExtraPoints::Half,
    );
    let expected = 3.0 * 1.5 * 0.7 + 0.5;
    assert_close(scorer.score(&sup, 1, DifficultyLevel::Beginner), expected);
    assert!(scorer.score(&regular, 1, DifficultyLevel::Beginner) <= expected + 1e-12);
}

#[rstest]
#[case(PositionModifier::Tuck, 0.15)]
#[case(PositionModifier::TuckAdvanced, 0.3)]
#[case(PositionModifier::OneLeg, 0.4)]
#[case(PositionModifier::Straddle, 0.7)]
#[case(PositionModifier::Half, 0.8)]
#[case(PositionModifier::Full, 1.0)]
fn test_position_scales_statics(#[case] position: PositionModifier, #[case] factor: f64) {
    let scorer = Scorer::default();
    let front_lever = input(
        Category::Statics,
        BasePoints::Static {
            base: 1.0,
            position,
        },
        10,
        ExtraPoints::None,
    );
    assert_close(scorer.score(&front_lever, 1, DifficultyLevel::Amateur), factor);
}

#[rstest]
#[case(Category::Freestyle, BasePoints::Flat { base: 1.25 })]
#[case(Category::Balance, BasePoints::Flat { base: 2.0 })]
#[case(
    Category::PowerMoves,
    BasePoints::PowerMove { static_base_points: 0.5, position: PositionModifier::Half }
)]
fn test_repetition_decay(#[case] category: Category, #[case] base: BasePoints) {
    let scorer = Scorer::default();
    let el = input(category, base, 9, ExtraPoints::Quarter);
    let first = scorer.score(&el, 1, DifficultyLevel::Amateur);

    assert!(first > 0.0);
    assert_close(scorer.score(&el, 2, DifficultyLevel::Amateur), first * 0.66);
    assert_close(scorer.score(&el, 3, DifficultyLevel::Amateur), first * 0.33);
    assert_eq!(scorer.score(&el, 4, DifficultyLevel::Amateur), 0.0);
    assert_eq!(scorer.score(&el, 9, DifficultyLevel::Amateur), 0.0);
}

#[rstest]
#[case(BasePoints::Static { base: 2.25, position: PositionModifier::Straddle })]
#[case(BasePoints::Super { base: 3.0 })]
fn test_statics_never_decay(#[case] base: BasePoints) {
    let scorer = Scorer::default();
    let el = input(Category::Statics, base, 10, ExtraPoints::None);
    let first = scorer.score(&el, 1, DifficultyLevel::Professional);
    for occurrence in 2..6 {
        assert_close(scorer.score(&el, occurrence, DifficultyLevel::Professional), first);
    }
}

#[rstest]
#[case(DifficultyLevel::Beginner, 1.5)]
#[case(DifficultyLevel::Amateur, 1.0)]
#[case(DifficultyLevel::Professional, 0.75)]
fn test_difficulty_multiplier(#[case] level: DifficultyLevel, #[case] expected: f64) {
    let scorer = Scorer::default();
    assert_eq!(scorer.difficulty_multiplier(level), expected);
    let el = input(
        Category::Balance,
        BasePoints::Flat { base: 1.0 },
        10,
        ExtraPoints::None,
    );
    assert_close(scorer.score(&el, 1, level), expected);
}

#[test]
fn test_custom_decay_table() {
    let scorer = Scorer::new(ScoringRules {
        repetition_decay: "0.5".to_string(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(scorer.repetition_factor(2), 0.5);
    assert_eq!(scorer.repetition_factor(3), 0.0);
}

#[test]
fn test_bad_decay_table_is_rejected() {
    let rules = ScoringRules {
        repetition_decay: "0.66,abc".to_string(),
        ..Default::default()
    };
    assert!(Scorer::new(rules).is_err());

    let rules = ScoringRules {
        repetition_decay: "1.5".to_string(),
        ..Default::default()
    };
    assert!(Scorer::new(rules).is_err());
}
