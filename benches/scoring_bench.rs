use criterion::{criterion_group, criterion_main, Criterion};
use sthenos::api::JudgePanel;
use sthenos::catalog::{Category, PowerMoveGroup};
use sthenos::config::Config;
use sthenos::routine::{Routine, RoutineAction};
use sthenos::scorer::{BasePoints, DifficultyLevel, ExtraPoints, PositionModifier, ScoreInput, Scorer};
use sthenos::session::{ElementRequest, PowerMoveSelection};
use std::hint::black_box;

fn build_routine() -> Routine {
    let mut actions = Vec::new();
    for name in ["540", "Geinger", "360/Tornado", "540"] {
        actions.push(RoutineAction::Add(
            ElementRequest::new(Category::Freestyle, name).with_cleanliness(8),
        ));
    }
    for group in [PowerMoveGroup::Push, PowerMoveGroup::Pull] {
        for &exercise in group.exercises() {
            let selection = PowerMoveSelection::complete(group, exercise, "Planche");
            actions.push(RoutineAction::Add(
                ElementRequest::power_move()
                    .with_selection(selection)
                    .with_position(PositionModifier::Straddle),
            ));
        }
    }
    actions.push(RoutineAction::ComboPenalty);
    Routine {
        participant: Some("bench".to_string()),
        difficulty: Some(DifficultyLevel::Professional),
        actions,
    }
}

fn bench_scoring(c: &mut Criterion) {
    let scorer = Scorer::default();
    let input = ScoreInput {
        category: Category::PowerMoves,
        base: BasePoints::PowerMove {
            static_base_points: 0.75,
            position: PositionModifier::Half,
        },
        cleanliness: 9,
        extra: ExtraPoints::Quarter,
    };

    c.bench_function("score_single_element", |b| {
        b.iter(|| scorer.score(black_box(&input), black_box(2), DifficultyLevel::Beginner))
    });

    let routine = build_routine();
    let config = Config::default();
    c.bench_function("replay_routine", |b| {
        b.iter(|| {
            let mut panel = JudgePanel::from_config(&config).unwrap();
            panel.replay(black_box(&routine)).unwrap();
            black_box(panel.grand_total())
        })
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
