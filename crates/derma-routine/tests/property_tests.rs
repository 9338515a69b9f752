//! Property tests over toggling and regeneration

use derma_routine::{AnalysisSignal, Period, RoutineEngine};
use derma_signal::Recommendations;
use proptest::prelude::*;

fn arb_period() -> impl Strategy<Value = Period> {
    prop_oneof![
        Just(Period::Morning),
        Just(Period::Evening),
        Just(Period::Night),
    ]
}

fn arb_signal() -> impl Strategy<Value = AnalysisSignal> {
    (
        prop_oneof![
            Just("normal"),
            Just("oily"),
            Just("dry"),
            Just("sensitive"),
            Just("Oily and Sensitive"),
            Just("acne-prone combination"),
        ],
        0.0f64..=100.0,
        proptest::collection::vec("[a-z]{3,10}", 0..3),
    )
        .prop_map(|(skin_type, score, recs)| {
            AnalysisSignal::new(skin_type)
                .with_health_score(score)
                .with_recommendations(Recommendations::new().with_morning(recs))
        })
}

proptest! {
    #[test]
    fn prop_toggle_twice_is_identity(period in arb_period(), signal in arb_signal()) {
        let mut engine = RoutineEngine::new();
        engine.update_from_scan(&signal);

        let before = engine.routines().clone();
        let id = before.period(period).tasks()[0].id.as_str().to_string();

        prop_assert!(engine.toggle_task(period, &id));
        prop_assert!(engine.toggle_task(period, &id));
        prop_assert_eq!(engine.routines(), &before);
    }

    #[test]
    fn prop_toggle_unknown_id_is_noop(period in arb_period(), signal in arb_signal()) {
        let mut engine = RoutineEngine::new();
        engine.update_from_scan(&signal);

        let before = engine.routines().clone();
        prop_assert!(!engine.toggle_task(period, "no-such-task"));
        prop_assert_eq!(engine.routines(), &before);
    }

    #[test]
    fn prop_regeneration_clears_all_completion(signal in arb_signal(), other in arb_signal()) {
        let mut engine = RoutineEngine::new();
        engine.update_from_scan(&signal);

        // Complete everything, then rescan: nothing may carry over.
        for period in Period::ALL {
            let ids: Vec<String> = engine
                .routines()
                .period(period)
                .iter()
                .map(|t| t.id.as_str().to_string())
                .collect();
            for id in ids {
                engine.toggle_task(period, &id);
            }
        }

        engine.update_from_scan(&other);
        prop_assert!(engine.routines().all_incomplete());
    }

    #[test]
    fn prop_recommendation_ids_follow_pattern(signal in arb_signal()) {
        let mut engine = RoutineEngine::new();
        engine.update_from_scan(&signal);

        let rec_count = signal.recommendations.morning_routine.len();
        for index in 0..rec_count {
            let id = format!("rec-morning-{index}");
            prop_assert!(engine.routines().morning.get(&id).is_some());
        }
    }

    #[test]
    fn prop_update_is_deterministic(signal in arb_signal()) {
        let mut a = RoutineEngine::new();
        let mut b = RoutineEngine::new();
        a.update_from_scan(&signal);
        b.update_from_scan(&signal);
        prop_assert_eq!(a.routines(), b.routines());
    }
}
