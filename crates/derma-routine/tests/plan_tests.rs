//! Detailed daily-plan generation behavior

use derma_routine::AnalysisSignal;
use derma_test_utils::{oily_signal, setup_engine};
use pretty_assertions::assert_eq;

#[test]
fn plan_is_stored_as_engine_state() {
    let mut engine = setup_engine();
    assert!(engine.daily_plan().is_none());

    let plan = engine.generate_daily_plan(&oily_signal());
    assert_eq!(engine.daily_plan(), Some(&plan));
}

#[test]
fn plan_ignores_toggle_state() {
    let mut engine = setup_engine();
    let reference = engine.generate_daily_plan(&oily_signal());

    engine.update_from_scan(&oily_signal());
    assert!(engine.toggle_task(derma_routine::Period::Morning, "1"));
    let after_toggle = engine.generate_daily_plan(&oily_signal());

    assert_eq!(reference, after_toggle);
}

#[test]
fn oily_plan_inserts_into_larger_catalog() {
    let mut engine = setup_engine();
    let plan = engine.generate_daily_plan(&oily_signal());

    // Anchors differ from the scan rules; the plan catalogs are longer.
    assert_eq!(plan.morning_routine.steps.position("m-oily1"), Some(4));
    assert_eq!(plan.evening_routine.steps.position("e-oily1"), Some(7));
    assert_eq!(plan.night_routine.steps.len(), 14);
}

#[test]
fn sensitive_plan_gets_gentle_cleanser_and_soothing_essence() {
    let mut engine = setup_engine();
    let plan = engine.generate_daily_plan(&AnalysisSignal::new("sensitive"));

    let steps = &plan.morning_routine.steps;
    assert_eq!(steps.position("m-sens1"), Some(1));
    assert_eq!(steps.tasks().last().unwrap().id.as_str(), "m-sens2");
}

#[test]
fn advice_band_selection() {
    let mut engine = setup_engine();

    let plan = engine.generate_daily_plan(&AnalysisSignal::new("normal").with_health_score(85.0));
    assert!(plan.general_advice[0].contains("excellent condition"));

    let plan = engine.generate_daily_plan(&AnalysisSignal::new("normal").with_health_score(70.0));
    assert!(plan.general_advice[0].contains("doing well"));
    assert!(!plan
        .general_advice
        .iter()
        .any(|advice| advice.contains("dermatologist")));

    let plan = engine.generate_daily_plan(&AnalysisSignal::new("normal").with_health_score(45.0));
    assert!(plan.general_advice[0].contains("needs more targeted care"));
    assert!(plan
        .general_advice
        .iter()
        .any(|advice| advice.contains("dermatologist")));
}

#[test]
fn acne_and_dryness_issues_extend_nutrition_tips() {
    let mut engine = setup_engine();
    let signal = AnalysisSignal::new("normal")
        .with_issues(vec!["acne".to_string(), "dryness".to_string()]);

    let plan = engine.generate_daily_plan(&signal);
    assert_eq!(plan.nutrition_tips.len(), 9);
    assert!(plan.nutrition_tips[5].contains("dairy"));
    assert!(plan.nutrition_tips[7].contains("healthy fats"));
}

#[test]
fn plan_serializes_with_camel_case_surface() {
    let mut engine = setup_engine();
    let plan = engine.generate_daily_plan(&oily_signal());

    let json = serde_json::to_value(&plan).unwrap();
    assert!(json.get("morningRoutine").is_some());
    assert!(json.get("weeklyTreatments").is_some());
    assert!(json["morningRoutine"].get("steps").is_some());
}
