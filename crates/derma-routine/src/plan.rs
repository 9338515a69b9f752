//! Detailed daily-plan generation
//!
//! A richer structure than the checklist: three routine sections with
//! steps, duration estimates and tips, plus weekly treatments, nutrition
//! tips and narrative advice. Pure over the signal and the static
//! catalogs; toggle state plays no part.

use derma_catalog::{apply_rules, plan_steps, TaskList, PLAN_RULES};
use derma_signal::{AnalysisSignal, ScoreBand};
use serde::{Deserialize, Serialize};

/// One routine section of the daily plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineSection {
    /// Section heading
    pub title: String,
    /// One-line description
    pub description: String,
    /// Step checklist, personalized for the signal
    pub steps: TaskList,
    /// Rough duration estimate
    pub duration: String,
    /// Fixed guidance tips for the section
    pub tips: Vec<String>,
}

/// A recurring weekly treatment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTreatment {
    /// Treatment name
    pub name: String,
    /// How often to do it
    pub frequency: String,
    /// What to do
    pub description: String,
}

/// The full detailed daily plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Morning section
    pub morning_routine: RoutineSection,
    /// Evening section
    pub evening_routine: RoutineSection,
    /// Night section
    pub night_routine: RoutineSection,
    /// Weekly treatments for the skin type
    pub weekly_treatments: Vec<WeeklyTreatment>,
    /// Nutrition tips, condition-specific pairs appended after the base
    pub nutrition_tips: Vec<String>,
    /// Narrative advice; first entry is the score-band string
    pub general_advice: Vec<String>,
}

const ADVICE_EXCELLENT: &str =
    "✨ Your skin is in excellent condition! Maintain your current routine.";
const ADVICE_GOOD: &str =
    "👍 Your skin is doing well. Consistency is key to further improvement.";
const ADVICE_NEEDS_CARE: &str =
    "💪 Your skin needs more targeted care. Follow this plan consistently for 4-6 weeks.";
const ADVICE_DERMATOLOGIST: &str =
    "⚠️ Consider consulting a dermatologist for persistent issues";

/// Health score below which the dermatologist tip is added
const DERMATOLOGIST_SCORE: f64 = 50.0;

/// Build the detailed plan for a signal
#[must_use]
pub(crate) fn build_plan(signal: &AnalysisSignal) -> DailyPlan {
    let mut steps = plan_steps();
    apply_rules(&mut steps, PLAN_RULES, signal);

    DailyPlan {
        morning_routine: RoutineSection {
            title: "☀️ Morning Routine".to_string(),
            description: format!(
                "Refreshing and protective routine for {} skin to start your day right",
                signal.skin_type
            ),
            steps: steps.morning,
            duration: "10-15 minutes".to_string(),
            tips: vec![
                "Use lukewarm water - not hot".to_string(),
                "Apply products to damp skin for better absorption".to_string(),
                "Wait 5-10 minutes after moisturizer before applying sunscreen".to_string(),
                "Don't rush - take time for the massage steps".to_string(),
            ],
        },
        evening_routine: RoutineSection {
            title: "🌅 Evening Routine".to_string(),
            description: "Preparation for deeper night treatment and relaxation".to_string(),
            steps: steps.evening,
            duration: "15-20 minutes".to_string(),
            tips: vec![
                "Double cleanse is crucial - remove makeup and sunscreen first".to_string(),
                "Be gentle while cleansing - massage, don't scrub".to_string(),
                "This is a good time to apply treatment products".to_string(),
                "Relax and enjoy the massage - it boosts circulation".to_string(),
            ],
        },
        night_routine: RoutineSection {
            title: "🌙 Night Routine".to_string(),
            description: "Intensive repair and restoration while you sleep".to_string(),
            steps: steps.night,
            duration: "20-25 minutes".to_string(),
            tips: vec![
                "Use richer products at night - skin absorbs better".to_string(),
                "Don't apply too much product - a little goes a long way".to_string(),
                "Reduce screen light blue exposure 30 min before bed".to_string(),
                "Proper sleep is part of skincare - aim for 7-8 hours".to_string(),
                "Keep pillowcase clean and change it 2-3 times per week".to_string(),
            ],
        },
        weekly_treatments: weekly_treatments(signal),
        nutrition_tips: nutrition_tips(signal),
        general_advice: general_advice(signal),
    }
}

fn weekly_treatments(signal: &AnalysisSignal) -> Vec<WeeklyTreatment> {
    let mut treatments = Vec::new();
    let oily = signal.skin_type_mentions("oily");

    if oily {
        treatments.push(WeeklyTreatment {
            name: "Clay/Mud Mask".to_string(),
            frequency: "1-2 times per week".to_string(),
            description: "Use on T-zone or full face for 10-15 minutes".to_string(),
        });
    } else {
        treatments.push(WeeklyTreatment {
            name: "Hydrating/Nourishing Mask".to_string(),
            frequency: "1-2 times per week".to_string(),
            description: "Apply for 15-20 minutes to boost hydration".to_string(),
        });
    }

    treatments.push(WeeklyTreatment {
        name: "Gentle Exfoliation".to_string(),
        frequency: "1-2 times per week".to_string(),
        description: "Use chemical exfoliant (BHA/AHA) or gentle physical scrub".to_string(),
    });

    treatments
}

fn nutrition_tips(signal: &AnalysisSignal) -> Vec<String> {
    let mut tips = vec![
        "Drink at least 8 glasses of water daily".to_string(),
        "Eat antioxidant-rich foods: berries, dark leafy greens, dark chocolate".to_string(),
        "Include omega-3 sources: fish, walnuts, flaxseeds, chia seeds".to_string(),
        "Eat foods rich in Vitamin C: citrus, kiwi, bell peppers, broccoli".to_string(),
        "Include zinc-rich foods: oysters, beef, pumpkin seeds, chickpeas".to_string(),
    ];

    if signal.issue_mentions("acne") {
        tips.push("Limit dairy and high-glycemic foods".to_string());
        tips.push("Reduce sugar and processed food intake".to_string());
    }

    if signal.issue_mentions("dryness") {
        tips.push("Include healthy fats: avocado, olive oil, nuts".to_string());
        tips.push("Increase collagen-boosting foods: bone broth, citrus".to_string());
    }

    tips
}

fn general_advice(signal: &AnalysisSignal) -> Vec<String> {
    let band_advice = match signal.score_band() {
        ScoreBand::Excellent => ADVICE_EXCELLENT,
        ScoreBand::Good => ADVICE_GOOD,
        ScoreBand::NeedsCare => ADVICE_NEEDS_CARE,
    };

    let mut advice = vec![
        band_advice.to_string(),
        "🌙 Consistency is more important than perfection - aim for 80% adherence".to_string(),
        "⏰ Spend 10-15 minutes on morning routine, 20-25 minutes on night routine".to_string(),
        "💧 Adjust routine based on seasonal changes and climate".to_string(),
        "🔍 Reassess your skin every 4-6 weeks and adjust as needed".to_string(),
    ];

    if signal.health_score < DERMATOLOGIST_SCORE {
        advice.push(ADVICE_DERMATOLOGIST.to_string());
    }

    advice
}
