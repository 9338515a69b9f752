//! Hardcoded routine catalogs
//!
//! Three distinct table sets, all fixed product content:
//! - The first-run default routine shown before any scan exists
//!   (12 morning / 12 evening / 13 night tasks, ids `"1"`-`"37"`).
//! - The post-scan base routine that personalization starts from. It is
//!   deliberately smaller than the first-run default (drops vitamins,
//!   the walks, dinner items, the night mask, journaling); the two are
//!   kept separate pending product confirmation rather than unified.
//! - The detailed daily-plan step lists (`m*`/`e*`/`n*` ids), a larger
//!   catalog with its own insertion anchors.

use crate::period::Period;
use crate::task::{RoutineSet, TaskList};
use once_cell::sync::Lazy;

/// First-run default: morning
static DEFAULT_MORNING: &[(&str, &str)] = &[
    // Skincare
    ("1", "Splash face with cold water"),
    ("2", "Face wash with gentle cleanser"),
    ("3", "Pat dry gently"),
    ("4", "Apply toner/essence"),
    ("5", "Apply serum"),
    ("6", "Use moisturizer"),
    ("7", "Apply sunscreen (SPF 30+)"),
    // Wellness
    ("8", "Drink 2 glasses of water"),
    ("9", "Yoga/Stretching (10 min)"),
    ("10", "Morning walk (15 min)"),
    // Nutrition
    ("11", "Eat breakfast with fruits"),
    ("12", "Take vitamins/supplements"),
];

/// First-run default: evening
static DEFAULT_EVENING: &[(&str, &str)] = &[
    // Work routine
    ("13", "Reduce screen time (20 min before)"),
    ("14", "Relax with light activities"),
    // Skincare
    ("15", "Gentle face cleanse"),
    ("16", "Apply essence/toner"),
    ("17", "Apply serum/ampoule"),
    ("18", "Light skincare massage (5 min)"),
    ("19", "Apply evening moisturizer"),
    // Wellness
    ("20", "Drink 2 glasses of water"),
    ("21", "Evening walk (20 min)"),
    ("22", "Light exercise (yoga/pilates)"),
    // Nutrition
    ("23", "Eat balanced dinner"),
    ("24", "Avoid heavy/spicy food"),
];

/// First-run default: night
static DEFAULT_NIGHT: &[(&str, &str)] = &[
    // Pre-sleep routine
    ("25", "Finish eating 2 hours before bed"),
    ("26", "Reduce light exposure"),
    ("27", "Stop using phone 30 min before"),
    // Skincare
    ("28", "Double cleanse (oil + water)"),
    ("29", "Apply toner/essence"),
    ("30", "Apply night serum/treatment"),
    ("31", "Eye cream application"),
    ("32", "Lip balm/treatment"),
    ("33", "Apply night mask (optional)"),
    // Wellness
    ("34", "Final water intake (before bed)"),
    ("35", "Meditation/breathing exercise"),
    ("36", "Journaling (5 min)"),
    ("37", "Get 7-8 hours of quality sleep"),
];

/// Post-scan base: morning
static SCAN_BASE_MORNING: &[(&str, &str)] = &[
    ("1", "Splash face with cold water"),
    ("2", "Face wash with gentle cleanser"),
    ("3", "Pat dry gently"),
    ("4", "Apply toner/essence"),
    ("5", "Apply serum"),
    ("6", "Use moisturizer"),
    ("7", "Apply sunscreen (SPF 30+)"),
    ("8", "Drink 2 glasses of water"),
    ("9", "Yoga/Stretching (10 min)"),
    ("10", "Eat breakfast with fruits"),
];

/// Post-scan base: evening
static SCAN_BASE_EVENING: &[(&str, &str)] = &[
    ("13", "Reduce screen time (20 min before)"),
    ("14", "Relax with light activities"),
    ("15", "Gentle face cleanse"),
    ("16", "Apply essence/toner"),
    ("17", "Apply serum/ampoule"),
    ("18", "Light skincare massage (5 min)"),
    ("19", "Apply evening moisturizer"),
    ("20", "Drink 2 glasses of water"),
    ("22", "Light exercise (yoga/pilates)"),
];

/// Post-scan base: night
static SCAN_BASE_NIGHT: &[(&str, &str)] = &[
    ("25", "Finish eating 2 hours before bed"),
    ("26", "Reduce light exposure"),
    ("27", "Stop using phone 30 min before"),
    ("28", "Double cleanse (oil + water)"),
    ("29", "Apply toner/essence"),
    ("30", "Apply night serum/treatment"),
    ("31", "Eye cream application"),
    ("32", "Lip balm/treatment"),
    ("34", "Final water intake (before bed)"),
    ("35", "Meditation/breathing exercise"),
    ("37", "Get 7-8 hours of quality sleep"),
];

/// Detailed plan steps: morning
static PLAN_MORNING: &[(&str, &str)] = &[
    ("m1", "Splash face with cold water (1 min)"),
    ("m2", "Gentle cleanser - massage for 1 minute"),
    ("m3", "Rinse with lukewarm water"),
    ("m4", "Pat dry with soft towel"),
    ("m5", "Apply toner/essence"),
    ("m6", "Apply targeted serum"),
    ("m7", "Apply moisturizer (appropriate for skin type)"),
    ("m8", "Apply sunscreen SPF 30+ (wait 15 min)"),
    ("m9", "Drink a glass of water"),
    ("m10", "Light facial massage or gua sha (5 min)"),
];

/// Detailed plan steps: evening
static PLAN_EVENING: &[(&str, &str)] = &[
    ("e1", "Reduce screen time 30 min before routine"),
    ("e2", "Wash hands thoroughly"),
    ("e3", "Oil cleanse - massage for 2 minutes"),
    ("e4", "Add water and emulsify (1 min)"),
    ("e5", "Rinse thoroughly"),
    ("e6", "Water cleanse - gentle massage for 1 minute"),
    ("e7", "Pat dry gently"),
    ("e8", "Apply toner/essence"),
    ("e9", "Apply treatment serum/ampoule"),
    ("e10", "Light facial massage (5 min)"),
    ("e11", "Apply evening moisturizer"),
    ("e12", "Drink herbal tea"),
];

/// Detailed plan steps: night
static PLAN_NIGHT: &[(&str, &str)] = &[
    ("n1", "Stop using phone 30-60 min before bed"),
    ("n2", "Wash hands and remove makeup/sunscreen"),
    ("n3", "Oil cleanse - gentle massage for 2 minutes"),
    ("n4", "Emulsify and rinse"),
    ("n5", "Water cleanse - massage for 1 minute"),
    ("n6", "Pat dry"),
    ("n7", "Apply toner/essence on damp skin"),
    ("n8", "Apply night serum/ampoule"),
    ("n9", "Apply eye cream with gentle tapping"),
    ("n10", "Apply rich night moisturizer/sleeping mask"),
    ("n11", "Lip treatment (if needed)"),
    ("n12", "Final water intake (before bed)"),
    ("n13", "Meditation/breathing exercise (5 min)"),
    ("n14", "Aim for 7-8 hours of quality sleep"),
];

static DEFAULT_ROUTINES: Lazy<RoutineSet> = Lazy::new(|| RoutineSet {
    morning: TaskList::from_pairs(DEFAULT_MORNING),
    evening: TaskList::from_pairs(DEFAULT_EVENING),
    night: TaskList::from_pairs(DEFAULT_NIGHT),
});

static SCAN_BASE_ROUTINES: Lazy<RoutineSet> = Lazy::new(|| RoutineSet {
    morning: TaskList::from_pairs(SCAN_BASE_MORNING),
    evening: TaskList::from_pairs(SCAN_BASE_EVENING),
    night: TaskList::from_pairs(SCAN_BASE_NIGHT),
});

static PLAN_STEPS: Lazy<RoutineSet> = Lazy::new(|| RoutineSet {
    morning: TaskList::from_pairs(PLAN_MORNING),
    evening: TaskList::from_pairs(PLAN_EVENING),
    night: TaskList::from_pairs(PLAN_NIGHT),
});

/// Fresh copy of the first-run default routine (all tasks incomplete)
#[must_use]
pub fn default_routines() -> RoutineSet {
    DEFAULT_ROUTINES.clone()
}

/// Fresh copy of the post-scan base routine personalization starts from
#[must_use]
pub fn scan_base_routines() -> RoutineSet {
    SCAN_BASE_ROUTINES.clone()
}

/// Fresh copy of the detailed daily-plan step lists
#[must_use]
pub fn plan_steps() -> RoutineSet {
    PLAN_STEPS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_sizes() {
        let set = default_routines();
        assert_eq!(set.morning.len(), 12);
        assert_eq!(set.evening.len(), 12);
        assert_eq!(set.night.len(), 13);
    }

    #[test]
    fn default_catalog_starts_incomplete() {
        assert!(default_routines().all_incomplete());
    }

    #[test]
    fn scan_base_is_smaller_than_default() {
        let set = scan_base_routines();
        assert_eq!(set.morning.len(), 10);
        assert_eq!(set.evening.len(), 9);
        assert_eq!(set.night.len(), 11);
        // The asymmetry is given product behavior: no vitamins, no walks.
        assert!(set.morning.get("12").is_none());
        assert!(set.evening.get("21").is_none());
    }

    #[test]
    fn plan_step_sizes() {
        let set = plan_steps();
        assert_eq!(set.morning.len(), 10);
        assert_eq!(set.evening.len(), 12);
        assert_eq!(set.night.len(), 14);
    }

    #[test]
    fn ids_unique_within_each_list() {
        for set in [default_routines(), scan_base_routines(), plan_steps()] {
            for period in Period::ALL {
                let list = set.period(period);
                for task in list.iter() {
                    let count = list.iter().filter(|t| t.id == task.id).count();
                    assert_eq!(count, 1, "duplicate id {} in {period}", task.id);
                }
            }
        }
    }
}
