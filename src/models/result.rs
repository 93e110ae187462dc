use serde::{Deserialize, Serialize};

use crate::models::FormRecord;

/// Macronutrient targets in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
}

/// Full payload returned by the `/calculate` endpoint.
///
/// `meal_plan` is a string that may itself be a JSON object of
/// meal-name -> description, or plain text; the renderer decides which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub target_calories: f64,
    pub macros: MacroTargets,
    pub steps_goal: u64,
    pub bmr: f64,
    pub tdee: f64,
    pub meal_plan: String,
    pub food_suggestions: String,
    pub workout_advice: String,
}

/// The slice of a result echoed back when asking for fresh suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutritionSummary {
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            calories: result.target_calories,
            protein: result.macros.protein,
            carbs: result.macros.carbs,
            fats: result.macros.fats,
        }
    }
}

/// Body of a `/smart_suggestions` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartSuggestionsRequest {
    pub user_data: FormRecord,
    pub current_nutrition: NutritionSummary,
}

/// A plan persisted under a date-namespaced key, one slot per calendar day.
///
/// The `userData` wire name matches the stored payloads written by earlier
/// versions of the app, so old saves stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub date: String,
    #[serde(rename = "userData")]
    pub user_data: FormRecord,
    pub results: CalculationResult,
}
