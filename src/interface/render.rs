use crate::models::CalculationResult;

/// Display strings for every metric of a calculation result.
///
/// Formatting is done here so a view only has to place text; the test suite
/// checks these strings without a terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsText {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub fiber: String,
    pub steps: String,
    pub bmr: String,
    pub tdee: String,
    pub meal_plan: String,
    pub food_suggestions: String,
    pub workout_advice: String,
}

/// Format a full result for display.
///
/// Macros get a "g" suffix, the steps goal gets thousands separators, and
/// the meal plan goes through `format_meal_plan`.
pub fn results_text(result: &CalculationResult) -> ResultsText {
    ResultsText {
        calories: fmt_number(result.target_calories),
        protein: format!("{}g", fmt_number(result.macros.protein)),
        carbs: format!("{}g", fmt_number(result.macros.carbs)),
        fats: format!("{}g", fmt_number(result.macros.fats)),
        fiber: format!("{}g", fmt_number(result.macros.fiber)),
        steps: format_steps(result.steps_goal),
        bmr: fmt_number(result.bmr),
        tdee: fmt_number(result.tdee),
        meal_plan: format_meal_plan(&result.meal_plan),
        food_suggestions: result.food_suggestions.clone(),
        workout_advice: result.workout_advice.clone(),
    }
}

/// Reformat a meal plan string for display.
///
/// If the string parses as a JSON object, each entry becomes a
/// "Meal:\ndescription\n\n" block in insertion order, with only the first
/// character of the meal name uppercased. Anything else is shown verbatim.
pub fn format_meal_plan(text: &str) -> String {
    let Ok(serde_json::Value::Object(plan)) = serde_json::from_str(text) else {
        return text.to_string();
    };

    let mut formatted = String::new();
    for (meal, description) in &plan {
        let description = match description {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        formatted.push_str(&capitalize_first(meal));
        formatted.push_str(":\n");
        formatted.push_str(&description);
        formatted.push_str("\n\n");
    }
    formatted
}

/// Steps goal with comma thousands separators, e.g. 15600 -> "15,600".
pub fn format_steps(steps: u64) -> String {
    let digits = steps.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display a number without a trailing ".0" when it is whole.
pub fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
