mod form;
mod result;

pub use form::FormRecord;
pub use result::{
    CalculationResult, MacroTargets, NutritionSummary, SavedPlan, SmartSuggestionsRequest,
};
