mod http;

pub use http::HttpBackend;

use crate::error::Result;
use crate::models::{CalculationResult, FormRecord, SmartSuggestionsRequest};

/// The remote calculation service, treated as an opaque collaborator.
///
/// All of BMR/TDEE, macros, meal planning, and suggestions live behind this
/// seam; tests substitute a scripted double.
pub trait NutritionBackend {
    /// Submit a full form and get the metric bundle back.
    fn calculate(&self, form: &FormRecord) -> Result<CalculationResult>;

    /// Ask for refreshed food suggestions for an existing result.
    fn smart_suggestions(&self, request: &SmartSuggestionsRequest) -> Result<String>;
}
