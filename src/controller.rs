use chrono::NaiveDate;

use crate::backend::NutritionBackend;
use crate::interface::notify::Notice;
use crate::interface::render;
use crate::interface::view::View;
use crate::models::{
    CalculationResult, FormRecord, NutritionSummary, SavedPlan, SmartSuggestionsRequest,
};
use crate::state::{self, KeyValueStore};

const CALCULATE_FAILED_MSG: &str = "Failed to calculate requirements. Please try again.";
const SUGGESTIONS_FAILED_MSG: &str = "Failed to generate new suggestions. Please try again.";
const SUGGESTIONS_UPDATED_MSG: &str = "Smart suggestions updated!";
const PLAN_SAVED_MSG: &str = "Plan saved successfully! You can access it anytime.";
const SAVE_FAILED_MSG: &str = "Failed to save plan. Please try again.";

/// Externally visible controller mode.
///
/// Explicit rather than inferred from nullable fields: a failed call leaves
/// the state exactly where it was.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Ready {
        user_data: FormRecord,
        results: CalculationResult,
    },
}

/// Wires the form to the backend and renders what comes back.
///
/// Owns the last submitted form and result so the regenerate and save
/// actions can reuse them; both are no-ops while `Idle`.
pub struct FormController<B, S, V> {
    backend: B,
    store: S,
    view: V,
    state: SessionState,
}

impl<B, S, V> FormController<B, S, V>
where
    B: NutritionBackend,
    S: KeyValueStore,
    V: View,
{
    pub fn new(backend: B, store: S, view: V) -> Self {
        Self {
            backend,
            store,
            view,
            state: SessionState::Idle,
        }
    }

    /// The last persisted form snapshot, or an empty form.
    pub fn restore_form(&self) -> FormRecord {
        state::load_form_snapshot(&self.store).unwrap_or_default()
    }

    /// Submit a filled form: derive the activity level, persist the
    /// snapshot, call the backend, and render on success.
    ///
    /// The loading indicator is hidden once the call settles, whatever the
    /// outcome. Any failure surfaces as one generic notice; the underlying
    /// error is only logged.
    pub fn submit(&mut self, mut form: FormRecord) {
        form.derive_activity_level();

        if let Err(e) = state::save_form_snapshot(&mut self.store, &form) {
            eprintln!("Failed to persist form snapshot: {}", e);
        }

        self.view.show_loading();
        let outcome = self.backend.calculate(&form);
        self.view.hide_loading();

        match outcome {
            Ok(results) => {
                self.view.render_results(&render::results_text(&results));
                self.state = SessionState::Ready {
                    user_data: form,
                    results,
                };
            }
            Err(e) => {
                eprintln!("Calculation failed: {}", e);
                self.view.notify(Notice::error(CALCULATE_FAILED_MSG));
            }
        }
    }

    /// Ask the backend for fresh food suggestions using the cached form and
    /// result. No-op while `Idle`.
    ///
    /// A successful response overwrites only the suggestions display; the
    /// stored result is untouched.
    pub fn regenerate_suggestions(&mut self) {
        let SessionState::Ready { user_data, results } = &self.state else {
            return;
        };

        let request = SmartSuggestionsRequest {
            user_data: user_data.clone(),
            current_nutrition: NutritionSummary::from_result(results),
        };

        self.view.show_loading();
        let outcome = self.backend.smart_suggestions(&request);
        self.view.hide_loading();

        match outcome {
            Ok(suggestions) => {
                self.view.set_food_suggestions(&suggestions);
                self.view.notify(Notice::success(SUGGESTIONS_UPDATED_MSG));
            }
            Err(e) => {
                eprintln!("Suggestions call failed: {}", e);
                self.view.notify(Notice::error(SUGGESTIONS_FAILED_MSG));
            }
        }
    }

    /// Save the current bundle under the given date, one slot per day,
    /// overwriting an earlier save without comment. No-op while `Idle`.
    pub fn save_plan(&mut self, date: NaiveDate) {
        let SessionState::Ready { user_data, results } = &self.state else {
            return;
        };

        let plan = SavedPlan {
            date: date.format("%Y-%m-%d").to_string(),
            user_data: user_data.clone(),
            results: results.clone(),
        };

        match state::save_plan(&mut self.store, &plan) {
            Ok(()) => self.view.notify(Notice::success(PLAN_SAVED_MSG)),
            Err(e) => {
                eprintln!("Plan save failed: {}", e);
                self.view.notify(Notice::error(SAVE_FAILED_MSG));
            }
        }
    }

    pub fn has_results(&self) -> bool {
        matches!(self.state, SessionState::Ready { .. })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
