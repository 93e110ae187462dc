use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chrono::NaiveDate;

use health_planner_rs::backend::NutritionBackend;
use health_planner_rs::controller::{FormController, SessionState};
use health_planner_rs::error::{HealthError, Result};
use health_planner_rs::interface::{Notice, NoticeLevel, ResultsText, View};
use health_planner_rs::models::{
    CalculationResult, FormRecord, MacroTargets, SavedPlan, SmartSuggestionsRequest,
};
use health_planner_rs::state::{KeyValueStore, MemoryStore, FORM_SNAPSHOT_KEY};

#[derive(Default)]
struct FakeInner {
    calculate_responses: VecDeque<Result<CalculationResult>>,
    suggestion_responses: VecDeque<Result<String>>,
    calculate_calls: Vec<FormRecord>,
    suggestion_calls: Vec<SmartSuggestionsRequest>,
}

/// Scripted backend double; clones share the same script and call log.
#[derive(Clone, Default)]
struct FakeBackend {
    inner: Rc<RefCell<FakeInner>>,
}

impl FakeBackend {
    fn push_calculate(&self, response: Result<CalculationResult>) {
        self.inner.borrow_mut().calculate_responses.push_back(response);
    }

    fn push_suggestions(&self, response: Result<String>) {
        self.inner.borrow_mut().suggestion_responses.push_back(response);
    }

    fn calculate_calls(&self) -> Vec<FormRecord> {
        self.inner.borrow().calculate_calls.clone()
    }

    fn suggestion_calls(&self) -> Vec<SmartSuggestionsRequest> {
        self.inner.borrow().suggestion_calls.clone()
    }
}

impl NutritionBackend for FakeBackend {
    fn calculate(&self, form: &FormRecord) -> Result<CalculationResult> {
        let mut inner = self.inner.borrow_mut();
        inner.calculate_calls.push(form.clone());
        inner
            .calculate_responses
            .pop_front()
            .unwrap_or_else(|| Err(HealthError::Backend("no scripted response".to_string())))
    }

    fn smart_suggestions(&self, request: &SmartSuggestionsRequest) -> Result<String> {
        let mut inner = self.inner.borrow_mut();
        inner.suggestion_calls.push(request.clone());
        inner
            .suggestion_responses
            .pop_front()
            .unwrap_or_else(|| Err(HealthError::Backend("no scripted response".to_string())))
    }
}

/// View double that records every call.
#[derive(Default)]
struct RecordingView {
    loading_shown: u32,
    loading_hidden: u32,
    rendered: Vec<ResultsText>,
    suggestions: Vec<String>,
    bmi_labels: Vec<String>,
    notices: Vec<Notice>,
}

impl View for RecordingView {
    fn show_loading(&mut self) {
        self.loading_shown += 1;
    }

    fn hide_loading(&mut self) {
        self.loading_hidden += 1;
    }

    fn render_results(&mut self, text: &ResultsText) {
        self.rendered.push(text.clone());
    }

    fn set_food_suggestions(&mut self, text: &str) {
        self.suggestions.push(text.to_string());
    }

    fn show_bmi(&mut self, label: &str) {
        self.bmi_labels.push(label.to_string());
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

fn sample_result() -> CalculationResult {
    CalculationResult {
        target_calories: 2255.0,
        macros: MacroTargets {
            protein: 197.0,
            carbs: 169.0,
            fats: 88.0,
            fiber: 32.0,
        },
        steps_goal: 15600,
        bmr: 1648.75,
        tdee: 2555.0,
        meal_plan: r#"{"breakfast":"Oats","lunch":"Salad"}"#.to_string(),
        food_suggestions: "Leafy greens, berries".to_string(),
        workout_advice: "Cardio daily, strength 3x/week".to_string(),
    }
}

fn sample_form() -> FormRecord {
    let mut form = FormRecord::new();
    form.set("age", "30");
    form.set("weight", "70");
    form.set("height", "175");
    form.set("gender", "male");
    form.set("profession", "engineer");
    form.set("lifestyle", "moderately_active");
    form.set("physical_activities", "cycling");
    form.set("health_goals", "weight_loss");
    form.set("food_preferences", "vegetarian");
    form
}

fn make_controller() -> (
    FakeBackend,
    FormController<FakeBackend, MemoryStore, RecordingView>,
) {
    let backend = FakeBackend::default();
    let controller = FormController::new(
        backend.clone(),
        MemoryStore::new(),
        RecordingView::default(),
    );
    (backend, controller)
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn test_submit_success_renders_and_caches() {
    let (backend, mut controller) = make_controller();
    backend.push_calculate(Ok(sample_result()));

    controller.submit(sample_form());

    assert!(controller.has_results());
    let view = controller.view();
    assert_eq!(view.loading_shown, 1);
    assert_eq!(view.loading_hidden, 1);
    assert_eq!(view.rendered.len(), 1);
    assert_eq!(view.rendered[0].calories, "2255");
    assert_eq!(view.rendered[0].steps, "15,600");
    assert_eq!(
        view.rendered[0].meal_plan,
        "Breakfast:\nOats\n\nLunch:\nSalad\n\n"
    );

    // The BMI preview belongs to form entry, not result rendering
    assert!(view.bmi_labels.is_empty());

    // The submitted record carries the derived activity level
    let calls = backend.calculate_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].get("activity_level"), Some("moderately_active"));
}

#[test]
fn test_submit_persists_form_snapshot() {
    let (backend, mut controller) = make_controller();
    backend.push_calculate(Ok(sample_result()));

    controller.submit(sample_form());

    assert!(controller.store().get(FORM_SNAPSHOT_KEY).is_some());
    let restored = controller.restore_form();
    assert_eq!(restored.get("weight"), Some("70"));
    assert_eq!(restored.get("activity_level"), Some("moderately_active"));
}

#[test]
fn test_backend_error_shows_generic_notice() {
    let (backend, mut controller) = make_controller();
    backend.push_calculate(Err(HealthError::Backend("bad input".to_string())));

    controller.submit(sample_form());

    assert!(!controller.has_results());
    let view = controller.view();
    assert!(view.rendered.is_empty());
    assert_eq!(view.loading_hidden, 1);
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].level, NoticeLevel::Error);
    assert_eq!(
        view.notices[0].message,
        "Failed to calculate requirements. Please try again."
    );
    // The backend's own message never reaches the user
    assert!(!view.notices[0].message.contains("bad input"));
}

#[test]
fn test_failed_calculation_preserves_previous_results() {
    let (backend, mut controller) = make_controller();
    backend.push_calculate(Ok(sample_result()));
    backend.push_calculate(Err(HealthError::Backend("down".to_string())));

    controller.submit(sample_form());
    controller.submit(sample_form());

    // Still on the first result
    match controller.state() {
        SessionState::Ready { results, .. } => {
            assert_eq!(results.target_calories, 2255.0);
        }
        SessionState::Idle => panic!("expected Ready state"),
    }
}

#[test]
fn test_regenerate_before_calculation_is_noop() {
    let (backend, mut controller) = make_controller();

    controller.regenerate_suggestions();

    assert!(backend.suggestion_calls().is_empty());
    let view = controller.view();
    assert_eq!(view.loading_shown, 0);
    assert!(view.notices.is_empty());
    assert!(view.suggestions.is_empty());
}

#[test]
fn test_regenerate_overwrites_suggestions_only() {
    let (backend, mut controller) = make_controller();
    backend.push_calculate(Ok(sample_result()));
    backend.push_suggestions(Ok("Fresh picks: lentils, salmon".to_string()));

    controller.submit(sample_form());
    controller.regenerate_suggestions();

    let view = controller.view();
    assert_eq!(view.suggestions, vec!["Fresh picks: lentils, salmon"]);
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].level, NoticeLevel::Success);
    assert_eq!(view.notices[0].message, "Smart suggestions updated!");

    // Cached result keeps its original suggestions text
    match controller.state() {
        SessionState::Ready { results, .. } => {
            assert_eq!(results.food_suggestions, "Leafy greens, berries");
        }
        SessionState::Idle => panic!("expected Ready state"),
    }

    // The request echoed the cached nutrition numbers
    let calls = backend.suggestion_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].current_nutrition.calories, 2255.0);
    assert_eq!(calls[0].current_nutrition.protein, 197.0);
}

#[test]
fn test_regenerate_failure_leaves_display_alone() {
    let (backend, mut controller) = make_controller();
    backend.push_calculate(Ok(sample_result()));
    backend.push_suggestions(Err(HealthError::Backend("down".to_string())));

    controller.submit(sample_form());
    controller.regenerate_suggestions();

    let view = controller.view();
    assert!(view.suggestions.is_empty());
    let last = view.notices.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Error);
    assert_eq!(
        last.message,
        "Failed to generate new suggestions. Please try again."
    );
}

#[test]
fn test_save_before_calculation_is_noop() {
    let (_, mut controller) = make_controller();

    controller.save_plan(date("2026-08-30"));

    assert!(controller.store().keys().is_empty());
    assert!(controller.view().notices.is_empty());
}

#[test]
fn test_save_plan_writes_dated_key() {
    let (backend, mut controller) = make_controller();
    backend.push_calculate(Ok(sample_result()));

    controller.submit(sample_form());
    controller.save_plan(date("2026-08-30"));

    let json = controller.store().get("healthPlan_2026-08-30").unwrap();
    let plan: SavedPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan.date, "2026-08-30");
    assert_eq!(plan.results.target_calories, 2255.0);
    assert_eq!(plan.user_data.get("weight"), Some("70"));

    let last = controller.view().notices.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Success);
}

#[test]
fn test_same_day_save_overwrites_single_slot() {
    let (backend, mut controller) = make_controller();
    backend.push_calculate(Ok(sample_result()));

    let mut second = sample_result();
    second.target_calories = 1800.0;
    backend.push_calculate(Ok(second));

    controller.submit(sample_form());
    controller.save_plan(date("2026-08-30"));

    controller.submit(sample_form());
    controller.save_plan(date("2026-08-30"));

    let plan_keys: Vec<String> = controller
        .store()
        .keys()
        .into_iter()
        .filter(|k| k.starts_with("healthPlan_"))
        .collect();
    assert_eq!(plan_keys, vec!["healthPlan_2026-08-30".to_string()]);

    let json = controller.store().get("healthPlan_2026-08-30").unwrap();
    let plan: SavedPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan.results.target_calories, 1800.0);
}

#[test]
fn test_saves_on_distinct_days_coexist() {
    let (backend, mut controller) = make_controller();
    backend.push_calculate(Ok(sample_result()));

    controller.submit(sample_form());
    controller.save_plan(date("2026-08-29"));
    controller.save_plan(date("2026-08-30"));

    let mut plan_keys: Vec<String> = controller
        .store()
        .keys()
        .into_iter()
        .filter(|k| k.starts_with("healthPlan_"))
        .collect();
    plan_keys.sort();
    assert_eq!(
        plan_keys,
        vec![
            "healthPlan_2026-08-29".to_string(),
            "healthPlan_2026-08-30".to_string()
        ]
    );
}
