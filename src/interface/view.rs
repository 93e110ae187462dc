use std::time::Instant;

use crate::interface::notify::{Notice, NoticeBoard, NoticeLevel};
use crate::interface::render::ResultsText;

/// Display capability the controller drives.
///
/// Keeps all terminal output behind one seam so tests can substitute a
/// recording double.
pub trait View {
    fn show_loading(&mut self);

    /// Always called once a backend call settles, success or failure.
    fn hide_loading(&mut self);

    fn render_results(&mut self, text: &ResultsText);

    /// Overwrite only the food-suggestions display.
    fn set_food_suggestions(&mut self, text: &str);

    fn show_bmi(&mut self, label: &str);

    fn notify(&mut self, notice: Notice);
}

/// Plain stdout view in the style of the rest of the terminal output.
#[derive(Debug, Default)]
pub struct TerminalView {
    board: NoticeBoard,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire stale notices; called between menu actions.
    pub fn tick(&mut self) {
        self.board.sweep(Instant::now());
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.board.clear();
    }
}

impl View for TerminalView {
    fn show_loading(&mut self) {
        println!();
        println!("Calculating...");
    }

    fn hide_loading(&mut self) {
        // Nothing to clear on a line-oriented terminal.
    }

    fn render_results(&mut self, text: &ResultsText) {
        println!();
        println!("=== Daily Targets ===");
        println!();
        println!("  Calories: {}", text.calories);
        println!("  Protein:  {}", text.protein);
        println!("  Carbs:    {}", text.carbs);
        println!("  Fats:     {}", text.fats);
        println!("  Fiber:    {}", text.fiber);
        println!("  Steps:    {}", text.steps);
        println!();
        println!("  BMR: {} | TDEE: {}", text.bmr, text.tdee);
        println!();
        println!("=== Meal Plan ===");
        println!();
        println!("{}", text.meal_plan);
        println!("=== Food Suggestions ===");
        println!();
        println!("{}", text.food_suggestions);
        println!();
        println!("=== Workout Advice ===");
        println!();
        println!("{}", text.workout_advice);
        println!();
    }

    fn set_food_suggestions(&mut self, text: &str) {
        println!();
        println!("=== Food Suggestions ===");
        println!();
        println!("{}", text);
        println!();
    }

    fn show_bmi(&mut self, label: &str) {
        println!("  {}", label);
    }

    fn notify(&mut self, notice: Notice) {
        let tag = match notice.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        println!("[{}] {}", tag, notice.message);
        self.board.post(notice, Instant::now());
    }
}
