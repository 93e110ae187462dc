use dialoguer::{Confirm, Input, Select};

use crate::error::{HealthError, Result};
use crate::interface::render::fmt_number;
use crate::interface::view::View;
use crate::models::FormRecord;
use crate::vitals;

const GENDER_OPTIONS: [&str; 2] = ["male", "female"];

const LIFESTYLE_OPTIONS: [&str; 5] = [
    "sedentary",
    "lightly_active",
    "moderately_active",
    "very_active",
    "extremely_active",
];

const GOAL_OPTIONS: [&str; 6] = [
    "weight_loss",
    "fat_loss",
    "muscle_gain",
    "general_wellness",
    "diabetic_friendly",
    "heart_health",
];

/// Choice offered after a successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Regenerate,
    Save,
    NewCalculation,
    Quit,
}

/// Walk through every form field, pre-filled from the last snapshot.
///
/// Weight, height, and age are clamped into range without comment; once
/// both weight and height are in, the BMI preview goes to the view.
pub fn collect_form(defaults: &FormRecord, view: &mut dyn View) -> Result<FormRecord> {
    let mut form = FormRecord::new();

    let age = prompt_clamped("Age (years)", defaults.get("age"), vitals::clamp_age)?;
    form.set("age", fmt_number(age));

    let weight = prompt_clamped("Weight (kg)", defaults.get("weight"), vitals::clamp_weight)?;
    form.set("weight", fmt_number(weight));

    let height = prompt_clamped("Height (cm)", defaults.get("height"), vitals::clamp_height)?;
    form.set("height", fmt_number(height));

    if let Some(label) = vitals::bmi_label(weight, height) {
        view.show_bmi(&label);
    }

    form.set(
        "gender",
        prompt_choice("Gender", &GENDER_OPTIONS, defaults.get("gender"))?,
    );
    form.set(
        "profession",
        prompt_text("Profession", defaults.get("profession"))?,
    );
    form.set(
        "lifestyle",
        prompt_choice("Lifestyle", &LIFESTYLE_OPTIONS, defaults.get("lifestyle"))?,
    );
    form.set(
        "physical_activities",
        prompt_text("Physical activities", defaults.get("physical_activities"))?,
    );
    form.set(
        "health_goals",
        prompt_choice("Health goal", &GOAL_OPTIONS, defaults.get("health_goals"))?,
    );
    form.set(
        "food_preferences",
        prompt_text("Food preferences", defaults.get("food_preferences"))?,
    );

    Ok(form)
}

/// Prompt for a number and silently pull it into range.
fn prompt_clamped(prompt: &str, default: Option<&str>, clamp: fn(f64) -> f64) -> Result<f64> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(value) = default {
        input = input.default(value.to_string());
    }
    let raw = input.interact_text()?;

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| HealthError::InvalidInput(format!("Invalid number: {}", raw.trim())))?;

    Ok(clamp(value))
}

fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(value) = default {
        input = input.default(value.to_string());
    }
    Ok(input.interact_text()?)
}

fn prompt_choice(prompt: &str, options: &[&str], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| options.iter().position(|o| *o == d))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default_index)
        .interact()?;

    Ok(options[selection].to_string())
}

/// Post-calculation action menu.
pub fn prompt_action() -> Result<Action> {
    let options = [
        "Regenerate suggestions",
        "Save today's plan",
        "Start a new calculation",
        "Quit",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Action::Regenerate,
        1 => Action::Save,
        2 => Action::NewCalculation,
        _ => Action::Quit,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
