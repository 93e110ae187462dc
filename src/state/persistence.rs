use crate::error::{HealthError, Result};
use crate::models::{FormRecord, SavedPlan};
use crate::state::KeyValueStore;

/// Single slot for the latest form snapshot, overwritten on every change.
pub const FORM_SNAPSHOT_KEY: &str = "healthFormData";

/// Prefix for date-namespaced saved plans, one slot per calendar day.
pub const PLAN_KEY_PREFIX: &str = "healthPlan_";

pub fn plan_key(date: &str) -> String {
    format!("{}{}", PLAN_KEY_PREFIX, date)
}

/// Persist the whole form snapshot under the fixed key.
pub fn save_form_snapshot(store: &mut dyn KeyValueStore, form: &FormRecord) -> Result<()> {
    let json = serde_json::to_string(form)?;
    store.set(FORM_SNAPSHOT_KEY, &json)
}

/// Restore the last form snapshot, if one exists and parses.
///
/// A corrupt snapshot is logged and skipped; the caller falls back to an
/// empty form.
pub fn load_form_snapshot(store: &dyn KeyValueStore) -> Option<FormRecord> {
    let json = store.get(FORM_SNAPSHOT_KEY)?;
    match serde_json::from_str(&json) {
        Ok(form) => Some(form),
        Err(e) => {
            eprintln!("Failed to load saved form data: {}", e);
            None
        }
    }
}

/// Write a plan under its date key, silently overwriting any earlier save
/// from the same day.
pub fn save_plan(store: &mut dyn KeyValueStore, plan: &SavedPlan) -> Result<()> {
    let json = serde_json::to_string(plan)?;
    store.set(&plan_key(&plan.date), &json)
}

pub fn load_plan(store: &dyn KeyValueStore, date: &str) -> Result<SavedPlan> {
    let json = store
        .get(&plan_key(date))
        .ok_or_else(|| HealthError::PlanNotFound(date.to_string()))?;
    Ok(serde_json::from_str(&json)?)
}

/// Remove the form snapshot, if any.
pub fn clear_form_snapshot(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(FORM_SNAPSHOT_KEY)
}

/// Remove every saved plan, returning how many were deleted.
pub fn clear_plans(store: &mut dyn KeyValueStore) -> Result<usize> {
    let keys: Vec<String> = store
        .keys()
        .into_iter()
        .filter(|k| k.starts_with(PLAN_KEY_PREFIX))
        .collect();

    for key in &keys {
        store.remove(key)?;
    }
    Ok(keys.len())
}

/// Dates of all saved plans, in key order.
pub fn saved_plan_dates(store: &dyn KeyValueStore) -> Vec<String> {
    store
        .keys()
        .into_iter()
        .filter_map(|k| k.strip_prefix(PLAN_KEY_PREFIX).map(String::from))
        .collect()
}
