mod persistence;
mod store;

pub use persistence::{
    clear_form_snapshot, clear_plans, load_form_snapshot, load_plan, plan_key, save_form_snapshot,
    save_plan, saved_plan_dates, FORM_SNAPSHOT_KEY, PLAN_KEY_PREFIX,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
