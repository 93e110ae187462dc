pub mod backend;
pub mod cli;
pub mod controller;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod vitals;

pub use controller::{FormController, SessionState};
pub use error::{HealthError, Result};
pub use models::{CalculationResult, FormRecord, SavedPlan};
