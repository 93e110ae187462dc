pub mod notify;
pub mod prompts;
pub mod render;
pub mod view;

pub use notify::{Notice, NoticeBoard, NoticeLevel};
pub use prompts::{collect_form, prompt_action, prompt_yes_no, Action};
pub use render::{format_meal_plan, format_steps, results_text, ResultsText};
pub use view::{TerminalView, View};
