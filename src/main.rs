use chrono::Local;
use clap::Parser;

use health_planner_rs::backend::HttpBackend;
use health_planner_rs::cli::{Cli, Command};
use health_planner_rs::controller::FormController;
use health_planner_rs::error::{HealthError, Result};
use health_planner_rs::interface::{
    collect_form, prompt_action, prompt_yes_no, results_text, Action, TerminalView, View,
};
use health_planner_rs::state::{self, FileStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.server, &cli.file),
        Command::Show { date } => cmd_show(&cli.file, date.as_deref()),
        Command::Reset { form, plans } => cmd_reset(&cli.file, form, plans),
    }
}

/// Run the interactive form and the post-calculation action loop.
fn cmd_plan(server: &str, file_path: &str) -> Result<()> {
    let store = FileStore::open(file_path)?;
    let backend = HttpBackend::new(server)?;
    let mut controller = FormController::new(backend, store, TerminalView::new());

    loop {
        let defaults = controller.restore_form();
        if !defaults.is_empty() {
            println!("Restored your last form values.");
        }

        let form = collect_form(&defaults, controller.view_mut())?;
        controller.submit(form);

        if !controller.has_results() {
            let retry = prompt_yes_no("Try again?", true)?;
            if !retry {
                return Ok(());
            }
            continue;
        }

        loop {
            controller.view_mut().tick();

            match prompt_action()? {
                Action::Regenerate => controller.regenerate_suggestions(),
                Action::Save => controller.save_plan(Local::now().date_naive()),
                Action::NewCalculation => break,
                Action::Quit => return Ok(()),
            }
        }
    }
}

/// Print the saved plan for a date (today when omitted).
fn cmd_show(file_path: &str, date: Option<&str>) -> Result<()> {
    let store = FileStore::open(file_path)?;
    let date = match date {
        Some(d) => d.to_string(),
        None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };

    match state::load_plan(&store, &date) {
        Ok(plan) => {
            println!("Plan saved on {}", plan.date);
            let mut view = TerminalView::new();
            view.render_results(&results_text(&plan.results));
            Ok(())
        }
        Err(HealthError::PlanNotFound(_)) => {
            println!("No plan saved for {}.", date);
            let dates = state::saved_plan_dates(&store);
            if !dates.is_empty() {
                println!("Saved plans: {}", dates.join(", "));
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Clear the form snapshot and/or all saved plans.
fn cmd_reset(file_path: &str, form: bool, plans: bool) -> Result<()> {
    if !form && !plans {
        println!("Please specify at least one reset option:");
        println!("  --form   Remove the saved form snapshot");
        println!("  --plans  Remove all saved plans");
        return Ok(());
    }

    let mut store = FileStore::open(file_path)?;

    if form {
        state::clear_form_snapshot(&mut store)?;
        println!("Form snapshot removed.");
    }

    if plans {
        let removed = state::clear_plans(&mut store)?;
        println!("Removed {} saved plan(s).", removed);
    }

    Ok(())
}
