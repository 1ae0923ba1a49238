mod bootstrap;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use survey_core::settings::Settings;
use survey_data::analysis::build_report;
use survey_data::filter::respondent_names;
use survey_data::quality::check_quality;
use survey_runtime::data_manager::DataManager;

fn main() -> Result<ExitCode> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Survey Insights v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "File: {}, Section: {}, Format: {}",
        settings.file.display(),
        settings.section,
        settings.format
    );

    let section = settings.section()?;
    let mut manager = DataManager::new(&settings.file);

    let table = match manager.get_table(false) {
        Ok(table) => table,
        Err(e) if e.is_schema_failure() => {
            eprint!("{}", report::failure_message(&e));
            return Ok(ExitCode::from(2));
        }
        Err(e) => {
            // Empty state.
            print!("{}", report::failure_message(&e));
            return Ok(ExitCode::SUCCESS);
        }
    };

    if settings.list_people {
        let names = respondent_names(table);
        if settings.json_output() {
            println!("{}", serde_json::to_string_pretty(&names)?);
        } else {
            print!("{}", report::render_people(&names));
        }
        return Ok(ExitCode::SUCCESS);
    }

    if settings.quality {
        let quality = check_quality(table);
        if settings.json_output() {
            println!("{}", serde_json::to_string_pretty(&quality)?);
        } else {
            print!("{}", report::render_quality(&quality));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let known = respondent_names(table);
    for person in settings.people.iter().filter(|p| !known.contains(p)) {
        tracing::warn!("No responses from '{}'", person);
    }

    let survey_report = build_report(table, settings.people.as_slice(), section);
    if settings.json_output() {
        println!("{}", survey_report.to_json()?);
    } else {
        print!("{}", report::render_report(&survey_report));
    }

    Ok(ExitCode::SUCCESS)
}
