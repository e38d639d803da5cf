// Year Glance
// Main entry point

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use chrono::{Datelike, Local};

use year_glance::models::settings::Settings;
use year_glance::services::data_loader::load_year_bundle;
use year_glance::services::session::YearSession;
use year_glance::services::settings::SettingsService;
use year_glance::ui_egui::YearGlanceApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Year Glance");

    let settings_service = match SettingsService::from_project_dirs() {
        Ok(service) => Some(service),
        Err(err) => {
            log::warn!("Settings will not be persisted: {}", err);
            None
        }
    };
    let settings = match settings_service.as_ref().map(SettingsService::load) {
        Some(Ok(settings)) => settings,
        Some(Err(err)) => {
            log::warn!("Using default settings: {:#}", anyhow::Error::new(err));
            Settings::default()
        }
        None => Settings::default(),
    };

    // A data file on the command line wins over the configured one
    let data_file = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.data_file.clone());
    let fallback_year = settings.default_year.unwrap_or_else(|| Local::now().year());

    let session = match data_file {
        Some(path) => {
            let bundle = load_year_bundle(&path)
                .with_context(|| format!("Failed to load year data from {}", path.display()))?;
            YearSession::from_bundle(bundle, fallback_year)
        }
        None => {
            log::info!("No data file given, showing an empty year");
            YearSession::new(fallback_year)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Year Glance")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Year Glance",
        options,
        Box::new(move |cc| {
            Ok(Box::new(YearGlanceApp::new(
                cc,
                settings,
                settings_service,
                session,
            )))
        }),
    )
    .map_err(|err| anyhow!("Failed to run the window: {}", err))
}
