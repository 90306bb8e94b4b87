//! Personal blood-glucose log: record store, statistics engine and the
//! desktop shell that exposes them.

pub mod chart;
pub mod db;
pub mod demo;
pub mod engine;
pub mod glycemic_index;
pub mod models;
pub mod report;
pub mod settings;
mod utils;
pub mod validation;

#[cfg(feature = "desktop")]
mod commands;

pub use chart::{chart_series, ChartPoint, ChartSeries};
pub use db::{Database, HistoryFilter};
pub use engine::{
    classify, compute_index, compute_index_last_days, compute_statistics, detect_trend, select,
    ClassificationResult, ControlTier, IndexResult, Period, PresetKind, StatisticsResult,
    ThresholdPreset, Trend,
};
pub use models::{FoodEntry, Goal, Reading};
pub use report::{build_report, Report, ReportKind};
pub use settings::{SettingsStore, UserSettings};

#[cfg(feature = "desktop")]
pub(crate) struct AppState {
    pub(crate) db: Database,
    pub(crate) settings: SettingsStore,
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::*;
    use tauri::Manager;

    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Glucolog starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let database = Database::new(app_data_dir.join("glucolog.sqlite3"))?;
                let settings_store = SettingsStore::new(app_data_dir.join("settings.json"))?;

                app.manage(AppState {
                    db: database,
                    settings: settings_store,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            add_reading,
            delete_reading,
            list_readings,
            add_goal,
            complete_goal,
            delete_goal,
            list_goals,
            add_food,
            delete_food,
            list_foods,
            compute_index,
            compute_index_last_days,
            get_chart_series,
            generate_report,
            seed_demo_data,
            get_settings,
            update_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
