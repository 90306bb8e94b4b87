use chrono::{Local, NaiveDate};
use tauri::State;

use crate::{
    chart::{chart_series, ChartSeries},
    db::HistoryFilter,
    engine::{self, IndexResult, Period},
    models::{FoodCategory, FoodEntry, FoodInput, Goal, GoalInput, Reading, ReadingInput},
    report::{build_report, Report, ReportKind},
    settings::UserSettings,
    AppState,
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn resolve_period(
    state: &AppState,
    start: Option<String>,
    end: Option<String>,
) -> Result<Period, String> {
    let settings = state.settings.get();
    Period::resolve(
        start.as_deref(),
        end.as_deref(),
        settings.default_period_days,
        today(),
    )
    .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn add_reading(
    state: State<'_, AppState>,
    input: ReadingInput,
) -> Result<Reading, String> {
    state.db.insert_reading(input).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_reading(state: State<'_, AppState>, reading_id: String) -> Result<bool, String> {
    state
        .db
        .delete_reading(&reading_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_readings(
    state: State<'_, AppState>,
    filter: Option<HistoryFilter>,
) -> Result<Vec<Reading>, String> {
    state
        .db
        .reading_history(filter.unwrap_or_default())
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn add_goal(state: State<'_, AppState>, input: GoalInput) -> Result<Goal, String> {
    state
        .db
        .insert_goal(input, today())
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn complete_goal(
    state: State<'_, AppState>,
    goal_id: String,
) -> Result<Option<Goal>, String> {
    state
        .db
        .complete_goal(&goal_id, today())
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_goal(state: State<'_, AppState>, goal_id: String) -> Result<bool, String> {
    state.db.delete_goal(&goal_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_goals(state: State<'_, AppState>) -> Result<Vec<Goal>, String> {
    state.db.get_goals().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn add_food(state: State<'_, AppState>, input: FoodInput) -> Result<FoodEntry, String> {
    state.db.insert_food(input).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_food(state: State<'_, AppState>, food_id: String) -> Result<bool, String> {
    state.db.delete_food(&food_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_foods(
    state: State<'_, AppState>,
    category: Option<FoodCategory>,
) -> Result<Vec<FoodEntry>, String> {
    state.db.get_foods(category).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn compute_index(
    state: State<'_, AppState>,
    start: Option<String>,
    end: Option<String>,
) -> Result<IndexResult, String> {
    let period = resolve_period(&state, start, end)?;
    let preset = state.settings.get().index_preset.preset();
    let readings = state.db.get_readings().await.map_err(|e| e.to_string())?;
    Ok(engine::compute_index(&readings, &period, &preset))
}

#[tauri::command]
pub async fn compute_index_last_days(
    state: State<'_, AppState>,
    days: Option<u32>,
) -> Result<IndexResult, String> {
    let settings = state.settings.get();
    let days = days.unwrap_or(settings.default_period_days);
    let readings = state.db.get_readings().await.map_err(|e| e.to_string())?;
    Ok(engine::compute_index_last_days(
        &readings,
        days,
        today(),
        &settings.index_preset.preset(),
    ))
}

#[tauri::command]
pub async fn get_chart_series(
    state: State<'_, AppState>,
    start: Option<String>,
    end: Option<String>,
) -> Result<ChartSeries, String> {
    let period = resolve_period(&state, start, end)?;
    let readings = state.db.get_readings().await.map_err(|e| e.to_string())?;
    Ok(chart_series(&readings, &period))
}

#[tauri::command]
pub async fn generate_report(
    state: State<'_, AppState>,
    start: Option<String>,
    end: Option<String>,
    kind: Option<ReportKind>,
) -> Result<Report, String> {
    let period = resolve_period(&state, start, end)?;
    let preset = state.settings.get().report_preset.preset();
    let readings = state.db.get_readings().await.map_err(|e| e.to_string())?;
    Ok(build_report(
        &readings,
        &period,
        kind.unwrap_or_default(),
        &preset,
        today(),
    ))
}

#[tauri::command]
pub async fn seed_demo_data(state: State<'_, AppState>) -> Result<(), String> {
    state
        .db
        .seed_demo_data(today())
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> Result<UserSettings, String> {
    Ok(state.settings.get())
}

#[tauri::command]
pub fn update_settings(settings: UserSettings, state: State<AppState>) -> Result<(), String> {
    state.settings.update(settings).map_err(|e| e.to_string())
}
