use chrono::NaiveDate;

use crate::calendar::{self, CalendarError};
use crate::config::EngineConfig;
use crate::models::{AnalysisReport, CalendarResponse, CycleData};
use crate::{alerts, frequency, phase, recommendation, stats};

/// Month view payload for `month0` (0 = January).
pub fn calendar(
    config: &EngineConfig,
    data: &CycleData,
    year: i32,
    month0: u32,
    today: NaiveDate,
) -> Result<CalendarResponse, CalendarError> {
    let calendar_data =
        calendar::generate_month(config, year, month0, &data.profile, &data.daily_logs, today)?;

    Ok(CalendarResponse {
        year,
        month: month0,
        calendar_data,
    })
}

/// Analysis payload: current phase, history statistics, symptom ranking,
/// and the tips and alerts derived from them.
pub fn analyze(config: &EngineConfig, data: &CycleData, today: NaiveDate) -> AnalysisReport {
    let profile = &data.profile;

    let current = phase::calculate_phase(
        config,
        profile.last_period_date,
        profile.avg_cycle_length,
        profile.avg_period_length,
        today,
    );
    let next_period = phase::next_period(
        profile.last_period_date,
        profile.avg_cycle_length,
        profile.avg_period_length,
        today,
    );
    let stats = stats::aggregate(config, &data.cycles);
    let frequencies = frequency::analyze(config, &data.daily_logs);

    let symptom_names: Vec<&str> = frequencies
        .symptom_frequency
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    let recommendations = recommendation::recommend(
        current.phase,
        stats.regularity,
        &symptom_names,
        &profile.menstrual_status,
    );
    let health_alerts = alerts::alerts(
        config,
        stats.regularity,
        stats.variation,
        stats.avg_cycle_length,
        &profile.menstrual_status,
        stats.total_cycles,
    );

    tracing::debug!(
        phase = ?current.phase,
        cycle_day = current.cycle_day,
        recommendations = recommendations.len(),
        alerts = health_alerts.len(),
        "analysis built"
    );

    AnalysisReport {
        current_phase: current.phase,
        cycle_day: current.cycle_day,
        fertile_window: current.fertile_window,
        next_period,
        regularity: stats.regularity,
        variation: stats.variation,
        avg_cycle_length: stats.avg_cycle_length,
        avg_period_length: stats.avg_period_length,
        total_cycles: stats.total_cycles,
        symptom_frequency: frequencies.symptom_frequency,
        mood_frequency: frequencies.mood_frequency,
        recommendations,
        health_alerts,
    }
}
