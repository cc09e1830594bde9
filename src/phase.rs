use chrono::{Duration, NaiveDate};

use crate::config::EngineConfig;
use crate::models::{FertileWindow, NextPeriod, Phase, PhaseInfo};

/// Resolve the cycle day, phase and fertile-window flag for `reference`.
///
/// Without a usable `last_period` (absent, or after `reference`) this falls
/// back to day 1 of the follicular phase. A cycle day past `avg_cycle_length`
/// is wrapped once; a period date several cycles stale stays out of range.
pub fn calculate_phase(
    config: &EngineConfig,
    last_period: Option<NaiveDate>,
    avg_cycle_length: i64,
    avg_period_length: i64,
    reference: NaiveDate,
) -> PhaseInfo {
    let Some(last_period) = last_period else {
        return default_phase(config);
    };

    let days_since = (reference - last_period).num_days();
    if days_since < 0 {
        tracing::trace!(%reference, %last_period, "reference precedes last period");
        return default_phase(config);
    }

    let mut cycle_day = days_since + 1;
    let phase = if cycle_day <= avg_period_length {
        Phase::Menstrual
    } else if (config.ovulation_start..=config.ovulation_end).contains(&cycle_day) {
        Phase::Ovulation
    } else if cycle_day > config.ovulation_end && cycle_day <= avg_cycle_length {
        Phase::Luteal
    } else if cycle_day > avg_period_length && cycle_day < config.ovulation_start {
        Phase::Follicular
    } else {
        tracing::debug!(cycle_day, avg_cycle_length, "cycle overdue, wrapping once");
        cycle_day = cycle_day.saturating_sub(avg_cycle_length);
        Phase::Follicular
    };

    PhaseInfo {
        phase,
        cycle_day,
        fertile_window: fertile_window(config, cycle_day),
    }
}

/// The fertile window is a fixed cycle-day range, independent of the
/// user's average lengths.
pub fn fertile_window(config: &EngineConfig, cycle_day: i64) -> FertileWindow {
    FertileWindow {
        start: config.fertile_window_start,
        end: config.fertile_window_end,
        is_active: (config.fertile_window_start..=config.fertile_window_end).contains(&cycle_day),
    }
}

fn default_phase(config: &EngineConfig) -> PhaseInfo {
    PhaseInfo {
        phase: Phase::Follicular,
        cycle_day: 1,
        fertile_window: fertile_window(config, 1),
    }
}

/// Project the next period start: the first whole-cycle step after
/// `last_period` that is not before `reference`. `None` when the projection
/// falls outside the representable date range.
pub fn next_period(
    last_period: Option<NaiveDate>,
    avg_cycle_length: i64,
    avg_period_length: i64,
    reference: NaiveDate,
) -> Option<NextPeriod> {
    let last_period = last_period?;
    if avg_cycle_length < 1 {
        return None;
    }

    let elapsed = (reference - last_period).num_days();
    let steps = if elapsed <= 0 {
        1
    } else {
        (elapsed - 1) / avg_cycle_length + 1
    };

    let offset = Duration::try_days(steps.checked_mul(avg_cycle_length)?)?;
    let predicted_start = last_period.checked_add_signed(offset)?;
    let period_days = Duration::try_days(avg_period_length.saturating_sub(1).max(0))?;
    let predicted_end = predicted_start.checked_add_signed(period_days)?;

    Some(NextPeriod {
        predicted_start,
        predicted_end,
        days_until: (predicted_start - reference).num_days(),
    })
}
