use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::config::EngineConfig;
use crate::models::{CalendarDayCell, DailyLogRecord, Phase, UserCycleProfile};
use crate::phase;

/// Six full Monday-first weeks.
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid month {month} for year {year} (expected 0-11)")]
    InvalidMonth { year: i32, month: u32 },
    #[error("year {year} puts the month grid outside the supported date range")]
    YearOutOfRange { year: i32 },
}

/// Build the 42-cell grid for `month0` (0 = January) of `year`.
///
/// Days outside the month pad the grid with empty cells. Inside the month,
/// phases come from the profile's last period date, or from a fixed
/// day-of-month pattern when no date is known yet. Fails when `month0` is
/// not 0-11, or when any cell of the grid falls outside chrono's date range.
pub fn generate_month(
    config: &EngineConfig,
    year: i32,
    month0: u32,
    profile: &UserCycleProfile,
    daily_logs: &[DailyLogRecord],
    today: NaiveDate,
) -> Result<Vec<CalendarDayCell>, CalendarError> {
    if month0 > 11 {
        return Err(CalendarError::InvalidMonth {
            year,
            month: month0,
        });
    }
    let out_of_range = CalendarError::YearOutOfRange { year };
    let first_day = NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(out_of_range.clone())?;
    let next_first = if month0 == 11 {
        year.checked_add(1).and_then(|next_year| NaiveDate::from_ymd_opt(next_year, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)
    }
    .ok_or(out_of_range.clone())?;
    let days_in_month = (next_first - first_day).num_days();

    let logged: HashSet<NaiveDate> = daily_logs.iter().map(|l| l.date).collect();
    let leading = i64::from(first_day.weekday().num_days_from_monday());

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for offset in (1..=leading).rev() {
        let date = first_day
            .checked_sub_signed(Duration::days(offset))
            .ok_or(out_of_range.clone())?;
        cells.push(padding_cell(date));
    }

    for day in 1..=days_in_month {
        let date = first_day + Duration::days(day - 1);
        let (phase, cycle_day) = match profile.last_period_date {
            Some(last_period) => {
                let info = phase::calculate_phase(
                    config,
                    Some(last_period),
                    profile.avg_cycle_length,
                    profile.avg_period_length,
                    date,
                );
                (Some(info.phase), Some(info.cycle_day))
            }
            None => {
                let phase = demo_phase(config, day);
                (phase, phase.map(|_| day))
            }
        };

        cells.push(CalendarDayCell {
            date: format_date(date),
            is_current_month: true,
            is_today: date == today,
            phase,
            cycle_day,
            has_data: logged.contains(&date),
        });
    }

    let mut trailing = Some(next_first);
    while cells.len() < GRID_CELLS {
        let date = trailing.ok_or(out_of_range.clone())?;
        cells.push(padding_cell(date));
        trailing = date.checked_add_signed(Duration::days(1));
    }

    tracing::debug!(year, month0, leading, days_in_month, "month grid built");
    Ok(cells)
}

/// Placeholder phases keyed on the day of month alone.
fn demo_phase(config: &EngineConfig, day: i64) -> Option<Phase> {
    if day <= config.demo_period_length {
        Some(Phase::Menstrual)
    } else if (config.ovulation_start..=config.ovulation_end).contains(&day) {
        Some(Phase::Ovulation)
    } else if day > config.ovulation_end && day <= config.default_cycle_length {
        Some(Phase::Luteal)
    } else if day > config.demo_period_length && day < config.ovulation_start {
        Some(Phase::Follicular)
    } else {
        None
    }
}

fn padding_cell(date: NaiveDate) -> CalendarDayCell {
    CalendarDayCell {
        date: format_date(date),
        is_current_month: false,
        is_today: false,
        phase: None,
        cycle_day: None,
        has_data: false,
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
