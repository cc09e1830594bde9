use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Regularity {
    Regular,
    SomewhatIrregular,
    Irregular,
    InsufficientData,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
}

/// Cycle-related fields of a user profile, read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserCycleProfile {
    #[serde(default = "default_cycle_length")]
    pub avg_cycle_length: i64,
    #[serde(default = "default_period_length")]
    pub avg_period_length: i64,
    #[serde(default)]
    pub last_period_date: Option<NaiveDate>,
    /// Free-text status tag such as `pms` or `irregular`.
    #[serde(default)]
    pub menstrual_status: String,
}

impl Default for UserCycleProfile {
    fn default() -> Self {
        Self {
            avg_cycle_length: DEFAULT_CYCLE_LENGTH,
            avg_period_length: DEFAULT_PERIOD_LENGTH,
            last_period_date: None,
            menstrual_status: String::new(),
        }
    }
}

fn default_cycle_length() -> i64 {
    DEFAULT_CYCLE_LENGTH
}

fn default_period_length() -> i64 {
    DEFAULT_PERIOD_LENGTH
}

/// One recorded period. `end_date == None` means the period is ongoing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CycleRecord {
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLogRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub symptoms: Vec<Tag>,
    #[serde(default)]
    pub moods: Vec<Tag>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FertileWindow {
    pub start: i64,
    pub end: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseInfo {
    pub phase: Phase,
    pub cycle_day: i64,
    pub fertile_window: FertileWindow,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NextPeriod {
    pub predicted_start: NaiveDate,
    pub predicted_end: NaiveDate,
    pub days_until: i64,
}

/// One cell of the 6x7 month grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayCell {
    /// `YYYY-MM-DD`
    pub date: String,
    pub is_current_month: bool,
    pub is_today: bool,
    pub phase: Option<Phase>,
    pub cycle_day: Option<i64>,
    pub has_data: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CycleStats {
    pub avg_cycle_length: f64,
    pub avg_period_length: f64,
    pub regularity: Regularity,
    pub variation: i64,
    pub total_cycles: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyAnalysis {
    pub symptom_frequency: Vec<FrequencyEntry>,
    pub mood_frequency: Vec<FrequencyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthAlert {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// Everything the data-access layer hands over for one user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CycleData {
    #[serde(default)]
    pub profile: UserCycleProfile,
    #[serde(default)]
    pub cycles: Vec<CycleRecord>,
    #[serde(default)]
    pub daily_logs: Vec<DailyLogRecord>,
}

/// Payload returned for a month view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub year: i32,
    /// 0-based month, echoed as requested.
    pub month: u32,
    pub calendar_data: Vec<CalendarDayCell>,
}

/// Payload returned for the analysis/report view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub current_phase: Phase,
    pub cycle_day: i64,
    pub fertile_window: FertileWindow,
    pub next_period: Option<NextPeriod>,
    pub regularity: Regularity,
    pub variation: i64,
    pub avg_cycle_length: f64,
    pub avg_period_length: f64,
    pub total_cycles: usize,
    pub symptom_frequency: Vec<FrequencyEntry>,
    pub mood_frequency: Vec<FrequencyEntry>,
    pub recommendations: Vec<Recommendation>,
    pub health_alerts: Vec<HealthAlert>,
}
