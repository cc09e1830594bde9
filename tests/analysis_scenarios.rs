use chrono::{Duration, NaiveDate};
use serde_json::json;
use siklus::{
    report, snapshot, CycleData, CycleRecord, DailyLogRecord, EngineConfig, Phase, Regularity,
    Tag, UserCycleProfile, GRID_CELLS,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn profile(last_period: Option<&str>, status: &str) -> UserCycleProfile {
    UserCycleProfile {
        last_period_date: last_period.map(date),
        menstrual_status: status.to_string(),
        ..UserCycleProfile::default()
    }
}

fn log(day: &str, symptoms: &[&str], moods: &[&str]) -> DailyLogRecord {
    DailyLogRecord {
        date: date(day),
        symptoms: symptoms.iter().map(|s| Tag::new(*s)).collect(),
        moods: moods.iter().map(|m| Tag::new(*m)).collect(),
    }
}

/// Four ascending cycles, 28 days apart, 5-day periods.
fn steady_cycles() -> Vec<CycleRecord> {
    let base = date("2023-10-09");
    (0..4)
        .map(|i| {
            let start = base + Duration::days(28 * i);
            CycleRecord {
                start_date: start,
                end_date: Some(start + Duration::days(5)),
            }
        })
        .collect()
}

#[test]
fn scenario_phases_through_report() {
    let data = CycleData {
        profile: profile(Some("2024-01-01"), ""),
        ..CycleData::default()
    };
    let config = EngineConfig::default();

    let cases = [
        ("2024-01-03", Phase::Menstrual, 3, false),
        ("2024-01-14", Phase::Ovulation, 14, true),
        ("2024-01-20", Phase::Luteal, 20, false),
        ("2024-02-05", Phase::Follicular, 8, false),
    ];
    for (today, phase, cycle_day, fertile) in cases {
        let report = report::analyze(&config, &data, date(today));
        assert_eq!(report.current_phase, phase, "on {today}");
        assert_eq!(report.cycle_day, cycle_day, "on {today}");
        assert_eq!(report.fertile_window.is_active, fertile, "on {today}");
        assert_eq!(report.fertile_window.start, 11);
        assert_eq!(report.fertile_window.end, 17);
    }
}

#[test]
fn empty_history_reports_insufficient_data() {
    let data = CycleData::default();
    let report = report::analyze(&EngineConfig::default(), &data, date("2024-01-03"));

    assert_eq!(report.current_phase, Phase::Follicular);
    assert_eq!(report.cycle_day, 1);
    assert!(report.next_period.is_none());
    assert_eq!(report.regularity, Regularity::InsufficientData);
    assert_eq!(report.avg_cycle_length, 28.0);
    assert_eq!(report.avg_period_length, 6.0);
    assert_eq!(report.variation, 0);
    assert_eq!(report.total_cycles, 0);
    assert_eq!(report.health_alerts.len(), 1);
    assert_eq!(report.health_alerts[0].title, "Data Belum Cukup");
}

#[test]
fn headache_logs_drive_ranking_and_tips() {
    let mut daily_logs = Vec::new();
    for i in 0..5 {
        let day = date("2024-01-02") + Duration::days(i);
        let symptoms: &[&str] = if i < 2 {
            &["Kram otot", "Sakit kepala"]
        } else {
            &["Sakit kepala"]
        };
        daily_logs.push(DailyLogRecord {
            date: day,
            symptoms: symptoms.iter().map(|s| Tag::new(*s)).collect(),
            moods: vec![Tag::new("Mudah marah")],
        });
    }
    let data = CycleData {
        profile: profile(Some("2024-01-01"), "pms"),
        cycles: steady_cycles(),
        daily_logs,
    };

    let report = report::analyze(&EngineConfig::default(), &data, date("2024-01-20"));

    assert_eq!(report.symptom_frequency[0].name, "Sakit kepala");
    assert_eq!(report.symptom_frequency[0].count, 5);
    assert_eq!(report.symptom_frequency[1].count, 2);
    assert_eq!(report.mood_frequency[0].count, 5);
    assert_eq!(report.regularity, Regularity::Regular);

    let titles: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "Waktunya Merawat Diri",
            "Redakan Sakit Kepala",
            "Kelola Gejala PMS"
        ]
    );
    let alert_titles: Vec<&str> = report
        .health_alerts
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(alert_titles, ["Gejala PMS"]);
}

#[test]
fn irregular_history_flags_doctor_and_alerts() {
    let base = date("2023-06-01");
    let cycles = [0, 22, 60, 84]
        .iter()
        .map(|&o| CycleRecord {
            start_date: base + Duration::days(o),
            end_date: Some(base + Duration::days(o + 4)),
        })
        .collect();
    let data = CycleData {
        profile: profile(Some("2024-01-01"), ""),
        cycles,
        daily_logs: vec![log("2024-01-02", &["Kelelahan"], &[])],
    };

    let report = report::analyze(&EngineConfig::default(), &data, date("2024-01-02"));

    assert_eq!(report.regularity, Regularity::Irregular);
    assert_eq!(report.variation, 16);
    let titles: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "Jaga Hidrasi dan Asupan Zat Besi",
            "Konsultasi dengan Dokter",
            "Atasi Kelelahan"
        ]
    );
    assert_eq!(report.health_alerts[0].title, "Variasi Siklus Tinggi");
}

#[test]
fn calendar_payload_shape() {
    let data = CycleData {
        profile: profile(Some("2024-01-01"), ""),
        cycles: vec![],
        daily_logs: vec![log("2024-01-14", &["Jerawat"], &[])],
    };

    let response =
        report::calendar(&EngineConfig::default(), &data, 2024, 0, date("2024-01-14")).unwrap();
    assert_eq!(response.calendar_data.len(), GRID_CELLS);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["year"], json!(2024));
    assert_eq!(value["month"], json!(0));
    assert_eq!(
        value["calendarData"][13],
        json!({
            "date": "2024-01-14",
            "isCurrentMonth": true,
            "isToday": true,
            "phase": "ovulation",
            "cycleDay": 14,
            "hasData": true
        })
    );
    assert_eq!(
        value["calendarData"][41],
        json!({
            "date": "2024-02-11",
            "isCurrentMonth": false,
            "isToday": false,
            "phase": null,
            "cycleDay": null,
            "hasData": false
        })
    );
}

#[test]
fn analysis_payload_uses_camel_case_keys() {
    let data = CycleData {
        profile: profile(Some("2024-01-01"), ""),
        cycles: steady_cycles(),
        daily_logs: vec![],
    };
    let report = report::analyze(&EngineConfig::default(), &data, date("2024-01-14"));
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["currentPhase"], json!("ovulation"));
    assert_eq!(value["cycleDay"], json!(14));
    assert_eq!(
        value["fertileWindow"],
        json!({"start": 11, "end": 17, "isActive": true})
    );
    assert_eq!(value["regularity"], json!("regular"));
    assert_eq!(value["nextPeriod"]["predictedStart"], json!("2024-01-29"));
    assert_eq!(value["recommendations"][0]["priority"], json!("high"));
    assert!(value["healthAlerts"].as_array().unwrap().is_empty());
}

#[test]
fn repeated_calls_are_identical() {
    let data = CycleData {
        profile: profile(Some("2024-01-01"), "pms"),
        cycles: steady_cycles(),
        daily_logs: vec![log("2024-01-03", &["Lelah", "Kembung"], &["Sedih"])],
    };
    let config = EngineConfig::default();
    let today = date("2024-01-03");

    let first = serde_json::to_string(&report::analyze(&config, &data, today)).unwrap();
    let second = serde_json::to_string(&report::analyze(&config, &data, today)).unwrap();
    assert_eq!(first, second);

    let grid_a = report::calendar(&config, &data, 2024, 0, today).unwrap();
    let grid_b = report::calendar(&config, &data, 2024, 0, today).unwrap();
    assert_eq!(grid_a, grid_b);
}

#[test]
fn snapshot_file_feeds_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.json");
    std::fs::write(
        &path,
        json!({
            "profile": {
                "avgCycleLength": 30,
                "avgPeriodLength": 5,
                "lastPeriodDate": "2024-03-01",
                "menstrualStatus": "irregular"
            },
            "cycles": [
                {"startDate": "2024-01-01", "endDate": "2024-01-05"},
                {"startDate": "2024-01-31", "endDate": null}
            ],
            "dailyLogs": [
                {"date": "2024-03-02", "symptoms": [{"name": "Sakit kepala"}], "moods": []}
            ]
        })
        .to_string(),
    )
    .unwrap();

    let data = snapshot::load(&path).unwrap();
    assert_eq!(data.profile.avg_cycle_length, 30);

    let report = report::analyze(&EngineConfig::default(), &data, date("2024-03-02"));
    assert_eq!(report.current_phase, Phase::Menstrual);
    assert_eq!(report.cycle_day, 2);
    assert_eq!(report.avg_cycle_length, 30.0);
    assert_eq!(report.avg_period_length, 4.0);
    assert_eq!(report.total_cycles, 2);
    assert_eq!(report.recommendations.len(), 2);
}

#[test]
fn config_overrides_reach_the_engine() {
    let config = EngineConfig::from_toml_str("max_symptoms = 1\nmax_moods = 1\n").unwrap();
    let data = CycleData {
        daily_logs: vec![
            log("2024-01-01", &["Jerawat", "Kembung"], &["Senang", "Sedih"]),
            log("2024-01-02", &["Kembung"], &[]),
        ],
        ..CycleData::default()
    };

    let report = report::analyze(&config, &data, date("2024-01-02"));
    assert_eq!(report.symptom_frequency.len(), 1);
    assert_eq!(report.symptom_frequency[0].name, "Kembung");
    assert_eq!(report.mood_frequency.len(), 1);
}

#[test]
fn oversized_profile_lengths_still_produce_a_report() {
    let mut data = CycleData {
        profile: UserCycleProfile {
            avg_period_length: 200_000_000,
            ..profile(Some("2024-01-01"), "")
        },
        ..CycleData::default()
    };
    let config = EngineConfig::default();

    let report = report::analyze(&config, &data, date("2024-01-14"));
    assert_eq!(report.current_phase, Phase::Menstrual);
    assert!(report.next_period.is_none());

    data.profile.avg_period_length = 6;
    data.profile.avg_cycle_length = i64::MAX;
    let report = report::analyze(&config, &data, date("2024-01-14"));
    assert_eq!(report.current_phase, Phase::Ovulation);
    assert!(report.next_period.is_none());
}

#[test]
fn calendar_outside_date_range_is_an_error() {
    let data = CycleData::default();
    let result = report::calendar(
        &EngineConfig::default(),
        &data,
        i32::MAX,
        0,
        date("2024-01-14"),
    );
    assert_eq!(
        result,
        Err(siklus::CalendarError::YearOutOfRange { year: i32::MAX })
    );
}
