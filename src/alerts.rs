use crate::config::EngineConfig;
use crate::models::{HealthAlert, Regularity, Severity};
use crate::recommendation::PMS_STATUS;

/// Every applicable alert, in a fixed order: cycle variation, abnormal
/// length, PMS status, insufficient history.
pub fn alerts(
    config: &EngineConfig,
    regularity: Regularity,
    variation: i64,
    avg_cycle_length: f64,
    menstrual_status: &str,
    total_cycles: usize,
) -> Vec<HealthAlert> {
    let mut alerts = Vec::new();

    if regularity == Regularity::Irregular || variation > config.irregular_variation {
        alerts.push(HealthAlert {
            title: "Variasi Siklus Tinggi".into(),
            message: format!(
                "Panjang siklus Anda bervariasi hingga {variation} hari. Pantau terus dan konsultasikan dengan dokter bila berlanjut."
            ),
            severity: Severity::Medium,
        });
    }

    if avg_cycle_length < config.min_normal_cycle_length as f64
        || avg_cycle_length > config.max_normal_cycle_length as f64
    {
        alerts.push(HealthAlert {
            title: "Panjang Siklus Tidak Normal".into(),
            message: format!(
                "Rata-rata siklus Anda {avg_cycle_length:.0} hari, di luar rentang normal {}-{} hari.",
                config.min_normal_cycle_length, config.max_normal_cycle_length
            ),
            severity: Severity::Medium,
        });
    }

    if menstrual_status == PMS_STATUS {
        alerts.push(HealthAlert {
            title: "Gejala PMS".into(),
            message: "Status Anda menunjukkan PMS. Catat gejala harian untuk membantu mengenali polanya."
                .into(),
            severity: Severity::Low,
        });
    }

    if total_cycles < config.min_regularity_samples {
        alerts.push(HealthAlert {
            title: "Data Belum Cukup".into(),
            message: format!(
                "Catat minimal {} siklus agar analisis keteraturan lebih akurat.",
                config.min_regularity_samples
            ),
            severity: Severity::Low,
        });
    }

    alerts
}
