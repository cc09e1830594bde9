use crate::config::EngineConfig;
use crate::models::{CycleRecord, CycleStats, Regularity};

/// Compute averages and regularity over the supplied cycle history.
///
/// Cycle lengths are taken between neighbouring records in the order given,
/// so callers must pass cycles sorted ascending by start date. Non-positive
/// differences are dropped rather than treated as errors.
pub fn aggregate(config: &EngineConfig, cycles: &[CycleRecord]) -> CycleStats {
    if cycles.is_empty() {
        return CycleStats {
            avg_cycle_length: config.default_cycle_length as f64,
            avg_period_length: config.default_period_length as f64,
            regularity: Regularity::InsufficientData,
            variation: 0,
            total_cycles: 0,
        };
    }

    let cycle_lengths: Vec<i64> = cycles
        .windows(2)
        .map(|w| (w[1].start_date - w[0].start_date).num_days())
        .filter(|&days| days > 0)
        .collect();

    let period_lengths: Vec<i64> = cycles
        .iter()
        .filter_map(|c| c.end_date.map(|end| (end - c.start_date).num_days()))
        .filter(|&days| days > 0)
        .collect();

    let avg_cycle_length = mean(&cycle_lengths).unwrap_or(config.default_cycle_length as f64);
    let avg_period_length =
        mean(&period_lengths).unwrap_or(config.default_period_length as f64);

    let (regularity, variation) = if cycle_lengths.len() >= config.min_regularity_samples {
        let longest = cycle_lengths.iter().copied().max().unwrap_or_default();
        let shortest = cycle_lengths.iter().copied().min().unwrap_or_default();
        let variation = longest - shortest;
        (classify(config, avg_cycle_length, variation), variation)
    } else {
        (Regularity::Regular, 0)
    };

    tracing::debug!(
        samples = cycle_lengths.len(),
        avg_cycle_length,
        variation,
        ?regularity,
        "cycle statistics aggregated"
    );

    CycleStats {
        avg_cycle_length,
        avg_period_length,
        regularity,
        variation,
        total_cycles: cycles.len(),
    }
}

fn classify(config: &EngineConfig, avg_cycle_length: f64, variation: i64) -> Regularity {
    if variation > config.irregular_variation
        || avg_cycle_length < config.min_normal_cycle_length as f64
        || avg_cycle_length > config.max_normal_cycle_length as f64
    {
        Regularity::Irregular
    } else if variation > config.somewhat_irregular_variation {
        Regularity::SomewhatIrregular
    } else {
        Regularity::Regular
    }
}

fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<i64>() as f64 / values.len() as f64)
}
