use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::models::{DailyLogRecord, FrequencyAnalysis, FrequencyEntry, Tag};

/// Rank symptoms and moods by how often they were logged.
pub fn analyze(config: &EngineConfig, daily_logs: &[DailyLogRecord]) -> FrequencyAnalysis {
    FrequencyAnalysis {
        symptom_frequency: rank(
            daily_logs.iter().flat_map(|l| l.symptoms.iter()),
            config.max_symptoms,
        ),
        mood_frequency: rank(
            daily_logs.iter().flat_map(|l| l.moods.iter()),
            config.max_moods,
        ),
    }
}

/// Names compare exactly as authored. Ties keep first-seen order.
fn rank<'a>(tags: impl Iterator<Item = &'a Tag>, limit: usize) -> Vec<FrequencyEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for tag in tags {
        match index.get(tag.name.as_str()).copied() {
            Some(i) => entries[i].count += 1,
            None => {
                index.insert(&tag.name, entries.len());
                entries.push(FrequencyEntry {
                    name: tag.name.clone(),
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}
