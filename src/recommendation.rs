use crate::models::{Phase, Priority, Recommendation, Regularity};

/// Symptom names (exact, as logged) that trigger the fatigue tip.
pub const FATIGUE_SYMPTOMS: &[&str] = &["Kelelahan", "Lelah", "Lelah/mudah capek"];
/// Symptom names (exact, as logged) that trigger the headache tip.
pub const HEADACHE_SYMPTOMS: &[&str] = &["Sakit kepala"];

pub const PMS_STATUS: &str = "pms";

/// Build the tip list for the current phase, history and top symptoms.
///
/// Order: phase tip, irregular-cycle tip, fatigue tip, headache tip, PMS tip.
pub fn recommend(
    phase: Phase,
    regularity: Regularity,
    symptom_names: &[&str],
    menstrual_status: &str,
) -> Vec<Recommendation> {
    let mut tips = vec![phase_tip(phase)];

    if regularity == Regularity::Irregular {
        tips.push(tip(
            "Konsultasi dengan Dokter",
            "Siklus Anda terdeteksi tidak teratur. Pertimbangkan untuk berkonsultasi dengan dokter atau bidan untuk pemeriksaan lebih lanjut.",
            Priority::High,
        ));
    }

    if mentions(symptom_names, FATIGUE_SYMPTOMS) {
        tips.push(tip(
            "Atasi Kelelahan",
            "Tidur cukup 7-9 jam setiap malam, konsumsi makanan bergizi seimbang, dan lakukan olahraga ringan secara teratur.",
            Priority::Medium,
        ));
    }

    if mentions(symptom_names, HEADACHE_SYMPTOMS) {
        tips.push(tip(
            "Redakan Sakit Kepala",
            "Cukupi kebutuhan cairan, istirahat di ruangan yang tenang, dan catat hal-hal yang memicu sakit kepala Anda.",
            Priority::Medium,
        ));
    }

    if menstrual_status == PMS_STATUS {
        tips.push(tip(
            "Kelola Gejala PMS",
            "Coba teknik relaksasi seperti pernapasan dalam atau yoga, dan kurangi makanan yang terlalu manis atau asin.",
            Priority::Low,
        ));
    }

    tips
}

fn phase_tip(phase: Phase) -> Recommendation {
    match phase {
        Phase::Menstrual => tip(
            "Jaga Hidrasi dan Asupan Zat Besi",
            "Perbanyak minum air putih dan konsumsi makanan kaya zat besi seperti sayuran hijau, kacang-kacangan, dan daging merah.",
            Priority::High,
        ),
        Phase::Follicular => tip(
            "Manfaatkan Energi Anda",
            "Energi sedang meningkat. Ini waktu yang tepat untuk olahraga lebih intens dan memulai aktivitas baru.",
            Priority::Medium,
        ),
        Phase::Ovulation => tip(
            "Masa Subur",
            "Anda sedang berada di masa subur. Perhatikan tanda-tanda kesuburan dan gunakan kontrasepsi bila tidak merencanakan kehamilan.",
            Priority::High,
        ),
        Phase::Luteal => tip(
            "Waktunya Merawat Diri",
            "Luangkan waktu untuk beristirahat, kelola stres, serta batasi kafein dan garam untuk meringankan gejala menjelang haid.",
            Priority::Medium,
        ),
    }
}

fn mentions(symptom_names: &[&str], vocabulary: &[&str]) -> bool {
    symptom_names.iter().any(|name| vocabulary.contains(name))
}

fn tip(title: &str, description: &str, priority: Priority) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        priority,
    }
}
