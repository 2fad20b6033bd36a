//! Human-readable annotation of the classifier's output label.

/// Returned for any label outside [`StuntingStatus`].
pub const UNKNOWN_STATUS_DESCRIPTION: &str = "Keterangan tidak tersedia";

/// Growth status classes the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StuntingStatus {
    SeverelyStunted,
    Stunted,
    Normal,
    /// Taller than average for the age.
    Tinggi,
}

impl StuntingStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "severely stunted" => Some(StuntingStatus::SeverelyStunted),
            "stunted" => Some(StuntingStatus::Stunted),
            "normal" => Some(StuntingStatus::Normal),
            "tinggi" => Some(StuntingStatus::Tinggi),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StuntingStatus::SeverelyStunted => {
                "⚠ Sangat pendek parah (risiko sangat tinggi, perlu penanganan segera!)"
            }
            StuntingStatus::Stunted => "⚠ Pendek (indikasi stunting, perlu pemantauan gizi)",
            StuntingStatus::Normal => "✔ Normal (pertumbuhan baik)",
            StuntingStatus::Tinggi => "✔ Lebih tinggi dari rata-rata",
        }
    }

    /// Whether the status calls for follow-up.
    pub fn is_at_risk(&self) -> bool {
        matches!(
            self,
            StuntingStatus::SeverelyStunted | StuntingStatus::Stunted
        )
    }
}

/// Description for a raw classifier label.
pub fn describe_label(label: &str) -> &'static str {
    match StuntingStatus::from_label(label) {
        Some(status) => status.description(),
        None => UNKNOWN_STATUS_DESCRIPTION,
    }
}
