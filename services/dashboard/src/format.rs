//! Display helpers shared by the views

/// Placeholder for values the backend didn't supply
pub const MISSING: &str = "-";

/// Color band of a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn of(score: f64) -> Self {
        if score >= 70.0 {
            ScoreTier::High
        } else if score >= 40.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    /// (foreground, background)
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            ScoreTier::High => ("#155724", "#d4edda"),
            ScoreTier::Medium => ("#856404", "#fff3cd"),
            ScoreTier::Low => ("#721c24", "#f8d7da"),
        }
    }
}

pub fn score(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{:.0}", v))
}

/// Compact counts: 950, 1.2K, 3.4M
pub fn count(value: Option<u64>) -> String {
    match value {
        None => MISSING.to_string(),
        Some(v) if v < 1_000 => v.to_string(),
        Some(v) if v < 1_000_000 => format!("{:.1}K", v as f64 / 1_000.0),
        Some(v) => format!("{:.1}M", v as f64 / 1_000_000.0),
    }
}

/// Ratio (0.0235) as a percentage (2.35%)
pub fn percent(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| MISSING.to_string(), |r| format!("{:.2}%", r * 100.0))
}

/// Date part of an RFC 3339 timestamp
pub fn date(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if ts.len() >= 10 && ts.is_char_boundary(10) => ts[..10].to_string(),
        Some(ts) if !ts.is_empty() => ts.to_string(),
        _ => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_split_at_40_and_70() {
        assert_eq!(ScoreTier::of(85.0), ScoreTier::High);
        assert_eq!(ScoreTier::of(70.0), ScoreTier::High);
        assert_eq!(ScoreTier::of(69.9), ScoreTier::Medium);
        assert_eq!(ScoreTier::of(40.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::of(12.0), ScoreTier::Low);
    }

    #[test]
    fn counts_are_compact() {
        assert_eq!(count(Some(950)), "950");
        assert_eq!(count(Some(1_250)), "1.2K");
        assert_eq!(count(Some(3_400_000)), "3.4M");
        assert_eq!(count(None), MISSING);
    }

    #[test]
    fn percent_and_score() {
        assert_eq!(percent(Some(0.0235)), "2.35%");
        assert_eq!(percent(None), MISSING);
        assert_eq!(score(Some(72.4)), "72");
        assert_eq!(score(None), MISSING);
    }

    #[test]
    fn date_truncates_timestamps() {
        assert_eq!(date(Some("2026-03-01T12:00:00Z")), "2026-03-01");
        assert_eq!(date(Some("yesterday")), "yesterday");
        assert_eq!(date(Some("")), MISSING);
        assert_eq!(date(None), MISSING);
    }
}
