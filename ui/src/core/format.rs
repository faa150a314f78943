//! Formatting helpers for presenting indicator values.

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// One-decimal rendering for mean ages and sleep hours.
pub fn format_mean(value: f64) -> String {
    format!("{value:.1}")
}

/// Two-decimal rendering for mean risk scores (heatmap and radar details).
pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_percent(33.333333), "33.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn means_round_to_one_decimal() {
        assert_eq!(format_mean(52.04), "52.0");
        assert_eq!(format_mean(6.87), "6.9");
    }

    #[test]
    fn scores_round_to_two_decimals() {
        assert_eq!(format_score(1.0), "1.00");
        assert_eq!(format_score(0.666), "0.67");
    }
}
