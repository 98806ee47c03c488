// src/services/metrics_source.rs
// DOCUMENTATION: Source of the placeholder dashboard figures
// PURPOSE: Category colours and weekly visits until real analytics exist

use rand::RngExt;

/// Brand palette categories are coloured from
pub const PALETTE: [&str; 7] = [
    "#E5B84B", "#4CAF50", "#FF9800", "#F44336", "#FF9800", "#2196F3", "#4CAF50",
];

pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Supplies the non-computed parts of a dashboard snapshot
pub trait MetricsSource: Send + Sync {
    fn category_color(&self, category: &str) -> String;

    fn daily_visits(&self, day: &str) -> u32;
}

/// Random colours, and visits drawn from 50..150 on every refresh
pub struct RandomMetricsSource;

impl MetricsSource for RandomMetricsSource {
    fn category_color(&self, _category: &str) -> String {
        let index = rand::rng().random_range(0..PALETTE.len());
        PALETTE[index].to_string()
    }

    fn daily_visits(&self, _day: &str) -> u32 {
        rand::rng().random_range(50..150)
    }
}

/// Deterministic figures: a constant visit count and a colour derived from the name
pub struct FixedMetricsSource {
    pub visits: u32,
}

impl MetricsSource for FixedMetricsSource {
    fn category_color(&self, category: &str) -> String {
        let sum: usize = category.bytes().map(usize::from).sum();
        PALETTE[sum % PALETTE.len()].to_string()
    }

    fn daily_visits(&self, _day: &str) -> u32 {
        self.visits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_source_stays_in_range() {
        let source = RandomMetricsSource;
        for day in WEEK_DAYS {
            let visits = source.daily_visits(day);
            assert!((50..150).contains(&visits));
        }
        assert!(PALETTE.contains(&source.category_color("Nature").as_str()));
    }

    #[test]
    fn test_fixed_source_is_deterministic() {
        let source = FixedMetricsSource { visits: 80 };
        assert_eq!(source.category_color("Nature"), source.category_color("Nature"));
        assert_eq!(source.daily_visits("Mon"), 80);
    }
}
