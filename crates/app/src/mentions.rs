//! Synthetic "mentions" dataset shown by the terminal chart.
//!
//! Each symbol gets a run of increasing timestamps whose gaps follow an
//! exponential distribution with mean `avg_seconds`.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct MentionSeries {
    pub symbol: &'static str,
    pub mentions: Vec<DateTime<Utc>>,
    pub per_hour: f64,
}

/// `(symbol, number of items, mean gap in seconds, mentions per hour)`.
pub const DEMO_SYMBOLS: [(&str, usize, f64, f64); 4] = [
    ("AAPL", 850, 2.0 * 60.0, 34.3),
    ("MSFT", 800, 5.0 * 60.0, 11.1),
    ("GOOG", 630, 3.0 * 60.0, 19.2),
    ("NFLX", 310, 10.0 * 60.0, 6.7),
];

/// Random gap in milliseconds, exponentially distributed with mean `avg_seconds`.
pub fn random_interval_ms<G: Rng>(rng: &mut G, avg_seconds: f64) -> i64 {
    // (0, 1], so the logarithm stays finite.
    let u = 1.0 - rng.random::<f64>();
    (-u.ln() * 1000.0 * avg_seconds).floor() as i64
}

/// Extend `data` with `num_items - 1` increasing timestamps, starting from its
/// last entry (or `now` when empty).
pub fn extend_series<G: Rng>(
    rng: &mut G,
    data: &mut Vec<DateTime<Utc>>,
    num_items: usize,
    avg_seconds: f64,
    now: DateTime<Utc>,
) {
    let mut t = data.last().copied().unwrap_or(now);
    for _ in 1..num_items {
        t += TimeDelta::milliseconds(random_interval_ms(rng, avg_seconds));
        data.push(t);
    }
}

/// The demonstration dataset: one series per symbol in [`DEMO_SYMBOLS`].
pub fn demo_dataset<G: Rng>(rng: &mut G, now: DateTime<Utc>) -> Vec<MentionSeries> {
    DEMO_SYMBOLS
        .iter()
        .map(|&(symbol, items, avg_seconds, per_hour)| {
            let mut mentions = Vec::with_capacity(items);
            extend_series(rng, &mut mentions, items, avg_seconds, now);
            MentionSeries {
                symbol,
                mentions,
                per_hour,
            }
        })
        .collect()
}

/// One-line barcode of the last 24 hours of `mentions`, `width` cells wide.
///
/// The window ends at the latest mention; a cell is `|` when at least one
/// mention falls into it.
pub fn barcode(mentions: &[DateTime<Utc>], width: usize) -> String {
    let mut cells = vec![' '; width];
    let Some(last) = mentions.iter().max().copied() else {
        return cells.into_iter().collect();
    };
    if width == 0 {
        return String::new();
    }

    let window = TimeDelta::days(1).num_milliseconds();
    let start = last - TimeDelta::days(1);
    for m in mentions.iter().filter(|m| **m >= start) {
        let offset = (*m - start).num_milliseconds();
        let cell = (offset * (width as i64 - 1) / window) as usize;
        cells[cell.min(width - 1)] = '|';
    }
    cells.into_iter().collect()
}
