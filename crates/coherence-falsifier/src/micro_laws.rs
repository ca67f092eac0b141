use crate::sweep::SweepTable;
use serde::{Deserialize, Serialize};

/// Conditional survival statistics over fixed slices of a sweep table.
/// A rate is NaN when its slice is empty; that propagates into the
/// formatted summary rather than being coerced to zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MicroLawReport {
    /// Mean survival over rows with sigma > 0.8.
    pub noise_death_zone_rate: f64,
    /// Mean survival over rows with t > 0.8 and d_phi > 2.0.
    pub flux_rescue_rate: f64,
}

impl MicroLawReport {
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "MicroLaw_Noise_Death_Zone":
                format!("Survival Rate {}", format_percent(self.noise_death_zone_rate)),
            "MicroLaw_Flux_Rescue":
                format!("Rescue Rate {}", format_percent(self.flux_rescue_rate)),
        })
    }
}

pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Reports the two micro-law rates. Both slices are independent,
/// non-exclusive views over the same table; the table is not mutated.
pub fn extract_micro_laws(table: &SweepTable) -> MicroLawReport {
    let noise_death_zone_rate = mean_state(table, |r| r.sigma > 0.8);
    let flux_rescue_rate = mean_state(table, |r| r.t > 0.8 && r.d_phi > 2.0);
    MicroLawReport {
        noise_death_zone_rate,
        flux_rescue_rate,
    }
}

fn mean_state<F>(table: &SweepTable, filter: F) -> f64
where
    F: Fn(&crate::sweep::SweepRow) -> bool,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for row in table.rows().iter().filter(|r| filter(r)) {
        sum += f64::from(row.state);
        count += 1;
    }
    // Empty slice: 0.0 / 0 = NaN.
    sum / count as f64
}
