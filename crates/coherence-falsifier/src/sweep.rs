use coherence_core::engine::{survival_flag, SIGMA_MIN, T_MIN};
use coherence_core::error::CoherenceError;
use rand::Rng;
use rand_distr::{Distribution, Exp, LogNormal, Normal};
use serde::{Deserialize, Serialize};

/// One evaluated row of a sweep, under the reference column names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepRow {
    pub beta: f64,
    pub d_phi: f64,
    #[serde(rename = "T")]
    pub t: f64,
    pub sigma: f64,
    #[serde(rename = "S")]
    pub s: f64,
    pub state: u8,
}

/// Ordered table of sweep rows, one per drawn vector, in draw order.
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepTable {
    rows: Vec<SweepRow>,
}

impl SweepTable {
    /// Builds a table from pre-drawn parameter arrays; index i of each
    /// array becomes row i. The arrays must be equal length.
    pub fn from_draws(betas: &[f64], d_phis: &[f64], ts: &[f64], sigmas: &[f64]) -> Self {
        debug_assert_eq!(betas.len(), d_phis.len());
        debug_assert_eq!(betas.len(), ts.len());
        debug_assert_eq!(betas.len(), sigmas.len());

        let rows = (0..betas.len())
            .map(|i| {
                let eff_t = ts[i].max(T_MIN);
                let eff_sigma = sigmas[i].max(SIGMA_MIN);
                let s = betas[i] * d_phis[i] / (eff_t * eff_sigma);
                SweepRow {
                    beta: betas[i],
                    d_phi: d_phis[i],
                    t: eff_t,
                    sigma: eff_sigma,
                    s,
                    state: survival_flag(s),
                }
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[SweepRow] {
        &self.rows
    }
}

/// Validated sweep configuration. The library itself accepts a zero-row
/// sweep; this is the fail-fast gate for user-supplied counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepConfig {
    pub n_simulations: usize,
}

impl SweepConfig {
    pub fn new(n_simulations: i64) -> Result<Self, CoherenceError> {
        if n_simulations <= 0 {
            return Err(CoherenceError::InvalidSimulationCount(n_simulations));
        }
        Ok(Self {
            n_simulations: n_simulations as usize,
        })
    }
}

/// Draws n parameter vectors and evaluates the binary regime for each:
/// beta ~ Uniform(0.01, 1.0), d_phi ~ LogNormal(0, 0.5),
/// t ~ Normal(0.5, 0.15) clamped to [0.01, 1.0], sigma ~ Exp(scale 0.2).
/// Sequential; a pure function of (n, rng state).
pub fn run_sweep<R: Rng>(n: usize, rng: &mut R) -> SweepTable {
    let d_phi_dist = LogNormal::new(0.0, 0.5).expect("lognormal parameters");
    let t_dist = Normal::<f64>::new(0.5, 0.15).expect("normal parameters");
    let sigma_dist = Exp::new(1.0 / 0.2).expect("exponential rate");

    let betas: Vec<f64> = (0..n).map(|_| rng.gen_range(0.01..1.0)).collect();
    let d_phis: Vec<f64> = (0..n).map(|_| d_phi_dist.sample(rng)).collect();
    let ts: Vec<f64> = (0..n)
        .map(|_| t_dist.sample(rng).clamp(0.01, 1.0))
        .collect();
    let sigmas: Vec<f64> = (0..n).map(|_| sigma_dist.sample(rng)).collect();

    SweepTable::from_draws(&betas, &d_phis, &ts, &sigmas)
}
