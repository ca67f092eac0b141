use serde::{Deserialize, Serialize};

/// Floor applied to tension before division.
pub const T_MIN: f64 = 1e-6;
/// Floor applied to noise before division.
pub const SIGMA_MIN: f64 = 1e-6;

/// One drawn input to the coherence ratio. Value-only, no identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParameterVector {
    pub beta: f64,
    pub d_phi: f64,
    pub t: f64,
    pub sigma: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Regime {
    Regenerative,
    CriticalUnstable,
    Degrading,
}

impl Regime {
    /// Three-way classification of the ratio. Branch order matters: the
    /// `s > 1.0` check wins over the `[0.95, 1.05]` window, so values in
    /// `(1.0, 1.05]` classify as `Regenerative`, never `CriticalUnstable`.
    pub fn classify(s: f64) -> Self {
        if s > 1.0 {
            Regime::Regenerative
        } else if (0.95..=1.05).contains(&s) {
            Regime::CriticalUnstable
        } else {
            Regime::Degrading
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Regime::Regenerative => "REGENERATIVE",
            Regime::CriticalUnstable => "CRITICAL_UNSTABLE",
            Regime::Degrading => "DEGRADING",
        }
    }
}

/// Binary regime variant used by the falsification sweep: 1 iff `s > 1.0`
/// (strict, so `s == 1.0` survives as 0).
pub fn survival_flag(s: f64) -> u8 {
    if s > 1.0 {
        1
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EvaluationRecord {
    pub beta: f64,
    pub d_phi: f64,
    pub effective_t: f64,
    pub effective_sigma: f64,
    pub s: f64,
    pub regime: Regime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoherenceEngine {
    pub t_min: f64,
    pub sigma_min: f64,
}

impl Default for CoherenceEngine {
    fn default() -> Self {
        Self {
            t_min: T_MIN,
            sigma_min: SIGMA_MIN,
        }
    }
}

impl CoherenceEngine {
    /// Evaluates S = beta * d_phi / (eff_t * eff_sigma) with both
    /// denominator terms floored away from zero. Pure; cannot divide by
    /// zero after clamping.
    pub fn evaluate(&self, v: ParameterVector) -> EvaluationRecord {
        let effective_t = v.t.max(self.t_min);
        let effective_sigma = v.sigma.max(self.sigma_min);
        let s = v.beta * v.d_phi / (effective_t * effective_sigma);
        EvaluationRecord {
            beta: v.beta,
            d_phi: v.d_phi,
            effective_t,
            effective_sigma,
            s,
            regime: Regime::classify(s),
        }
    }
}

/// Caller-owned evaluation history. Each caller holds its own log; nothing
/// is shared across engine invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationLog {
    records: Vec<EvaluationRecord>,
}

impl EvaluationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, rec: EvaluationRecord) {
        self.records.push(rec);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records
    }
}
