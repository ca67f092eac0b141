use crate::engine::ParameterVector;
use serde::{Deserialize, Serialize};

/// Strategy for turning a domain record into ratio inputs. Domain
/// heuristics live behind this seam; the engine itself never sees them.
pub trait SignalMap {
    type Signal;

    fn map(&self, signal: &Self::Signal) -> ParameterVector;
}

/// Transformer telemetry for one forward pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LlmTelemetry {
    pub perplexity: f64,
    /// Magnitude of the activation update.
    pub delta_h_norm: f64,
    /// KL divergence between attention heads.
    pub attention_kl: f64,
    /// Token-level entropy.
    pub entropy: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LlmTelemetryMap;

impl SignalMap for LlmTelemetryMap {
    type Signal = LlmTelemetry;

    fn map(&self, signal: &LlmTelemetry) -> ParameterVector {
        ParameterVector {
            beta: 1.0 / (1.0 + signal.perplexity.ln_1p()),
            d_phi: signal.delta_h_norm,
            t: signal.attention_kl,
            sigma: signal.entropy,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EcgSample {
    pub rr_ms: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EcgMap {
    pub baseline_rr_ms: f64,
}

impl Default for EcgMap {
    fn default() -> Self {
        Self {
            baseline_rr_ms: 800.0,
        }
    }
}

impl SignalMap for EcgMap {
    type Signal = EcgSample;

    fn map(&self, signal: &EcgSample) -> ParameterVector {
        let deviation = (signal.rr_ms - self.baseline_rr_ms).abs();
        ParameterVector {
            beta: 1.0 / (1.0 + deviation / 100.0),
            d_phi: 1000.0 / signal.rr_ms.max(1.0),
            t: 0.5,
            sigma: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialProperties {
    pub cohesion: f64,
    pub resilience: f64,
    pub entropy_resistance: f64,
    pub intention_alignment: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MaterialMap;

impl SignalMap for MaterialMap {
    type Signal = MaterialProperties;

    // The material form of the law has no tension term; it embeds into the
    // four-variable vector with t fixed at 1.0 and the noise floor at 1e-4.
    fn map(&self, signal: &MaterialProperties) -> ParameterVector {
        ParameterVector {
            beta: signal.intention_alignment,
            d_phi: (signal.cohesion + signal.resilience) / 2.0,
            t: 1.0,
            sigma: (1.0 - signal.entropy_resistance).max(1e-4),
        }
    }
}
