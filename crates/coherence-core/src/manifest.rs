use crate::error::CoherenceError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

pub const DOI: &str = "https://zenodo.org/records/17852766";
pub const ENGINE_VERSION: &str = "omega-infinity-1.0";

/// Direct three-term law input: no tension dimension, a single noise term
/// that must be strictly positive (no clamping on this path).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoherenceInput {
    pub beta: f64,
    pub delta_c: f64,
    pub lambda_noise: f64,
}

pub fn direct_ratio(ci: &CoherenceInput) -> Result<f64, CoherenceError> {
    if ci.lambda_noise <= 0.0 {
        return Err(CoherenceError::NonPositiveNoise(ci.lambda_noise));
    }
    Ok(ci.beta * ci.delta_c / ci.lambda_noise)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawRecord {
    pub law_name: String,
    pub s_value: f64,
    pub doi: String,
    pub engine_version: String,
    pub timestamp: String,
}

impl LawRecord {
    pub fn generate(name: impl Into<String>, ci: &CoherenceInput) -> Result<Self, CoherenceError> {
        let s_value = direct_ratio(ci)?;
        Ok(Self {
            law_name: name.into(),
            s_value,
            doi: DOI.into(),
            engine_version: ENGINE_VERSION.into(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub doi: String,
    pub engine_version: String,
    pub sha512: String,
    pub data: serde_json::Value,
    pub timestamp: String,
}

/// Wraps a finished result value with provenance metadata. The digest is
/// taken over the canonical encoding: serde_json's object maps are
/// BTreeMap-backed, so key order is already sorted.
pub fn export_manifest(data: &serde_json::Value) -> Result<Manifest, CoherenceError> {
    let payload = serde_json::to_vec(data)?;
    let sha512 = hex_digest(&payload);
    Ok(Manifest {
        doi: DOI.into(),
        engine_version: ENGINE_VERSION.into(),
        sha512,
        data: data.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

fn hex_digest(payload: &[u8]) -> String {
    let digest = Sha512::digest(payload);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
