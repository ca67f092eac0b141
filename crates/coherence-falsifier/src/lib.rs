pub mod micro_laws;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use micro_laws::{extract_micro_laws, MicroLawReport};
pub use sweep::{run_sweep, SweepConfig, SweepRow, SweepTable};
