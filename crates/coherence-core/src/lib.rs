pub mod engine;
pub mod error;
pub mod manifest;
pub mod mapping;


pub use engine::*;
pub use error::*;
pub use manifest::*;
pub use mapping::*;
