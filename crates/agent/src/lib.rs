//! Query understanding and dispatch
//!
//! Classifies free-text queries into one of five intents and runs the
//! matching tool, producing a composite result with an affordability
//! verdict and a status line.

pub mod advisor;
pub mod intent;

pub use advisor::CarAdvisor;
pub use intent::detect_intent;
