//! Core modules for numfield

pub mod normalizer;
pub mod pair_scorer;
pub mod random;
pub mod templates;
pub mod remedy;
pub mod paywall;
pub mod engine;
pub mod api;

pub use normalizer::Normalizer;
pub use pair_scorer::PairScorer;
pub use random::{RandomSource, RngSource};
pub use remedy::RemedyGenerator;
pub use paywall::UnlockStore;
pub use engine::{analyze, generate_remedy, NumerologyEngine};
pub use api::{create_router, run_server};
