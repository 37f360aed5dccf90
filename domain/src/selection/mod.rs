//! The selection engine: random, duplicate-free question pools.

pub mod engine;
pub mod gap;
pub mod pick;
pub mod policy;

pub use engine::{TemplateOutcome, generate, generate_from_template};
pub use gap::GapSource;
pub use pick::pick_random;
pub use policy::SelectionPolicy;
