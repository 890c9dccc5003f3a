/// Core functionality modules
///
/// Contains the entry and search controllers that sit between the
/// presentation shell and the member store.

pub mod registrar;
pub mod searcher;

pub use registrar::Registrar;
pub use searcher::{ResultCard, SearchOutcome, Searcher};
