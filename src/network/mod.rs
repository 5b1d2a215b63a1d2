// * Fetch collaborator for the profiling engine.
// * The engine itself never performs I/O; this module hands it HTML text.

pub mod client;
pub mod errors;

pub use client::{FetchedPage, PageFetcher};
pub use errors::NetworkError;
