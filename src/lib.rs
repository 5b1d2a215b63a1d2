// * Pagelens: single-page website profiling engine.
// * The profiler is a pure transformation (HTML + URL -> WebsiteProfile);
// * fetching lives in `network` and is the only async code in the crate.

pub mod config;
pub mod network;
pub mod profiler;

pub use profiler::{profile_page, Category, PageProfiler, WebsiteProfile};
