//! Injects Firebase web-config values from the environment into a static
//! HTML file, in place.

mod injector;
mod notice;
mod report;

pub use common::{AnyErr, MyResult};
pub use injector::*;
pub use notice::*;
pub use report::*;
pub use placeholder::{EnvSource, PlaceholderKey, PlaceholderTable, Substitution, UNDEFINED};
