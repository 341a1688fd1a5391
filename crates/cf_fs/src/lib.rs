mod fs;
mod memfs_tracer;

pub use fs::*;
pub use memfs_tracer::*;
