use std::path::Path;

use cf_fs::{FileSystem, LogTracer};
use common::MyResult;
use itertools::Itertools;
use placeholder::{PlaceholderTable, Substitution};

use crate::report::InjectionReport;

/// Reads a document, runs the placeholder passes over it and writes the
/// result back over the same path.
pub struct Injector {
    fs: FileSystem,
    table: PlaceholderTable,
}

impl Injector {
    pub fn new(fs: FileSystem, table: PlaceholderTable) -> Self {
        Self { fs, table }
    }

    /// On-disk files, values from the current process environment.
    pub fn from_env() -> Self {
        Self::new(
            FileSystem::os().with_tracer(LogTracer.into()),
            PlaceholderTable::from_env(),
        )
    }

    pub fn file_system(&self) -> &FileSystem {
        &self.fs
    }

    /// Substitutes the document at `path` without writing anything.
    pub fn render<P>(&mut self, path: P) -> MyResult<Substitution>
        where P: AsRef<Path>
    {
        let buffer = self.fs.read_all(path.as_ref())?;
        log::debug!("Read {} bytes from {:?}", buffer.len(), path.as_ref());
        Ok(self.table.substitute(buffer))
    }

    /// Substitutes the document at `path` and overwrites it. Nothing is
    /// written if reading fails.
    pub fn inject<P>(&mut self, path: P) -> MyResult<InjectionReport>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let substitution = self.render(path)?;
        self.fs.write_all(path, &substitution.content)?;
        log::info!(
            "Injected into {:?}: {}",
            path,
            substitution
                .counts
                .iter()
                .filter(|(_, n)| *n > 0)
                .map(|(key, n)| format!("{key} x{n}"))
                .join(", ")
        );
        Ok(InjectionReport::new(path, &self.table, &substitution))
    }
}
