use std::path::Path;

use enum_dispatch::enum_dispatch;

/// Hooks the file systems call on every open/create, so callers can see
/// which files a run touched and which ones it clobbered.
#[enum_dispatch]
pub trait Trace {
    fn on_open<P>(&mut self, path: P) where P: AsRef<Path>;
    fn on_open_nonexist<P>(&mut self, path: P) where P: AsRef<Path>;

    fn on_create<P>(&mut self, path: P) where P: AsRef<Path>;
    /// `last_content` is `None` when the previous content is not known,
    /// which is the case for files on disk.
    fn on_create_overwrite<P>(&mut self, path: P, last_content: Option<&Vec<u8>>) where P: AsRef<Path>;
}
#[enum_dispatch(Trace)]
#[derive(Debug)]
pub enum Tracer {
    NoopTracer,
    LogTracer,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::NoopTracer(Default::default())
    }
}

#[derive(Debug, Default)]
pub struct NoopTracer;
impl Trace for NoopTracer {
    fn on_open<P>(&mut self,_path:P)where P:AsRef<Path> {

    }

    fn on_open_nonexist<P>(&mut self,_path:P)where P:AsRef<Path> {

    }

    fn on_create<P>(&mut self,_path:P)where P:AsRef<Path> {

    }

    fn on_create_overwrite<P>(&mut self,_path:P, _last_content: Option<&Vec<u8>>)where P:AsRef<Path> {

    }
}

/// Forwards every event to the `log` facade.
#[derive(Debug, Default)]
pub struct LogTracer;
impl Trace for LogTracer {
    fn on_open<P>(&mut self, path: P) where P: AsRef<Path> {
        log::debug!("open {:?}", path.as_ref());
    }

    fn on_open_nonexist<P>(&mut self, path: P) where P: AsRef<Path> {
        log::debug!("open {:?}: no such file", path.as_ref());
    }

    fn on_create<P>(&mut self, path: P) where P: AsRef<Path> {
        log::debug!("create {:?}", path.as_ref());
    }

    fn on_create_overwrite<P>(&mut self, path: P, last_content: Option<&Vec<u8>>) where P: AsRef<Path> {
        match last_content {
            Some(last) => log::debug!("overwrite {:?} ({} bytes replaced)", path.as_ref(), last.len()),
            None => log::debug!("overwrite {:?}", path.as_ref()),
        }
    }
}
