//! Filesystem facade that this crate uses

use std::{path::{Path, PathBuf}, collections::HashMap, io::{Read, Write}};

use common::{MyResult, MyResultTrait};
use simple_error::simple_error;

use crate::memfs_tracer::{Tracer, Trace};


pub struct FileSystem {
    fs_impl: FileSystemImpl
}

pub struct File<'a> {
    f_impl: FileImpl<'a>
}

impl <'a> Read for File<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.f_impl.read(buf)
    }
}
impl <'a> Write for File<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.f_impl.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.f_impl.flush()
    }
}

impl FileSystem {
    /// The real filesystem, paths resolved against the working directory.
    pub fn os() -> Self {
        Self { fs_impl: FileSystemImpl::OSFileSystem(Default::default()) }
    }
    /// A filesystem that only lives in `mem`.
    pub fn memory(mem: MemFileSystem) -> Self {
        Self { fs_impl: FileSystemImpl::MemFileSystem(mem) }
    }
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        match &mut self.fs_impl {
            FileSystemImpl::OSFileSystem(os) => os.fs_tracer = tracer,
            FileSystemImpl::MemFileSystem(mem) => mem.fs_tracer = tracer,
        }
        self
    }

    pub fn open<P>(&mut self, path: P) -> MyResult<File<'_>> where P: AsRef<Path> {
        self.fs_impl.open(path).map(|f_impl| File { f_impl })
    }
    /// Creates `path`, truncating whatever was there before.
    pub fn create<P>(&mut self, path: P) -> MyResult<File<'_>> where P: AsRef<Path> {
        self.fs_impl.create(path).map(|f_impl| File { f_impl })
    }

    pub fn read_all<P>(&mut self, path: P) -> MyResult<Vec<u8>> where P: AsRef<Path> {
        let mut buf = Vec::new();
        self.open(path)?.read_to_end(&mut buf)?;
        Ok(buf)
    }
    pub fn write_all<P>(&mut self, path: P, content: &[u8]) -> MyResult<()> where P: AsRef<Path> {
        let mut f = self.create(path)?;
        f.write_all(content)?;
        f.flush().my_result()
    }

    pub fn as_memory(&self) -> Option<&MemFileSystem> {
        match &self.fs_impl {
            FileSystemImpl::MemFileSystem(mem) => Some(mem),
            FileSystemImpl::OSFileSystem(_) => None,
        }
    }
}

enum FileSystemImpl {
    OSFileSystem(OSFileSystem),
    MemFileSystem(MemFileSystem)
}

trait ProvideFileSystem {
    // NOTE: open is mut because it may write to an attached tracer

    fn open<'a, P>(&'a mut self, path: P) -> MyResult<FileImpl<'a>> where P: AsRef<Path>;
    fn create<'a, P>(&'a mut self, path: P) -> MyResult<FileImpl<'a>> where P: AsRef<Path>;
}

impl ProvideFileSystem for FileSystemImpl {
    fn open<'a, P>(&'a mut self, path: P) -> MyResult<FileImpl<'a>> where P: AsRef<Path> {
        match self {
            Self::OSFileSystem(os) => os.open(path),
            Self::MemFileSystem(mem) => mem.open(path)
        }
    }

    fn create<'a, P>(&'a mut self, path: P) -> MyResult<FileImpl<'a>> where P: AsRef<Path> {
        match self {
            Self::OSFileSystem(os) => os.create(path),
            Self::MemFileSystem(mem) => mem.create(path)
        }
    }
}

enum FileImpl<'a> {
    OSFile(std::fs::File),
    MemFile(MemFile<'a>)
}
impl <'a> Read for FileImpl<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Self::OSFile(f) => f.read(buf),
            Self::MemFile(mf) => mf.read(buf)
        }
    }
}
impl <'a> Write for FileImpl<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::OSFile(f) => f.write(buf),
            Self::MemFile(mf) => mf.write(buf)
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::OSFile(f) => f.flush(),
            Self::MemFile(mf) => mf.flush()
        }
    }
}

impl <'a> From<MemFile<'a>> for FileImpl<'a> {
    fn from(v: MemFile<'a>) -> Self {
        Self::MemFile(v)
    }
}
impl <'a> From<std::fs::File> for FileImpl<'a> {
    fn from(f: std::fs::File) -> Self {
        Self::OSFile(f)
    }
}

impl <'a> MemFile<'a> {
    fn read_f(content: &'a Vec<u8>)->Self {
        Self { f_impl: MemFileImpl::MemFileRead(content), offset:0 }
    }
    fn write_f(content: &'a mut Vec<u8>) -> Self {
        Self { f_impl: MemFileImpl::MemFileWrite(content), offset:0 }
    }
}

enum MemFileImpl<'a> {
    MemFileRead(&'a Vec<u8>),
    MemFileWrite(&'a mut Vec<u8>)
}

impl <'a> MemFileImpl<'a> {
    fn vec(&self) -> &Vec<u8> {
        match self {
            Self::MemFileRead(v) => v,
            Self::MemFileWrite(v) => v
        }
    }
    fn vec_mut(&mut self) -> Option<&mut Vec<u8>> {
        match self {
            Self::MemFileRead(_) => None,
            Self::MemFileWrite(v) => Some(v)
        }
    }
}

struct MemFile<'a> {
    f_impl: MemFileImpl<'a>,
    offset: usize
}

impl <'a> MemFile<'a> {
    fn remain(&self) -> &[u8] {
        let len = self.offset.min(self.f_impl.vec().len());
        &self.f_impl.vec()[len..]
    }
}

/// A quasi-virtual filesystem that stores everything on memory.
///
/// Lets the injector run against fixtures without touching disk.
#[derive(Debug, Default)]
pub struct MemFileSystem {
    bucket: HashMap<PathBuf, Vec<u8>>,
    fs_tracer: Tracer
}

impl MemFileSystem {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn insert<P, C>(&mut self, path: P, content: C) -> &mut Self
        where P: AsRef<Path>, C: Into<Vec<u8>>
    {
        self.bucket.insert(path.as_ref().to_path_buf(), content.into());
        self
    }
    pub fn get<P>(&self, path: P) -> Option<&[u8]> where P: AsRef<Path> {
        self.bucket.get(path.as_ref()).map(|v| v.as_slice())
    }
    pub fn path_iter(&self) -> std::collections::hash_map::Keys<'_, PathBuf, Vec<u8>> {
        self.bucket.keys()
    }
}

impl ProvideFileSystem for MemFileSystem {
    fn open<'a, P>(&'a mut self, path: P) -> MyResult<FileImpl<'a>> where P: AsRef<Path> {
        let p_ref = path.as_ref();
        self.fs_tracer.on_open(p_ref);
        match self.bucket.get(p_ref) {
            Some(content_ref) => Ok(MemFile::read_f(content_ref).into()),
            None => {
                self.fs_tracer.on_open_nonexist(p_ref);
                Err(simple_error!("Path {:?} not found in provided MemFileSystem", p_ref).into())
            }
        }
    }

    fn create<'a, P>(&'a mut self, path: P) -> MyResult<FileImpl<'a>> where P: AsRef<Path> {
        let p_ref = path.as_ref();
        self.fs_tracer.on_create(p_ref);
        if let Some(last) = self.bucket.insert(p_ref.to_path_buf(), Vec::new()) {
            self.fs_tracer.on_create_overwrite(p_ref, Some(&last));
        }
        let content = self.bucket.entry(p_ref.to_path_buf()).or_default();
        Ok(MemFile::write_f(content).into())
    }
}


#[derive(Debug, Default)]
struct OSFileSystem {
    fs_tracer: Tracer
}
impl ProvideFileSystem for OSFileSystem {
    fn open<'a, P>(&'a mut self, path: P) -> MyResult<FileImpl<'a>> where P: AsRef<Path> {
        let p_ref = path.as_ref();
        self.fs_tracer.on_open(p_ref);
        std::fs::File::open(p_ref)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    self.fs_tracer.on_open_nonexist(p_ref);
                }
                e
            })
            .my_result()
            .map(|v| v.into())
    }

    fn create<'a, P>(&'a mut self, path: P) -> MyResult<FileImpl<'a>> where P: AsRef<Path> {
        let p_ref = path.as_ref();
        self.fs_tracer.on_create(p_ref);
        if p_ref.exists() {
            self.fs_tracer.on_create_overwrite(p_ref, None);
        }
        std::fs::File::create(p_ref).my_result().map(|v| v.into())
    }
}

impl <'a> Read for MemFile<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let read = Read::read(&mut self.remain(), buf)?;
        self.offset += read;
        Ok(read)
    }
}

impl <'a> Write for MemFile<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let vec = self.f_impl.vec_mut().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Unsupported,
                simple_error!("File does not support writing")
            )
        })?;
        vec.write_all(buf).map(|_| buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
