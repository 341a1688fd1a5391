use std::collections::HashMap;

use enum_dispatch::enum_dispatch;

/// Where placeholder values come from.
#[enum_dispatch]
pub trait EnvTrait {
    fn lookup(&self, name: &str) -> Option<String>;
}

#[enum_dispatch(EnvTrait)]
#[derive(Debug)]
pub enum EnvSource {
    ProcessEnv,
    HashMapStd(HashMap<String, String>),
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::ProcessEnv(ProcessEnv)
    }
}

/// Reads `std::env`. Values that are not valid unicode are decoded lossily.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvTrait for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvTrait for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
