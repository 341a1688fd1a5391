use std::borrow::Cow;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::bytes::{NoExpand, Regex};

use crate::key::PlaceholderKey;
use crate::source::{EnvSource, EnvTrait};

/// Stands in for any variable the environment does not define.
pub const UNDEFINED: &str = "undefined";

lazy_static! {
    /// One literal pattern per key, in [`PlaceholderKey::ALL`] order.
    static ref PATTERNS: Vec<(PlaceholderKey, Regex)> = PlaceholderKey::ALL
        .into_iter()
        .map(|key| {
            let re = Regex::new(&regex::escape(&key.token()))
                .expect("escaped placeholder token is a valid pattern");
            (key, re)
        })
        .collect();
}

/// Values for every [`PlaceholderKey`], resolved once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderTable {
    values: [Option<String>; 7],
}

/// Result of running every pass over one document buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The document bytes; anything outside a token is left as it was,
    /// whatever the encoding.
    pub content: Vec<u8>,
    /// Matches replaced per key, in pass order.
    pub counts: Vec<(PlaceholderKey, usize)>,
}

impl Substitution {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl PlaceholderTable {
    pub fn from_source<S: EnvTrait>(source: &S) -> Self {
        let mut table = Self::default();
        for key in PlaceholderKey::ALL {
            table.values[key.index()] = source.lookup(key.name());
        }
        table
    }

    /// Snapshot of the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&EnvSource::default())
    }

    pub fn get(&self, key: PlaceholderKey) -> Option<&str> {
        self.values[key.index()].as_deref()
    }

    /// Replacement text for `key`; [`UNDEFINED`] when unset.
    pub fn value(&self, key: PlaceholderKey) -> Cow<'_, str> {
        match self.get(key) {
            Some(v) => Cow::Borrowed(v),
            None => Cow::Borrowed(UNDEFINED),
        }
    }

    pub fn missing(&self) -> Vec<PlaceholderKey> {
        PlaceholderKey::ALL
            .into_iter()
            .filter(|key| self.get(*key).is_none())
            .collect()
    }

    /// Runs one pass per key over `buffer`, each pass seeing the output
    /// of the one before. Values are inserted verbatim.
    pub fn substitute<B: Into<Vec<u8>>>(&self, buffer: B) -> Substitution {
        let missing = self.missing();
        if !missing.is_empty() {
            log::warn!(
                "Not set, substituting {UNDEFINED:?}: {}",
                missing.iter().join(", ")
            );
        }
        let buffer: Vec<u8> = buffer.into();
        let (content, counts) = PATTERNS.iter().fold(
            (buffer, Vec::with_capacity(PATTERNS.len())),
            |(buf, mut counts), (key, re)| {
                let n = re.find_iter(&buf).count();
                log::debug!("{}: {n} occurrence(s)", key.token());
                let next = if n == 0 {
                    buf
                } else {
                    re.replace_all(&buf, NoExpand(self.value(*key).as_bytes())).into_owned()
                };
                counts.push((*key, n));
                (next, counts)
            },
        );
        Substitution { content, counts }
    }
}
