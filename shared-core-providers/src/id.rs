use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::warn;
use uuid::Uuid;

/// Length used by [`HexIdGenerator::new`] when asked for zero characters.
pub const DEFAULT_HEX_LENGTH: usize = 16;

/// Produces unique string identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Arc<G> {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

/// Random version 4 UUIDs in lowercase hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}

/// `<prefix>-<id>`, where `<id>` comes from a base generator (UUIDs by
/// default).
pub struct PrefixedIdGenerator {
    prefix: String,
    base: Box<dyn IdGenerator>,
}

impl PrefixedIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_base(prefix, UuidGenerator)
    }

    pub fn with_base(prefix: impl Into<String>, base: impl IdGenerator + 'static) -> Self {
        Self {
            prefix: prefix.into(),
            base: Box::new(base),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Debug for PrefixedIdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixedIdGenerator")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl IdGenerator for PrefixedIdGenerator {
    fn generate(&self) -> String {
        format!("{}-{}", self.prefix, self.base.generate())
    }
}

/// `<prefix>-1`, `<prefix>-2`, ... Deterministic, for tests and fixtures.
///
/// The counter is shared by every caller; concurrent calls never hand out
/// the same number.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

/// Random lowercase hexadecimal strings of a fixed length.
#[derive(Debug, Clone, Copy)]
pub struct HexIdGenerator {
    length: usize,
}

impl HexIdGenerator {
    /// `length` hex characters per id; `0` selects [`DEFAULT_HEX_LENGTH`].
    pub fn new(length: usize) -> Self {
        let length = if length == 0 {
            DEFAULT_HEX_LENGTH
        } else {
            length
        };
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for HexIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_HEX_LENGTH)
    }
}

impl IdGenerator for HexIdGenerator {
    fn generate(&self) -> String {
        let mut bytes = vec![0u8; self.length.div_ceil(2)];
        if let Err(err) = OsRng.try_fill_bytes(&mut bytes) {
            warn!(error = %err, "OS random source failed, using thread-local generator");
            rand::thread_rng().fill_bytes(&mut bytes);
        }
        let mut id = hex::encode(bytes);
        id.truncate(self.length);
        id
    }
}
