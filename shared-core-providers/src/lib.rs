//! Injectable sources of identifiers and wall-clock time.
//!
//! Services depend on [`IdGenerator`] and [`TimeProvider`] rather than on
//! `uuid` or `Utc::now()` directly, so tests can swap in
//! [`SequentialIdGenerator`] and [`FixedTimeProvider`].

mod id;
mod time;

pub use id::{
    HexIdGenerator, IdGenerator, PrefixedIdGenerator, SequentialIdGenerator, UuidGenerator,
    DEFAULT_HEX_LENGTH,
};
pub use time::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
