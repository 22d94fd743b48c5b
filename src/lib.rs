#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod cards;
pub mod pile;
pub mod rules;
pub mod state;
pub mod config;
pub mod signature;
pub mod encode;
pub mod hash;
pub mod cache;
pub mod rng;

// Re-exports: stable minimal API surface for external callers
pub use crate::cache::{build_cache, CacheStats, LruCache, StateCache, UnlimitedCache};
pub use crate::cards::{Card, CardParseError};
pub use crate::config::{CacheConfig, CacheKind, ConfigError, SuitSymmetry};
pub use crate::encode::{encode, Encoder};
pub use crate::hash::StateHasher;
pub use crate::pile::Pile;
pub use crate::rules::{BuildPolicy, Rules, StockDealType};
pub use crate::signature::{Signature, SuitReduction, Symbol};
pub use crate::state::{GameState, StateError};
pub use crate::types::{Colour, Suit};
