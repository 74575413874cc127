//! Mapping utilities for wisp.
//!
//! Container types layered over `HashMap`: multimaps (one key, many
//! values), bijective maps (one-to-one with an inverse index), write-once
//! maps, and case-insensitive string-keyed maps. Free functions cover
//! inverting, filtering and joining plain maps.

pub mod bijective;
pub mod casefold;
pub mod multi;
pub mod ops;
pub mod setonce;

pub use bijective::{BijectiveError, BijectiveMap};
pub use casefold::CaseFoldMap;
pub use multi::{MultiMap, SetMultiMap};
pub use setonce::{DuplicateKeyError, SetOnceMap};
