// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ffrand: ranged random values over a host-supplied entropy source.
//!
//! The host provides one primitive, "give me 32 random bits", injected as an
//! [`EntropySource`]. [`Random`] turns it into bias-free bounded integers,
//! unit floats, and the [`ffmath`] value types (points, sizes, angles,
//! vectors). [`Xoroshiro`] is a deterministic source for tests and tools.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod error;
mod geom;
mod prng;
mod random;
mod source;

pub use error::RandomError;
pub use prng::Xoroshiro;
pub use random::Random;
pub use source::{from_fn, EntropySource, FromFn};
