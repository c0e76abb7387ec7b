// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! The injected entropy capability every random helper draws from.

/// Producer of uniformly distributed 32-bit words.
///
/// This is the only primitive the random helpers consume. Implementations own
/// all generator state; the helpers add no locking, so a source shared across
/// threads must be synchronized by the caller.
pub trait EntropySource {
    /// Returns the next uniformly distributed word.
    fn next_u32(&mut self) -> u32;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Entropy source backed by a closure, typically a host SDK call.
///
/// Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps a host "give me random bits" function as an [`EntropySource`].
///
/// ```
/// use ffrand::{from_fn, Random};
/// let mut counter = 0_u32;
/// let mut rng = Random::new(from_fn(move || {
///     counter = counter.wrapping_add(1);
///     counter
/// }));
/// assert_eq!(rng.uint32(), 1);
/// ```
pub fn from_fn<F: FnMut() -> u32>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: FnMut() -> u32> EntropySource for FromFn<F> {
    fn next_u32(&mut self) -> u32 {
        (self.0)()
    }
}
