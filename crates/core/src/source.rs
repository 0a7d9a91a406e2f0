//! Piece sources - where new pieces come from
//!
//! The engine asks a [`PieceSource`] for one piece per cell it needs to fill,
//! both when a board is created and when cleared cells are refilled.
//!
//! Provided sources:
//! - [`RandomSource`]: uniform draws over a fixed piece set, driven by a
//!   deterministic LCG so the same seed replays the same game
//! - [`ScriptedSource`]: a fixed sequence, optionally followed by a repeated
//!   tail; used by tests and replays
//! - [`FnSource`]: adapts any closure

use std::collections::VecDeque;

use crate::error::SourceError;
use crate::types::Gem;

/// Produces the next piece on demand.
///
/// Implementations may keep private mutable state (an RNG, a cursor) but must
/// not observe or touch the board.
pub trait PieceSource<P> {
    fn next_piece(&mut self) -> Result<P, SourceError>;
}

impl<P, S: PieceSource<P> + ?Sized> PieceSource<P> for &mut S {
    fn next_piece(&mut self) -> Result<P, SourceError> {
        (**self).next_piece()
    }
}

impl<P, S: PieceSource<P> + ?Sized> PieceSource<P> for Box<S> {
    fn next_piece(&mut self) -> Result<P, SourceError> {
        (**self).next_piece()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random draws from a fixed set of pieces.
#[derive(Debug, Clone)]
pub struct RandomSource<P> {
    pieces: Vec<P>,
    rng: SimpleRng,
}

impl<P: Clone> RandomSource<P> {
    pub fn new(seed: u32, pieces: Vec<P>) -> Self {
        Self {
            pieces,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn pieces(&self) -> &[P] {
        &self.pieces
    }

    pub fn rng(&self) -> &SimpleRng {
        &self.rng
    }
}

impl RandomSource<Gem> {
    /// Draw from the first `kinds` gems of [`Gem::ALL`].
    ///
    /// `kinds` is clamped to `1..=Gem::ALL.len()`.
    pub fn gems(seed: u32, kinds: usize) -> Self {
        let kinds = kinds.clamp(1, Gem::ALL.len());
        Self::new(seed, Gem::ALL[..kinds].to_vec())
    }
}

impl<P: Clone> PieceSource<P> for RandomSource<P> {
    fn next_piece(&mut self) -> Result<P, SourceError> {
        if self.pieces.is_empty() {
            return Err(SourceError::Failed("no pieces to draw from".to_string()));
        }
        let idx = self.rng.next_range(self.pieces.len() as u32) as usize;
        Ok(self.pieces[idx].clone())
    }
}

/// A fixed sequence of pieces, optionally followed by one piece repeated
/// forever.
#[derive(Debug, Clone)]
pub struct ScriptedSource<P> {
    queue: VecDeque<P>,
    tail: Option<P>,
    drawn: usize,
}

impl<P: Clone> ScriptedSource<P> {
    pub fn new(pieces: impl IntoIterator<Item = P>) -> Self {
        Self {
            queue: pieces.into_iter().collect(),
            tail: None,
            drawn: 0,
        }
    }

    /// Once the script runs out, keep producing `piece`.
    pub fn then_repeat(mut self, piece: P) -> Self {
        self.tail = Some(piece);
        self
    }

    /// Append more pieces to the script.
    pub fn extend(&mut self, pieces: impl IntoIterator<Item = P>) {
        self.queue.extend(pieces);
    }

    /// Pieces left in the script (the repeated tail is not counted).
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Total pieces handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl<P: Clone> PieceSource<P> for ScriptedSource<P> {
    fn next_piece(&mut self) -> Result<P, SourceError> {
        let piece = match self.queue.pop_front() {
            Some(piece) => piece,
            None => self
                .tail
                .clone()
                .ok_or(SourceError::Exhausted { drawn: self.drawn })?,
        };
        self.drawn += 1;
        Ok(piece)
    }
}

/// Adapts a closure into a [`PieceSource`].
pub struct FnSource<F>(F);

/// Build a source from a closure that always yields a piece.
pub fn from_fn<P, F: FnMut() -> P>(f: F) -> FnSource<F> {
    FnSource(f)
}

impl<P, F: FnMut() -> P> PieceSource<P> for FnSource<F> {
    fn next_piece(&mut self) -> Result<P, SourceError> {
        Ok((self.0)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(6) < 6);
        }
    }

    #[test]
    fn test_random_source_covers_all_kinds() {
        let mut source = RandomSource::gems(42, 4);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let gem = source.next_piece().unwrap();
            assert!(Gem::ALL[..4].contains(&gem), "unexpected gem {:?}", gem);
            if !seen.contains(&gem) {
                seen.push(gem);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_random_source_same_seed_same_sequence() {
        let mut a = RandomSource::gems(99, 6);
        let mut b = RandomSource::gems(99, 6);
        for _ in 0..50 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }

    #[test]
    fn test_random_source_without_pieces_fails() {
        let mut source: RandomSource<char> = RandomSource::new(1, Vec::new());
        assert!(matches!(source.next_piece(), Err(SourceError::Failed(_))));
    }

    #[test]
    fn test_scripted_source_exhausts() {
        let mut source = ScriptedSource::new(['a', 'b']);
        assert_eq!(source.next_piece(), Ok('a'));
        assert_eq!(source.next_piece(), Ok('b'));
        assert_eq!(
            source.next_piece(),
            Err(SourceError::Exhausted { drawn: 2 })
        );
    }

    #[test]
    fn test_scripted_source_repeats_tail() {
        let mut source = ScriptedSource::new(['a']).then_repeat('x');
        assert_eq!(source.next_piece(), Ok('a'));
        assert_eq!(source.next_piece(), Ok('x'));
        assert_eq!(source.next_piece(), Ok('x'));
        assert_eq!(source.drawn(), 3);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_fn_source_and_mut_ref() {
        let mut n = 0;
        let mut source = from_fn(move || {
            n += 1;
            n
        });
        let by_ref = &mut source;
        assert_eq!(by_ref.next_piece(), Ok(1));
        assert_eq!(source.next_piece(), Ok(2));
    }
}
