//! Effect listeners.
//!
//! The core returns every move's effects as a plain `Vec`; nothing is
//! pushed anywhere. Frontends that want push-style notification hand the
//! log to [`notify`] with whatever listener they need.

use std::io::{self, Write};

use serde::Serialize;

use crate::core::{Board, Effect};
use crate::types::{Cell, Gem};

/// Receives effects one at a time, in log order.
pub trait EffectListener<P> {
    fn on_effect(&mut self, effect: &Effect<P>);
}

impl<P, L: EffectListener<P> + ?Sized> EffectListener<P> for &mut L {
    fn on_effect(&mut self, effect: &Effect<P>) {
        (**self).on_effect(effect)
    }
}

/// Deliver `effects` to `listener` in order.
pub fn notify<P, L>(effects: &[Effect<P>], listener: &mut L)
where
    L: EffectListener<P> + ?Sized,
{
    for effect in effects {
        listener.on_effect(effect);
    }
}

/// Adapts a closure into a listener.
pub struct FnListener<F>(pub F);

impl<P, F: FnMut(&Effect<P>)> EffectListener<P> for FnListener<F> {
    fn on_effect(&mut self, effect: &Effect<P>) {
        (self.0)(effect)
    }
}

/// Running totals over everything it has seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectCounter {
    pub matches: usize,
    pub refills: usize,
    /// Sum of match lengths; a cell shared by a row and a column match counts twice.
    pub matched_cells: usize,
    pub longest_match: usize,
}

impl EffectCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> EffectListener<P> for EffectCounter {
    fn on_effect(&mut self, effect: &Effect<P>) {
        match effect {
            Effect::Match(m) => {
                self.matches += 1;
                self.matched_cells += m.len();
                self.longest_match = self.longest_match.max(m.len());
            }
            Effect::Refill { .. } => self.refills += 1,
        }
    }
}

#[derive(Serialize)]
struct Record<'a, P> {
    seq: u64,
    #[serde(flatten)]
    effect: &'a Effect<P>,
}

/// Writes one JSON object per effect, newline-terminated.
///
/// Each line carries a running `seq` number next to the effect's own
/// fields. The first write error is kept and later effects are dropped;
/// [`JsonLinesListener::finish`] reports it.
pub struct JsonLinesListener<W: Write> {
    writer: W,
    seq: u64,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesListener<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            seq: 0,
            error: None,
        }
    }

    /// Lines written so far.
    pub fn written(&self) -> u64 {
        self.seq
    }

    /// Flush and hand back the writer, or the first error hit.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_record<P: Serialize>(&mut self, effect: &Effect<P>) -> io::Result<()> {
        let record = Record {
            seq: self.seq,
            effect,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")
    }
}

impl<P: Serialize, W: Write> EffectListener<P> for JsonLinesListener<W> {
    fn on_effect(&mut self, effect: &Effect<P>) {
        if self.error.is_some() {
            return;
        }
        match self.write_record(effect) {
            Ok(()) => self.seq += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

/// The board as one string per row: gem initials, `.` for empty cells.
pub fn board_lines(board: &Board<Gem>) -> Vec<String> {
    board
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Occupied(gem) => gem.symbol(),
                    Cell::Empty => '.',
                })
                .collect()
        })
        .collect()
}
