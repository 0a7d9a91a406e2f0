//! Headless play: keep taking the hinted swap and report every effect.

use tracing::{debug, info};

use crate::core::{BoardError, Game, PieceSource};
use crate::observe::{notify, EffectCounter, EffectListener};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoplaySummary {
    pub moves_played: u32,
    pub totals: EffectCounter,
    /// Longest refill chain caused by a single move.
    pub longest_chain: usize,
    /// Stopped early because the board had no legal move left.
    pub stalled: bool,
}

/// Play up to `max_moves` hinted moves on `game`.
///
/// Effects of each move go to `listener` as soon as the move returns. Play
/// stops early when no legal move remains; the board is left as is.
pub fn autoplay<P, S, L>(
    game: &mut Game<P, S>,
    max_moves: u32,
    listener: &mut L,
) -> Result<AutoplaySummary, BoardError>
where
    P: Clone + PartialEq,
    S: PieceSource<P>,
    L: EffectListener<P> + ?Sized,
{
    let mut summary = AutoplaySummary::default();

    while summary.moves_played < max_moves {
        let Some(swap) = game.hint() else {
            summary.stalled = true;
            break;
        };
        let result = game.apply_swap(swap)?;

        notify(&result.effects, &mut summary.totals);
        notify(&result.effects, listener);

        summary.moves_played += 1;
        summary.longest_chain = summary.longest_chain.max(result.cascades());
        debug!(
            a = ?swap.a,
            b = ?swap.b,
            effects = result.effects.len(),
            "autoplay move"
        );
    }

    info!(
        moves = summary.moves_played,
        matches = summary.totals.matches,
        refills = summary.totals.refills,
        stalled = summary.stalled,
        "autoplay finished"
    );
    Ok(summary)
}
