use crate::cards::Card;

/// The external hand-strength capability injected by the environment.
///
/// Contract: accepts any 2 to 7 cards (a seat's hole cards plus however
/// much of the board has been revealed) and returns a totally ordered
/// score where a **lower score denotes a stronger hand**. The score must
/// be deterministic for a given card multiset, independent of input
/// order, and the call must not block.
///
/// The engine embeds no ranking algorithm of its own; it only aggregates
/// scores and reports the winner set.
pub trait HandRanker {
    fn rank(&self, cards: &[Card]) -> Result<u32, String>;
}

impl<F> HandRanker for F
where
    F: Fn(&[Card]) -> Result<u32, String>,
{
    fn rank(&self, cards: &[Card]) -> Result<u32, String> {
        self(cards)
    }
}
