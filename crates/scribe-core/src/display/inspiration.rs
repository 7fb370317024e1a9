//! Fixed pools of tips and quotes sprinkled into the Poimea documents.

use rand::{seq::SliceRandom, Rng};

pub const PRODUCTIVITY_TIPS: &[&str] = &[
    "🍅 Use the Pomodoro Technique: 25 min writing, 5 min break",
    "📝 Write first, edit later - don't let perfectionism slow you down",
    "🎵 Create a playlist that matches your scene's mood",
    "🚶 Take a short walk to brainstorm difficult scenes",
    "💭 Keep a notebook for random ideas that come to you",
    "🎯 Focus on progress, not perfection - this is a rough draft!",
    "📚 Read a page from your favorite book for inspiration",
    "🌅 Write during your peak energy time",
];

pub const MOTIVATIONAL_QUOTES: &[&str] = &[
    "\"The first draft is just you telling yourself the story.\" - Terry Pratchett",
    "\"You can always edit a bad page. You can't edit a blank page.\" - Jodi Picoult",
    "\"Start writing, no matter what. The water does not flow until the faucet is turned on.\" - Louis L'Amour",
    "\"The scariest moment is always just before you start.\" - Stephen King",
    "\"Write what should not be forgotten.\" - Isabel Allende",
    "\"One day I will find the right words, and they will be simple.\" - Jack Kerouac",
];

/// Tips shown on a working day.
pub const TIPS_PER_DAY: usize = 3;

/// Picks `count` distinct productivity tips.
pub fn choose_tips<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
    PRODUCTIVITY_TIPS
        .choose_multiple(rng, count)
        .copied()
        .collect()
}

/// Picks one motivational quote.
pub fn choose_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_QUOTES
        .choose(rng)
        .copied()
        .unwrap_or(MOTIVATIONAL_QUOTES[0])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_choose_tips_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let tips = choose_tips(&mut rng, TIPS_PER_DAY);
            let unique: HashSet<_> = tips.iter().collect();
            assert_eq!(tips.len(), TIPS_PER_DAY);
            assert_eq!(unique.len(), TIPS_PER_DAY);
            assert!(tips.iter().all(|tip| PRODUCTIVITY_TIPS.contains(tip)));
        }
    }

    #[test]
    fn test_choose_quote_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let quote = choose_quote(&mut rng);
        assert!(MOTIVATIONAL_QUOTES.contains(&quote));
    }
}
