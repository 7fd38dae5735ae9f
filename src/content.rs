//! Fixed content sequences and random selection.
//!
//! Two ordered sequences of display strings, baked into the binary and
//! immutable for the process lifetime. Selection is a uniform random draw
//! that returns the drawn index alongside the text.

use rand::Rng;

/// Puns, in display order.
pub const PUNS: &[&str] = &[
    "I'm going through a solid phase right now, just trying to keep it together.",
    "Liquid water is pretty chill… until things heat up.",
    "Gas molecules? They’re just full of hot air.",
    "I told my friends about plasma, but it didn’t get a solid reaction.",
    "Life is all about phase changes… you just have to go with the flow.",
    "Ice to meet you, let’s break the surface tension.",
    "I’m in my vapor phase, I rise above the drama.",
    "Phase transitions: nature’s way of changing without losing your identity.",
];

/// Facts, in display order.
pub const FACTS: &[&str] = &[
    "There’s more than just solid, liquid, gas. Plasma is the fourth common phase, and there are exotic phases like Bose–Einstein condensates and time crystals.",
    "Phase changes can absorb or release heat without changing temperature, e.g., ice melts at 0 °C and water boils at 100 °C.",
    "Supercooled liquids can stay liquid below their freezing point until disturbed. One tap, and boom, instant ice.",
    "Phase transitions happen in space too, stellar interiors shift phases under extreme pressure and temperature.",
    "Quantum phase transitions occur at absolute zero, driven by quantum fluctuations rather than temperature.",
];

/// Read-only handle over the two content sequences.
#[derive(Debug, Clone)]
pub struct ContentStore {
    puns: &'static [&'static str],
    facts: &'static [&'static str],
}

impl ContentStore {
    /// Store over the built-in sequences.
    pub fn new() -> Self {
        Self {
            puns: PUNS,
            facts: FACTS,
        }
    }

    /// Store over caller-provided sequences.
    pub fn with_sequences(
        puns: &'static [&'static str],
        facts: &'static [&'static str],
    ) -> Self {
        Self { puns, facts }
    }

    /// Uniform random draw from the pun sequence.
    pub fn random_pun(&self) -> Option<(usize, &'static str)> {
        pick(self.puns)
    }

    /// Uniform random draw from the fact sequence.
    pub fn random_fact(&self) -> Option<(usize, &'static str)> {
        pick(self.facts)
    }

    pub fn pun_count(&self) -> usize {
        self.puns.len()
    }

    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    /// True when both sequences have at least one entry.
    pub fn has_content(&self) -> bool {
        !self.puns.is_empty() && !self.facts.is_empty()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform draw over a sequence. Empty sequences yield nothing.
fn pick(items: &'static [&'static str]) -> Option<(usize, &'static str)> {
    if items.is_empty() {
        return None;
    }
    let index = rand::rng().random_range(0..items.len());
    Some((index, items[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_sequences_are_populated() {
        let store = ContentStore::new();
        assert!(store.pun_count() > 0);
        assert!(store.fact_count() > 0);
        assert!(store.has_content());
    }

    #[test]
    fn draws_stay_in_range_and_match_the_sequence() {
        let store = ContentStore::new();
        for _ in 0..100 {
            let (index, text) = store.random_pun().unwrap();
            assert!(index < PUNS.len());
            assert_eq!(text, PUNS[index]);

            let (index, text) = store.random_fact().unwrap();
            assert!(index < FACTS.len());
            assert_eq!(text, FACTS[index]);
        }
    }

    #[test]
    fn empty_sequences_yield_nothing() {
        let store = ContentStore::with_sequences(&[], &[]);
        assert!(store.random_pun().is_none());
        assert!(store.random_fact().is_none());
        assert!(!store.has_content());
    }

    #[test]
    fn one_empty_sequence_fails_the_content_check() {
        let store = ContentStore::with_sequences(PUNS, &[]);
        assert!(!store.has_content());
    }
}
