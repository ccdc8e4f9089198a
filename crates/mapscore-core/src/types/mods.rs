//! Gameplay modifier sets, encoded with the osu! mod bit values.

use std::fmt;

/// A set of gameplay modifiers passed to the scoring oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierSet(u32);

impl ModifierSet {
    pub const NONE: Self = Self(0);
    pub const EASY: Self = Self(1 << 1);
    pub const HIDDEN: Self = Self(1 << 3);
    pub const HARD_ROCK: Self = Self(1 << 4);
    pub const DOUBLE_TIME: Self = Self(1 << 6);
    pub const HALF_TIME: Self = Self(1 << 8);
    pub const NIGHTCORE: Self = Self(1 << 9);
    pub const FLASHLIGHT: Self = Self(1 << 10);

    const ACRONYMS: [(Self, &'static str); 7] = [
        (Self::EASY, "EZ"),
        (Self::HIDDEN, "HD"),
        (Self::HARD_ROCK, "HR"),
        (Self::DOUBLE_TIME, "DT"),
        (Self::HALF_TIME, "HT"),
        (Self::NIGHTCORE, "NC"),
        (Self::FLASHLIGHT, "FL"),
    ];

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Concatenated two-letter acronyms, e.g. `HDDT`. Empty for no mods.
    pub fn acronyms(self) -> String {
        Self::ACRONYMS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, acronym)| *acronym)
            .collect()
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("NM")
        } else {
            f.write_str(&self.acronyms())
        }
    }
}
