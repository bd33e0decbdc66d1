//! Scorecard categories.
//!
//! Thirteen fixed boxes split into the Upper section (Ones..Sixes) and the
//! Lower section (combinations). `Category::ALL` is the canonical order used
//! for display, iteration and tie-breaking.

use serde::{Deserialize, Serialize};

/// Scorecard section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Upper,
    Lower,
}

/// One of the 13 scorecard boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    /// Number of categories on a sheet.
    pub const COUNT: usize = 13;

    /// All categories in scorecard order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// The six Upper categories, Ones first.
    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// Position in `Category::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn section(self) -> Section {
        if (self as usize) < 6 {
            Section::Upper
        } else {
            Section::Lower
        }
    }

    #[must_use]
    pub const fn is_upper(self) -> bool {
        matches!(self.section(), Section::Upper)
    }

    /// Face value counted by an Upper category (`None` for Lower ones).
    #[must_use]
    pub const fn face(self) -> Option<u8> {
        if self.is_upper() {
            Some(self as u8 + 1)
        } else {
            None
        }
    }

    /// Upper category that counts `face`.
    ///
    /// Returns `None` for values outside 1..=6.
    #[must_use]
    pub fn upper_for_face(face: u8) -> Option<Category> {
        match face {
            1..=6 => Some(Self::UPPER[face as usize - 1]),
            _ => None,
        }
    }

    /// Scorecard label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Ones => "Aces",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "3 of a Kind",
            Category::FourOfAKind => "4 of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Sm. Straight",
            Category::LargeStraight => "Lg. Straight",
            Category::Yahtzee => "YAHTZEE",
            Category::Chance => "Chance",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
