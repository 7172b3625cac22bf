use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Copies of one scoring tile that exist in a physical set.
pub const MAX_COPIES: u8 = 4;
/// Flowers and seasons are unique tiles.
pub const BONUS_MAX_COPIES: u8 = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Characters,
    Dots,
    Bamboo,
    Honors,
    Bonus,
}

impl Suit {
    pub const ALL: [Suit; 5] = [
        Suit::Characters,
        Suit::Dots,
        Suit::Bamboo,
        Suit::Honors,
        Suit::Bonus,
    ];

    pub const NUMBERED: [Suit; 3] = [Suit::Characters, Suit::Dots, Suit::Bamboo];

    pub fn prefix(self) -> char {
        match self {
            Suit::Characters => 'm',
            Suit::Dots => 'p',
            Suit::Bamboo => 's',
            Suit::Honors => 'z',
            Suit::Bonus => 'f',
        }
    }

    /// Accepts the canonical prefixes and the older `c`/`d`/`b`/`h` spelling.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_lowercase() {
            'm' | 'c' => Some(Suit::Characters),
            'p' | 'd' => Some(Suit::Dots),
            's' | 'b' => Some(Suit::Bamboo),
            'z' | 'h' => Some(Suit::Honors),
            'f' => Some(Suit::Bonus),
            _ => None,
        }
    }

    pub fn is_numbered(self) -> bool {
        matches!(self, Suit::Characters | Suit::Dots | Suit::Bamboo)
    }

    pub fn max_rank(self) -> u8 {
        match self {
            Suit::Characters | Suit::Dots | Suit::Bamboo => 9,
            Suit::Honors => 7,
            Suit::Bonus => 8,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Suit::Characters => "Characters (Wan)",
            Suit::Dots => "Dots (Tong)",
            Suit::Bamboo => "Bamboo (Tiao)",
            Suit::Honors => "Honors",
            Suit::Bonus => "Flowers",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            Suit::Characters => 0,
            Suit::Dots => 1,
            Suit::Bamboo => 2,
            Suit::Honors => 3,
            Suit::Bonus => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("malformed tile id {0:?}")]
    Malformed(String),
}

/// A tile identity. Two tiles are interchangeable iff they compare equal.
///
/// Ordering follows suit then rank, which for scoring tiles matches the
/// lexicographic order of their canonical ids (`m1 < m2 < … < p1 < … < z7`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tile {
    suit: Suit,
    rank: u8,
}

const NUMBER_WORDS: [&str; 9] = [
    "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const HONOR_NAMES: [&str; 7] = ["East", "South", "West", "North", "White", "Green", "Red"];
const HONOR_SYMBOLS: [&str; 7] = ["E", "S", "W", "N", "WHT", "GRN", "RED"];
const BONUS_NAMES: [&str; 8] = [
    "Plum",
    "Orchid",
    "Chrysanthemum",
    "Bamboo",
    "Spring",
    "Summer",
    "Autumn",
    "Winter",
];

const CHARACTER_GLYPHS: [char; 9] = [
    '\u{1F007}', '\u{1F008}', '\u{1F009}', '\u{1F00A}', '\u{1F00B}', '\u{1F00C}', '\u{1F00D}',
    '\u{1F00E}', '\u{1F00F}',
];
const DOT_GLYPHS: [char; 9] = [
    '\u{1F019}', '\u{1F01A}', '\u{1F01B}', '\u{1F01C}', '\u{1F01D}', '\u{1F01E}', '\u{1F01F}',
    '\u{1F020}', '\u{1F021}',
];
const BAMBOO_GLYPHS: [char; 9] = [
    '\u{1F010}', '\u{1F011}', '\u{1F012}', '\u{1F013}', '\u{1F014}', '\u{1F015}', '\u{1F016}',
    '\u{1F017}', '\u{1F018}',
];
const HONOR_GLYPHS: [char; 7] = [
    '\u{1F000}', '\u{1F001}', '\u{1F002}', '\u{1F003}', '\u{1F006}', '\u{1F005}', '\u{1F004}',
];
const BONUS_GLYPHS: [char; 8] = [
    '\u{1F022}', '\u{1F023}', '\u{1F025}', '\u{1F024}', '\u{1F026}', '\u{1F027}', '\u{1F028}',
    '\u{1F029}',
];

impl Tile {
    /// Number of distinct scoring tiles (numbered suits plus honors).
    pub const SCORING_KINDS: usize = 34;

    pub fn new(suit: Suit, rank: u8) -> Result<Self, TileError> {
        if rank == 0 || rank > suit.max_rank() {
            return Err(TileError::Malformed(format!("{}{}", suit.prefix(), rank)));
        }
        Ok(Self { suit, rank })
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn is_numbered(self) -> bool {
        self.suit.is_numbered()
    }

    pub fn is_honor(self) -> bool {
        self.suit == Suit::Honors
    }

    pub fn is_bonus(self) -> bool {
        self.suit == Suit::Bonus
    }

    pub fn max_copies(self) -> u8 {
        if self.is_bonus() {
            BONUS_MAX_COPIES
        } else {
            MAX_COPIES
        }
    }

    /// Same-suit neighbour at `rank + offset`, if it exists. Honors and
    /// bonus tiles have no neighbours.
    pub fn offset(self, offset: i8) -> Option<Self> {
        if !self.is_numbered() {
            return None;
        }
        let rank = self.rank as i8 + offset;
        if !(1..=9).contains(&rank) {
            return None;
        }
        Some(Self {
            suit: self.suit,
            rank: rank as u8,
        })
    }

    /// Slot in a 34-entry count table; `None` for bonus tiles.
    pub fn index(self) -> Option<usize> {
        if self.is_bonus() {
            return None;
        }
        Some(self.suit.ordinal() * 9 + (self.rank as usize - 1))
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= Self::SCORING_KINDS {
            return None;
        }
        let suit = [Suit::Characters, Suit::Dots, Suit::Bamboo, Suit::Honors][index / 9];
        Some(Self {
            suit,
            rank: (index % 9) as u8 + 1,
        })
    }

    pub fn id(self) -> String {
        self.to_string()
    }

    pub fn name(self) -> String {
        let slot = self.rank as usize - 1;
        match self.suit {
            Suit::Characters => format!("{} Wan", NUMBER_WORDS[slot]),
            Suit::Dots => format!("{} Tong", NUMBER_WORDS[slot]),
            Suit::Bamboo => format!("{} Tiao", NUMBER_WORDS[slot]),
            Suit::Honors => HONOR_NAMES[slot].to_string(),
            Suit::Bonus => BONUS_NAMES[slot].to_string(),
        }
    }

    /// The rank as shown on the tile face: a digit, or the honor symbol.
    pub fn face(self) -> String {
        match self.suit {
            Suit::Honors => HONOR_SYMBOLS[self.rank as usize - 1].to_string(),
            _ => self.rank.to_string(),
        }
    }

    pub fn unicode(self) -> char {
        let slot = self.rank as usize - 1;
        match self.suit {
            Suit::Characters => CHARACTER_GLYPHS[slot],
            Suit::Dots => DOT_GLYPHS[slot],
            Suit::Bamboo => BAMBOO_GLYPHS[slot],
            Suit::Honors => HONOR_GLYPHS[slot],
            Suit::Bonus => BONUS_GLYPHS[slot],
        }
    }

    /// Every tile kind in catalog order.
    pub fn catalog() -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(42);
        for suit in Suit::ALL {
            for rank in 1..=suit.max_rank() {
                tiles.push(Tile { suit, rank });
            }
        }
        tiles
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.prefix(), self.rank)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Tile {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TileError::Malformed(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let prefix = chars.next().ok_or_else(malformed)?;
        let suit = Suit::from_prefix(prefix).ok_or_else(malformed)?;
        let rank = match chars.as_str().as_bytes() {
            [digit] if digit.is_ascii_digit() => digit - b'0',
            _ => return Err(malformed()),
        };
        Tile::new(suit, rank).map_err(|_| malformed())
    }
}

impl TryFrom<String> for Tile {
    type Error = TileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.to_string()
    }
}

/// Parses ids separated by whitespace or commas, e.g. `"m1 m1, m2"`.
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>, TileError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

pub fn parse_tile_ids<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Tile>, TileError> {
    ids.iter().map(|id| id.as_ref().parse()).collect()
}
