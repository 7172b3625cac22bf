//! Mahjong hand analysis. Keep this crate free of IO and platform concerns.

pub mod combos;
pub mod counts;
pub mod decompose;
pub mod hand;
pub mod hint;
pub mod rules;
pub mod tiles;
pub mod validate;

pub use combos::*;
pub use counts::*;
pub use decompose::*;
pub use hand::*;
pub use hint::*;
pub use rules::*;
pub use tiles::*;
pub use validate::*;
