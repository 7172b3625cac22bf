//! Example hands and table rules loaded from JSON assets.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
