//! Board: deck ordering, grid layout, and surface mediation.

pub mod board;
pub mod layout;

pub use board::Board;
pub use layout::column_count;
