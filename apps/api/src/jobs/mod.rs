//! Job board: listings, employer postings and CV matching against the board.

pub mod board;
pub mod handlers;
pub mod postgres;
pub mod seed;
