pub mod catalog;
pub mod judge;
pub mod score;
