mod basic;

pub use basic::PieceDifference;
