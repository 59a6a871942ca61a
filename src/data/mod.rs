pub mod axis;
pub mod export;
pub mod scores;
