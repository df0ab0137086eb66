pub mod criteria;
pub mod score;
