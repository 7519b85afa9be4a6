pub mod assignment;
pub mod criteria;
pub mod score;
