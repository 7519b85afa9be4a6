pub mod assignment;
pub mod criteria;
pub mod hackathon;
pub mod project;
pub mod score;
