pub mod generator;
pub mod solver;
pub mod validation;
