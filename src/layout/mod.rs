// Solvers that turn a fitted partition into row geometry

pub mod arrange;
pub mod blocks;
pub mod divvy;
