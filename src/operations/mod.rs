pub mod boolean;
pub mod simplify;
