pub mod lister;
pub mod runner;
