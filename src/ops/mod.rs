pub mod empty;
pub mod keyed;
pub mod opt;
