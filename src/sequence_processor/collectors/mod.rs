pub mod composition;
pub mod orf;
