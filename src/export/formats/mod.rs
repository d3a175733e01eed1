pub mod bed;
pub mod composition;
