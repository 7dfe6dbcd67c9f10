pub mod composition;
pub mod measure;
pub mod simulate;
pub mod sweep;
