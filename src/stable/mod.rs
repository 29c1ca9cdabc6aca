pub mod binary_insertion;
pub mod insertion;
pub mod merge;
