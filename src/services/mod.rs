pub mod assembler;
pub mod catalog;
pub mod classifier;
pub mod conversation;
pub mod enrichment;
pub mod search;
