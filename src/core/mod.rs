pub mod indexer;
pub mod labels;
pub mod vocabulary;
