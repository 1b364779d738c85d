pub mod extractor;
pub mod formatter;
pub mod ingest;
pub mod ranker;
pub mod recommend;
pub mod rules;

pub use recommend::Recommender;
