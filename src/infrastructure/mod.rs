pub mod sample_store;
pub mod synthetic;

pub use sample_store::JsonSampleStore;
pub use synthetic::SyntheticSampleSource;
