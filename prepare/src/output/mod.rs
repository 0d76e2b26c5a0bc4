pub mod stats;
mod store;

pub use store::submit;
pub use store::Batch;
pub use store::CharacterStore;
pub use store::JsonLinesStore;
pub use store::PropertyTuple;
pub use store::BATCH_SIZE;
