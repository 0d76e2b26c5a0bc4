pub mod cache;
pub mod config;
pub mod encode;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;

pub use config::PrepareConfig;
pub use error::PrepareError;
pub use error::PrepareResult;

pub use encode::encode_character;
pub use encode::CategoryCode;
pub use encode::EncodedCharacter;

pub use cache::memoized;
pub use cache::SnapshotCache;

pub use fetch::DirectoryFetcher;
pub use fetch::SourceFetcher;
pub use fetch::UcdSource;

pub use pipeline::Pipeline;
pub use pipeline::PipelineStats;
