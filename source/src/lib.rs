#[macro_use]
extern crate lazy_static;

pub mod derivation;
pub mod derived;
pub mod error;
pub mod expansion;
pub mod filter;
pub mod jamo;
pub mod properties;
pub mod unicode;

pub use error::UcdError;
pub use error::UcdResult;

pub use properties::BidiClass;
pub use properties::Character;
pub use properties::DecompositionType;
pub use properties::Numeric;
pub use properties::NOT_A_DIGIT;

pub use unicode::parse_line;
pub use unicode::parse_unicode_data;

pub use derived::parse_derived_data;
pub use derived::DerivedData;

pub use jamo::parse_jamo;
pub use jamo::JamoShortNames;

pub use expansion::expand_ranges;

pub use derivation::default_bidi_class;
pub use derivation::Backfill;

pub use filter::only_characters;
