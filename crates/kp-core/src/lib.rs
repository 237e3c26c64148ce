//! Core building blocks for the number-key autocomplete text-entry study.
//!
//! Holds everything the completion session needs that is independent of
//! key handling: the candidate vocabulary, corpus loading, the editable
//! buffer, reference-text segmentation and the word/sentence timing
//! pipeline with its logging sinks.

pub mod buffer;
pub mod corpus;
pub mod log;
pub mod segment;
pub mod settings;
pub mod timing;
pub mod unicode;
pub mod vocab;
