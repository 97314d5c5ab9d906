#![no_std] // Shared with the wasm platform

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod pos;
pub mod token;

// Re-export core types for convenience
pub use pos::{PartOfSpeech, PosFlags, UnknownPosTag};
pub use token::{surface_text, AnnotatedToken, Span};

pub mod model;
pub use model::*;
