//! English language module for the lexcop identifier spell checker.
//!
//! Decides whether identifier fragments are recognizable English words and
//! proposes ranked corrections for the ones that are not.
//!
//! # Architecture
//!
//! - [`dictionary`] -- the known-word set and its file/directory loader
//! - [`morphology`] -- the pluggable normalizer capability (lemmas, stems)
//! - [`speller`] -- the lexical validity oracle (feature `spell`)
//! - [`suggestion`] -- the weighted suggestion engine (feature `suggest`)
//! - [`tokenizer`] -- camelCase identifier splitting (feature `tokenize`)
//! - [`handle`] -- top-level integration point (feature `handle`)

pub mod dictionary;
pub mod morphology;

#[cfg(feature = "spell")]
pub mod speller;

#[cfg(feature = "suggest")]
pub mod suggestion;

#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "handle")]
pub mod handle;
