//! Word storage
//!
//! Trie-backed word list and its file loader.

pub mod loader;
pub mod trie;

pub use loader::DictionaryLoader;
pub use trie::{Trie, WordInfo};
