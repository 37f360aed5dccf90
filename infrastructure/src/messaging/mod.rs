//! Host page messaging adapters

mod jsonl_host;

pub use jsonl_host::JsonlHostNotifier;
