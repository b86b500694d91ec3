//! Embedded word bank
//!
//! Tier lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/word_bank.rs"));
