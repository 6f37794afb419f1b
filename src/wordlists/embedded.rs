//! Embedded word list
//!
//! Climate terms compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/climate_words.rs"));
