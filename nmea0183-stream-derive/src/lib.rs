//! # A Rust procedural macro for NMEA 0183 term decoding
//!
//! `nmea0183-stream-derive` generates [`TermDecode`] implementations for the staging
//! structs of [`nmea0183-stream`]. Each field names the term index it is decoded from,
//! and the generated code dispatches one term at a time as the sentence streams in.
//!
//! [`nmea0183-stream`]: https://crates.io/crates/nmea0183-stream
//! [`TermDecode`]: https://docs.rs/nmea0183-stream/latest/nmea0183_stream/trait.TermDecode.html

use generate::generate_term_decode_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod decoder;
mod generate;
mod meta;

#[doc = include_str!("../README.md")]
#[proc_macro_derive(TermDecode, attributes(nmea))]
pub fn derive_term_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_term_decode_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
