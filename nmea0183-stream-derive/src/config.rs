use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

#[derive(Clone)]
pub struct Config {
    pub index_name: Ident,
    pub term_name: Ident,
    pub crate_path: TokenStream,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_name: Ident::new("nmea_index", Span::call_site()),
            term_name: Ident::new("nmea_term", Span::call_site()),
            crate_path: quote! { nmea0183_stream },
        }
    }
}
