use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::config::Config;

/// How the text of a single term becomes a field value.
#[derive(Clone)]
pub enum Decoder {
    /// A user supplied `fn(&[u8]) -> T`.
    Raw(TokenStream),
    /// `<T as FromTerm>::from_term`.
    Type(Box<Type>),
}

impl Decoder {
    pub fn call(&self, config: &Config) -> TokenStream {
        let term = &config.term_name;
        let krate = &config.crate_path;

        match self {
            Self::Raw(parser) => quote! { (#parser)(#term) },
            Self::Type(ty) => quote! { <#ty as #krate::FromTerm>::from_term(#term) },
        }
    }
}

/// One arm of the generated `match` over the term index.
pub enum Arm {
    /// `N => self.field = decode(term)`
    Single {
        field: TokenStream,
        index: u8,
        decoder: Decoder,
    },
    /// `A..=B => self.field[index - A] = decode(term)`
    Range {
        field: TokenStream,
        first: u8,
        last: u8,
        decoder: Decoder,
    },
    /// `N => negate self.field when the term names S or W`
    Hemisphere { field: TokenStream, index: u8 },
}

impl Arm {
    pub fn first(&self) -> u8 {
        match self {
            Self::Single { index, .. } | Self::Hemisphere { index, .. } => *index,
            Self::Range { first, .. } => *first,
        }
    }

    pub fn last(&self) -> u8 {
        match self {
            Self::Single { index, .. } | Self::Hemisphere { index, .. } => *index,
            Self::Range { last, .. } => *last,
        }
    }

    pub fn generate(&self, config: &Config) -> TokenStream {
        let index_name = &config.index_name;
        let term = &config.term_name;
        let krate = &config.crate_path;

        match self {
            Self::Single {
                field,
                index,
                decoder,
            } => {
                let value = decoder.call(config);
                quote! { #index => self.#field = #value, }
            }
            Self::Range {
                field,
                first,
                last,
                decoder,
            } => {
                let value = decoder.call(config);
                quote! {
                    #first..=#last => {
                        if let Some(slot) = self.#field.get_mut(usize::from(#index_name - #first)) {
                            *slot = #value;
                        }
                    }
                }
            }
            Self::Hemisphere { field, index } => quote! {
                #index => {
                    if #krate::parsing::is_negative_hemisphere(#term) {
                        self.#field = -self.#field;
                    }
                }
            },
        }
    }
}
