use std::{collections::HashSet, fmt::Display};

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::{
    Attribute, Error, Expr, ExprRange, Ident, Lit, LitInt, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

const PREFIX: &str = "nmea0183-stream-derive";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MetaAttributeType {
    Hemisphere,
    Ignore,
    Parser,
    Term,
    Terms,
}

impl MetaAttributeType {
    const NAMES: [(&'static str, Self); 5] = [
        ("hemisphere", Self::Hemisphere),
        ("ignore", Self::Ignore),
        ("parser", Self::Parser),
        ("term", Self::Term),
        ("terms", Self::Terms),
    ];

    pub fn from_ident(ident: &Ident) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(name, _)| ident == name)
            .map(|&(_, r#type)| r#type)
    }

    fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|&&(_, r#type)| r#type == self)
            .map_or("", |(name, _)| name)
    }

    /// Parses the argument following the attribute name, if it takes one.
    fn parse_argument(self, input: ParseStream) -> Result<Option<TokenStream>> {
        match self {
            Self::Ignore => Ok(None),
            Self::Term | Self::Hemisphere => parse_argument::<LitInt>(input).map(Some),
            Self::Terms => parse_argument::<ExprRange>(input).map(Some),
            Self::Parser => parse_argument::<Expr>(input).map(Some),
        }
    }

    /// `term` and `terms` both select where a field comes from.
    fn is_location(self) -> bool {
        matches!(self, Self::Term | Self::Terms)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of a `#[nmea(...)]` list.
#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<TokenStream>,
    span: Span,
}

impl MetaAttribute {
    pub fn arg(&self) -> Option<&TokenStream> {
        self.arg.as_ref()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let Some(r#type) = MetaAttributeType::from_ident(&ident) else {
            return Err(Error::new(
                ident.span(),
                format!("{PREFIX}: Unknown nmea attribute `{ident}`"),
            ));
        };

        Ok(Self {
            r#type,
            arg: r#type.parse_argument(input)?,
            span: ident.span(),
        })
    }
}

/// Accepts `= "value"`, `= 3` or `(value)`.
fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    let parsed: P = if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        content.parse()?
    } else if input.peek(Token![=]) {
        input.parse::<Token![=]>()?;
        match input.parse::<Lit>()? {
            Lit::Str(string) => string.parse()?,
            Lit::Int(int) => syn::parse2(int.into_token_stream())?,
            other => {
                return Err(Error::new(
                    other.span(),
                    format!("{PREFIX}: Expected a string or integer literal"),
                ));
            }
        }
    } else {
        return Err(Error::new(
            input.span(),
            format!("{PREFIX}: Expected '= <value>' or '(<value>)' for nmea attribute"),
        ));
    };

    Ok(parsed.into_token_stream())
}

/// Collects every `#[nmea(...)]` entry of a field.
pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut seen = HashSet::new();
    let mut attributes = Vec::new();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("nmea")) {
        let list = attr.parse_args_with(Punctuated::<MetaAttribute, Token![,]>::parse_terminated)?;

        for attribute in list {
            if !seen.insert(attribute.r#type) {
                return Err(Error::new(
                    attribute.span(),
                    format!("{PREFIX}: Duplicate nmea attribute `{}`", attribute.r#type),
                ));
            }

            let locations = seen.iter().filter(|r#type| r#type.is_location()).count();
            if locations > 1 {
                return Err(Error::new(
                    attribute.span(),
                    format!("{PREFIX}: Attributes `term` and `terms` cannot be combined"),
                ));
            }

            attributes.push(attribute);
        }
    }

    Ok(attributes)
}
