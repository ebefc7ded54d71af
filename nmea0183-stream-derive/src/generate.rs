use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Data, DataStruct, DeriveInput, Error, Expr, ExprLit, ExprRange, Fields, Generics, Ident, Lit,
    LitInt, RangeLimits, Result, Type, parse_quote, parse2, spanned::Spanned,
};

use crate::{
    config::Config,
    decoder::{Arm, Decoder},
    meta::{self, MetaAttributeType},
};

// Usage:
// #[derive(TermDecode)]
// pub struct Staging {
//     #[nmea(term(2), parser(coordinate))]
//     #[nmea(hemisphere(3))]
//     pub latitude: Float,
//     #[nmea(terms(3..=14))]
//     pub ids: [u8; 12],
//     #[nmea(ignore)]
//     pub computed: u32,
// }

pub struct Struct {
    name: Ident,
    generics: Generics,
    config: Config,
    arms: Vec<Arm>,
}

impl Struct {
    pub fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        generics: &Generics,
    ) -> Result<Self> {
        let Fields::Named(fields) = &datastruct.fields else {
            return Err(Error::new(
                name.span(),
                "nmea0183-stream-derive: Only structs with named fields are supported",
            ));
        };

        let mut arms: Vec<(Arm, Ident, Span)> = vec![];

        for field in &fields.named {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;

            if attributes
                .iter()
                .any(|attribute| attribute.r#type == MetaAttributeType::Ignore)
            {
                continue;
            }

            let field_tokens = ident.to_token_stream();
            let mut parser = None;
            let mut location = None;

            for attribute in &attributes {
                match attribute.r#type {
                    MetaAttributeType::Parser => parser = attribute.arg().cloned(),
                    MetaAttributeType::Term | MetaAttributeType::Terms => {
                        location = Some(attribute)
                    }
                    MetaAttributeType::Hemisphere => {
                        let index = lit_u8(&parse2::<LitInt>(arg_of(attribute)?)?)?;
                        arms.push((
                            Arm::Hemisphere {
                                field: field_tokens.clone(),
                                index,
                            },
                            ident.clone(),
                            attribute.span(),
                        ));
                    }
                    MetaAttributeType::Ignore => {}
                }
            }

            let Some(location) = location else {
                return Err(Error::new(
                    ident.span(),
                    "nmea0183-stream-derive: Field needs a `term`, `terms` or `ignore` attribute",
                ));
            };

            let arm = if location.r#type == MetaAttributeType::Term {
                let index = lit_u8(&parse2::<LitInt>(arg_of(location)?)?)?;
                let decoder = match parser {
                    Some(parser) => Decoder::Raw(parser),
                    None => Decoder::Type(Box::new(field.ty.clone())),
                };
                Arm::Single {
                    field: field_tokens,
                    index,
                    decoder,
                }
            } else {
                let (first, last) = range_bounds(&parse2::<ExprRange>(arg_of(location)?)?)?;
                let element = element_type(&field.ty, usize::from(last - first) + 1)?;
                let decoder = match parser {
                    Some(parser) => Decoder::Raw(parser),
                    None => Decoder::Type(Box::new(element)),
                };
                Arm::Range {
                    field: field_tokens,
                    first,
                    last,
                    decoder,
                }
            };

            arms.push((arm, ident, location.span()));
        }

        for (position, (arm, ident, span)) in arms.iter().enumerate() {
            if let Some((_, other, _)) = arms[..position]
                .iter()
                .find(|(previous, _, _)| previous.first() <= arm.last() && arm.first() <= previous.last())
            {
                return Err(Error::new(
                    *span,
                    format!(
                        "nmea0183-stream-derive: Term index of `{ident}` is already decoded by `{other}`"
                    ),
                ));
            }
        }

        Ok(Self {
            name: name.clone(),
            generics: generics.clone(),
            config: Config::default(),
            arms: arms.into_iter().map(|(arm, _, _)| arm).collect(),
        })
    }

    pub fn generate_impl(&self) -> TokenStream {
        let name = &self.name;
        let krate = &self.config.crate_path;
        let index = &self.config.index_name;
        let term = &self.config.term_name;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let arms = self.arms.iter().map(|arm| arm.generate(&self.config));

        quote! {
            impl #impl_generics #krate::TermDecode for #name #ty_generics #where_clause {
                fn decode_term(&mut self, #index: u8, #term: &[u8]) {
                    match #index {
                        #(#arms)*
                        _ => {}
                    }
                }
            }
        }
    }
}

fn arg_of(attribute: &meta::MetaAttribute) -> Result<TokenStream> {
    attribute.arg().cloned().ok_or_else(|| {
        Error::new(
            attribute.span(),
            format!("nmea0183-stream-derive: Attribute `{}` needs an argument", attribute.r#type),
        )
    })
}

fn lit_u8(lit: &LitInt) -> Result<u8> {
    lit.base10_parse::<u8>()
}

fn expr_u8(expr: Option<&Expr>, span: Span) -> Result<u8> {
    match expr {
        Some(Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        })) => lit_u8(lit),
        _ => Err(Error::new(
            span,
            "nmea0183-stream-derive: `terms` needs integer literal bounds",
        )),
    }
}

fn range_bounds(range: &ExprRange) -> Result<(u8, u8)> {
    let span = range.span();
    let first = expr_u8(range.start.as_deref(), span)?;
    let last = match range.limits {
        RangeLimits::Closed(_) => expr_u8(range.end.as_deref(), span)?,
        RangeLimits::HalfOpen(_) => expr_u8(range.end.as_deref(), span)?
            .checked_sub(1)
            .ok_or_else(|| Error::new(span, "nmea0183-stream-derive: Empty `terms` range"))?,
    };

    if last < first {
        return Err(Error::new(
            span,
            "nmea0183-stream-derive: Empty `terms` range",
        ));
    }

    Ok((first, last))
}

fn element_type(ty: &Type, count: usize) -> Result<Type> {
    let Type::Array(array) = ty else {
        return Err(Error::new(
            ty.span(),
            "nmea0183-stream-derive: Attribute `terms` expects an array field",
        ));
    };

    if let Expr::Lit(ExprLit {
        lit: Lit::Int(len), ..
    }) = &array.len
        && len.base10_parse::<usize>()? < count
    {
        return Err(Error::new(
            len.span(),
            format!("nmea0183-stream-derive: Array is too short for {count} terms"),
        ));
    }

    let element = &array.elem;
    Ok(parse_quote!(#element))
}

pub fn generate_term_decode_impl(input: &DeriveInput) -> Result<TokenStream> {
    match &input.data {
        Data::Struct(datastruct) => {
            Ok(Struct::from_datastruct(&input.ident, datastruct, &input.generics)?.generate_impl())
        }
        Data::Enum(_) | Data::Union(_) => Err(Error::new(
            input.ident.span(),
            "nmea0183-stream-derive: Only structs are supported",
        )),
    }
}
