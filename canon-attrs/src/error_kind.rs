use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// A single `name = expr` tag inside the `error` attribute.
struct Tag {
    name: Ident,
    value: Expr,
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(Self { name, value: input.parse()? })
    }
}

/// The tags of the `error` attribute, such as
/// `#[error(message = "...", labels = ["..."], help = "...")]`.
#[derive(Default)]
struct ErrorTags {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ErrorTags {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut tags = Self::default();

        for tag in Punctuated::<Tag, Token![,]>::parse_terminated(input)? {
            let slot = match tag.name.to_string().as_str() {
                "message" => &mut tags.message,
                "labels" => &mut tags.labels,
                "help" => &mut tags.help,
                other => {
                    let msg = format!("unknown tag `{}`, expected `message`, `labels`, or `help`", other);
                    return Err(syn::Error::new_spanned(tag.name, msg));
                },
            };

            if slot.is_some() {
                return Err(syn::Error::new_spanned(&tag.name, format!("duplicate tag `{}`", tag.name)));
            }
            *slot = Some(tag.value);
        }

        Ok(tags)
    }
}

/// A struct that `ErrorKind` is being derived for.
pub struct ErrorKindStruct {
    name: Ident,
    fields: Fields,
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ErrorKindStruct {
    /// Validates the derive input: it must be a struct with named fields or no fields, carrying
    /// an `error` attribute with at least the `message` tag.
    pub fn from_input(input: DeriveInput) -> Result<Self> {
        let fields = match input.data {
            Data::Struct(data) => data.fields,
            _ => return Err(syn::Error::new_spanned(
                &input.ident,
                "`ErrorKind` can only be derived for structs",
            )),
        };
        if let Fields::Unnamed(_) = fields {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`ErrorKind` cannot be derived for tuple structs",
            ));
        }

        let attr = input.attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new_spanned(&input.ident, "missing `#[error(...)]` attribute"))?;
        let tags = attr.parse_args::<ErrorTags>()?;
        let message = tags.message
            .ok_or_else(|| syn::Error::new_spanned(attr, "missing `message` tag in `error` attribute"))?;

        Ok(Self {
            name: input.ident,
            fields,
            message,
            labels: tags.labels,
            help: tags.help,
        })
    }

    /// Returns the name of the struct.
    pub fn name(&self) -> &Ident {
        &self.name
    }

    /// Returns a `let` statement binding every named field of `self` to a local variable of the
    /// same name, so that tag expressions can refer to fields directly.
    fn bind_fields(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(named) => {
                let fields = named.named.iter().map(|field| &field.ident);
                quote! { let #name { #(#fields),* } = self; }
            },
            _ => TokenStream2::new(),
        }
    }
}

impl ToTokens for ErrorKindStruct {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bind_fields = self.bind_fields();
        let message = &self.message;
        let labels = match &self.labels {
            Some(labels) => quote! { #labels },
            None => quote! { Vec::<String>::new() },
        };
        let set_help = self.help.as_ref().map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            #[allow(unused_variables)]
            fn message(&self) -> String {
                #bind_fields
                (#message).to_string()
            }

            #[allow(unused_variables)]
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<'_, (&'a str, std::ops::Range<usize>)> {
                #bind_fields

                let offset = spans.first().map_or(0, |span| span.start);
                let labels = #labels
                    .into_iter()
                    .zip(spans.iter())
                    .map(|(text, span)| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(canon_error::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<Vec<_>>();

                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(self.message())
                    .with_labels(labels);
                #set_help
                builder.finish()
            }
        });
    }
}
