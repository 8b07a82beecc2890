//! `#[record]` attribute for SeaORM dense entities.
//!
//! Adds a UUID primary key plus the timestamp columns every table of the store
//! carries, and implements the stamping traits the DAO layer relies on:
//!
//! - the *created* column is written once, at insert;
//! - every *modified* column is rewritten on each save.
//!
//! ```ignore
//! #[record]
//! #[record(created = "date_created", modified = "recent_login, sleep_expiration_date")]
//! ```
//!
//! Columns already declared on the struct are left untouched, so a model can
//! give a timestamp its own attributes and still be stamped.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::HashSet;
use syn::{
    Expr, ExprLit, Fields, Ident, ItemStruct, Lit, LitStr, Meta, Path, Token, parse_macro_input,
    parse_str, punctuated::Punctuated,
};

struct RecordConfig {
    traits_path: Path,
    id_field: Ident,
    created_field: Ident,
    modified_fields: Vec<Ident>,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            traits_path: parse_str("crate::db::dao::record")
                .expect("default traits path should parse"),
            id_field: Ident::new("id", Span::call_site()),
            created_field: Ident::new("created_at", Span::call_site()),
            modified_fields: vec![Ident::new("updated_at", Span::call_site())],
        }
    }
}

#[proc_macro_attribute]
pub fn record(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with Punctuated<Meta, Token![,]>::parse_terminated);
    let mut config = RecordConfig::default();
    if let Err(err) = apply_args(&mut config, args) {
        return err.to_compile_error().into();
    }

    let mut input = parse_macro_input!(item as ItemStruct);
    let Fields::Named(fields) = &mut input.fields else {
        return syn::Error::new_spanned(input, "record requires a struct with named fields")
            .to_compile_error()
            .into();
    };

    let existing: HashSet<String> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(ToString::to_string))
        .collect();

    let mut injected: Punctuated<syn::Field, Token![,]> = Punctuated::new();

    if !existing.contains(&config.id_field.to_string()) {
        let id_ident = &config.id_field;
        injected.push(syn::parse_quote! {
            #[sea_orm(primary_key, auto_increment = false)]
            pub #id_ident: uuid::Uuid
        });
    }

    let stamped = std::iter::once(&config.created_field).chain(config.modified_fields.iter());
    for ident in stamped {
        if existing.contains(&ident.to_string()) {
            continue;
        }
        injected.push(syn::parse_quote! {
            #[sea_orm(default_expr = "Expr::current_timestamp()")]
            pub #ident: sea_orm::entity::prelude::DateTimeWithTimeZone
        });
    }

    injected.extend(fields.named.iter().cloned());
    fields.named = injected;

    let traits_path = &config.traits_path;
    let id_field = &config.id_field;
    let created_field = &config.created_field;
    let created_column = Ident::new(&upper_camel(&created_field.to_string()), Span::call_site());
    let modified_fields = &config.modified_fields;

    let expanded = quote! {
        #input

        impl #traits_path::RecordActiveModel for ActiveModel {
            fn assign_id(&mut self, id: uuid::Uuid) {
                self.#id_field = sea_orm::ActiveValue::Set(id);
            }

            fn stamp_created(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.#created_field = sea_orm::ActiveValue::Set(ts);
            }

            fn stamp_modified(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                #( self.#modified_fields = sea_orm::ActiveValue::Set(ts); )*
            }
        }

        impl #traits_path::HasCreatedColumn for Entity {
            fn created_column() -> Column {
                Column::#created_column
            }
        }
    };

    expanded.into()
}

fn apply_args(config: &mut RecordConfig, args: Punctuated<Meta, Token![,]>) -> syn::Result<()> {
    for meta in args {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value pair, e.g. created = \"date_created\"",
            ));
        };

        let Some(key) = name_value.path.get_ident().map(ToString::to_string) else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "expected simple identifier for attribute key",
            ));
        };

        let value = string_value(name_value.value)?;

        match key.as_str() {
            "traits" => {
                config.traits_path = value.parse::<Path>().map_err(|err| {
                    syn::Error::new(value.span(), format!("invalid traits path: {err}"))
                })?;
            }
            "id" => config.id_field = Ident::new(&value.value(), value.span()),
            "created" => config.created_field = Ident::new(&value.value(), value.span()),
            "modified" => {
                let idents: Vec<Ident> = value
                    .value()
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| Ident::new(name, value.span()))
                    .collect();
                if idents.is_empty() {
                    return Err(syn::Error::new(
                        value.span(),
                        "modified needs at least one column name",
                    ));
                }
                config.modified_fields = idents;
            }
            _ => {
                return Err(syn::Error::new(
                    value.span(),
                    format!("unknown record attribute key `{key}`"),
                ));
            }
        }
    }

    Ok(())
}

fn string_value(expr: Expr) -> syn::Result<LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit_str),
            ..
        }) => Ok(lit_str),
        other => Err(syn::Error::new_spanned(
            other,
            "expected string literal for attribute value",
        )),
    }
}

/// `date_created` -> `DateCreated`, matching the `Column` variants SeaORM derives.
fn upper_camel(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
