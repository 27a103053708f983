mod decode_column;
mod encode_column_def;
mod from_row;

use crate::{decode_column::decode_column, encode_column_def::encode_column_def};
use from_row::from_row_impl;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct, parse_macro_input};

/// Derive the mapping between a struct and a single table.
///
/// ```rust,ignore
/// #[derive(Entity)]
/// struct Sample {
///     #[skiff(table = "samples", column = "id")]
///     id: String,
///     #[skiff(column = "label")]
///     label: String,
/// }
/// ```
///
/// The table name is read from the annotation on the first declared field.
/// Fields without a `column` annotation are transient; `generated` marks a
/// column whose value the database produces.
#[proc_macro_derive(Entity, attributes(skiff))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let item: ItemStruct = parse_macro_input!(input as ItemStruct);
    let name = &item.ident;
    let Fields::Named(..) = item.fields else {
        panic!("Entity can only be derived for structs with named fields");
    };
    if !item.generics.params.is_empty() {
        panic!("Entity cannot be derived for generic structs");
    }
    let columns: Vec<_> = item.fields.iter().map(decode_column).collect();
    let Some(first) = columns.first() else {
        panic!("Entity requires at least one field");
    };
    let Some(table) = first.table.clone() else {
        panic!(
            "The first field of `{}` must carry the table annotation: `#[skiff(table = \"...\", column = \"...\")]`",
            name
        );
    };
    if let Some(stray) = columns[1..].iter().find(|c| c.table.is_some()) {
        panic!(
            "Field `{}` carries a table annotation, only the first field may",
            stray.ident
        );
    }
    let count = columns.len();
    let column_defs = columns.iter().map(encode_column_def);
    let values = columns.iter().map(|c| {
        let ident = &c.ident;
        match c.column {
            Some(..) => quote!(::skiff::AsValue::as_value(self.#ident.clone())),
            None => quote!(::skiff::Value::Null),
        }
    });
    let from_row = from_row_impl(&columns);
    quote! {
        impl ::skiff::Entity for #name {
            fn table_name() -> &'static str {
                #table
            }

            fn columns() -> &'static [::skiff::ColumnDef] {
                static COLUMNS: [::skiff::ColumnDef; #count] = [#(#column_defs),*];
                &COLUMNS
            }

            fn row(&self) -> ::skiff::Row {
                [#(#values),*].into()
            }

            #from_row
        }
    }
    .into()
}
