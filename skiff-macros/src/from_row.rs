use crate::decode_column::ColumnMetadata;
use proc_macro2::TokenStream;
use quote::quote;

/// Generate the `from_row` body: walk the result's labels once, assigning
/// each mapped field from the first matching column. NULL cells and labels
/// with no matching field fall through untouched, leaving the field at its
/// `Default` value.
pub(crate) fn from_row_impl(columns: &[ColumnMetadata]) -> TokenStream {
    let holders = columns.iter().map(|c| {
        let ident = &c.ident;
        quote!(#ident: ::std::default::Default::default())
    });
    let mut chain = TokenStream::new();
    for (i, c) in columns.iter().filter(|c| c.column.is_some()).enumerate() {
        let ident = &c.ident;
        let name = c.column.as_ref().unwrap();
        if i > 0 {
            chain.extend(quote!(else));
        }
        chain.extend(quote! {
            if __label__ == #name {
                if !__value__.is_null() {
                    __entity__.#ident = ::skiff::AsValue::try_from_value(__value__.clone())?;
                }
            }
        });
    }
    quote! {
        fn from_row(row: &::skiff::RowLabeled) -> ::skiff::Result<Self> {
            let mut __entity__ = Self {
                #(#holders,)*
            };
            for (__label__, __value__) in ::std::iter::zip(row.labels.iter(), row.values.iter()) {
                #chain
            }
            Ok(__entity__)
        }
    }
}
