use crate::decode_column::ColumnMetadata;
use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn encode_column_def(metadata: &ColumnMetadata) -> TokenStream {
    let field = metadata.ident.to_string();
    let name = metadata.column.clone().unwrap_or_default();
    let role = match (&metadata.column, metadata.generated) {
        (None, _) => quote!(::skiff::ColumnRole::Transient),
        (Some(..), true) => quote!(::skiff::ColumnRole::Generated),
        (Some(..), false) => quote!(::skiff::ColumnRole::Writable),
    };
    quote! {
        ::skiff::ColumnDef {
            field: #field,
            name: #name,
            role: #role,
        }
    }
}
