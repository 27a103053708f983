use syn::{Field, Ident, LitStr, parse::ParseBuffer};

/// Per-field annotation data collected in one walk over the declaration.
pub(crate) struct ColumnMetadata {
    pub(crate) ident: Ident,
    /// Column name, `None` when the field carries no `column` annotation.
    pub(crate) column: Option<String>,
    /// Table name, legal only on the first declared field.
    pub(crate) table: Option<String>,
    /// Value is produced by the database.
    pub(crate) generated: bool,
}

pub(crate) fn decode_column(field: &Field) -> ColumnMetadata {
    let ident = field
        .ident
        .clone()
        .expect("Field is expected to have a name");
    let mut metadata = ColumnMetadata {
        ident,
        column: None,
        table: None,
        generated: false,
    };
    for attr in &field.attrs {
        let meta = &attr.meta;
        if meta.path().is_ident("skiff") {
            let Ok(list) = meta.require_list() else {
                panic!("Error while parsing `skiff`, use it like: `#[skiff(attribute = value, ...)]`");
            };
            let _ = list.parse_nested_meta(|arg| {
                if arg.path.is_ident("column") {
                    let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!("Error while parsing `column`, use it like: `#[skiff(column = \"my_column\")]`");
                    };
                    metadata.column = Some(v.value());
                } else if arg.path.is_ident("table") {
                    let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!("Error while parsing `table`, use it like: `#[skiff(table = \"my_table\", column = \"my_column\")]`");
                    };
                    metadata.table = Some(v.value());
                } else if arg.path.is_ident("generated") {
                    let Err(..) = arg.value() else {
                        // value() is Err for Meta::Path
                        panic!("Error while parsing `generated`, use it like: `#[skiff(column = \"my_column\", generated)]`");
                    };
                    metadata.generated = true;
                } else {
                    panic!(
                        "Unknown attribute `{}` inside skiff macro",
                        arg.path
                            .get_ident()
                            .map(ToString::to_string)
                            .unwrap_or_default()
                    );
                }
                Ok(())
            });
        }
    }
    if metadata.generated && metadata.column.is_none() {
        panic!(
            "Field `{}` is marked `generated` but carries no `column` name",
            metadata.ident
        );
    }
    metadata
}
