use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let storm = &self.storm;
        let name = self.model.ident.to_string();
        let fields = self.expand_model_fields();
        let table_name = self.expand_table_name();

        quote! {
            fn schema() -> &'static #storm::ModelSchema {
                static SCHEMA: ::std::sync::OnceLock<#storm::ModelSchema> = ::std::sync::OnceLock::new();

                SCHEMA.get_or_init(|| #storm::ModelSchema {
                    name: #name.to_string(),
                    table_name: #table_name,
                    fields: ::std::vec![ #( #fields ),* ],
                })
            }
        }
    }

    fn expand_model_fields(&self) -> Vec<TokenStream> {
        let storm = &self.storm;

        self.model
            .fields
            .iter()
            .map(|field| {
                let name = field.ident.to_string();
                let primary_key = field.attrs.key.is_some();
                let column = match field.column_name() {
                    Some(column) => quote!(::std::option::Option::Some(#column.to_string())),
                    None => quote!(::std::option::Option::None),
                };

                quote! {
                    #storm::Field {
                        name: #name.to_string(),
                        column: #column,
                        primary_key: #primary_key,
                    }
                }
            })
            .collect()
    }

    fn expand_table_name(&self) -> TokenStream {
        let storm = &self.storm;

        match &self.model.table {
            Some(table) => quote!(#table.to_string()),
            None => {
                let name = self.model.ident.to_string();
                quote!(#storm::table_name(#name))
            }
        }
    }
}
