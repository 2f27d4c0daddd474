use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let storm = &self.storm;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let to_value_fields = self.expand_to_value_fields();
        let load_fields = self.expand_load_fields();

        quote! {
            impl #storm::Model for #model_ident {
                #model_schema

                fn to_value(&self) -> #storm::Value {
                    #storm::Value::record_from_vec(::std::vec![ #( #to_value_fields ),* ])
                }

                fn load(mut record: #storm::SparseRecord) -> #storm::Result<Self> {
                    ::std::result::Result::Ok(Self {
                        #( #load_fields )*
                    })
                }
            }
        }
    }

    /// One value per field, so the record lines up with the mapping table.
    /// Unmapped fields are never persisted and contribute `Null`.
    fn expand_to_value_fields(&self) -> Vec<TokenStream> {
        let storm = &self.storm;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;

                if field.is_mapped() {
                    quote!(<#ty as #storm::Primitive>::to_value(&self.#ident))
                } else {
                    quote!(#storm::Value::Null)
                }
            })
            .collect()
    }

    fn expand_load_fields(&self) -> Vec<TokenStream> {
        let storm = &self.storm;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;
                let index = field.id;

                if field.is_mapped() {
                    quote!(#ident: #storm::load_field::<#ty>(&mut record, #index)?,)
                } else {
                    quote!(#ident: ::core::default::Default::default(),)
                }
            })
            .collect()
    }
}
