extern crate proc_macro;

use {proc_macro::TokenStream, quote::quote};

#[proc_macro_derive(AsWidgetBase, attributes(widget_base, widget_base_trait))]
pub fn widget_base_macro_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse(input).unwrap();

    impl_widget_base_macro(&ast)
}

enum FieldRef {
    Named(syn::Ident, syn::Type),
    Unnamed(syn::Index, syn::Type),
}

fn has_attr(attrs: &[syn::Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path.segments.first().map(|i| i.ident == name).unwrap_or(false))
}

fn find_base_field(data: &syn::Data) -> Vec<FieldRef> {
    let mut found = Vec::new();
    if let syn::Data::Struct(ref data) = data {
        match &data.fields {
            syn::Fields::Named(fields) => {
                for field in fields.named.iter() {
                    if let Some(ref ident) = field.ident {
                        if has_attr(&field.attrs, "widget_base") {
                            found.push(FieldRef::Named(ident.clone(), field.ty.clone()));
                        }
                    }
                }
            }
            syn::Fields::Unnamed(fields) => {
                for (i, field) in fields.unnamed.iter().enumerate() {
                    if has_attr(&field.attrs, "widget_base") {
                        found.push(FieldRef::Unnamed(syn::Index::from(i), field.ty.clone()));
                    }
                }
            }
            syn::Fields::Unit => (),
        }
    }
    found
}

fn error(span: proc_macro2::Span, message: &str) -> TokenStream {
    syn::Error::new(span, message).to_compile_error().into()
}

fn impl_widget_base_macro(ast: &syn::DeriveInput) -> TokenStream {
    let trait_type = if let Some(attr) = ast.attrs.iter().find(|attr| {
        attr.path.segments.first().map(|i| i.ident == "widget_base_trait").unwrap_or(false)
    }) {
        let mut out = None;
        for token in attr.tokens.clone().into_iter() {
            if let proc_macro2::TokenTree::Group(grp) = token {
                out = Some(grp.stream());
                break;
            }
        }

        out
    } else {
        None
    }
    .unwrap_or(quote! { plugui::widget::AsWidgetBase });

    let name = &ast.ident;

    if !matches!(ast.data, syn::Data::Struct(_)) {
        return error(name.span(), "AsWidgetBase can only be derived for structs");
    }

    let (field, ty) = match find_base_field(&ast.data).as_slice() {
        [FieldRef::Named(ident, ty)] => (quote! { #ident }, ty.clone()),
        [FieldRef::Unnamed(index, ty)] => (quote! { #index }, ty.clone()),
        [] => return error(name.span(), "no field is marked with #[widget_base]"),
        _ => return error(name.span(), "only one field may be marked with #[widget_base]"),
    };

    // the window lifetime of the base is the struct's first lifetime parameter
    let lifetime = match ast.generics.lifetimes().next() {
        Some(def) => def.lifetime.clone(),
        None => {
            return error(
                name.span(),
                "AsWidgetBase needs a lifetime parameter for the parent window borrow",
            )
        }
    };

    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    {
        quote! {
            impl #impl_generics #trait_type<#lifetime> for #name #ty_generics #where_clause {
                #[inline]
                fn base(&self) -> &#ty {
                    &self.#field
                }

                #[inline]
                fn base_mut(&mut self) -> &mut #ty {
                    &mut self.#field
                }
            }
        }
    }
    .into()
}
