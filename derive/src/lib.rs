//! `#[derive(Walk)]` for `round-tree`.
//!
//! Every visible field becomes a composite member. Field attributes:
//!
//! - `#[round(precision = "2,percent")]` sets the member tag. Integer
//!   literals are accepted too (`precision = 3`, `precision = -1`). The tag
//!   is parsed when walking, so a malformed tag is reported as a walk error
//!   with its field path.
//! - `#[round(rename = "Rate")]` changes the name used in error paths.
//! - `#[round(skip)]` leaves the field alone.
//!
//! Struct fields without a visibility modifier are never walked. Any
//! `pub` form counts as visible, so `pub(crate)` and `pub(super)` fields are
//! walked like `pub` ones. Enum variant fields are always walked.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Expr, ExprLit, ExprUnary, Field, Fields, Lit,
    LitStr, UnOp, Visibility,
};

#[proc_macro_derive(Walk, attributes(round))]
pub fn derive_walk(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    for param in input.generics.type_params_mut() {
        param.bounds.push(parse_quote!(::round_tree::Walk));
    }

    let body = match &input.data {
        Data::Struct(data) => struct_body(&data.fields)?,
        Data::Enum(data) => {
            if data.variants.is_empty() {
                quote! { match *self {} }
            } else {
                let mut arms = Vec::with_capacity(data.variants.len());
                for variant in &data.variants {
                    arms.push(variant_arm(&variant.ident, &variant.fields)?);
                }
                quote! { match self { #(#arms)* } }
            }
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "Walk cannot be derived for unions",
            ))
        }
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::round_tree::Walk for #ident #ty_generics #where_clause {
            #[allow(unused_variables, unreachable_code)]
            fn walk(
                &mut self,
                ctx: ::round_tree::Context,
            ) -> ::core::result::Result<(), ::round_tree::RoundError> {
                #body
                ::core::result::Result::Ok(())
            }
        }
    })
}

// ============================================================================
// Field Attributes
// ============================================================================

#[derive(Default)]
struct MemberAttrs {
    precision: Option<String>,
    rename: Option<String>,
    skip: bool,
}

fn member_attrs(field: &Field) -> syn::Result<MemberAttrs> {
    let mut attrs = MemberAttrs::default();

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("round")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                attrs.skip = true;
                Ok(())
            } else if meta.path.is_ident("precision") {
                let expr: Expr = meta.value()?.parse()?;
                attrs.precision = Some(precision_text(&expr)?);
                Ok(())
            } else if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                attrs.rename = Some(name.value());
                Ok(())
            } else {
                Err(meta.error("expected `precision`, `rename` or `skip`"))
            }
        })?;
    }

    Ok(attrs)
}

/// Accepts `"2,percent"`, `3` or `-1`.
fn precision_text(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        Expr::Lit(ExprLit {
            lit: Lit::Int(i), ..
        }) => Ok(i.base10_digits().to_owned()),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => match &**expr {
            Expr::Lit(ExprLit {
                lit: Lit::Int(i), ..
            }) => Ok(format!("-{}", i.base10_digits())),
            other => Err(syn::Error::new(other.span(), "expected an integer precision")),
        },
        other => Err(syn::Error::new(
            other.span(),
            "expected a string or integer precision",
        )),
    }
}

// ============================================================================
// Member Calls
// ============================================================================

fn member_name(field: &Field, index: usize, attrs: &MemberAttrs) -> String {
    match (&attrs.rename, &field.ident) {
        (Some(rename), _) => rename.clone(),
        (None, Some(ident)) => ident.unraw().to_string(),
        (None, None) => index.to_string(),
    }
}

fn member_call(name: &str, attrs: &MemberAttrs, member: TokenStream2) -> TokenStream2 {
    let tag = match &attrs.precision {
        Some(text) => quote! { ::core::option::Option::Some(#text) },
        None => quote! { ::core::option::Option::None },
    };
    quote! {
        ::round_tree::walk_member(#name, #tag, #member, ctx)?;
    }
}

fn struct_body(fields: &Fields) -> syn::Result<TokenStream2> {
    let mut calls = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let attrs = member_attrs(field)?;
        if attrs.skip || matches!(field.vis, Visibility::Inherited) {
            continue;
        }

        let access = match &field.ident {
            Some(ident) => quote! { &mut self.#ident },
            None => {
                let index = syn::Index::from(index);
                quote! { &mut self.#index }
            }
        };
        calls.push(member_call(&member_name(field, index, &attrs), &attrs, access));
    }

    Ok(quote! { #(#calls)* })
}

fn variant_arm(variant: &syn::Ident, fields: &Fields) -> syn::Result<TokenStream2> {
    let mut patterns = Vec::new();
    let mut calls = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let attrs = member_attrs(field)?;
        let binding = format_ident!("__field{}", index);

        let pattern = if attrs.skip {
            quote! { _ }
        } else {
            calls.push(member_call(
                &member_name(field, index, &attrs),
                &attrs,
                quote! { #binding },
            ));
            quote! { #binding }
        };

        patterns.push(match &field.ident {
            Some(ident) => quote! { #ident: #pattern },
            None => pattern,
        });
    }

    let pattern = match fields {
        Fields::Named(_) => quote! { Self::#variant { #(#patterns),* } },
        Fields::Unnamed(_) => quote! { Self::#variant ( #(#patterns),* ) },
        Fields::Unit => quote! { Self::#variant },
    };

    Ok(quote! { #pattern => { #(#calls)* } })
}
