use std::collections::HashSet;

use autogen_core::Result;
use autogen_typescript::ast;
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

use crate::naming::{self, js_arg, Namer, RustName};
use crate::types::{js_value, TypePosition, TypeRegistry};

/// Generated items for one TypeScript scope (a file or a namespace).
#[derive(Debug, Default)]
pub struct Bindings {
    /// Declarations that go inside the `extern "C"` block.
    pub imports: Vec<TokenStream>,
    /// Items that live next to the extern block (enums, namespace modules).
    pub items: Vec<TokenStream>,
}

impl Bindings {
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.items.is_empty()
    }

    /// The extern block followed by the free-standing items.
    pub fn body_tokens(&self) -> TokenStream {
        let imports = &self.imports;
        let items = &self.items;
        let extern_block = (!imports.is_empty()).then(|| {
            quote! {
                #[wasm_bindgen]
                extern "C" {
                    #(#imports)*
                }
            }
        });
        quote! {
            #extern_block
            #(#items)*
        }
    }

    /// A complete Rust file: prelude import plus [`body_tokens`](Self::body_tokens).
    pub fn file_tokens(&self) -> TokenStream {
        let body = self.body_tokens();
        quote! {
            use wasm_bindgen::prelude::*;
            #body
        }
    }
}

#[derive(Debug)]
struct ParamSpec {
    ident: proc_macro2::Ident,
    ty: TokenStream,
    optional: bool,
    variadic: bool,
}

impl ParamSpec {
    fn tokens(&self) -> TokenStream {
        let ident = &self.ident;
        let ty = &self.ty;
        if self.optional {
            quote! { #ident: Option<#ty> }
        } else {
            quote! { #ident: #ty }
        }
    }
}

#[derive(Debug, Default)]
struct Signature {
    params: Vec<ParamSpec>,
    ret: Option<TokenStream>,
}

impl Signature {
    fn variadic(&self) -> bool {
        self.params.last().is_some_and(|p| p.variadic)
    }
}

/// Per-scope bookkeeping while walking a list of declarations.
#[derive(Debug, Default)]
struct Scope {
    values: Namer,
    types: Namer,
    modules: Namer,
    overloaded: HashSet<String>,
}

/// Maps TypeScript declarations to `wasm_bindgen` declarations.
pub struct BindingMapper<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> BindingMapper<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Map the top-level declarations of a module, exported or not.
    pub fn map_module(&self, module: &ast::Module) -> Result<Bindings> {
        self.map_items(&module.body, &[])
    }

    fn map_items(&self, items: &[ast::ModuleItem], namespace: &[String]) -> Result<Bindings> {
        let mut bindings = Bindings::default();
        let mut scope = Scope::default();

        for item in items {
            let decl = match item {
                ast::ModuleItem::Stmt(ast::Stmt::Decl(decl)) => decl,
                ast::ModuleItem::ModuleDecl(ast::ModuleDecl::ExportDecl(export)) => &export.decl,
                other => {
                    tracing::trace!("Skipping module item: {:?}", other);
                    continue;
                }
            };
            self.map_decl(decl, namespace, &mut scope, &mut bindings)?;
        }

        Ok(bindings)
    }

    fn map_decl(
        &self,
        decl: &ast::Decl,
        namespace: &[String],
        scope: &mut Scope,
        bindings: &mut Bindings,
    ) -> Result<()> {
        match decl {
            ast::Decl::Fn(decl) => {
                let js = decl.ident.sym.to_string();
                if skip_overload_impl(&mut scope.overloaded, &js, decl.function.body.is_some()) {
                    tracing::trace!("Skipping implementation of overloaded function {}", js);
                    return Ok(());
                }
                let sig = self.function_signature(&decl.function)?;
                let name = scope.values.unique(naming::fn_name(&js)?);
                bindings
                    .imports
                    .push(self.emit_function(name, sig, None, namespace_args(namespace)));
            }
            ast::Decl::Var(var) => {
                for declarator in &var.decls {
                    if let Some(function) = self.map_var(declarator, namespace, scope)? {
                        bindings.imports.push(function);
                    }
                }
            }
            ast::Decl::Class(class) => {
                bindings
                    .imports
                    .extend(self.map_class_in(class, namespace, scope)?);
            }
            ast::Decl::TsInterface(interface) => {
                let name = scope.types.unique(naming::type_name(&interface.id.sym)?);
                bindings
                    .imports
                    .extend(self.map_object_type(name, &interface.body.body, namespace)?);
            }
            ast::Decl::TsTypeAlias(alias) => match &*alias.type_ann {
                ast::TsType::TsTypeLit(lit) => {
                    let name = scope.types.unique(naming::type_name(&alias.id.sym)?);
                    bindings
                        .imports
                        .extend(self.map_object_type(name, &lit.members, namespace)?);
                }
                _ => tracing::trace!("Skipping non-object type alias {}", alias.id.sym),
            },
            ast::Decl::TsEnum(decl) => {
                if let Some(tokens) = self.map_enum_in(decl, scope)? {
                    bindings.items.push(tokens);
                }
            }
            ast::Decl::TsModule(decl) => {
                if let Some(tokens) = self.map_namespace(decl, namespace, scope)? {
                    bindings.items.push(tokens);
                }
            }
            other => tracing::trace!("Skipping declaration: {:?}", other),
        }
        Ok(())
    }

    pub fn map_class(&self, class: &ast::ClassDecl) -> Result<Vec<TokenStream>> {
        self.map_class_in(class, &[], &mut Scope::default())
    }

    /// Inside a namespace the type, its constructor and its static methods
    /// carry `js_namespace`; instance members go through `this`.
    fn map_class_in(
        &self,
        class: &ast::ClassDecl,
        namespace: &[String],
        scope: &mut Scope,
    ) -> Result<Vec<TokenStream>> {
        let owner = scope.types.unique(naming::type_name(&class.ident.sym)?);
        tracing::trace!("Mapping class: {}", owner.js);

        let mut type_args = Vec::new();
        if let Some(ast::Expr::Ident(base)) = class.class.super_class.as_deref() {
            if self.registry.lookup(&base.sym).is_some() {
                let base = naming::type_name(&base.sym)?.ident;
                type_args.push(quote! { extends = #base });
            }
        }
        type_args.extend(owner.js_name_arg());
        type_args.extend(namespace_args(namespace));

        let owner_ident = &owner.ident;
        let type_attr = wasm_bindgen_attr(&type_args);
        let mut out = vec![quote! {
            #type_attr
            pub type #owner_ident;
        }];

        let js_class = owner.renamed().then(|| js_arg("js_class", &owner.js));
        let mut members = Namer::default();
        let mut overloaded = HashSet::new();

        for member in &class.class.body {
            match member {
                ast::ClassMember::Constructor(ctor) => {
                    if is_hidden(&ctor.accessibility) || class.class.is_abstract {
                        continue;
                    }
                    if skip_overload_impl(&mut overloaded, "constructor", ctor.body.is_some()) {
                        tracing::trace!("Skipping constructor implementation of {}", owner.js);
                        continue;
                    }
                    let (sig, props) = self.constructor_signature(ctor)?;
                    let name = members.unique(naming::fn_name("new")?);
                    let mut args = vec![quote! { constructor }];
                    args.extend(js_class.clone());
                    args.extend(namespace_args(namespace));
                    let ident = &name.ident;
                    let params = sig.params.iter().map(ParamSpec::tokens);
                    let attr = wasm_bindgen_attr(&args);
                    out.push(quote! {
                        #attr
                        pub fn #ident(#(#params),*) -> #owner_ident;
                    });
                    for (key, ann, readonly) in props {
                        out.extend(self.accessors(
                            &owner,
                            &key,
                            self.property_types(ann, None),
                            readonly,
                            false,
                            &mut members,
                        )?);
                    }
                }
                ast::ClassMember::ClassProp(prop) => {
                    if prop.is_static || is_hidden(&prop.accessibility) {
                        continue;
                    }
                    let Some(key) = prop_name(&prop.key) else {
                        tracing::trace!("Skipping computed property on {}", owner.js);
                        continue;
                    };
                    let types =
                        self.property_types(prop.type_ann.as_deref(), prop.value.as_deref());
                    out.extend(self.accessors(
                        &owner,
                        &key,
                        types,
                        prop.readonly,
                        prop.is_optional,
                        &mut members,
                    )?);
                }
                ast::ClassMember::Method(method) => {
                    if is_hidden(&method.accessibility) {
                        continue;
                    }
                    let Some(key) = prop_name(&method.key) else {
                        tracing::trace!("Skipping computed method on {}", owner.js);
                        continue;
                    };
                    let signature_key = format!("{:?} {} {}", method.kind, method.is_static, key);
                    let has_body = method.function.body.is_some();
                    if skip_overload_impl(&mut overloaded, &signature_key, has_body) {
                        tracing::trace!("Skipping overload implementation {}.{}", owner.js, key);
                        continue;
                    }
                    out.extend(self.map_method(&owner, &key, method, namespace, &mut members)?);
                }
                other => tracing::trace!("Skipping class member: {:?}", other),
            }
        }

        Ok(out)
    }

    fn map_method(
        &self,
        owner: &RustName,
        key: &str,
        method: &ast::ClassMethod,
        namespace: &[String],
        members: &mut Namer,
    ) -> Result<Vec<TokenStream>> {
        let sig = self.function_signature(&method.function)?;
        let owner_ident = &owner.ident;
        let js_class = owner.renamed().then(|| js_arg("js_class", &owner.js));

        match method.kind {
            ast::MethodKind::Getter => {
                let name = members.unique(naming::fn_name(key)?);
                let ret = sig.ret.unwrap_or_else(|| js_value(TypePosition::Return));
                Ok(vec![self.getter(owner, &name, ret, false)])
            }
            ast::MethodKind::Setter => {
                let value = sig
                    .params
                    .first()
                    .map(|p| p.ty.clone())
                    .unwrap_or_else(|| js_value(TypePosition::Param));
                let getter_name = naming::fn_name(key)?;
                Ok(vec![self.setter(owner, &getter_name, value, false, members)?])
            }
            ast::MethodKind::Method => {
                let name = members.unique(naming::fn_name(key)?);
                let (receiver, mut args) = if method.is_static {
                    let mut args = vec![quote! { static_method_of = #owner_ident }];
                    args.extend(namespace_args(namespace));
                    (None, args)
                } else {
                    (Some(quote! { this: &#owner_ident }), vec![quote! { method }])
                };
                args.extend(js_class);
                Ok(vec![self.emit_function(name, sig, receiver, args)])
            }
        }
    }

    fn accessors(
        &self,
        owner: &RustName,
        key: &str,
        (get_ty, set_ty): (TokenStream, TokenStream),
        readonly: bool,
        optional: bool,
        members: &mut Namer,
    ) -> Result<Vec<TokenStream>> {
        let name = members.unique(naming::fn_name(key)?);
        let mut out = vec![self.getter(owner, &name, get_ty, optional)];
        if !readonly {
            out.push(self.setter(owner, &name, set_ty, optional, members)?);
        }
        Ok(out)
    }

    fn getter(
        &self,
        owner: &RustName,
        name: &RustName,
        ty: TokenStream,
        optional: bool,
    ) -> TokenStream {
        let owner_ident = &owner.ident;
        let ident = &name.ident;
        let mut args = vec![quote! { method }];
        args.push(if name.renamed() {
            js_arg("getter", &name.js)
        } else {
            quote! { getter }
        });
        if owner.renamed() {
            args.push(js_arg("js_class", &owner.js));
        }
        let attr = wasm_bindgen_attr(&args);
        let ty = if optional { quote! { Option<#ty> } } else { ty };
        quote! {
            #attr
            pub fn #ident(this: &#owner_ident) -> #ty;
        }
    }

    fn setter(
        &self,
        owner: &RustName,
        property: &RustName,
        ty: TokenStream,
        optional: bool,
        members: &mut Namer,
    ) -> Result<TokenStream> {
        let owner_ident = &owner.ident;
        let mut name = naming::fn_name(&format!("set_{}", property.rust))?;
        name.js = property.js.clone();
        let name = members.unique(name);
        let ident = &name.ident;

        let mut args = vec![quote! { method }];
        args.push(if name.rust == format!("set_{}", property.js) {
            quote! { setter }
        } else {
            js_arg("setter", &property.js)
        });
        if owner.renamed() {
            args.push(js_arg("js_class", &owner.js));
        }
        let attr = wasm_bindgen_attr(&args);
        let ty = if optional { quote! { Option<#ty> } } else { ty };
        Ok(quote! {
            #attr
            pub fn #ident(this: &#owner_ident, value: #ty);
        })
    }

    /// Interfaces and object type literals: an opaque type with accessors and methods.
    fn map_object_type(
        &self,
        owner: RustName,
        members: &[ast::TsTypeElement],
        namespace: &[String],
    ) -> Result<Vec<TokenStream>> {
        tracing::trace!("Mapping object type: {}", owner.js);
        let owner_ident = &owner.ident;
        let mut type_args: Vec<_> = owner.js_name_arg().into_iter().collect();
        type_args.extend(namespace_args(namespace));
        let type_attr = wasm_bindgen_attr(&type_args);
        let mut out = vec![quote! {
            #type_attr
            pub type #owner_ident;
        }];
        let js_class = owner.renamed().then(|| js_arg("js_class", &owner.js));
        let mut namer = Namer::default();

        for member in members {
            match member {
                ast::TsTypeElement::TsPropertySignature(prop) => {
                    let Some(key) = expr_key(&prop.key).filter(|_| !prop.computed) else {
                        continue;
                    };
                    let types = self.property_types(prop.type_ann.as_deref(), None);
                    out.extend(self.accessors(
                        &owner,
                        &key,
                        types,
                        prop.readonly,
                        prop.optional,
                        &mut namer,
                    )?);
                }
                ast::TsTypeElement::TsMethodSignature(method) => {
                    let Some(key) = expr_key(&method.key).filter(|_| !method.computed) else {
                        continue;
                    };
                    let params = method
                        .params
                        .iter()
                        .enumerate()
                        .map(|(i, param)| self.map_fn_param(param, i))
                        .collect::<Result<Vec<_>>>()?
                        .into_iter()
                        .flatten()
                        .collect();
                    let ret = method.type_ann.as_ref().and_then(|ann| {
                        self.registry
                            .map_type(&ann.type_ann, TypePosition::Return)
                    });
                    let name = namer.unique(naming::fn_name(&key)?);
                    let mut args = vec![quote! { method }];
                    args.extend(js_class.clone());
                    out.push(self.emit_function(
                        name,
                        Signature { params, ret },
                        Some(quote! { this: &#owner_ident }),
                        args,
                    ));
                }
                other => tracing::trace!("Skipping type element: {:?}", other),
            }
        }

        Ok(out)
    }

    pub fn map_enum(&self, decl: &ast::TsEnumDecl) -> Result<Option<TokenStream>> {
        self.map_enum_in(decl, &mut Scope::default())
    }

    fn map_enum_in(
        &self,
        decl: &ast::TsEnumDecl,
        scope: &mut Scope,
    ) -> Result<Option<TokenStream>> {
        if decl.members.is_empty() {
            tracing::debug!("Skipping empty enum {}", decl.id.sym);
            return Ok(None);
        }

        let all_strings = decl.members.iter().all(|m| {
            matches!(m.init.as_deref(), Some(ast::Expr::Lit(ast::Lit::Str(_))))
        });

        let mut namer = Namer::default();
        let mut next = 0u32;
        let mut variants = Vec::with_capacity(decl.members.len());

        for member in &decl.members {
            let js = match &member.id {
                ast::TsEnumMemberId::Ident(ident) => ident.sym.to_string(),
                ast::TsEnumMemberId::Str(s) => s.value.to_string(),
            };
            let variant = namer.unique(naming::variant_name(&js)?).ident;

            let value = match (all_strings, member.init.as_deref()) {
                (true, Some(ast::Expr::Lit(ast::Lit::Str(s)))) => {
                    Literal::string(&s.value)
                }
                (false, None) => {
                    let value = next;
                    next = next.saturating_add(1);
                    Literal::u32_unsuffixed(value)
                }
                (false, Some(ast::Expr::Lit(ast::Lit::Num(num))))
                    if num.value.fract() == 0.0
                        && num.value >= 0.0
                        && num.value <= f64::from(u32::MAX) =>
                {
                    let value = num.value as u32;
                    next = value.saturating_add(1);
                    Literal::u32_unsuffixed(value)
                }
                _ => {
                    tracing::debug!(
                        "Skipping enum {} with computed or mixed member values",
                        decl.id.sym
                    );
                    return Ok(None);
                }
            };
            variants.push(quote! { #variant = #value });
        }

        let name = scope.types.unique(naming::type_name(&decl.id.sym)?);
        let ident = &name.ident;
        let attr = wasm_bindgen_attr(&name.js_name_arg().into_iter().collect::<Vec<_>>());
        Ok(Some(quote! {
            #attr
            pub enum #ident {
                #(#variants),*
            }
        }))
    }

    /// `namespace M { export function f() }` becomes `pub mod m { ... }` with
    /// `js_namespace = M` on each function.
    fn map_namespace(
        &self,
        decl: &ast::TsModuleDecl,
        parent: &[String],
        scope: &mut Scope,
    ) -> Result<Option<TokenStream>> {
        let ast::TsModuleName::Ident(id) = &decl.id else {
            tracing::trace!("Skipping ambient module declaration");
            return Ok(None);
        };
        if decl.global {
            return Ok(None);
        }
        let Some(body) = &decl.body else {
            return Ok(None);
        };

        let mut path = parent.to_vec();
        path.push(id.sym.to_string());
        let inner = self.map_namespace_body(body, &path)?;
        if inner.is_empty() {
            return Ok(None);
        }

        let module = scope.modules.unique(naming::fn_name(&id.sym)?).ident;
        let body = inner.body_tokens();
        Ok(Some(quote! {
            pub mod #module {
                use super::*;
                #body
            }
        }))
    }

    fn map_namespace_body(&self, body: &ast::TsNamespaceBody, path: &[String]) -> Result<Bindings> {
        match body {
            ast::TsNamespaceBody::TsModuleBlock(block) => self.map_items(&block.body, path),
            // `namespace A.B {}` nests the remaining segments
            ast::TsNamespaceBody::TsNamespaceDecl(nested) => {
                let mut path = path.to_vec();
                path.push(nested.id.sym.to_string());
                self.map_namespace_body(&nested.body, &path)
            }
        }
    }

    fn map_var(
        &self,
        declarator: &ast::VarDeclarator,
        namespace: &[String],
        scope: &mut Scope,
    ) -> Result<Option<TokenStream>> {
        let ast::Pat::Ident(binding) = &declarator.name else {
            return Ok(None);
        };
        let sig = match declarator.init.as_deref() {
            Some(ast::Expr::Arrow(arrow)) => self.arrow_signature(arrow)?,
            Some(ast::Expr::Fn(expr)) => self.function_signature(&expr.function)?,
            _ => {
                tracing::trace!("Skipping variable {}", binding.id.sym);
                return Ok(None);
            }
        };
        let name = scope.values.unique(naming::fn_name(&binding.id.sym)?);
        Ok(Some(self.emit_function(name, sig, None, namespace_args(namespace))))
    }

    fn emit_function(
        &self,
        name: RustName,
        sig: Signature,
        receiver: Option<TokenStream>,
        mut args: Vec<TokenStream>,
    ) -> TokenStream {
        args.extend(name.js_name_arg());
        if sig.variadic() {
            args.push(quote! { variadic });
        }
        let attr = wasm_bindgen_attr(&args);
        let ident = &name.ident;
        let params = receiver
            .into_iter()
            .chain(sig.params.iter().map(ParamSpec::tokens));
        let ret = sig.ret.map(|ret| quote! { -> #ret });
        quote! {
            #attr
            pub fn #ident(#(#params),*) #ret;
        }
    }

    fn function_signature(&self, function: &ast::Function) -> Result<Signature> {
        let params = function
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| self.map_pat_param(&param.pat, i))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();
        let ret = match &function.return_type {
            Some(ann) => self.registry.map_type(&ann.type_ann, TypePosition::Return),
            None => function
                .body
                .as_ref()
                .and_then(|body| self.registry.infer_block_return(body)),
        };
        Ok(Signature {
            params,
            ret: async_return(function.is_async, ret),
        })
    }

    fn arrow_signature(&self, arrow: &ast::ArrowExpr) -> Result<Signature> {
        let params = arrow
            .params
            .iter()
            .enumerate()
            .map(|(i, pat)| self.map_pat_param(pat, i))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();
        let ret = match &arrow.return_type {
            Some(ann) => self.registry.map_type(&ann.type_ann, TypePosition::Return),
            None => self.registry.infer_body_return(&arrow.body),
        };
        Ok(Signature {
            params,
            ret: async_return(arrow.is_async, ret),
        })
    }

    /// Constructor parameters, plus `(name, type, readonly)` for every public
    /// parameter property it declares.
    #[allow(clippy::type_complexity)]
    fn constructor_signature<'c>(
        &self,
        ctor: &'c ast::Constructor,
    ) -> Result<(Signature, Vec<(String, Option<&'c ast::TsTypeAnn>, bool)>)> {
        let mut params = Vec::new();
        let mut props = Vec::new();

        for (i, param) in ctor.params.iter().enumerate() {
            match param {
                ast::ParamOrTsParamProp::Param(param) => {
                    params.extend(self.map_pat_param(&param.pat, i)?);
                }
                ast::ParamOrTsParamProp::TsParamProp(prop) => {
                    let (binding, optional) = match &prop.param {
                        ast::TsParamPropParam::Ident(binding) => (binding, binding.id.optional),
                        ast::TsParamPropParam::Assign(assign) => match &*assign.left {
                            ast::Pat::Ident(binding) => (binding, true),
                            _ => continue,
                        },
                    };
                    let mut spec = self.map_binding(binding)?;
                    spec.optional |= optional;
                    params.push(spec);
                    if !is_hidden(&prop.accessibility) {
                        props.push((
                            binding.id.sym.to_string(),
                            binding.type_ann.as_deref(),
                            prop.readonly,
                        ));
                    }
                }
            }
        }

        Ok((Signature { params, ret: None }, props))
    }

    fn map_pat_param(&self, pat: &ast::Pat, index: usize) -> Result<Option<ParamSpec>> {
        match pat {
            ast::Pat::Ident(binding) if &*binding.id.sym == "this" => Ok(None),
            ast::Pat::Ident(binding) => self.map_binding(binding).map(Some),
            ast::Pat::Assign(assign) => Ok(self.map_pat_param(&assign.left, index)?.map(|mut spec| {
                spec.optional = true;
                spec
            })),
            ast::Pat::Rest(rest) => self.map_rest(rest, index).map(Some),
            _ => Ok(Some(positional(index))),
        }
    }

    fn map_fn_param(&self, param: &ast::TsFnParam, index: usize) -> Result<Option<ParamSpec>> {
        match param {
            ast::TsFnParam::Ident(binding) if &*binding.id.sym == "this" => Ok(None),
            ast::TsFnParam::Ident(binding) => self.map_binding(binding).map(Some),
            ast::TsFnParam::Rest(rest) => self.map_rest(rest, index).map(Some),
            _ => Ok(Some(positional(index))),
        }
    }

    fn map_binding(&self, binding: &ast::BindingIdent) -> Result<ParamSpec> {
        let ty = binding
            .type_ann
            .as_ref()
            .map(|ann| self.registry.map_value_type(&ann.type_ann, TypePosition::Param))
            .unwrap_or_else(|| js_value(TypePosition::Param));
        Ok(ParamSpec {
            ident: naming::fn_name(&binding.id.sym)?.ident,
            ty,
            optional: binding.id.optional,
            variadic: false,
        })
    }

    fn map_rest(&self, rest: &ast::RestPat, index: usize) -> Result<ParamSpec> {
        let ident = match &*rest.arg {
            ast::Pat::Ident(binding) => naming::fn_name(&binding.id.sym)?.ident,
            _ => format_ident!("rest{}", index),
        };
        Ok(ParamSpec {
            ident,
            ty: quote! { &::js_sys::Array },
            optional: false,
            variadic: true,
        })
    }

    /// (getter type, setter type) of a property.
    fn property_types(
        &self,
        type_ann: Option<&ast::TsTypeAnn>,
        value: Option<&ast::Expr>,
    ) -> (TokenStream, TokenStream) {
        match (type_ann, value) {
            (Some(ann), _) => (
                self.registry.map_value_type(&ann.type_ann, TypePosition::Return),
                self.registry.map_value_type(&ann.type_ann, TypePosition::Param),
            ),
            (None, Some(value)) => (
                self.registry
                    .infer_expr(value, TypePosition::Return)
                    .unwrap_or_else(|| js_value(TypePosition::Return)),
                self.registry
                    .infer_expr(value, TypePosition::Param)
                    .unwrap_or_else(|| js_value(TypePosition::Param)),
            ),
            (None, None) => (js_value(TypePosition::Return), js_value(TypePosition::Param)),
        }
    }
}

fn positional(index: usize) -> ParamSpec {
    ParamSpec {
        ident: format_ident!("arg{}", index),
        ty: js_value(TypePosition::Param),
        optional: false,
        variadic: false,
    }
}

fn async_return(is_async: bool, ret: Option<TokenStream>) -> Option<TokenStream> {
    if is_async {
        Some(quote! { ::js_sys::Promise })
    } else {
        ret
    }
}

fn namespace_args(namespace: &[String]) -> Vec<TokenStream> {
    match namespace {
        [] => vec![],
        [single] => vec![js_arg("js_namespace", single)],
        path => vec![quote! { js_namespace = [#(#path),*] }],
    }
}

fn wasm_bindgen_attr(args: &[TokenStream]) -> TokenStream {
    if args.is_empty() {
        quote! { #[wasm_bindgen] }
    } else {
        quote! { #[wasm_bindgen(#(#args),*)] }
    }
}

/// Records a body-less overload signature under `key`. Returns true for an
/// implementation that follows one, which is not mapped.
fn skip_overload_impl(overloaded: &mut HashSet<String>, key: &str, has_body: bool) -> bool {
    if has_body {
        overloaded.contains(key)
    } else {
        overloaded.insert(key.to_string());
        false
    }
}

fn is_hidden(accessibility: &Option<ast::Accessibility>) -> bool {
    matches!(
        accessibility,
        Some(ast::Accessibility::Private | ast::Accessibility::Protected)
    )
}

fn prop_name(key: &ast::PropName) -> Option<String> {
    match key {
        ast::PropName::Ident(ident) => Some(ident.sym.to_string()),
        ast::PropName::Str(s) => Some(s.value.to_string()),
        _ => None,
    }
}

fn expr_key(key: &ast::Expr) -> Option<String> {
    match key {
        ast::Expr::Ident(ident) => Some(ident.sym.to_string()),
        ast::Expr::Lit(ast::Lit::Str(s)) => Some(s.value.to_string()),
        _ => None,
    }
}
