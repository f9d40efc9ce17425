use std::collections::HashMap;

use autogen_typescript::ast::{
    BlockStmt, BlockStmtOrExpr, Decl, Expr, Lit, Module, ModuleDecl, ModuleItem, Stmt,
    TsEntityName, TsKeywordType, TsKeywordTypeKind, TsType, TsTypeRef,
};
use proc_macro2::TokenStream;
use quote::quote;

use crate::naming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePosition {
    Param,
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredKind {
    /// Imported as an extern `type`; passed by reference.
    Extern,
    /// Exported `#[wasm_bindgen]` enum; passed by value.
    Enum,
}

/// Names declared across all mapped files, so type references can be bound
/// to generated types instead of falling back to `JsValue`.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    kinds: HashMap<String, DeclaredKind>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_modules<'a>(modules: impl IntoIterator<Item = &'a Module>) -> Self {
        let mut registry = Self::new();
        for module in modules {
            registry.register_module(module);
        }
        registry
    }

    pub fn register_module(&mut self, module: &Module) {
        for item in &module.body {
            let decl = match item {
                ModuleItem::Stmt(Stmt::Decl(decl)) => decl,
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => &export.decl,
                _ => continue,
            };
            match decl {
                Decl::Class(class) => {
                    self.register(class.ident.sym.to_string(), DeclaredKind::Extern)
                }
                Decl::TsInterface(interface) => {
                    self.register(interface.id.sym.to_string(), DeclaredKind::Extern)
                }
                Decl::TsTypeAlias(alias) if matches!(*alias.type_ann, TsType::TsTypeLit(_)) => {
                    self.register(alias.id.sym.to_string(), DeclaredKind::Extern)
                }
                Decl::TsEnum(decl) => self.register(decl.id.sym.to_string(), DeclaredKind::Enum),
                _ => {}
            }
        }
    }

    pub fn register(&mut self, name: String, kind: DeclaredKind) {
        self.kinds.insert(name, kind);
    }

    pub fn lookup(&self, name: &str) -> Option<DeclaredKind> {
        self.kinds.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Rust type for a TypeScript type. `None` means "no value" and only
    /// occurs in return position.
    pub fn map_type(&self, ty: &TsType, position: TypePosition) -> Option<TokenStream> {
        match ty {
            TsType::TsKeywordType(TsKeywordType { kind, .. }) => map_keyword(*kind, position),
            TsType::TsParenthesizedType(paren) => self.map_type(&paren.type_ann, position),
            TsType::TsFnOrConstructorType(_) => {
                Some(by_ref(quote! { ::js_sys::Function }, position))
            }
            TsType::TsArrayType(_) | TsType::TsTupleType(_) => {
                Some(by_ref(quote! { ::js_sys::Array }, position))
            }
            TsType::TsTypeRef(TsTypeRef {
                type_name: TsEntityName::Ident(ident),
                ..
            }) => Some(self.map_named(&ident.sym, position)),
            _ => Some(js_value(position)),
        }
    }

    /// Like [`map_type`](Self::map_type) but never "no value".
    pub fn map_value_type(&self, ty: &TsType, position: TypePosition) -> TokenStream {
        self.map_type(ty, position)
            .unwrap_or_else(|| js_value(position))
    }

    pub fn map_named(&self, name: &str, position: TypePosition) -> TokenStream {
        let builtin = match name {
            "Promise" => Some(quote! { ::js_sys::Promise }),
            "Array" | "ReadonlyArray" => Some(quote! { ::js_sys::Array }),
            "Function" => Some(quote! { ::js_sys::Function }),
            "Object" | "Record" => Some(quote! { ::js_sys::Object }),
            "Date" => Some(quote! { ::js_sys::Date }),
            "Map" => Some(quote! { ::js_sys::Map }),
            "Set" => Some(quote! { ::js_sys::Set }),
            "RegExp" => Some(quote! { ::js_sys::RegExp }),
            "Error" => Some(quote! { ::js_sys::Error }),
            "Uint8Array" => Some(quote! { ::js_sys::Uint8Array }),
            "ArrayBuffer" => Some(quote! { ::js_sys::ArrayBuffer }),
            _ => None,
        };
        if let Some(builtin) = builtin {
            return by_ref(builtin, position);
        }

        match (self.lookup(name), naming::type_name(name)) {
            (Some(DeclaredKind::Extern), Ok(rust)) => {
                let ident = rust.ident;
                by_ref(quote! { #ident }, position)
            }
            (Some(DeclaredKind::Enum), Ok(rust)) => {
                let ident = rust.ident;
                quote! { #ident }
            }
            _ => js_value(position),
        }
    }

    /// Best-effort type of an expression, used for unannotated properties.
    pub fn infer_expr(&self, expr: &Expr, position: TypePosition) -> Option<TokenStream> {
        match expr {
            Expr::Lit(Lit::Num(_)) => Some(quote! { f64 }),
            Expr::Lit(Lit::Bool(_)) => Some(quote! { bool }),
            Expr::Lit(Lit::Str(_)) | Expr::Tpl(_) => Some(match position {
                TypePosition::Param => quote! { &str },
                TypePosition::Return => quote! { String },
            }),
            Expr::Arrow(_) | Expr::Fn(_) => Some(by_ref(quote! { ::js_sys::Function }, position)),
            Expr::Array(_) => Some(by_ref(quote! { ::js_sys::Array }, position)),
            Expr::New(new) => match &*new.callee {
                Expr::Ident(ident) => Some(self.map_named(&ident.sym, position)),
                _ => None,
            },
            Expr::Paren(paren) => self.infer_expr(&paren.expr, position),
            _ => None,
        }
    }

    /// Return type of an unannotated function body: no value when nothing is
    /// returned, the inferred type of the first `return` otherwise.
    pub fn infer_body_return(&self, body: &BlockStmtOrExpr) -> Option<TokenStream> {
        match body {
            BlockStmtOrExpr::Expr(expr) => Some(
                self.infer_expr(expr, TypePosition::Return)
                    .unwrap_or_else(|| js_value(TypePosition::Return)),
            ),
            BlockStmtOrExpr::BlockStmt(block) => self.infer_block_return(block),
        }
    }

    pub fn infer_block_return(&self, block: &BlockStmt) -> Option<TokenStream> {
        block.stmts.iter().find_map(|stmt| match stmt {
            Stmt::Return(ret) => ret.arg.as_ref().map(|arg| {
                self.infer_expr(arg, TypePosition::Return)
                    .unwrap_or_else(|| js_value(TypePosition::Return))
            }),
            _ => None,
        })
    }
}

fn map_keyword(kind: TsKeywordTypeKind, position: TypePosition) -> Option<TokenStream> {
    match kind {
        TsKeywordTypeKind::TsNumberKeyword => Some(quote! { f64 }),
        TsKeywordTypeKind::TsBooleanKeyword => Some(quote! { bool }),
        TsKeywordTypeKind::TsStringKeyword => Some(match position {
            TypePosition::Param => quote! { &str },
            TypePosition::Return => quote! { String },
        }),
        TsKeywordTypeKind::TsBigIntKeyword => Some(quote! { i64 }),
        TsKeywordTypeKind::TsVoidKeyword
        | TsKeywordTypeKind::TsUndefinedKeyword
        | TsKeywordTypeKind::TsNeverKeyword
            if position == TypePosition::Return =>
        {
            None
        }
        TsKeywordTypeKind::TsObjectKeyword => Some(by_ref(quote! { ::js_sys::Object }, position)),
        _ => Some(js_value(position)),
    }
}

fn by_ref(ty: TokenStream, position: TypePosition) -> TokenStream {
    match position {
        TypePosition::Param => quote! { &#ty },
        TypePosition::Return => ty,
    }
}

pub(crate) fn js_value(position: TypePosition) -> TokenStream {
    by_ref(quote! { JsValue }, position)
}
