//! Generation of `wasm_bindgen` extern declarations from TypeScript modules.

pub mod mapper;
pub mod naming;
pub mod render;
pub mod statements;
pub mod types;

pub use mapper::{BindingMapper, Bindings};
pub use render::{render_file, render_tokens};
pub use statements::{map_statements, MappedStatements};
pub use types::{DeclaredKind, TypePosition, TypeRegistry};
