//! Statement node shapes (spec §4.4).

use crate::expr::Expr;
use crate::node_id::NodeId;
use crate::type_annotation::TypeAnnotation;
use rivet_common::{MemQual, Modifier, Span};

#[derive(Clone, Debug, PartialEq)]
pub struct ParamDecl {
    pub name: String,
    pub ty: TypeAnnotation,
    pub mem_qual: MemQual,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    VarDecl {
        id: NodeId,
        span: Span,
        name: String,
        mem_qual: MemQual,
        declared_type: Option<TypeAnnotation>,
        initializer: Option<Expr>,
    },
    ExprStmt {
        id: NodeId,
        span: Span,
        expr: Expr,
    },
    Block {
        id: NodeId,
        span: Span,
        modifier: Modifier,
        stmts: Vec<Stmt>,
    },
    If {
        id: NodeId,
        span: Span,
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        id: NodeId,
        span: Span,
        shared: bool,
        cond: Expr,
        body: Box<Stmt>,
    },
    ForC {
        id: NodeId,
        span: Span,
        shared: bool,
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        step: Option<Expr>,
        body: Box<Stmt>,
    },
    ForEach {
        id: NodeId,
        span: Span,
        shared: bool,
        var_name: String,
        iterable: Expr,
        body: Box<Stmt>,
    },
    FuncDecl {
        id: NodeId,
        span: Span,
        name: String,
        func_mod: Modifier,
        params: Vec<ParamDecl>,
        return_type: TypeAnnotation,
        body: Box<Stmt>,
    },
    Return {
        id: NodeId,
        span: Span,
        value: Option<Expr>,
    },
    /// `import foo` (unnamed, `alias: None`, members spliced into scope) or
    /// `import foo as ns` (named, installed behind a namespace symbol).
    Import {
        id: NodeId,
        span: Span,
        module: String,
        alias: Option<String>,
    },
}

impl Stmt {
    pub fn id(&self) -> NodeId {
        match self {
            Stmt::VarDecl { id, .. }
            | Stmt::ExprStmt { id, .. }
            | Stmt::Block { id, .. }
            | Stmt::If { id, .. }
            | Stmt::While { id, .. }
            | Stmt::ForC { id, .. }
            | Stmt::ForEach { id, .. }
            | Stmt::FuncDecl { id, .. }
            | Stmt::Return { id, .. }
            | Stmt::Import { id, .. } => *id,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Stmt::VarDecl { span, .. }
            | Stmt::ExprStmt { span, .. }
            | Stmt::Block { span, .. }
            | Stmt::If { span, .. }
            | Stmt::While { span, .. }
            | Stmt::ForC { span, .. }
            | Stmt::ForEach { span, .. }
            | Stmt::FuncDecl { span, .. }
            | Stmt::Return { span, .. }
            | Stmt::Import { span, .. } => *span,
        }
    }
}

/// A parsed module: an ordered list of top-level statements (§6, "External
/// Interfaces" — the core's sole input shape).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Module {
    pub statements: Vec<Stmt>,
}

impl Module {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}
