//! Expression node shapes (spec §4.3).

use crate::node_id::NodeId;
use crate::type_annotation::TypeAnnotation;
use rivet_common::{MemQual, Modifier, Span};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Lt,
    Le,
    Gt,
    Ge,
    EqEq,
    NotEq,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    AndAnd,
    OrOr,
}

impl BinaryOp {
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Lt | Self::Le | Self::Gt | Self::Ge | Self::EqEq | Self::NotEq
        )
    }

    pub const fn is_logical(self) -> bool {
        matches!(self, Self::AndAnd | Self::OrOr)
    }

    /// Arithmetic operators, `+` included (`+` additionally allows string
    /// concatenation, handled separately by the checker per §4.3.2).
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IncDecOp {
    Inc,
    Dec,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Long(i64),
    Double(f64),
    Float(f32),
    Char(char),
    Byte(u8),
    Bool(bool),
    Str(String),
    /// The empty-array-literal sentinel (§3.1: "ARRAY element is never NIL
    /// except transiently for an empty literal").
    Nil,
}

/// One element of an array literal (§4.3.7): a plain value, a nested
/// `range` contributing its own element type, or a `...spread` contributing
/// its inner element type.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayElement {
    Value(Expr),
    Spread(Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SyncTarget {
    Scalar(Box<Expr>),
    Array(Vec<Expr>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LambdaParam {
    pub name: String,
    /// `None` when the parameter type must be filled in by the call or
    /// assignment context (§4.3.8).
    pub ty: Option<TypeAnnotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LambdaBody {
    Expr(Box<Expr>),
    Block(Vec<crate::stmt::Stmt>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal {
        id: NodeId,
        span: Span,
        value: LiteralValue,
    },
    Variable {
        id: NodeId,
        span: Span,
        name: String,
    },
    Interpolated {
        id: NodeId,
        span: Span,
        parts: Vec<Expr>,
    },
    Binary {
        id: NodeId,
        span: Span,
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        id: NodeId,
        span: Span,
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Assign {
        id: NodeId,
        span: Span,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    IndexAssign {
        id: NodeId,
        span: Span,
        array: Box<Expr>,
        index: Box<Expr>,
        value: Box<Expr>,
    },
    IncDec {
        id: NodeId,
        span: Span,
        op: IncDecOp,
        operand: Box<Expr>,
    },
    Call {
        id: NodeId,
        span: Span,
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    StaticCall {
        id: NodeId,
        span: Span,
        type_name: String,
        method: String,
        args: Vec<Expr>,
    },
    MemberAccess {
        id: NodeId,
        span: Span,
        object: Box<Expr>,
        member: String,
    },
    Spawn {
        id: NodeId,
        span: Span,
        modifier: Modifier,
        call: Box<Expr>,
    },
    Sync {
        id: NodeId,
        span: Span,
        target: SyncTarget,
    },
    ArrayLiteral {
        id: NodeId,
        span: Span,
        elements: Vec<ArrayElement>,
    },
    Index {
        id: NodeId,
        span: Span,
        array: Box<Expr>,
        index: Box<Expr>,
    },
    Slice {
        id: NodeId,
        span: Span,
        array: Box<Expr>,
        start: Option<Box<Expr>>,
        end: Option<Box<Expr>>,
    },
    Range {
        id: NodeId,
        span: Span,
        start: Box<Expr>,
        end: Box<Expr>,
    },
    SizedArray {
        id: NodeId,
        span: Span,
        element_type: TypeAnnotation,
        size: Box<Expr>,
        default: Option<Box<Expr>>,
    },
    Lambda {
        id: NodeId,
        span: Span,
        params: Vec<LambdaParam>,
        return_type: Option<TypeAnnotation>,
        body: LambdaBody,
    },
}

impl Expr {
    pub fn id(&self) -> NodeId {
        match self {
            Expr::Literal { id, .. }
            | Expr::Variable { id, .. }
            | Expr::Interpolated { id, .. }
            | Expr::Binary { id, .. }
            | Expr::Unary { id, .. }
            | Expr::Assign { id, .. }
            | Expr::IndexAssign { id, .. }
            | Expr::IncDec { id, .. }
            | Expr::Call { id, .. }
            | Expr::StaticCall { id, .. }
            | Expr::MemberAccess { id, .. }
            | Expr::Spawn { id, .. }
            | Expr::Sync { id, .. }
            | Expr::ArrayLiteral { id, .. }
            | Expr::Index { id, .. }
            | Expr::Slice { id, .. }
            | Expr::Range { id, .. }
            | Expr::SizedArray { id, .. }
            | Expr::Lambda { id, .. } => *id,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. }
            | Expr::Variable { span, .. }
            | Expr::Interpolated { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Assign { span, .. }
            | Expr::IndexAssign { span, .. }
            | Expr::IncDec { span, .. }
            | Expr::Call { span, .. }
            | Expr::StaticCall { span, .. }
            | Expr::MemberAccess { span, .. }
            | Expr::Spawn { span, .. }
            | Expr::Sync { span, .. }
            | Expr::ArrayLiteral { span, .. }
            | Expr::Index { span, .. }
            | Expr::Slice { span, .. }
            | Expr::Range { span, .. }
            | Expr::SizedArray { span, .. }
            | Expr::Lambda { span, .. } => *span,
        }
    }

    /// The base symbol name at the root of an access chain
    /// (`a.b[i].c` -> `a`), used by the concurrency analyzer for freeze
    /// bookkeeping (glossary: "Base symbol").
    pub fn base_symbol_name(&self) -> Option<&str> {
        match self {
            Expr::Variable { name, .. } => Some(name),
            Expr::MemberAccess { object, .. }
            | Expr::Index { array: object, .. }
            | Expr::Slice { array: object, .. } => object.base_symbol_name(),
            _ => None,
        }
    }
}

// Re-exported so callers of `rivet_ast::expr` never need to reach into the
// sibling `stmt` module just to name `LambdaBody::Block`'s payload type.
pub use crate::stmt::Stmt;
