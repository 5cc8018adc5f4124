//! The expression tree produced by the parser, before and after De Bruijn conversion.

/// A single lambda-calculus expression, tagged with the byte offset of its first token.
///
/// The offset is carried purely for diagnostics; it plays no role in equality or evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub offset: usize,
}

impl Expr {
    pub fn new(kind: ExprKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The shape of an expression node.
///
/// `NamedLam` only appears in freshly-parsed trees; [`crate::debruijn::convert`] rewrites every
/// `NamedLam` into a `Lam` before the tree reaches the type engine or the pretty-printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// A free variable reference, named by a single byte (e.g. `x`).
    Var(u8),
    /// A bound-variable reference by 1-based De Bruijn index (nearest enclosing binder is `1`).
    BoundVar(u32),
    /// An anonymous abstraction in De Bruijn form.
    Lam(Box<Expr>),
    /// A parsed abstraction that still names its parameter; consumed by De Bruijn conversion.
    NamedLam(Option<u8>, Box<Expr>),
    /// Application, always binary; multi-argument calls are left-folded during parsing.
    App(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: u8, offset: usize) -> Self {
        Self::new(ExprKind::Var(name), offset)
    }

    pub fn bound_var(index: u32, offset: usize) -> Self {
        Self::new(ExprKind::BoundVar(index), offset)
    }

    pub fn lam(body: Expr, offset: usize) -> Self {
        Self::new(ExprKind::Lam(Box::new(body)), offset)
    }

    pub fn named_lam(param: Option<u8>, body: Expr, offset: usize) -> Self {
        Self::new(ExprKind::NamedLam(param, Box::new(body)), offset)
    }

    pub fn app(func: Expr, arg: Expr) -> Self {
        let offset = func.offset;
        Self::new(ExprKind::App(Box::new(func), Box::new(arg)), offset)
    }
}

/// A full program: a (possibly empty) sequence of independently-parsed top-level expressions.
pub type Program = Vec<Expr>;
