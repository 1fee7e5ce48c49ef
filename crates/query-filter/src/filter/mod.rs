//! Defines the filter tree: leaf predicates, the logical composite and the
//! no-op filter.

use crate::render::{ParamMap, Render, Renderer};
use serde::Serialize;

pub mod leaf;
pub mod logical;

pub use leaf::{Comparison, Literal, NullCheck, Param, Pattern, Range};
pub use logical::Logical;

/// A predicate that may or may not apply, and renders itself into query
/// text plus named parameter bindings when it does.
///
/// Filters are immutable once built, so the same tree can be rendered any
/// number of times, from any number of threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Filter {
    /// `column OP :param`, e.g. `book.isbn = :isbn`.
    Comparison(Comparison),

    /// `[LOWER(]column[)] LIKE :param` with wildcards carried by the value.
    Pattern(Pattern),

    /// `column IS NULL` / `column IS NOT NULL`, switched by an explicit flag.
    NullCheck(NullCheck),

    /// `column BETWEEN :left AND :right`.
    Range(Range),

    /// Caller-supplied text plus a single binding.
    Literal(Literal),

    /// A binding with no rendered text.
    Param(Param),

    /// Children joined by `AND` / `OR`.
    Logical(Logical),

    /// Never applies, renders nothing.
    Noop,
}

impl Filter {
    pub fn can_apply(&self) -> bool {
        match self {
            Filter::Comparison(_)
            | Filter::Pattern(_)
            | Filter::Range(_)
            | Filter::Literal(_)
            | Filter::Param(_) => true,
            Filter::NullCheck(check) => check.enabled(),
            Filter::Logical(logical) => logical.can_apply(),
            Filter::Noop => false,
        }
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Filter::Logical(_))
    }

    /// Appends the filter text to `sql` and its bindings to `params`.
    /// Does nothing when the filter does not apply.
    pub fn apply(&self, sql: &mut String, params: &mut ParamMap) {
        if !self.can_apply() {
            return;
        }
        let mut renderer = Renderer::new(sql, params);
        self.render(&mut renderer);
    }

    /// Renders into a fresh buffer and parameter map.
    pub fn to_sql(&self) -> (String, ParamMap) {
        let mut sql = String::new();
        let mut params = ParamMap::new();
        self.apply(&mut sql, &mut params);
        (sql, params)
    }
}

impl Render for Filter {
    fn render(&self, r: &mut Renderer) {
        match self {
            Filter::Comparison(f) => f.render(r),
            Filter::Pattern(f) => f.render(r),
            Filter::NullCheck(f) => f.render(r),
            Filter::Range(f) => f.render(r),
            Filter::Literal(f) => f.render(r),
            Filter::Param(f) => f.render(r),
            Filter::Logical(f) => f.render(r),
            Filter::Noop => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonOp {
    Eq,    // =
    NotEq, // <>
    Gt,    // >
    GtEq,  // >=
    Lt,    // <
    LtEq,  // <=
    In,
    NotIn,
}

impl ComparisonOp {
    pub fn token(self) -> &'static str {
        match self {
            ComparisonOp::Eq => " = ",
            ComparisonOp::NotEq => " <> ",
            ComparisonOp::Gt => " > ",
            ComparisonOp::GtEq => " >= ",
            ComparisonOp::Lt => " < ",
            ComparisonOp::LtEq => " <= ",
            ComparisonOp::In => " IN ",
            ComparisonOp::NotIn => " NOT IN ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PatternOp {
    Like,
    NotLike,
}

impl PatternOp {
    pub fn token(self) -> &'static str {
        match self {
            PatternOp::Like => " LIKE ",
            PatternOp::NotLike => " NOT LIKE ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NullOp {
    IsNull,
    IsNotNull,
}

impl NullOp {
    pub fn token(self) -> &'static str {
        match self {
            NullOp::IsNull => " IS NULL ",
            NullOp::IsNotNull => " IS NOT NULL ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RangeOp {
    Between,
    NotBetween,
}

impl RangeOp {
    pub fn token(self) -> &'static str {
        match self {
            RangeOp::Between => " BETWEEN ",
            RangeOp::NotBetween => " NOT BETWEEN ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn token(self) -> &'static str {
        match self {
            LogicalOp::And => " AND ",
            LogicalOp::Or => " OR ",
        }
    }
}
