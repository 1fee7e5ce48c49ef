//! Leaf predicates. Each one is built by the factory, which guarantees the
//! names are non-blank and the bound values are present.

use crate::{
    filter::{ComparisonOp, NullOp, PatternOp, RangeOp},
    render::{Render, Renderer},
};
use model::core::value::Value;
use serde::Serialize;

const LOWER: &str = "LOWER(";
const WILDCARD: char = '%';

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub(crate) column: String,
    pub(crate) op: ComparisonOp,
    pub(crate) param: String,
    pub(crate) value: Value,
}

impl Comparison {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Render for Comparison {
    fn render(&self, r: &mut Renderer) {
        r.push_str(&self.column);
        r.push_str(self.op.token());
        r.placeholder(&self.param);
        r.bind(&self.param, self.value.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    pub(crate) column: String,
    pub(crate) op: PatternOp,
    pub(crate) param: String,
    pub(crate) text: String,
    pub(crate) wildcard_left: bool,
    pub(crate) wildcard_right: bool,
    pub(crate) ignore_case: bool,
}

impl Pattern {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// The value actually bound: lowercased when case-insensitive, with a
    /// `%` on each side that has a wildcard.
    pub fn bound_value(&self) -> String {
        let mut prepared = String::with_capacity(self.text.len() + 2);
        if self.wildcard_left {
            prepared.push(WILDCARD);
        }
        if self.ignore_case {
            prepared.push_str(&self.text.to_lowercase());
        } else {
            prepared.push_str(&self.text);
        }
        if self.wildcard_right {
            prepared.push(WILDCARD);
        }
        prepared
    }
}

impl Render for Pattern {
    fn render(&self, r: &mut Renderer) {
        if self.ignore_case {
            r.push_str(LOWER);
            r.push_str(&self.column);
            r.push_str(")");
        } else {
            r.push_str(&self.column);
        }
        r.push_str(self.op.token());
        r.placeholder(&self.param);
        r.bind(&self.param, Value::String(self.bound_value()));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NullCheck {
    pub(crate) column: String,
    pub(crate) op: NullOp,
    pub(crate) enabled: bool,
}

impl NullCheck {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl Render for NullCheck {
    fn render(&self, r: &mut Renderer) {
        if !self.enabled {
            return;
        }
        r.push_str(&self.column);
        r.push_str(self.op.token());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Range {
    pub(crate) column: String,
    pub(crate) op: RangeOp,
    pub(crate) left_param: String,
    pub(crate) right_param: String,
    pub(crate) left: Value,
    pub(crate) right: Value,
}

impl Range {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn bounds(&self) -> (&Value, &Value) {
        (&self.left, &self.right)
    }
}

impl Render for Range {
    fn render(&self, r: &mut Renderer) {
        r.push_str(&self.column);
        r.push_str(self.op.token());
        r.placeholder(&self.left_param);
        r.push_str(" AND ");
        r.placeholder(&self.right_param);
        r.bind(&self.left_param, self.left.clone());
        r.bind(&self.right_param, self.right.clone());
    }
}

/// Raw text appended verbatim. The caller is responsible for the text
/// referencing `:param`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub(crate) text: String,
    pub(crate) param: String,
    pub(crate) value: Value,
}

impl Literal {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Render for Literal {
    fn render(&self, r: &mut Renderer) {
        r.push_str(&self.text);
        r.bind(&self.param, self.value.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub(crate) param: String,
    pub(crate) value: Value,
}

impl Param {
    pub fn name(&self) -> &str {
        &self.param
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Render for Param {
    fn render(&self, r: &mut Renderer) {
        r.bind(&self.param, self.value.clone());
    }
}
