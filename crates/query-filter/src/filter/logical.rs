use crate::{
    filter::{Filter, LogicalOp},
    render::{Render, Renderer},
};
use serde::Serialize;

/// Joins child filters with a single operator.
///
/// Children that do not apply are skipped without emitting an operator, and
/// nested composites are wrapped in parentheses. Leaves never are.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Logical {
    op: LogicalOp,
    children: Vec<Filter>,
}

impl Logical {
    pub(crate) fn new(op: LogicalOp, children: Vec<Filter>) -> Self {
        Self { op, children }
    }

    pub fn op(&self) -> LogicalOp {
        self.op
    }

    pub fn children(&self) -> &[Filter] {
        &self.children
    }

    /// True when at least one child applies. Evaluated on every call.
    pub fn can_apply(&self) -> bool {
        self.children.iter().any(Filter::can_apply)
    }
}

impl Render for Logical {
    fn render(&self, r: &mut Renderer) {
        let mut found_one = false;
        for child in self.children.iter().filter(|c| c.can_apply()) {
            if found_one {
                r.push_str(self.op.token());
            }
            found_one = true;

            if child.is_logical() {
                r.push_str("(");
                child.render(r);
                r.push_str(")");
            } else {
                child.render(r);
            }
        }
    }
}
