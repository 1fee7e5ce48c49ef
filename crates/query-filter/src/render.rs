//! Defines the rendering trait and the context filters write into.

use model::core::value::Value;
use std::collections::HashMap;

/// Prefix of a named placeholder, e.g. `:isbn`.
pub const PARAM_PREFIX: char = ':';

/// Named bindings collected while rendering. Binding a name twice keeps the
/// last value.
pub type ParamMap = HashMap<String, Value>;

/// A trait for any filter node that can be rendered into query text.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Borrows the query buffer and the parameter map for the duration of a
/// single rendering.
pub struct Renderer<'a> {
    pub sql: &'a mut String,
    pub params: &'a mut ParamMap,
}

impl<'a> Renderer<'a> {
    pub fn new(sql: &'a mut String, params: &'a mut ParamMap) -> Self {
        Self { sql, params }
    }

    pub fn push_str(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    /// Appends the named placeholder for `name`.
    pub fn placeholder(&mut self, name: &str) {
        self.sql.push(PARAM_PREFIX);
        self.sql.push_str(name);
    }

    pub fn bind(&mut self, name: &str, value: Value) {
        self.params.insert(name.to_string(), value);
    }
}
