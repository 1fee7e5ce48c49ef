//! Provides a concrete [`Filterable`] and a type-safe, fluent builder for it.

use crate::{
    error::FilterError,
    filter::Filter,
    filterable::{Clauses, Filterable},
};
use serde::Serialize;

// --- Typestate Marker Structs ---
// These zero-sized structs make the builder require select, then from,
// before any optional clause can be set.

/// The initial state of the builder before any clauses have been added.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// The state after the select text has been set.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// The state after the from text has been set.
#[derive(Debug, Default, Clone)]
pub struct FromState;

/// A reusable statement: fixed select and from text, a root filter built
/// up front, and the optional tail clauses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    select: String,
    from: String,
    filter: Filter,
    clauses: Clauses,
}

impl Statement {
    pub fn builder() -> StatementBuilder<InitialState> {
        StatementBuilder::new()
    }

    pub fn root(&self) -> &Filter {
        &self.filter
    }
}

impl Filterable for Statement {
    fn select(&self) -> &str {
        &self.select
    }

    fn from(&self) -> &str {
        &self.from
    }

    fn filter(&self) -> Result<Filter, FilterError> {
        Ok(self.filter.clone())
    }

    fn clauses(&self) -> Clauses {
        self.clauses.clone()
    }
}

#[derive(Debug, Clone)]
pub struct StatementBuilder<State> {
    select: String,
    from: String,
    filter: Filter,
    clauses: Clauses,
    state: State,
}

impl StatementBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            select: String::new(),
            from: String::new(),
            filter: Filter::Noop,
            clauses: Clauses::default(),
            state: InitialState,
        }
    }

    /// Sets the select text, e.g. `"SELECT p "`.
    pub fn select(self, select: impl Into<String>) -> StatementBuilder<SelectState> {
        StatementBuilder {
            select: select.into(),
            from: self.from,
            filter: self.filter,
            clauses: self.clauses,
            state: SelectState,
        }
    }
}

impl Default for StatementBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementBuilder<SelectState> {
    /// Sets the from text, e.g. `"FROM Person p"`.
    pub fn from(self, from: impl Into<String>) -> StatementBuilder<FromState> {
        StatementBuilder {
            select: self.select,
            from: from.into(),
            filter: self.filter,
            clauses: self.clauses,
            state: FromState,
        }
    }
}

impl StatementBuilder<FromState> {
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Replaces the default `" WHERE "` token.
    pub fn where_token(mut self, token: impl Into<String>) -> Self {
        self.clauses.where_token = token.into();
        self
    }

    pub fn group_by(mut self, group_by: impl Into<String>) -> Self {
        self.clauses.group_by = Some(group_by.into());
        self
    }

    pub fn having(mut self, having: impl Into<String>) -> Self {
        self.clauses.having = Some(having.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.clauses.order_by = Some(order_by.into());
        self
    }

    /// Replaces all tail clauses at once, e.g. with ones read from config.
    pub fn clauses(mut self, clauses: Clauses) -> Self {
        self.clauses = clauses;
        self
    }

    pub fn build(self) -> Statement {
        Statement {
            select: self.select,
            from: self.from,
            filter: self.filter,
            clauses: self.clauses,
        }
    }
}
