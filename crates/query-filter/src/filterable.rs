//! Assembles a full statement around a root filter and hands it to the
//! execution layer.

use crate::{error::FilterError, filter::Filter, render::ParamMap};
use model::core::value::Value;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Token placed between the from clause and the root filter.
pub const DEFAULT_WHERE: &str = " WHERE ";

/// Turns finished query text into the caller's query object.
pub trait QueryFactory<Q> {
    fn create(&mut self, sql: String) -> Q;
}

impl<Q, F> QueryFactory<Q> for F
where
    F: FnMut(String) -> Q,
{
    fn create(&mut self, sql: String) -> Q {
        self(sql)
    }
}

/// Binds one named parameter onto a query object.
pub trait ParameterSetter<Q> {
    fn set(&mut self, query: &mut Q, name: &str, value: Value);
}

impl<Q, F> ParameterSetter<Q> for F
where
    F: FnMut(&mut Q, &str, Value),
{
    fn set(&mut self, query: &mut Q, name: &str, value: Value) {
        self(query, name, value)
    }
}

/// Optional statement tail. Each clause is appended verbatim, so it carries
/// its own leading whitespace and keyword, e.g. `" ORDER BY p.name ASC"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clauses {
    pub where_token: String,
    pub group_by: Option<String>,
    pub having: Option<String>,
    pub order_by: Option<String>,
}

impl Default for Clauses {
    fn default() -> Self {
        Self {
            where_token: DEFAULT_WHERE.to_string(),
            group_by: None,
            having: None,
            order_by: None,
        }
    }
}

impl Clauses {
    /// Reads clauses from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn with_group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    pub fn with_having(mut self, having: impl Into<String>) -> Self {
        self.having = Some(having.into());
        self
    }

    /// Group by, having and order by, in that order, skipping absent ones.
    fn tail(&self) -> impl Iterator<Item = &str> {
        [&self.group_by, &self.having, &self.order_by]
            .into_iter()
            .filter_map(|clause| clause.as_deref())
            .filter(|clause| !clause.is_empty())
    }
}

/// A statement built around a root filter.
///
/// The where token and the root filter are only emitted when the filter
/// applies; otherwise the statement degrades to select, from and the tail
/// clauses.
pub trait Filterable {
    fn select(&self) -> &str;

    fn from(&self) -> &str;

    /// Builds the root filter. Called once per rendering.
    fn filter(&self) -> Result<Filter, FilterError>;

    fn clauses(&self) -> Clauses {
        Clauses::default()
    }

    /// Renders the statement text and collects its bindings.
    fn to_sql(&self) -> Result<(String, ParamMap), FilterError> {
        let filter = self.filter()?;
        let clauses = self.clauses();

        let mut sql = String::new();
        let mut params = ParamMap::new();

        sql.push_str(self.select());
        sql.push_str(self.from());

        if filter.can_apply() {
            sql.push_str(&clauses.where_token);
            filter.apply(&mut sql, &mut params);
        }

        for clause in clauses.tail() {
            sql.push_str(clause);
        }

        Ok((sql, params))
    }

    /// Renders the statement, creates the query object from its text and
    /// binds every collected parameter onto it. Binding goes by name, so the
    /// order is unspecified.
    fn apply<Q>(
        &self,
        mut query_factory: impl QueryFactory<Q>,
        mut parameter_setter: impl ParameterSetter<Q>,
    ) -> Result<Q, FilterError>
    where
        Self: Sized,
    {
        let (sql, params) = self.to_sql()?;
        debug!(sql = %sql, params = params.len(), "Rendered filtered statement");

        let mut query = query_factory.create(sql);
        for (name, value) in params {
            trace!(param = %name, kind = value.kind(), value = %value, "Binding parameter");
            parameter_setter.set(&mut query, &name, value);
        }

        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{and, equal, none};

    struct Books {
        isbn: Option<String>,
        clauses: Clauses,
    }

    impl Filterable for Books {
        fn select(&self) -> &str {
            "SELECT b "
        }

        fn from(&self) -> &str {
            "FROM Book b"
        }

        fn filter(&self) -> Result<Filter, FilterError> {
            Ok(and([equal("b.isbn", "isbn", self.isbn.clone())?, none()]))
        }

        fn clauses(&self) -> Clauses {
            self.clauses.clone()
        }
    }

    #[derive(Debug, Default)]
    struct Recorded {
        sql: String,
        params: Vec<(String, Value)>,
    }

    fn recorded(books: &Books) -> Recorded {
        books
            .apply(
                |sql: String| Recorded {
                    sql,
                    ..Default::default()
                },
                |q: &mut Recorded, name: &str, value: Value| {
                    q.params.push((name.to_string(), value))
                },
            )
            .unwrap()
    }

    #[test]
    fn test_where_only_when_filter_applies() {
        let books = Books {
            isbn: Some("978-3-16-148410-0".into()),
            clauses: Clauses::default(),
        };
        let query = recorded(&books);

        assert_eq!(query.sql, "SELECT b FROM Book b WHERE b.isbn = :isbn");
        assert_eq!(
            query.params,
            vec![(
                "isbn".to_string(),
                Value::String("978-3-16-148410-0".into())
            )]
        );
    }

    #[test]
    fn test_no_where_when_filter_is_absent() {
        let books = Books {
            isbn: None,
            clauses: Clauses::default().with_order_by(" ORDER BY b.title"),
        };
        let query = recorded(&books);

        assert_eq!(query.sql, "SELECT b FROM Book b ORDER BY b.title");
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_tail_clauses_in_fixed_order() {
        let books = Books {
            isbn: Some("x".into()),
            clauses: Clauses {
                where_token: " WHERE ".into(),
                order_by: Some(" ORDER BY b.isbn".into()),
                having: Some(" HAVING COUNT(*) > 1".into()),
                group_by: Some(" GROUP BY b.isbn".into()),
            },
        };
        let (sql, _) = books.to_sql().unwrap();

        assert_eq!(
            sql,
            "SELECT b FROM Book b WHERE b.isbn = :isbn GROUP BY b.isbn HAVING COUNT(*) > 1 ORDER BY b.isbn"
        );
    }

    #[test]
    fn test_empty_tail_clause_is_skipped() {
        let books = Books {
            isbn: None,
            clauses: Clauses::default().with_group_by(""),
        };
        assert_eq!(books.to_sql().unwrap().0, "SELECT b FROM Book b");
    }

    #[test]
    fn test_custom_where_token() {
        let books = Books {
            isbn: Some("x".into()),
            clauses: Clauses {
                where_token: " WHERE b.deleted = false AND ".into(),
                ..Default::default()
            },
        };
        assert_eq!(
            books.to_sql().unwrap().0,
            "SELECT b FROM Book b WHERE b.deleted = false AND b.isbn = :isbn"
        );
    }

    #[test]
    fn test_clauses_from_json() {
        let clauses = Clauses::from_json(r#"{ "order_by": " ORDER BY p.name ASC" }"#).unwrap();
        assert_eq!(clauses.where_token, DEFAULT_WHERE);
        assert_eq!(clauses.group_by, None);
        assert_eq!(clauses.order_by.as_deref(), Some(" ORDER BY p.name ASC"));

        assert!(matches!(
            Clauses::from_json("{ not json"),
            Err(FilterError::Clauses(_))
        ));
    }
}
