//! Parameterized SQL filters.
//!
//! Filters render predicate text with named placeholders (`:name`) and
//! collect the values for those placeholders into a [`ParamMap`], so values
//! never end up concatenated into the query text.
//!
//! ```
//! use query_filter::{Filterable, Statement, factory::{between, like}};
//!
//! # fn main() -> Result<(), query_filter::FilterError> {
//! let stmt = Statement::builder()
//!     .select("SELECT b ")
//!     .from("FROM Book b")
//!     .filter(query_filter::and!(
//!         like("b.title", "title", "Dracula")?,
//!         between("b.published", "start", "end", 1980, None::<i32>)?,
//!     ))
//!     .build();
//!
//! let (sql, params) = stmt.to_sql()?;
//! assert_eq!(sql, "SELECT b FROM Book b WHERE LOWER(b.title) LIKE :title");
//! assert_eq!(params.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod factory;
pub mod filter;
pub mod filterable;
pub mod macros;
pub mod render;
pub mod statement;

pub use error::FilterError;
pub use filter::Filter;
pub use filterable::{Clauses, Filterable, ParameterSetter, QueryFactory};
pub use model::core::value::Value;
pub use render::ParamMap;
pub use statement::Statement;
