//! Constructors for the common filters.
//!
//! Every constructor first checks that the names it needs are non-blank and
//! fails with [`FilterError::MissingName`] otherwise. It then applies the
//! absence policy: when a value is null or empty the constructor returns
//! [`Filter::Noop`] instead of a filter bound to nothing, so optional
//! criteria can be passed straight through without branching.

use crate::{
    error::FilterError,
    filter::{
        Comparison, ComparisonOp, Filter, Literal, Logical, LogicalOp, NullCheck, NullOp, Param,
        Pattern, PatternOp, Range, RangeOp,
    },
};
use model::core::value::Value;
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

/// Whether `value` is treated as "not provided".
pub fn is_absent(value: &Value) -> bool {
    value.is_absent()
}

/// Text accepted by the pattern constructors.
///
/// `Ok(None)` means the value is absent. A present [`Value`] with no text
/// form, such as a blob or a list, is an error rather than a skipped filter.
pub trait IntoText {
    fn into_text(self) -> Result<Option<String>, FilterError>;
}

impl IntoText for &str {
    fn into_text(self) -> Result<Option<String>, FilterError> {
        Ok(Some(self.to_string()))
    }
}

impl IntoText for String {
    fn into_text(self) -> Result<Option<String>, FilterError> {
        Ok(Some(self))
    }
}

impl IntoText for &String {
    fn into_text(self) -> Result<Option<String>, FilterError> {
        Ok(Some(self.clone()))
    }
}

impl IntoText for Value {
    fn into_text(self) -> Result<Option<String>, FilterError> {
        if self.is_absent() {
            return Ok(None);
        }
        self.as_text()
            .map(Some)
            .ok_or(FilterError::NotText(self.kind()))
    }
}

impl<T: IntoText> IntoText for Option<T> {
    fn into_text(self) -> Result<Option<String>, FilterError> {
        match self {
            Some(value) => value.into_text(),
            None => Ok(None),
        }
    }
}

/// Collections accepted by [`is_in`] and [`not_in`]. `None` and empty
/// collections are absent.
pub trait IntoValues {
    fn into_values(self) -> Vec<Value>;
}

impl<T: Into<Value>> IntoValues for Vec<T> {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value> + Clone> IntoValues for &[T] {
    fn into_values(self) -> Vec<Value> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> IntoValues for [T; N] {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>> IntoValues for HashSet<T> {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>> IntoValues for BTreeSet<T> {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<C: IntoValues> IntoValues for Option<C> {
    fn into_values(self) -> Vec<Value> {
        self.map(IntoValues::into_values).unwrap_or_default()
    }
}

fn required(name: &str, field: &'static str) -> Result<(), FilterError> {
    if name.trim().is_empty() {
        return Err(FilterError::MissingName(field));
    }
    Ok(())
}

fn skipped(name: &str) -> Filter {
    trace!(param = name, "Absent value, filter skipped");
    Filter::Noop
}

fn comparison(
    column: &str,
    op: ComparisonOp,
    param: &str,
    value: Value,
) -> Result<Filter, FilterError> {
    required(column, "column_name")?;
    required(param, "param_name")?;
    if value.is_absent() {
        return Ok(skipped(param));
    }
    Ok(Filter::Comparison(Comparison {
        column: column.to_string(),
        op,
        param: param.to_string(),
        value,
    }))
}

fn pattern(
    column: &str,
    op: PatternOp,
    param: &str,
    value: impl IntoText,
    (wildcard_left, wildcard_right): (bool, bool),
    ignore_case: bool,
) -> Result<Filter, FilterError> {
    required(column, "column_name")?;
    required(param, "param_name")?;
    let text = match value.into_text()? {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(skipped(param)),
    };
    Ok(Filter::Pattern(Pattern {
        column: column.to_string(),
        op,
        param: param.to_string(),
        text,
        wildcard_left,
        wildcard_right,
        ignore_case,
    }))
}

fn null_check(column: &str, op: NullOp, apply: bool) -> Result<Filter, FilterError> {
    required(column, "column_name")?;
    Ok(Filter::NullCheck(NullCheck {
        column: column.to_string(),
        op,
        enabled: apply,
    }))
}

fn range(
    column: &str,
    op: RangeOp,
    left_param: &str,
    right_param: &str,
    left: Value,
    right: Value,
) -> Result<Filter, FilterError> {
    required(column, "column_name")?;
    required(left_param, "left_param_name")?;
    required(right_param, "right_param_name")?;
    if left.is_absent() || right.is_absent() {
        return Ok(skipped(left_param));
    }
    Ok(Filter::Range(Range {
        column: column.to_string(),
        op,
        left_param: left_param.to_string(),
        right_param: right_param.to_string(),
        left,
        right,
    }))
}

fn logical<I>(op: LogicalOp, filters: I) -> Filter
where
    I: IntoIterator<Item = Filter>,
{
    let children: Vec<Filter> = filters.into_iter().collect();
    if children.is_empty() {
        return Filter::Noop;
    }
    Filter::Logical(Logical::new(op, children))
}

const CONTAINS: (bool, bool) = (true, true);
const STARTS: (bool, bool) = (false, true);
const ENDS: (bool, bool) = (true, false);

/// `column = :param`
pub fn equal(column: &str, param: &str, value: impl Into<Value>) -> Result<Filter, FilterError> {
    comparison(column, ComparisonOp::Eq, param, value.into())
}

/// `column <> :param`
pub fn not_equal(
    column: &str,
    param: &str,
    value: impl Into<Value>,
) -> Result<Filter, FilterError> {
    comparison(column, ComparisonOp::NotEq, param, value.into())
}

/// `column > :param`
pub fn greater(column: &str, param: &str, value: impl Into<Value>) -> Result<Filter, FilterError> {
    comparison(column, ComparisonOp::Gt, param, value.into())
}

/// `column >= :param`
pub fn greater_or_equal(
    column: &str,
    param: &str,
    value: impl Into<Value>,
) -> Result<Filter, FilterError> {
    comparison(column, ComparisonOp::GtEq, param, value.into())
}

/// `column < :param`
pub fn less(column: &str, param: &str, value: impl Into<Value>) -> Result<Filter, FilterError> {
    comparison(column, ComparisonOp::Lt, param, value.into())
}

/// `column <= :param`
pub fn less_or_equal(
    column: &str,
    param: &str,
    value: impl Into<Value>,
) -> Result<Filter, FilterError> {
    comparison(column, ComparisonOp::LtEq, param, value.into())
}

/// Case-insensitive "contains": `LOWER(column) LIKE :param`, binds
/// `%value%` lowercased.
pub fn like(column: &str, param: &str, value: impl IntoText) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::Like, param, value, CONTAINS, true)
}

pub fn like_case_sensitive(
    column: &str,
    param: &str,
    value: impl IntoText,
) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::Like, param, value, CONTAINS, false)
}

pub fn not_like(column: &str, param: &str, value: impl IntoText) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::NotLike, param, value, CONTAINS, true)
}

pub fn not_like_case_sensitive(
    column: &str,
    param: &str,
    value: impl IntoText,
) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::NotLike, param, value, CONTAINS, false)
}

pub fn starts_with(column: &str, param: &str, value: impl IntoText) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::Like, param, value, STARTS, true)
}

pub fn starts_with_case_sensitive(
    column: &str,
    param: &str,
    value: impl IntoText,
) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::Like, param, value, STARTS, false)
}

pub fn not_starts_with(
    column: &str,
    param: &str,
    value: impl IntoText,
) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::NotLike, param, value, STARTS, true)
}

pub fn not_starts_with_case_sensitive(
    column: &str,
    param: &str,
    value: impl IntoText,
) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::NotLike, param, value, STARTS, false)
}

pub fn ends_with(column: &str, param: &str, value: impl IntoText) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::Like, param, value, ENDS, true)
}

pub fn ends_with_case_sensitive(
    column: &str,
    param: &str,
    value: impl IntoText,
) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::Like, param, value, ENDS, false)
}

pub fn not_ends_with(
    column: &str,
    param: &str,
    value: impl IntoText,
) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::NotLike, param, value, ENDS, true)
}

pub fn not_ends_with_case_sensitive(
    column: &str,
    param: &str,
    value: impl IntoText,
) -> Result<Filter, FilterError> {
    pattern(column, PatternOp::NotLike, param, value, ENDS, false)
}

/// `column IN :param`, bound to the whole collection as a list. An empty
/// collection is absent.
pub fn is_in(column: &str, param: &str, values: impl IntoValues) -> Result<Filter, FilterError> {
    comparison(column, ComparisonOp::In, param, Value::List(values.into_values()))
}

/// `column NOT IN :param`. An empty collection is absent.
pub fn not_in(column: &str, param: &str, values: impl IntoValues) -> Result<Filter, FilterError> {
    comparison(column, ComparisonOp::NotIn, param, Value::List(values.into_values()))
}

/// `column IS NULL`, only when `apply` is true.
pub fn is_null(column: &str, apply: bool) -> Result<Filter, FilterError> {
    null_check(column, NullOp::IsNull, apply)
}

/// `column IS NOT NULL`, only when `apply` is true.
pub fn is_not_null(column: &str, apply: bool) -> Result<Filter, FilterError> {
    null_check(column, NullOp::IsNotNull, apply)
}

/// `column BETWEEN :left AND :right`. Skipped when either bound is absent.
pub fn between(
    column: &str,
    left_param: &str,
    right_param: &str,
    left: impl Into<Value>,
    right: impl Into<Value>,
) -> Result<Filter, FilterError> {
    range(
        column,
        RangeOp::Between,
        left_param,
        right_param,
        left.into(),
        right.into(),
    )
}

pub fn not_between(
    column: &str,
    left_param: &str,
    right_param: &str,
    left: impl Into<Value>,
    right: impl Into<Value>,
) -> Result<Filter, FilterError> {
    range(
        column,
        RangeOp::NotBetween,
        left_param,
        right_param,
        left.into(),
        right.into(),
    )
}

/// Appends `text` verbatim and binds `param`. For predicates the factory
/// has no constructor for.
pub fn literal(text: &str, param: &str, value: impl Into<Value>) -> Result<Filter, FilterError> {
    required(text, "literal")?;
    required(param, "param_name")?;
    let value = value.into();
    if value.is_absent() {
        return Ok(skipped(param));
    }
    Ok(Filter::Literal(Literal {
        text: text.to_string(),
        param: param.to_string(),
        value,
    }))
}

/// Binds `param` without rendering any text, e.g. for a placeholder already
/// present in the select or having clause.
pub fn parameter(param: &str, value: impl Into<Value>) -> Result<Filter, FilterError> {
    required(param, "param_name")?;
    let value = value.into();
    if value.is_absent() {
        return Ok(skipped(param));
    }
    Ok(Filter::Param(Param {
        param: param.to_string(),
        value,
    }))
}

pub fn none() -> Filter {
    Filter::Noop
}

/// Joins `filters` with `AND`. An empty sequence gives [`Filter::Noop`].
pub fn and<I>(filters: I) -> Filter
where
    I: IntoIterator<Item = Filter>,
{
    logical(LogicalOp::And, filters)
}

/// Joins `filters` with `OR`. An empty sequence gives [`Filter::Noop`].
pub fn or<I>(filters: I) -> Filter
where
    I: IntoIterator<Item = Filter>,
{
    logical(LogicalOp::Or, filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ParamMap;
    use std::collections::HashMap;

    fn render(filter: &Filter) -> (String, ParamMap) {
        assert!(filter.can_apply());
        filter.to_sql()
    }

    fn string(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn test_is_absent() {
        assert!(is_absent(&Value::Null));
        assert!(is_absent(&Value::from("")));
        assert!(is_absent(&Value::from(Vec::<i64>::new())));
        assert!(is_absent(&Value::from(HashSet::<i64>::new())));
        assert!(is_absent(&Value::from(HashMap::<String, i64>::new())));
        assert!(!is_absent(&Value::from(1)));
        assert!(!is_absent(&Value::from("x")));
        assert!(!is_absent(&Value::from(vec![1])));
    }

    #[test]
    fn test_equal() {
        let filter = equal("book.isbn", "isbn", "978-3-16-148410-0").unwrap();
        let (sql, params) = render(&filter);

        assert_eq!(sql, "book.isbn = :isbn");
        assert_eq!(params.get("isbn"), Some(&string("978-3-16-148410-0")));
    }

    #[test]
    fn test_not_equal() {
        let filter = not_equal("book.isbn", "isbn", "978-3-16-148410-0").unwrap();
        assert_eq!(render(&filter).0, "book.isbn <> :isbn");
    }

    #[test]
    fn test_ordering_comparisons() {
        let cases = [
            (greater("book.price", "price", 9.99).unwrap(), "book.price > :price"),
            (
                greater_or_equal("book.price", "price", 9.99).unwrap(),
                "book.price >= :price",
            ),
            (less("book.price", "price", 9.99).unwrap(), "book.price < :price"),
            (
                less_or_equal("book.price", "price", 9.99).unwrap(),
                "book.price <= :price",
            ),
        ];

        for (filter, expected) in cases {
            let (sql, params) = render(&filter);
            assert_eq!(sql, expected);
            assert_eq!(params.get("price"), Some(&Value::Float(9.99)));
        }
    }

    #[test]
    fn test_zero_and_false_are_present() {
        assert!(equal("book.stock", "stock", 0).unwrap().can_apply());
        assert!(equal("book.active", "active", false).unwrap().can_apply());
        assert!(equal("book.title", "title", " ").unwrap().can_apply());
    }

    #[test]
    fn test_absent_values_give_noop() {
        assert_eq!(equal("book.isbn", "isbn", "").unwrap(), Filter::Noop);
        assert_eq!(equal("book.isbn", "isbn", None::<String>).unwrap(), Filter::Noop);
        assert_eq!(greater("book.price", "price", Value::Null).unwrap(), Filter::Noop);
        assert_eq!(like("book.title", "title", "").unwrap(), Filter::Noop);
        assert_eq!(like("book.title", "title", None::<&str>).unwrap(), Filter::Noop);
        assert_eq!(is_in("book.category", "c", Vec::<String>::new()).unwrap(), Filter::Noop);
        assert_eq!(literal("a = :a", "a", "").unwrap(), Filter::Noop);
        assert_eq!(parameter("a", None::<i32>).unwrap(), Filter::Noop);
    }

    #[test]
    fn test_like() {
        let (sql, params) = render(&like("book.title", "title", "Dracula").unwrap());
        assert_eq!(sql, "LOWER(book.title) LIKE :title");
        assert_eq!(params.get("title"), Some(&string("%dracula%")));
    }

    #[test]
    fn test_like_case_sensitive() {
        let (sql, params) =
            render(&like_case_sensitive("book.title", "title", "Dracula").unwrap());
        assert_eq!(sql, "book.title LIKE :title");
        assert_eq!(params.get("title"), Some(&string("%Dracula%")));
    }

    #[test]
    fn test_not_like() {
        let (sql, params) = render(&not_like("book.title", "title", "Dracula").unwrap());
        assert_eq!(sql, "LOWER(book.title) NOT LIKE :title");
        assert_eq!(params.get("title"), Some(&string("%dracula%")));

        let (sql, params) =
            render(&not_like_case_sensitive("book.title", "title", "Dracula").unwrap());
        assert_eq!(sql, "book.title NOT LIKE :title");
        assert_eq!(params.get("title"), Some(&string("%Dracula%")));
    }

    #[test]
    fn test_starts_with() {
        let (sql, params) = render(&starts_with("book.title", "title", "Dracula").unwrap());
        assert_eq!(sql, "LOWER(book.title) LIKE :title");
        assert_eq!(params.get("title"), Some(&string("dracula%")));

        let (sql, params) =
            render(&starts_with_case_sensitive("book.title", "title", "Dracula").unwrap());
        assert_eq!(sql, "book.title LIKE :title");
        assert_eq!(params.get("title"), Some(&string("Dracula%")));

        let (sql, params) = render(&not_starts_with("book.title", "title", "Dracula").unwrap());
        assert_eq!(sql, "LOWER(book.title) NOT LIKE :title");
        assert_eq!(params.get("title"), Some(&string("dracula%")));
    }

    #[test]
    fn test_ends_with() {
        let (sql, params) = render(&ends_with("book.title", "title", "Dracula").unwrap());
        assert_eq!(sql, "LOWER(book.title) LIKE :title");
        assert_eq!(params.get("title"), Some(&string("%dracula")));

        let (sql, params) =
            render(&ends_with_case_sensitive("book.title", "title", "Dracula").unwrap());
        assert_eq!(sql, "book.title LIKE :title");
        assert_eq!(params.get("title"), Some(&string("%Dracula")));

        let (sql, params) = render(
            &not_ends_with_case_sensitive("book.title", "title", String::from("Dracula")).unwrap(),
        );
        assert_eq!(sql, "book.title NOT LIKE :title");
        assert_eq!(params.get("title"), Some(&string("%Dracula")));
    }

    #[test]
    fn test_pattern_from_value() {
        let (_, params) = render(&starts_with("book.code", "code", Value::Int(42)).unwrap());
        assert_eq!(params.get("code"), Some(&string("42%")));

        assert_eq!(like("book.title", "title", Value::Null).unwrap(), Filter::Noop);
        assert_eq!(
            like("book.title", "title", Value::from(Vec::<i32>::new())).unwrap(),
            Filter::Noop
        );
        assert_eq!(like("book.title", "title", Some(Value::Null)).unwrap(), Filter::Noop);
    }

    #[test]
    fn test_pattern_rejects_present_value_without_text() {
        let err = like("book.cover", "cover", Value::Bytes(vec![65])).unwrap_err();
        assert!(matches!(err, FilterError::NotText("bytes")));

        let err = ends_with("book.tags", "tags", Value::from(vec![1, 2])).unwrap_err();
        assert!(matches!(err, FilterError::NotText("list")));

        let err = not_like("book.meta", "meta", Some(Value::Json(serde_json::json!(1))))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "value of type json has no text form for a pattern filter"
        );
    }

    #[test]
    fn test_pattern_name_check_precedes_text_check() {
        let err = like(" ", "cover", Value::Bytes(vec![65])).unwrap_err();
        assert!(matches!(err, FilterError::MissingName("column_name")));
    }

    #[test]
    fn test_in_and_not_in() {
        let categories = vec!["Action", "Comedy", "Horror"];
        let expected = Value::from(categories.clone());

        let (sql, params) = render(&is_in("book.category", "categories", categories.clone()).unwrap());
        assert_eq!(sql, "book.category IN :categories");
        assert_eq!(params.get("categories"), Some(&expected));

        let (sql, params) = render(&not_in("book.category", "categories", categories).unwrap());
        assert_eq!(sql, "book.category NOT IN :categories");
        assert_eq!(params.get("categories"), Some(&expected));
    }

    #[test]
    fn test_in_accepts_any_collection() {
        let (_, params) = render(&is_in("book.id", "ids", [3, 5]).unwrap());
        assert_eq!(
            params.get("ids"),
            Some(&Value::List(vec![Value::Int(3), Value::Int(5)]))
        );

        let ids: &[i64] = &[7];
        let (_, params) = render(&not_in("book.id", "ids", ids).unwrap());
        assert_eq!(params.get("ids"), Some(&Value::List(vec![Value::Int(7)])));

        let (_, params) = render(&is_in("book.lang", "langs", BTreeSet::from(["en", "es"])).unwrap());
        assert_eq!(params.get("langs"), Some(&Value::from(vec!["en", "es"])));

        let (_, params) =
            render(&is_in("book.lang", "langs", Some(vec!["en".to_string()])).unwrap());
        assert_eq!(params.get("langs"), Some(&Value::from(vec!["en"])));
    }

    #[test]
    fn test_in_with_absent_collection_is_noop() {
        assert_eq!(is_in("book.id", "ids", None::<Vec<i32>>).unwrap(), Filter::Noop);
        assert_eq!(not_in("book.id", "ids", HashSet::<i32>::new()).unwrap(), Filter::Noop);
        assert!(is_in(" ", "ids", None::<Vec<i32>>).is_err());
    }

    #[test]
    fn test_null_checks() {
        let (sql, params) = render(&is_null("book.author_id", true).unwrap());
        assert_eq!(sql, "book.author_id IS NULL ");
        assert!(params.is_empty());

        let (sql, params) = render(&is_not_null("book.author_id", true).unwrap());
        assert_eq!(sql, "book.author_id IS NOT NULL ");
        assert!(params.is_empty());

        assert!(!is_not_null("book.author_id", false).unwrap().can_apply());
    }

    #[test]
    fn test_between() {
        let filter = between("book.published", "start", "end", 1980, 2020).unwrap();
        let (sql, params) = render(&filter);

        assert_eq!(sql, "book.published BETWEEN :start AND :end");
        assert_eq!(params.get("start"), Some(&Value::Int(1980)));
        assert_eq!(params.get("end"), Some(&Value::Int(2020)));
    }

    #[test]
    fn test_not_between() {
        let filter = not_between("book.published", "start", "end", 1980, 2020).unwrap();
        let (sql, params) = render(&filter);

        assert_eq!(sql, "book.published NOT BETWEEN :start AND :end");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_between_with_one_absent_bound() {
        let filter = between("book.published", "start", "end", 1980, None::<i32>).unwrap();
        assert_eq!(filter, Filter::Noop);
    }

    #[test]
    fn test_literal() {
        let filter = literal("book.isbn = :isbn", "isbn", "978-3-16-148410-0").unwrap();
        let (sql, params) = render(&filter);

        assert_eq!(sql, "book.isbn = :isbn");
        assert_eq!(params.get("isbn"), Some(&string("978-3-16-148410-0")));
    }

    #[test]
    fn test_parameter() {
        let filter = parameter("isbn", "978-3-16-148410-0").unwrap();
        let (sql, params) = render(&filter);

        assert_eq!(sql, "");
        assert_eq!(params.get("isbn"), Some(&string("978-3-16-148410-0")));
    }

    #[test]
    fn test_empty_logical_is_noop() {
        assert_eq!(and(Vec::new()), Filter::Noop);
        assert_eq!(or(std::iter::empty()), Filter::Noop);
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let err = equal("  ", "isbn", "x").unwrap_err();
        assert!(matches!(err, FilterError::MissingName("column_name")));

        let err = like("book.title", "", "x").unwrap_err();
        assert!(matches!(err, FilterError::MissingName("param_name")));

        let err = between("book.published", "start", "\t", 1, 2).unwrap_err();
        assert!(matches!(err, FilterError::MissingName("right_param_name")));

        let err = literal(" ", "p", 1).unwrap_err();
        assert!(matches!(err, FilterError::MissingName("literal")));

        let err = is_null("", true).unwrap_err();
        assert!(matches!(err, FilterError::MissingName("column_name")));
    }

    #[test]
    fn test_name_check_precedes_absence_check() {
        assert!(equal("", "isbn", None::<String>).is_err());
        assert!(parameter(" ", "").is_err());
        assert!(between("c", "", "end", None::<i32>, None::<i32>).is_err());
        assert!(is_not_null(" ", false).is_err());
    }

    #[test]
    fn test_missing_name_message() {
        let err = parameter("", 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required name: param_name must not be null or empty"
        );
    }
}
