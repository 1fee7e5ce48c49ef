/// Joins filters with `AND`: `and!(a, b, c)`. `and!()` gives a filter that
/// never applies.
#[macro_export]
macro_rules! and {
    () => {
        $crate::factory::and(::std::vec::Vec::<$crate::filter::Filter>::new())
    };
    ($($filter:expr),+ $(,)?) => {
        $crate::factory::and([$($filter),+])
    };
}

/// Joins filters with `OR`: `or!(a, b, c)`.
#[macro_export]
macro_rules! or {
    () => {
        $crate::factory::or(::std::vec::Vec::<$crate::filter::Filter>::new())
    };
    ($($filter:expr),+ $(,)?) => {
        $crate::factory::or([$($filter),+])
    };
}
