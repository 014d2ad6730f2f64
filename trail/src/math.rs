use num_traits::{Float, FromPrimitive};

/// Returns the arithmetic mean of `values`, or zero if there are none.
pub fn mean<T, I>(values: I) -> T
where
    T: Float + FromPrimitive,
    I: IntoIterator<Item = T>,
{
    let (sum, n) = values
        .into_iter()
        .fold((T::zero(), 0_usize), |(sum, n), value| (sum + value, n + 1));
    if n == 0 {
        T::zero()
    } else {
        T::from_usize(n).map_or_else(T::zero, |n| sum / n)
    }
}

/// Returns the largest of `values`, or zero if there are none.
pub fn max_or_zero<T, I>(values: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .reduce(T::max)
        .unwrap_or_else(T::zero)
}
