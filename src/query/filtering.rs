use crate::types::dynamic::{Dynamic, Narrow};

pub fn filter<I, P>(items: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}

/// Keep only the elements whose runtime variant is `T`, in their original order.
pub fn of_type<'a, T, I>(items: I) -> Vec<T>
where
    T: Narrow + Clone + 'a,
    I: IntoIterator<Item = &'a Dynamic>,
{
    items
        .into_iter()
        .filter_map(|value| T::narrow(value).cloned())
        .collect()
}
