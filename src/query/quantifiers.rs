pub fn any<I, P>(items: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().any(|item| predicate(&item))
}

/// True when every element satisfies `predicate`; vacuously true on empty input.
pub fn all<I, P>(items: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().all(|item| predicate(&item))
}

pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.iter().any(|item| item == value)
}
