// Counts larger than the sequence saturate: skipping too many yields an empty
// result, taking too many yields everything. None of these fail.

pub fn skip<I: IntoIterator>(items: I, n: usize) -> Vec<I::Item> {
    items.into_iter().skip(n).collect()
}

pub fn take<I: IntoIterator>(items: I, n: usize) -> Vec<I::Item> {
    items.into_iter().take(n).collect()
}

/// Drop the last `n` elements.
pub fn skip_last<I: IntoIterator>(items: I, n: usize) -> Vec<I::Item> {
    let mut all: Vec<I::Item> = items.into_iter().collect();
    let keep = all.len().saturating_sub(n);
    all.truncate(keep);
    all
}

/// Keep only the last `n` elements.
pub fn take_last<I: IntoIterator>(items: I, n: usize) -> Vec<I::Item> {
    let mut all: Vec<I::Item> = items.into_iter().collect();
    let start = all.len().saturating_sub(n);
    all.split_off(start)
}

/// Drop the leading run of elements satisfying `predicate`.
///
/// The predicate is not consulted again once it has returned `false`.
pub fn skip_while<I, P>(items: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().skip_while(|item| predicate(item)).collect()
}

/// Keep the leading run of elements satisfying `predicate`.
pub fn take_while<I, P>(items: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().take_while(|item| predicate(item)).collect()
}
