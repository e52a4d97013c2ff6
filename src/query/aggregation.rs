use super::QueryError;

pub fn count<I: IntoIterator>(items: I) -> usize {
    items.into_iter().count()
}

pub fn count_where<I, P>(items: I, mut predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).count()
}

/// Report the length of `iter` only if it is known without advancing it.
///
/// Relies on the iterator's size hint: an exact hint (lower bound equal to
/// the upper bound) yields `Some`, anything else yields `None`. Iterators over
/// in-memory collections always know their length; filtered ones do not.
pub fn try_count_without_enumerating<I: Iterator>(iter: &I) -> Option<usize> {
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(lower),
        _ => None,
    }
}

/// The greatest element. Among equal maxima the first one wins.
pub fn max<I>(items: I) -> Result<I::Item, QueryError>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut iter = items.into_iter();
    let mut best = iter.next().ok_or(QueryError::EmptySequence { operation: "max" })?;
    for item in iter {
        if item > best {
            best = item;
        }
    }
    Ok(best)
}

/// The element whose `key` is greatest. Among equal keys the first one wins.
pub fn max_by<I, K, F>(items: I, mut key: F) -> Result<I::Item, QueryError>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut best: Option<(K, I::Item)> = None;
    for item in items {
        let k = key(&item);
        // Strictly greater only, so earlier elements keep ties.
        let replace = match &best {
            Some((best_key, _)) => k > *best_key,
            None => true,
        };
        if replace {
            best = Some((k, item));
        }
    }

    best.map(|(_, item)| item)
        .ok_or(QueryError::EmptySequence { operation: "max_by" })
}
