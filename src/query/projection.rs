use super::QueryError;

pub fn select<I, F, U>(items: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    items.into_iter().map(f).collect()
}

/// Like [`select`], with the zero-based position passed alongside each element.
pub fn select_indexed<I, F, U>(items: I, mut f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> U,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| f(item, index))
        .collect()
}

/// Map each outer element to an inner sequence and concatenate them in outer order.
pub fn select_many<I, F, J>(outer: I, f: F) -> Vec<J::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> J,
    J: IntoIterator,
{
    outer.into_iter().flat_map(f).collect()
}

/// Convert every element through a lossless `From` conversion.
pub fn cast<U, I>(items: I) -> Vec<U>
where
    I: IntoIterator,
    U: From<I::Item>,
{
    items.into_iter().map(U::from).collect()
}

/// Split into consecutive groups of `size`; the final group may be shorter.
pub fn chunk<I>(items: I, size: usize) -> Result<Vec<Vec<I::Item>>, QueryError>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(QueryError::InvalidChunkSize(size));
    }

    let mut chunks = Vec::new();
    let mut current = Vec::with_capacity(size);
    for item in items {
        current.push(item);
        if current.len() == size {
            chunks.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    Ok(chunks)
}
