// Both operations copy: the source slice is left exactly as it was.

pub fn append<T: Clone>(items: &[T], value: T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(items);
    out.push(value);
    out
}

pub fn prepend<T: Clone>(items: &[T], value: T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.push(value);
    out.extend_from_slice(items);
    out
}
