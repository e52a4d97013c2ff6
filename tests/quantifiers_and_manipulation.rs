use seq_query::query::{all, any, append, contains, filter, prepend};

fn digits() -> Vec<i32> {
    (1..=9).collect()
}

#[test]
fn golden_quantifiers_on_digits() {
    assert!(any(digits(), |x| *x > 2));
    assert!(!all(digits(), |x| *x > 2));
    assert!(contains(&digits(), &3));
    assert!(!contains(&digits(), &42));
}

#[test]
fn invariant_quantifiers_agree_with_filter() {
    let source = vec![4, 8, 15, 16, 23, 42];
    let predicates: [fn(&i32) -> bool; 4] = [
        |x| *x > 20,
        |x| x % 2 == 0,
        |x| *x > 100,
        |x| *x > 0,
    ];

    for p in predicates {
        assert_eq!(any(source.clone(), p), !filter(source.clone(), p).is_empty());
        assert_eq!(all(source.clone(), p), filter(source.clone(), |x| !p(x)).is_empty());
    }
}

#[test]
fn all_on_empty_is_vacuously_true() {
    assert!(all(Vec::<i32>::new(), |_| false));
    assert!(!any(Vec::<i32>::new(), |_| true));
}

#[test]
fn invariant_append_prepend_leave_source_untouched() {
    let source = digits();
    let snapshot = source.clone();

    let appended = append(&source, 2);
    let prepended = prepend(&source, 3);

    assert_eq!(source, snapshot);
    assert_eq!(appended.len(), source.len() + 1);
    assert_eq!(prepended.len(), source.len() + 1);
    assert_eq!(appended.last(), Some(&2));
    assert_eq!(prepended.first(), Some(&3));
    assert_eq!(&appended[..source.len()], source.as_slice());
    assert_eq!(&prepended[1..], source.as_slice());
}
