// Unit-cost edit distance (insertion, deletion, substitution).

/// Minimum of three values.
#[inline]
fn min3(a: usize, b: usize, c: usize) -> usize {
    a.min(b).min(c)
}

/// Compute the edit distance between `a` and `b`.
///
/// Operates on Unicode code points, not bytes: `"Schüßler"` and `"Schübler"`
/// are one substitution apart. Every insertion, deletion and substitution
/// costs 1.
///
/// Only two rows of the cost matrix are kept. The shorter input is used as
/// the row dimension, so memory is linear in the length of the shorter
/// string.
///
/// ```
/// use twine_core::edit_distance;
///
/// assert_eq!(edit_distance("library", "librar"), 1);
/// assert_eq!(edit_distance("", "cat"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // The distance is symmetric, so iterate over the longer input and keep
    // rows sized by the shorter one.
    let (outer, inner) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    // v0[j] is the distance between the first i chars of `outer`
    // and the first j chars of `inner`.
    let mut v0: Vec<usize> = (0..=inner.len()).collect();
    let mut v1: Vec<usize> = vec![0; inner.len() + 1];

    for (i, &oc) in outer.iter().enumerate() {
        v1[0] = i + 1;
        for (j, &ic) in inner.iter().enumerate() {
            let cost = if oc == ic { 0 } else { 1 };
            v1[j + 1] = min3(v1[j] + 1, v0[j + 1] + 1, v0[j] + cost);
        }
        std::mem::swap(&mut v0, &mut v1);
    }

    // After the final swap the last computed row lives in v0.
    v0[inner.len()]
}
