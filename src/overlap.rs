//! Suffix/prefix overlap between two token sequences.

/// Length of the shortest run of tokens that ends `a` and starts `b`.
///
/// Candidate lengths are tried from 1 upwards and the first match wins, so the
/// result is the least aggressive elision available. Returns 0 when no
/// positive length matches.
pub fn find_overlap<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    for len in 1..=b.len() {
        let Some(start) = a.len().checked_sub(len) else {
            break;
        };
        if a.get(start..) == b.get(..len) {
            return len;
        }
    }
    return 0;
}
