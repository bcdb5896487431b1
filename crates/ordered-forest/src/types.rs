//! Shared type contracts.

/// Comparator used by the tree and set structures.
///
/// Returns a negative value when `a` orders before `b`, zero when the two are
/// equal, and a positive value otherwise. The function must be a total order
/// and must answer consistently for the whole life of the structure it is
/// given to; a comparator whose answers change the relative order of live
/// keys mid-use leaves the structure undefined.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;
