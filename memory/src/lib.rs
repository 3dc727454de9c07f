mod storage;

use bytemuck::allocation::{pod_collect_to_vec, zeroed_vec};
use core_types::Element;
use tracing::trace;

pub use storage::Storage;

/// Allocate a zero-filled buffer of `len` elements.
pub fn allocate_zeroed<T: Element>(len: usize) -> Vec<T> {
    trace!(len, dtype = %T::DTYPE, "allocating zeroed buffer");
    zeroed_vec(len)
}

/// Duplicate `src` byte for byte into a new buffer.
pub fn duplicate<T: Element>(src: &[T]) -> Vec<T> {
    pod_collect_to_vec(src)
}

/// Copy `src` into a new buffer of `T`, saturating every element into
/// `T`'s range. Same-dtype input is duplicated verbatim.
pub fn convert<S: Element, T: Element>(src: &[S]) -> Vec<T> {
    if S::DTYPE == T::DTYPE {
        return pod_collect_to_vec(src);
    }
    trace!(len = src.len(), from = %S::DTYPE, to = %T::DTYPE, "copy-converting buffer");
    src.iter().map(|&v| T::saturating_from(v)).collect()
}
