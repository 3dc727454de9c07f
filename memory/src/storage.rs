use std::ops::{Deref, DerefMut};

/// Backing buffer of a raster: either owned outright, or an alias into
/// storage the caller keeps owning for `'a`.
#[derive(Debug)]
pub enum Storage<'a, T> {
    Owned(Vec<T>),
    Borrowed(&'a mut [T]),
}

impl<'a, T: Copy> Storage<'a, T> {
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Storage::Borrowed(_))
    }

    /// Take the elements out as an owned vector, copying only if borrowed.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Storage::Owned(v) => v,
            Storage::Borrowed(s) => s.to_vec(),
        }
    }
}

impl<T> Deref for Storage<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Storage::Owned(v) => v,
            Storage::Borrowed(s) => s,
        }
    }
}

impl<T> DerefMut for Storage<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        match self {
            Storage::Owned(v) => v,
            Storage::Borrowed(s) => s,
        }
    }
}

impl<T> From<Vec<T>> for Storage<'static, T> {
    fn from(v: Vec<T>) -> Self {
        Storage::Owned(v)
    }
}

impl<'a, T> From<&'a mut [T]> for Storage<'a, T> {
    fn from(s: &'a mut [T]) -> Self {
        Storage::Borrowed(s)
    }
}
