/// Advance `position` one step in row-major order inside the box
/// `[min, max)`.
///
/// The last axis moves fastest; when it reaches `max` it wraps to `min`
/// and carries into the axis before it. Returns `None` once the first axis
/// overflows, or straight away if `position` is not inside the box.
pub fn next_position(position: &[usize], min: &[usize], max: &[usize]) -> Option<Vec<usize>> {
    let n = position.len();
    if min.len() != n || max.len() != n {
        return None;
    }
    let inside = position
        .iter()
        .zip(min.iter().zip(max))
        .all(|(&p, (&lo, &hi))| lo <= p && p < hi);
    if !inside {
        return None;
    }

    let mut next = position.to_vec();
    for axis in (0..n).rev() {
        next[axis] += 1;
        if next[axis] < max[axis] {
            return Some(next);
        }
        next[axis] = min[axis];
    }
    None
}

/// Every position of the box `[min, max)`, in row-major order.
#[derive(Clone, Debug)]
pub struct Positions {
    min:  Vec<usize>,
    max:  Vec<usize>,
    next: Option<Vec<usize>>,
}

impl Positions {
    pub fn new(min: Vec<usize>, max: Vec<usize>) -> Self {
        let non_empty =
            min.len() == max.len() && min.iter().zip(&max).all(|(lo, hi)| lo < hi);
        let next = non_empty.then(|| min.clone());
        Self { min, max, next }
    }
}

impl Iterator for Positions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        self.next = next_position(&current, &self.min, &self.max);
        Some(current)
    }
}
