//! Flat tracer matrix for the multi-group cast.
//!
//! # Memory Layout
//!
//! The `G × T` tracer block is a single row-major buffer with stride `T`:
//! group `i` occupies `values[i * T .. (i + 1) * T]`. The baseline snapshot
//! uses the same layout, so a prune walks two equal-length rows side by side.

/// Row-major `G × T` block of tracer values.
///
/// # Examples
///
/// ```rust
/// use buoy_core::cast::TracerMatrix;
///
/// let matrix = TracerMatrix::new(3, 5, 100);
/// assert_eq!(matrix.group(2), &[0, 25, 50, 75, 100]);
/// assert_eq!(matrix.len(), 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracerMatrix {
    /// Tracer values (num_groups × num_tracers).
    values: Vec<u32>,
    /// Number of groups (rows).
    num_groups: usize,
    /// Tracers per group (stride).
    num_tracers: usize,
}

impl TracerMatrix {
    /// Creates the matrix with every group on the same initial partition:
    /// `M[i][j] = j * (range / (T - 1))`.
    pub fn new(num_groups: usize, num_tracers: usize, range: u32) -> Self {
        let mut row = vec![0u32; num_tracers];
        crate::group::partition(&mut row, 0, range);

        let mut values = Vec::with_capacity(num_groups * num_tracers);
        for _ in 0..num_groups {
            values.extend_from_slice(&row);
        }

        Self {
            values,
            num_groups,
            num_tracers,
        }
    }

    /// Wraps an existing buffer.
    ///
    /// Returns `None` unless `values.len() == num_groups * num_tracers`.
    pub fn from_values(values: Vec<u32>, num_groups: usize, num_tracers: usize) -> Option<Self> {
        if num_tracers == 0 || values.len() != num_groups * num_tracers {
            return None;
        }
        Some(Self {
            values,
            num_groups,
            num_tracers,
        })
    }

    /// Number of groups.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    /// Tracers per group.
    #[inline]
    pub fn num_tracers(&self) -> usize {
        self.num_tracers
    }

    /// Total number of tracers.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the matrix holds no tracers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Tracers of group `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_groups`.
    #[inline]
    pub fn group(&self, index: usize) -> &[u32] {
        let start = index * self.num_tracers;
        &self.values[start..start + self.num_tracers]
    }

    /// Mutable tracers of group `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_groups`.
    #[inline]
    pub fn group_mut(&mut self, index: usize) -> &mut [u32] {
        let start = index * self.num_tracers;
        &mut self.values[start..start + self.num_tracers]
    }

    /// Iterates over the groups in order.
    #[inline]
    pub fn groups(&self) -> std::slice::ChunksExact<'_, u32> {
        self.values.chunks_exact(self.num_tracers)
    }

    /// Mutably iterates over the groups in order.
    #[inline]
    pub fn groups_mut(&mut self) -> std::slice::ChunksExactMut<'_, u32> {
        self.values.chunks_exact_mut(self.num_tracers)
    }

    /// The whole buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }

    /// Overwrites this matrix with `other`, which must have the same shape.
    #[inline]
    pub fn copy_from(&mut self, other: &TracerMatrix) {
        debug_assert_eq!(self.num_groups, other.num_groups);
        debug_assert_eq!(self.num_tracers, other.num_tracers);
        self.values.copy_from_slice(&other.values);
    }

    /// Middle tracer `M[i][T / 2]` of every group.
    pub fn middles(&self) -> impl Iterator<Item = u32> + '_ {
        let mid = self.num_tracers / 2;
        self.groups().map(move |g| g[mid])
    }
}
