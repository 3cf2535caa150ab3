#![forbid(unsafe_code)]

//! Mount window: which panels carry real content.
//!
//! Panels outside the window are replaced by a placeholder of identical
//! dimensions, so layout and stacking are preserved while the content
//! itself stays cheap. Section 0 is never unmounted; it must be ready the
//! instant the page appears.
//!
//! The window is re-evaluated only when a transition commits, never
//! mid-animation, so a panel that is still partially visible keeps its
//! content until it is fully parked.

/// Decides mount status for each section from the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountWindow {
    radius: usize,
}

impl MountWindow {
    /// Create a window keeping `radius` sections mounted on either side of
    /// the active one.
    #[must_use]
    pub const fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// The configured radius.
    #[inline]
    #[must_use]
    pub const fn radius(&self) -> usize {
        self.radius
    }

    /// Whether section `index` is mounted when `active` is the active
    /// index. Section 0 is always mounted.
    #[must_use]
    pub fn is_mounted(&self, index: usize, active: usize) -> bool {
        index == 0 || index.abs_diff(active) <= self.radius
    }

    /// Compute the full mount set for `len` sections.
    #[must_use]
    pub fn compute(&self, active: usize, len: usize) -> Vec<bool> {
        (0..len).map(|i| self.is_mounted(i, active)).collect()
    }

    /// Recompute the mount set in place (no reallocation on commit).
    pub fn recompute(&self, active: usize, mounted: &mut [bool]) {
        for (i, slot) in mounted.iter_mut().enumerate() {
            *slot = self.is_mounted(i, active);
        }
    }
}
