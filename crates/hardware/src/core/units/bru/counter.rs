//! Two-bit saturating counter.

/// Four-state saturating direction counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SaturatingCounter {
    /// Predict not taken, two steps from flipping.
    StronglyNotTaken,
    /// Predict not taken, one step from flipping.
    #[default]
    WeaklyNotTaken,
    /// Predict taken, one step from flipping.
    WeaklyTaken,
    /// Predict taken, two steps from flipping.
    StronglyTaken,
}

impl SaturatingCounter {
    /// True in the two taken states.
    #[inline]
    pub const fn predicts_taken(self) -> bool {
        matches!(self, Self::WeaklyTaken | Self::StronglyTaken)
    }

    /// Moves one step toward the resolved direction, saturating at the ends.
    #[inline]
    #[must_use]
    pub const fn train(self, taken: bool) -> Self {
        match (self, taken) {
            (Self::StronglyNotTaken | Self::WeaklyNotTaken, false) => Self::StronglyNotTaken,
            (Self::WeaklyTaken, false) => Self::WeaklyNotTaken,
            (Self::StronglyTaken, false) => Self::WeaklyTaken,
            (Self::StronglyNotTaken, true) => Self::WeaklyNotTaken,
            (Self::WeaklyNotTaken, true) => Self::WeaklyTaken,
            (Self::WeaklyTaken | Self::StronglyTaken, true) => Self::StronglyTaken,
        }
    }
}
