//! Hit points and action points.

/// Hit point meter. `current` never exceeds `max`.
///
/// Deserialization goes through [`HitPoints::new`], so an out-of-range
/// `current` is clamped on load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawHitPoints"))]
pub struct HitPoints {
    pub current: u32,
    pub max: u32,
}

impl HitPoints {
    /// Creates a meter at full health.
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Creates a meter, clamping `current` into `[0, max]`.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Returns true once the meter has reached zero.
    #[inline]
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Same meter with `current` pulled back into `[0, max]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(self.current, self.max)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHitPoints {
    current: u32,
    max: u32,
}

#[cfg(feature = "serde")]
impl From<RawHitPoints> for HitPoints {
    fn from(raw: RawHitPoints) -> Self {
        Self::new(raw.current, raw.max)
    }
}

/// Per-round spendable resource.
///
/// Spending never fails: overdrafts floor the pool at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionPoints {
    pub current: u32,
}

impl ActionPoints {
    pub const fn new(current: u32) -> Self {
        Self { current }
    }

    /// Spends up to `amount` points.
    pub fn spend(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Restores the pool to the given allotment.
    pub fn reset(&mut self, allotment: u32) {
        self.current = allotment;
    }
}
