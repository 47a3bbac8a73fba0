//! Evaluation configuration.

/// How [`DiscretizedPath::evaluate`](crate::DiscretizedPath::evaluate)
/// validates its target arc-length before interpolating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DomainCheck {
    /// The target must lie within `[start.s, end.s]`.
    #[default]
    Contained,
    /// The target must satisfy `start.s <= s && end.s <= s`.
    ///
    /// For an increasing path only targets at or past the last point
    /// pass, so interior evaluation is rejected. Kept for callers that
    /// depend on that behaviour. Targets strictly past the last point have
    /// no bracketing pair and are still reported as out of domain.
    Legacy,
}

impl DomainCheck {
    /// Whether `s` passes this check on a path spanning `[start, end]`.
    ///
    /// NaN never passes.
    pub fn admits(self, s: f64, start: f64, end: f64) -> bool {
        match self {
            Self::Contained => start <= s && s <= end,
            Self::Legacy => start <= s && end <= s,
        }
    }
}

/// Query behaviour attached to a [`DiscretizedPath`](crate::DiscretizedPath).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Domain check for exact evaluation. Default: [`DomainCheck::Contained`].
    pub domain: DomainCheck,
}

impl EvalConfig {
    /// Config reproducing the legacy exact-evaluation precondition.
    pub const fn legacy() -> Self {
        Self {
            domain: DomainCheck::Legacy,
        }
    }
}
