/// Outcome of running an escape-time recurrence for one point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IterationResult {
    /// Magnitude exceeded the escape radius after this many steps.
    Escaped(u32),
    /// The point stayed bounded for the whole iteration budget.
    Bounded,
}
