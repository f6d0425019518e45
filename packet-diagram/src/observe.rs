use crate::layout::PlacedField;

/// Hook called by the layout pass after each field is placed.
pub trait LayoutObserver {
    fn field_placed(&mut self, index: usize, placed: &PlacedField<'_>) {
        let _ = (index, placed);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LayoutObserver for NoopObserver {}

/// Observer that reports placements as `tracing` debug events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LayoutObserver for TracingObserver {
    fn field_placed(&mut self, index: usize, placed: &PlacedField<'_>) {
        tracing::debug!(
            index,
            label = %placed.field.label,
            column = placed.start.column,
            row = placed.start.row,
            distribution = ?placed.distribution.as_slice(),
            shape = ?placed.kind,
            "placed field"
        );
    }
}
