/// Ordered iteration records plus at most one trailing halt reason.
///
/// A trace is the complete output of a solve call. Its shape enforces the
/// result-sequence invariants: records appear in iteration order, a halt
/// reason (if any) comes last and appears exactly once, and a parse failure
/// yields a trace with zero records and only a halt. A trace that ends
/// without a halt simply exhausted its iteration bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<R, H> {
    records: Vec<R>,
    halt: Option<H>,
}

impl<R, H> Trace<R, H> {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            halt: None,
        }
    }

    /// A trace that halted before producing any records.
    pub(crate) fn halted(reason: H) -> Self {
        Self {
            records: Vec::new(),
            halt: Some(reason),
        }
    }

    pub(crate) fn push(&mut self, record: R) {
        debug_assert!(self.halt.is_none(), "records must precede the halt");
        self.records.push(record);
    }

    pub(crate) fn halt_with(&mut self, reason: H) {
        debug_assert!(self.halt.is_none(), "a trace halts at most once");
        self.halt = Some(reason);
    }

    /// Returns the iteration records in order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the halt reason, if the solve stopped early.
    #[must_use]
    pub fn halt(&self) -> Option<&H> {
        self.halt.as_ref()
    }

    /// True if the solve stopped before exhausting its iteration bound.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halt.is_some()
    }

    /// Total number of entries: records plus the halt, if present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len() + usize::from(self.halt.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the trace as a uniform sequence of tagged entries,
    /// records first, then the halt if present.
    pub fn entries(&self) -> Entries<'_, R, H> {
        Entries {
            records: self.records.iter(),
            halt: self.halt.as_ref(),
        }
    }
}

/// One element of a trace viewed as a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a, R, H> {
    /// A completed iteration.
    Record(&'a R),
    /// The reason the solve stopped early; always the final entry.
    Halt(&'a H),
}

/// Iterator returned by [`Trace::entries`].
#[derive(Debug, Clone)]
pub struct Entries<'a, R, H> {
    records: std::slice::Iter<'a, R>,
    halt: Option<&'a H>,
}

impl<'a, R, H> Iterator for Entries<'a, R, H> {
    type Item = Entry<'a, R, H>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(Entry::Record)
            .or_else(|| self.halt.take().map(Entry::Halt))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.records.len() + usize::from(self.halt.is_some());
        (len, Some(len))
    }
}

impl<R, H> ExactSizeIterator for Entries<'_, R, H> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_yield_records_then_halt() {
        let mut trace: Trace<u32, &str> = Trace::new();
        trace.push(1);
        trace.push(2);
        trace.halt_with("stop");

        let entries: Vec<_> = trace.entries().collect();
        assert_eq!(
            entries,
            vec![Entry::Record(&1), Entry::Record(&2), Entry::Halt(&"stop")]
        );
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn exhausted_trace_has_no_halt() {
        let mut trace: Trace<u32, &str> = Trace::new();
        trace.push(1);

        assert!(!trace.is_halted());
        assert_eq!(trace.halt(), None);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn halted_trace_can_be_empty_of_records() {
        let trace: Trace<u32, &str> = Trace::halted("bad input");

        assert!(trace.records().is_empty());
        assert_eq!(trace.len(), 1);
        assert!(!trace.is_empty());
    }
}
