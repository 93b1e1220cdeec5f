use crate::Pipeline;

/// A sequence is the root of a parsed program. Pipelines are executed one
/// after another in the order that they appear.
///
/// An empty sequence is valid and represents a program that does nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Pipelines in execution order.
    pub pipelines: Vec<Pipeline>,
}

impl Sequence {
    /// Constructs a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pipeline to the end of the sequence.
    pub fn pipeline(&mut self, pipeline: Pipeline) {
        self.pipelines.push(pipeline);
    }

    /// Returns `true` if the sequence contains no pipelines.
    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Releases all pipelines in the sequence, leaving it empty.
    ///
    /// Clearing an empty sequence is a no-op.
    pub fn clear(&mut self) {
        self.pipelines.clear();
    }
}
