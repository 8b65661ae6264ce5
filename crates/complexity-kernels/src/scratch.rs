use crate::error::{KernelError, Result};

/// Reusable byte buffers for one batch worker.
///
/// The naive kernels need two derived buffers per row: the reversal of a
/// sequence (for the symmetric variants) and the concatenation of two
/// sequences (for the conditional variants). A batch driver processing
/// thousands of rows would otherwise allocate both fresh on every row;
/// instead each worker keeps one `WorkerScratch` and calls
/// [`Self::reverse_of`] / [`Self::concat_of`] per row, which only grow the
/// backing `Vec`s, never shrink them.
pub struct WorkerScratch {
    reverse_buf: Vec<u8>,
    concat_buf: Vec<u8>,
}

impl Default for WorkerScratch {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerScratch {
    pub fn new() -> Self {
        Self {
            reverse_buf: Vec::new(),
            concat_buf: Vec::new(),
        }
    }

    /// Clears and refills the reverse buffer with `seq` reversed, returning
    /// a borrow of it. Capacity is never released between calls.
    pub fn reverse_of(&mut self, seq: &[u8]) -> Result<&[u8]> {
        self.reverse_buf.clear();
        let additional = seq.len().saturating_sub(self.reverse_buf.capacity());
        self.reverse_buf.try_reserve(additional).map_err(|e| {
            KernelError::resource_exhausted(format!(
                "failed to grow reverse scratch buffer to {} bytes: {e}",
                seq.len()
            ))
        })?;
        self.reverse_buf.extend(seq.iter().rev().copied());
        Ok(&self.reverse_buf)
    }

    /// Clears and refills the concat buffer with `x` followed by `y`.
    pub fn concat_of(&mut self, x: &[u8], y: &[u8]) -> Result<&[u8]> {
        self.concat_buf.clear();
        let needed = x.len() + y.len();
        let additional = needed.saturating_sub(self.concat_buf.capacity());
        self.concat_buf.try_reserve(additional).map_err(|e| {
            KernelError::resource_exhausted(format!(
                "failed to grow concat scratch buffer to {needed} bytes: {e}"
            ))
        })?;
        self.concat_buf.extend_from_slice(x);
        self.concat_buf.extend_from_slice(y);
        Ok(&self.concat_buf)
    }

    /// Drops buffered content while keeping the allocated capacity, ready
    /// for the next row.
    pub fn reset(&mut self) {
        self.reverse_buf.clear();
        self.concat_buf.clear();
    }
}
