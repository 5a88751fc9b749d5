use carve_core::ExtentError;

/// Outcome of one [`Operation::resume`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// More work remains; resume again.
    Incomplete,
    /// The operation has run to completion.
    Complete,
}

/// A resumable unit of deferred work handed back by [`crate::Extent::commit`].
///
/// Each `resume` call performs one bounded slice of work and reports whether
/// more remains. The caller owns the work loop: drive the operation from a
/// scheduler tick, a frame callback, or just [`complete`]. Cancelling means
/// not resuming again; what a half-driven operation leaves behind is
/// documented per extent.
pub trait Operation {
    fn resume(&mut self) -> Result<Progress, ExtentError>;
}

/// Drive `op` until it completes.
pub fn complete(op: &mut dyn Operation) -> Result<(), ExtentError> {
    while op.resume()? == Progress::Incomplete {}
    Ok(())
}

/// Drive `op` for at most `max_steps` resume calls.
///
/// Returns the last observed progress so a work loop can requeue the
/// operation when its per-tick budget runs out.
pub fn resume_budgeted(op: &mut dyn Operation, max_steps: usize) -> Result<Progress, ExtentError> {
    for _ in 0..max_steps {
        if op.resume()? == Progress::Complete {
            return Ok(Progress::Complete);
        }
    }
    Ok(Progress::Incomplete)
}
