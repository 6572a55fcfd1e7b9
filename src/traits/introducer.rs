use std::io::Write;

use crate::errors::ClassroomResult;

/// Anything that can greet an audience.
///
/// Callers holding a `&dyn Introducer` get the greeting of the concrete type.
pub trait Introducer {
    /// Name used in the greeting
    fn name(&self) -> &str;

    /// Write a one-line greeting to `out`
    fn introduce_self(&self, out: &mut dyn Write) -> ClassroomResult<()>;
}
