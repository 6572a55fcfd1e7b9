use std::io::Write;

use crate::errors::ClassroomResult;

/// A self-contained program that writes its results line by line
pub trait Demo {
    /// Name used to select the demo on the command line
    fn name(&self) -> &'static str;

    /// One-line summary shown by `classroom list`
    fn description(&self) -> &'static str;

    /// Run the demo top to bottom, writing every line to `out`
    fn run(&self, out: &mut dyn Write) -> ClassroomResult<()>;
}
