use log::debug;
use rand::Rng;
use std::io::Write;
use std::ops::Range;

use crate::errors::ClassroomResult;
use crate::traits::Introducer;

/// Grades a professor can hand out, lower bound inclusive
pub const GRADE_RANGE: Range<u32> = 1..5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Introducer for Person {
    fn name(&self) -> &str {
        &self.name
    }

    fn introduce_self(&self, out: &mut dyn Write) -> ClassroomResult<()> {
        writeln!(out, "Hi! I'm {}", self.name)?;
        Ok(())
    }
}

/// A `Person` who teaches a subject and grades papers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    person: Person,
    teaches: String,
}

impl Professor {
    pub fn new(name: impl Into<String>, teaches: impl Into<String>) -> Self {
        let person = Person::new(name);
        Self {
            person,
            teaches: teaches.into(),
        }
    }

    pub fn teaches(&self) -> &str {
        &self.teaches
    }

    /// Grade `paper` with the thread-local generator
    pub fn grade<P: ?Sized, W: Write + ?Sized>(
        &self,
        paper: &P,
        out: &mut W
    ) -> ClassroomResult<()> {
        self.grade_with(paper, &mut rand::thread_rng(), out)
    }

    /// Grade `paper` with the given generator and write the grade alone on
    /// one line. The paper is never read.
    pub fn grade_with<P: ?Sized, R: Rng + ?Sized, W: Write + ?Sized>(
        &self,
        _paper: &P,
        rng: &mut R,
        out: &mut W
    ) -> ClassroomResult<()> {
        let grade = rng.gen_range(GRADE_RANGE);
        debug!("{} graded a paper: {}", self.person.name, grade);
        writeln!(out, "{}", grade)?;
        Ok(())
    }
}

impl Introducer for Professor {
    fn name(&self) -> &str {
        self.person.name()
    }

    // Replaces the Person greeting entirely
    fn introduce_self(&self, out: &mut dyn Write) -> ClassroomResult<()> {
        writeln!(
            out,
            "My name is {}, and I will be your {} professor.",
            self.name(),
            self.teaches
        )?;
        Ok(())
    }
}
