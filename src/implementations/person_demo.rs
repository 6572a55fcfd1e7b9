use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

use crate::errors::ClassroomResult;
use crate::models::{ Person, Professor };
use crate::traits::{ Demo, Introducer };

/// A person and a professor introduce themselves, then the professor grades
/// a paper
#[derive(Debug, Clone, Default)]
pub struct PersonDemo {
    /// Fixed seed for the grade, thread-local randomness when `None`
    pub grade_seed: Option<u64>,
}

impl PersonDemo {
    pub fn with_seed(grade_seed: Option<u64>) -> Self {
        Self { grade_seed }
    }

    pub fn professor() -> Professor {
        Professor::new("Walsh", "Biology")
    }

    pub fn cast() -> Vec<Box<dyn Introducer>> {
        vec![Box::new(Person::new("Alice")), Box::new(Self::professor())]
    }
}

impl Demo for PersonDemo {
    fn name(&self) -> &'static str {
        "people"
    }

    fn description(&self) -> &'static str {
        "A person and a professor introduce themselves; the professor grades a paper"
    }

    fn run(&self, out: &mut dyn Write) -> ClassroomResult<()> {
        let cast = Self::cast();
        info!("Running person demo with {} introducers", cast.len());
        for member in &cast {
            member.introduce_self(out)?;
        }

        let professor = Self::professor();
        let paper = "Essay on cell division";
        match self.grade_seed {
            Some(seed) => {
                info!("Grading with fixed seed {}", seed);
                let mut rng = StdRng::seed_from_u64(seed);
                professor.grade_with(paper, &mut rng, out)?;
            }
            None => professor.grade(paper, out)?,
        }
        Ok(())
    }
}
