use log::debug;

use crate::config::ClassroomConfig;
use crate::errors::{ ClassroomError, ClassroomResult };
use crate::implementations::person_demo::PersonDemo;
use crate::implementations::shape_demo::ShapeDemo;
use crate::implementations::square_demo::SquareDemo;
use crate::traits::Demo;

/// Name of the opt-in square demo
pub const SQUARE_DEMO: &str = "square";

/// The demos available for a given configuration, in run order
pub struct DemoCatalog {
    demos: Vec<Box<dyn Demo>>,
    square_enabled: bool,
}

impl DemoCatalog {
    pub fn from_config(config: &ClassroomConfig) -> Self {
        let mut demos: Vec<Box<dyn Demo>> = vec![
            Box::new(ShapeDemo),
            Box::new(PersonDemo::with_seed(config.grade_seed))
        ];
        if config.enable_square {
            debug!("Square demo enabled");
            demos.push(Box::new(SquareDemo::default()));
        }
        Self {
            demos,
            square_enabled: config.enable_square,
        }
    }

    pub fn demos(&self) -> &[Box<dyn Demo>] {
        &self.demos
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.demos
            .iter()
            .map(|demo| demo.name())
            .collect()
    }

    /// Look up a demo by name, case-insensitively
    pub fn find(&self, name: &str) -> ClassroomResult<&dyn Demo> {
        let wanted = name.trim().to_lowercase();
        if let Some(demo) = self.demos.iter().find(|demo| demo.name() == wanted) {
            return Ok(demo.as_ref());
        }
        if wanted == SQUARE_DEMO && !self.square_enabled {
            return Err(ClassroomError::FeatureDisabled(SQUARE_DEMO.to_string()));
        }
        Err(ClassroomError::UnknownDemo(name.to_string()))
    }
}
