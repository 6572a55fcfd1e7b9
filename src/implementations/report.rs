use serde::{ Deserialize, Serialize };

use crate::errors::{ ClassroomError, ClassroomResult };
use crate::traits::Demo;

/// Captured output of one demo run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoReport {
    pub name: String,
    pub lines: Vec<String>,
}

/// Output of every demo in a single invocation, as emitted in JSON mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RunReport {
    pub demos: Vec<DemoReport>,
}

impl DemoReport {
    /// Run `demo` against an in-memory buffer and split what it wrote into lines
    pub fn capture(demo: &dyn Demo) -> ClassroomResult<Self> {
        let mut buffer: Vec<u8> = Vec::new();
        demo.run(&mut buffer)?;
        let text = String::from_utf8(buffer).map_err(|e|
            ClassroomError::InvalidInput(format!("demo {} wrote non UTF-8 output: {}", demo.name(), e))
        )?;
        Ok(Self {
            name: demo.name().to_string(),
            lines: text.lines().map(str::to_string).collect(),
        })
    }
}

impl RunReport {
    pub fn to_json(&self) -> ClassroomResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
