#[cfg(test)]
mod tests {
    use super::super::{ captured, setup };
    use crate::config::ClassroomConfig;
    use crate::errors::ClassroomError;
    use crate::implementations::catalog::DemoCatalog;
    use crate::implementations::person_demo::PersonDemo;
    use crate::implementations::report::{ DemoReport, RunReport };
    use crate::implementations::shape_demo::ShapeDemo;
    use crate::implementations::square_demo::SquareDemo;
    use crate::models::GRADE_RANGE;
    use crate::traits::Demo;

    fn run(demo: &dyn Demo) -> String {
        let mut out: Vec<u8> = Vec::new();
        demo.run(&mut out).unwrap();
        captured(out)
    }

    #[test]
    fn test_shape_demo_output() {
        setup();
        assert_eq!(run(&ShapeDemo), "Perimeter of square is 20\nPerimeter of triangle is 9\n");
    }

    #[test]
    fn test_person_demo_output() {
        setup();
        let text = run(&PersonDemo::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Hi! I'm Alice");
        assert_eq!(lines[1], "My name is Walsh, and I will be your Biology professor.");
        let grade: u32 = lines[2].parse().unwrap();
        assert!(GRADE_RANGE.contains(&grade));
    }

    #[test]
    fn test_person_demo_with_seed_is_stable() {
        let demo = PersonDemo::with_seed(Some(2024));
        assert_eq!(run(&demo), run(&demo));
    }

    #[test]
    fn test_square_demo_output() {
        assert_eq!(run(&SquareDemo::default()), "Perimeter of square is 20\nArea of square is 25\n");
    }

    #[test]
    fn test_catalog_excludes_square_by_default() {
        let catalog = DemoCatalog::from_config(&ClassroomConfig::default());
        assert_eq!(catalog.names(), vec!["shapes", "people"]);

        match catalog.find("square") {
            Err(ClassroomError::FeatureDisabled(name)) => assert_eq!(name, "square"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("square demo must be disabled by default"),
        }
    }

    #[test]
    fn test_catalog_with_square_enabled() {
        let config = ClassroomConfig {
            enable_square: true,
            ..ClassroomConfig::default()
        };
        let catalog = DemoCatalog::from_config(&config);
        assert_eq!(catalog.names(), vec!["shapes", "people", "square"]);
        assert_eq!(catalog.find("Square").unwrap().name(), "square");
    }

    #[test]
    fn test_catalog_unknown_demo() {
        let catalog = DemoCatalog::from_config(&ClassroomConfig::default());
        assert!(matches!(catalog.find("circle"), Err(ClassroomError::UnknownDemo(_))));
    }

    #[test]
    fn test_report_capture_and_json() {
        let report = RunReport {
            demos: vec![DemoReport::capture(&ShapeDemo).unwrap()],
        };
        assert_eq!(report.demos[0].name, "shapes");
        assert_eq!(report.demos[0].lines, vec![
            "Perimeter of square is 20".to_string(),
            "Perimeter of triangle is 9".to_string()
        ]);

        let json = report.to_json().unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
