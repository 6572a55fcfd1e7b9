#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::{ Path, PathBuf };

    use crate::config::{
        ClassroomConfig,
        ConfigError,
        ConfigSource,
        CONFIG_PATH_ENV,
        ENABLE_SQUARE_ENV,
        GRADE_SEED_ENV,
    };

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_keep_square_disabled() {
        let config = ClassroomConfig::default();
        assert!(!config.enable_square);
        assert_eq!(config.grade_seed, None);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_from_yaml() {
        let config = ClassroomConfig::from_yaml(
            "enable_square: true\ngrade_seed: 17\nlog_level: debug\n"
        ).unwrap();
        assert!(config.enable_square);
        assert_eq!(config.grade_seed, Some(17));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_partial_and_empty_yaml_use_defaults() {
        let partial = ClassroomConfig::from_yaml("grade_seed: 3\n").unwrap();
        assert!(!partial.enable_square);
        assert_eq!(partial.grade_seed, Some(3));

        assert_eq!(ClassroomConfig::from_yaml("").unwrap(), ClassroomConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let result = ClassroomConfig::from_yaml("enable_square: [not, a, bool]\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("classroom-config-{}.yaml", std::process::id()));
        fs::write(&path, "enable_square: true\n").unwrap();
        let config = ClassroomConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(config.enable_square);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("classroom-config-does-not-exist.yaml");
        let result = ClassroomConfig::from_file(&path);
        assert!(matches!(result, Err(ConfigError::FileReadError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ClassroomConfig::default();
        config
            .apply_env(lookup(&[(ENABLE_SQUARE_ENV, "yes"), (GRADE_SEED_ENV, " 42 ")]))
            .unwrap();
        assert!(config.enable_square);
        assert_eq!(config.grade_seed, Some(42));

        config.apply_env(lookup(&[(ENABLE_SQUARE_ENV, "0")])).unwrap();
        assert!(!config.enable_square);
        assert_eq!(config.grade_seed, Some(42));
    }

    #[test]
    fn test_bad_env_values_are_errors() {
        let mut config = ClassroomConfig::default();
        let result = config.apply_env(lookup(&[(ENABLE_SQUARE_ENV, "maybe")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));

        let result = config.apply_env(lookup(&[(GRADE_SEED_ENV, "-1")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }

    #[test]
    fn test_config_source_resolution() {
        let explicit = Path::new("explicit.yaml");
        assert_eq!(
            ConfigSource::resolve(Some(explicit), lookup(&[(CONFIG_PATH_ENV, "env.yaml")])),
            ConfigSource::File(PathBuf::from("explicit.yaml"))
        );

        let from_env = ConfigSource::resolve(None, lookup(&[(CONFIG_PATH_ENV, "env.yaml")]));
        assert_eq!(from_env, ConfigSource::EnvFile(PathBuf::from("env.yaml")));
        assert_eq!(from_env.to_string(), "$CLASSROOM_CONFIG = env.yaml");

        let defaults = ConfigSource::resolve(None, lookup(&[]));
        assert_eq!(defaults, ConfigSource::Defaults);
        assert_eq!(defaults.to_string(), "built-in defaults");
    }
}
