//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    use dnamatch::cli::paths::validate_config_path;
    use dnamatch::cli::{Cli, Commands, PersistentConfig, ReplOptions};

    #[test]
    fn test_persistent_config_default() {
        let config = PersistentConfig::default();
        assert_eq!(config.capacity, Some(100));
        assert_eq!(config.match_count, Some(3));
        assert_eq!(config.max_input_len, Some(99));
        assert_eq!(config.preload, None);
    }

    #[test]
    fn test_effective_values_fall_back_to_defaults() {
        let config = PersistentConfig {
            capacity: None,
            match_count: None,
            max_input_len: None,
            preload: None,
        };
        assert_eq!(config.capacity(), 100);
        assert_eq!(config.match_count(), 3);
        assert_eq!(config.max_input_len(), 99);
    }

    #[test]
    fn test_cli_options_take_precedence() {
        let config = PersistentConfig {
            capacity: Some(10),
            match_count: Some(5),
            max_input_len: None,
            preload: Some(PathBuf::from("saved.txt")),
        };
        let options = ReplOptions {
            capacity: Some(20),
            matches: None,
            max_input: Some(40),
        };

        let merged = config.merge_with_cli(&options, None);
        assert_eq!(merged.capacity(), 20);
        assert_eq!(merged.match_count(), 5);
        assert_eq!(merged.max_input_len(), 40);
        assert_eq!(merged.preload, Some(PathBuf::from("saved.txt")));

        let merged = config.merge_with_cli(&options, Some(PathBuf::from("other.txt")));
        assert_eq!(merged.preload, Some(PathBuf::from("other.txt")));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            capacity: Some(42),
            match_count: Some(1),
            max_input_len: Some(30),
            preload: Some(PathBuf::from("seqs.txt")),
        };
        config.save_to(Some(&path)).unwrap();
        assert!(path.exists());

        let loaded = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_config_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        let loaded = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, PersistentConfig::default());
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(PersistentConfig::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_config_path_must_be_json() {
        assert!(validate_config_path(&PathBuf::from("config.json")).is_ok());
        assert!(validate_config_path(&PathBuf::from("config.toml")).is_err());
        assert!(validate_config_path(&PathBuf::from("config")).is_err());

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        assert!(PersistentConfig::default().save_to(Some(&path)).is_err());
    }

    #[test]
    fn test_cli_defaults_to_repl() {
        let cli = Cli::try_parse_from(["dnamatch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_retrieve() {
        let cli =
            Cli::try_parse_from(["dnamatch", "retrieve", "acgt", "--dict", "seqs.txt", "-k", "5"])
                .unwrap();
        match cli.command {
            Some(Commands::Retrieve {
                query,
                dict,
                options,
            }) => {
                assert_eq!(query, "acgt");
                assert_eq!(dict, PathBuf::from("seqs.txt"));
                assert_eq!(options.matches, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_repl_options() {
        let cli = Cli::try_parse_from([
            "dnamatch",
            "repl",
            "--capacity",
            "50",
            "--max-input",
            "20",
            "-p",
            "seqs.txt",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Repl { options, preload }) => {
                assert_eq!(
                    options,
                    ReplOptions {
                        capacity: Some(50),
                        matches: None,
                        max_input: Some(20),
                    }
                );
                assert_eq!(preload, Some(PathBuf::from("seqs.txt")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_compare() {
        let cli = Cli::try_parse_from(["dnamatch", "-v", "compare", "ab", "ac"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Some(Commands::Compare { ref a, ref b }) if a == "ab" && b == "ac"
        ));
    }

    #[test]
    fn test_retrieve_command_with_file() {
        let temp_dir = TempDir::new().unwrap();
        let dict = temp_dir.path().join("seqs.txt");
        fs::write(&dict, "acgt gattaca ttag").unwrap();
        let config = temp_dir.path().join("config.json");

        let command = Commands::Retrieve {
            query: "ACGA".to_string(),
            dict,
            options: ReplOptions::default(),
        };
        dnamatch::cli::commands::execute(command, Some(&config)).unwrap();
    }

    #[test]
    fn test_retrieve_command_missing_dict() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.json");
        let command = Commands::Retrieve {
            query: "acga".to_string(),
            dict: temp_dir.path().join("missing.txt"),
            options: ReplOptions::default(),
        };
        assert!(dnamatch::cli::commands::execute(command, Some(&config)).is_err());
    }

    #[test]
    fn test_settings_command_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.json");

        let command = Commands::Settings {
            set_capacity: Some(7),
            set_matches: Some(2),
            set_max_input: None,
            set_preload: None,
            reset: false,
        };
        dnamatch::cli::commands::execute(command, Some(&config)).unwrap();

        let loaded = PersistentConfig::load_from(Some(&config)).unwrap();
        assert_eq!(loaded.capacity(), 7);
        assert_eq!(loaded.match_count(), 2);
        assert_eq!(loaded.max_input_len(), 99);

        let reset = Commands::Settings {
            set_capacity: None,
            set_matches: None,
            set_max_input: None,
            set_preload: None,
            reset: true,
        };
        dnamatch::cli::commands::execute(reset, Some(&config)).unwrap();
        let loaded = PersistentConfig::load_from(Some(&config)).unwrap();
        assert_eq!(loaded, PersistentConfig::default());
    }
}
