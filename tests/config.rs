#[cfg(test)]
mod tests {
    use std::fs;
    use tasks::libs::config::{Config, StorageMode, CONFIG_FILE_NAME};
    use tasks::libs::data_storage::DataStorage;
    use tasks::libs::task::{TaskField, TaskSelector};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> std::path::PathBuf {
            DataStorage::at(self.temp_dir.path().join("tasks")).get_path(CONFIG_FILE_NAME).unwrap()
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(ctx.config_path()).unwrap();

        assert_eq!(config.storage_mode, StorageMode::Sql);
        assert!(config.display_columns.is_empty());
        assert_eq!(config.selector().fields(), TaskSelector::all().fields());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let path = ctx.config_path();
        let config = Config {
            storage_mode: StorageMode::Csv,
            display_columns: vec![TaskField::Id, TaskField::DueDate],
        };
        config.save_to(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"storage_mode\": \"csv\""), "{}", raw);
        assert!(raw.contains("\"due_date\""), "{}", raw);

        assert_eq!(Config::read_from(&path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.config_path();
        fs::write(&path, r#"{ "storage_mode": "json" }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.storage_mode, StorageMode::Json);
        assert!(config.display_columns.is_empty());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unknown_mode_is_rejected(ctx: &mut ConfigTestContext) {
        let path = ctx.config_path();
        fs::write(&path, r#"{ "storage_mode": "postgres" }"#).unwrap();

        assert!(Config::read_from(&path).is_err());
    }

    #[test]
    fn test_data_storage_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("a").join("b");
        let storage = DataStorage::at(&base);

        let path = storage.get_path("tasks.json").unwrap();
        assert!(base.is_dir());
        assert_eq!(path, base.join("tasks.json"));
    }
}
