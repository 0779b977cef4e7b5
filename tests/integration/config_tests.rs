//! Configuration loading as the binaries do it

#[cfg(test)]
mod tests {
    use crate::common::Workspace;
    use crate::common::assertions::assert_batch;
    use asset_batcher::config::Config;
    use asset_batcher::services::run_once;
    use asset_batcher::{BatchNaming, BatcherError, MoveFailurePolicy};

    #[tokio::test]
    async fn test_yaml_drives_one_shot_run() {
        let ws = Workspace::new();
        ws.source("incoming").with_pairs(0, 7);

        let yaml = format!(
            r#"
batch:
  batch_size: 3
  on_move_failure: continue
direct:
  source: "{}"
  naming: sequential
output:
  root: "{}"
logging:
  level: debug
"#,
            ws.root().join("incoming").display(),
            ws.output().display()
        );
        let path = ws.root().join("batcher.yaml");
        std::fs::write(&path, yaml).unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.batch.on_move_failure, MoveFailurePolicy::Continue);
        assert_eq!(config.direct.naming, BatchNaming::Sequential);

        let report = run_once(&config).await.unwrap();
        assert_eq!(report.batches.len(), 3);
        assert_batch(&ws.output(), "batch_3", 1);
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_yaml_error() {
        let ws = Workspace::new();
        let path = ws.root().join("batcher.yaml");
        std::fs::write(&path, "batch: [not, a, map]\n").unwrap();

        let err = Config::from_file(&path).await.unwrap_err();
        assert!(matches!(err, BatcherError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error"));
    }

    #[test]
    fn test_default_run_once_paths() {
        let config = Config::default();
        assert_eq!(config.direct.source, std::path::PathBuf::from("ejs"));
        assert_eq!(config.output.root, std::path::PathBuf::from("output"));
        assert_eq!(config.direct_batch().naming, BatchNaming::Range);
    }
}
