//! Whole-folder organize runs

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_batch, assert_untouched, entry_count, entry_names};
    use crate::common::Workspace;
    use asset_batcher::organizer::{FolderOutcome, IMAGES_DIR, METADATA_DIR};
    use asset_batcher::{BatchConfig, BatchNaming, BatcherError, Organizer};
    use std::fs;

    #[tokio::test]
    async fn test_ceil_batches_with_remainder() {
        let ws = Workspace::new();
        let source = ws.source("split_a").with_pairs(0, 650);

        let report = Organizer::new(BatchConfig::default())
            .organize(&source.path, &ws.output())
            .await
            .unwrap();

        assert_eq!(report.batches.len(), 3);
        assert_batch(&ws.output(), "batch_1", 300);
        assert_batch(&ws.output(), "batch_2", 300);
        assert_batch(&ws.output(), "batch_3", 50);
        assert_untouched(&source.path, 0, 0);
    }

    #[tokio::test]
    async fn test_range_named_batches() {
        let ws = Workspace::new();
        let source = ws.source("ejs").with_pairs(0, 650);

        let organizer = Organizer::new(BatchConfig {
            naming: BatchNaming::Range,
            ..BatchConfig::default()
        });
        organizer.organize(&source.path, &ws.output()).await.unwrap();

        assert_eq!(entry_names(&ws.output()), vec!["0-299", "300-599", "600-649"]);
        assert_batch(&ws.output(), "600-649", 50);
    }

    #[tokio::test]
    async fn test_pairs_share_batch_and_offset() {
        let ws = Workspace::new();
        let source = ws.source("split_a").with_pairs(1, 12);

        Organizer::new(BatchConfig {
            batch_size: 5,
            ..BatchConfig::default()
        })
        .organize(&source.path, &ws.output())
        .await
        .unwrap();

        for (batch, expected) in [("batch_1", 1..6), ("batch_2", 6..11), ("batch_3", 11..13)] {
            let images: Vec<String> = expected.clone().map(|i| format!("{}.png", i)).collect();
            let mut sorted_images = entry_names(&ws.output().join(batch).join(IMAGES_DIR));
            sorted_images.sort_by_key(|n| n.trim_end_matches(".png").parse::<u32>().unwrap());
            assert_eq!(sorted_images, images);

            for i in expected {
                let image = fs::read_to_string(
                    ws.output().join(batch).join(IMAGES_DIR).join(format!("{}.png", i)),
                )
                .unwrap();
                let meta = fs::read_to_string(
                    ws.output().join(batch).join(METADATA_DIR).join(format!("{}.json", i)),
                )
                .unwrap();
                assert_eq!(meta, format!("{{\"id\": {}}}", image));
            }
        }
    }

    #[tokio::test]
    async fn test_mixed_image_extensions() {
        let ws = Workspace::new();
        let source = ws
            .source("split_a")
            .with_image("2.jpg")
            .with_image("1.png")
            .with_image("thumbs.db")
            .with_metadata("1.json")
            .with_metadata("2.json")
            .with_metadata("notes.txt");

        let report = Organizer::new(BatchConfig::default())
            .organize(&source.path, &ws.output())
            .await
            .unwrap();

        assert_eq!(report.images_found, 2);
        assert_eq!(
            entry_names(&ws.output().join("batch_1").join(IMAGES_DIR)),
            vec!["1.png", "2.jpg"]
        );
        // Files of other types stay where they were
        assert_eq!(entry_names(&source.images()), vec!["thumbs.db"]);
        assert_eq!(entry_names(&source.metadata()), vec!["notes.txt"]);
    }

    #[tokio::test]
    async fn test_mismatch_is_a_noop() {
        let ws = Workspace::new();
        let source = ws.source("split_a").with_pairs(0, 10).with_metadata("10.json");

        let err = Organizer::new(BatchConfig::default())
            .organize(&source.path, &ws.output())
            .await
            .unwrap_err();

        assert!(matches!(err, BatcherError::CountMismatch { .. }));
        assert!(!ws.output().exists());
        assert_untouched(&source.path, 10, 11);
    }

    #[tokio::test]
    async fn test_missing_images_folder() {
        let ws = Workspace::new();
        let source = ws.source("split_a").with_pairs(0, 3).without(IMAGES_DIR);

        let err = Organizer::new(BatchConfig::default())
            .organize(&source.path, &ws.output())
            .await
            .unwrap_err();

        assert!(err.is_skip());
        assert!(!ws.output().exists());
        assert_eq!(entry_count(&source.metadata()), 3);
    }

    #[tokio::test]
    async fn test_second_run_finds_nothing() {
        let ws = Workspace::new();
        let source = ws.source("split_a").with_pairs(0, 301);
        let organizer = Organizer::new(BatchConfig::default());

        organizer.organize(&source.path, &ws.output()).await.unwrap();
        let again = organizer.organize(&source.path, &ws.output()).await.unwrap();

        assert_eq!(again.outcome, FolderOutcome::Completed);
        assert!(again.batches.is_empty());
        assert_eq!(entry_names(&ws.output()), vec!["batch_1", "batch_2"]);
    }

    #[tokio::test]
    async fn test_new_files_do_not_overwrite_earlier_batches() {
        let ws = Workspace::new();
        let organizer = Organizer::new(BatchConfig::default());

        let source = ws.source("split_a").with_pairs(0, 2);
        organizer.organize(&source.path, &ws.output()).await.unwrap();

        // Same names arrive again and would land on batch_1
        let source = source.with_pairs(0, 2);
        let err = organizer
            .organize(&source.path, &ws.output())
            .await
            .unwrap_err();

        assert!(matches!(err, BatcherError::BatchFailed { .. }));
        assert_untouched(&source.path, 2, 2);
        assert_batch(&ws.output(), "batch_1", 2);
    }
}
