//! The HTTP trigger end to end

#[cfg(test)]
mod tests {
    use crate::common::Workspace;
    use crate::common::assertions::{assert_batch, assert_untouched};
    use asset_batcher::organizer::{FolderOutcome, METADATA_DIR};
    use asset_batcher::server::AppState;
    use asset_batcher::server::routes::{self, organize::OrganizeResponse};
    use actix_web::{App, test, web};

    #[actix_web::test]
    async fn test_organize_every_matching_folder() {
        let ws = Workspace::new();
        let first = ws.source("split_first").with_pairs(0, 3);
        let second = ws.source("to_split").with_pairs(100, 2);
        let other = ws.source("archive").with_pairs(0, 4);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(ws.config())))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/organize-files").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: OrganizeResponse = test::read_body_json(resp).await;
        assert_eq!(body.message, "Files organized successfully.");
        assert_eq!(body.report.succeeded, 2);
        assert_eq!(body.report.failed, 0);

        // Both folders write batch_1; their files share the folder
        assert_batch(&ws.output(), "batch_1", 5);
        assert_untouched(&first.path, 0, 0);
        assert_untouched(&second.path, 0, 0);
        assert_untouched(&other.path, 4, 4);
    }

    #[actix_web::test]
    async fn test_skipped_folder_is_reported() {
        let ws = Workspace::new();
        let broken = ws.source("split_broken").with_pairs(0, 2).without(METADATA_DIR);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(ws.config())))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/organize-files").to_request();
        let body: OrganizeResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.message, "Files organized successfully.");
        assert_eq!(body.report.failed, 1);
        assert_eq!(body.report.folders.len(), 1);
        assert_eq!(body.report.folders[0].outcome, FolderOutcome::Skipped);
        assert!(
            body.report.folders[0]
                .error
                .as_deref()
                .unwrap()
                .contains("metadata")
        );
        assert_eq!(crate::common::assertions::entry_count(&broken.images()), 2);
    }

    #[actix_web::test]
    async fn test_get_is_not_routed() {
        let ws = Workspace::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(ws.config())))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/organize-files").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
