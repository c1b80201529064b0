use crate::model::{ReportDocument, SaveAck};
use crate::store::DocumentStore;
use crate::Result;
use actix_web::web::{self, Data, Json};
use actix_web::{get, post};

#[get("")]
pub async fn get(store: Data<DocumentStore>) -> Result<Json<ReportDocument>> {
    let store = store.into_inner();
    let doc = web::block(move || store.load()).await??;
    Ok(Json(doc))
}

/// Replaces the stored document with the request body as is, nothing from
/// the previous version is kept.
#[post("")]
pub async fn post(doc: Json<ReportDocument>, store: Data<DocumentStore>) -> Result<Json<SaveAck>> {
    let store = store.into_inner();
    let doc = doc.into_inner();
    web::block(move || store.save(&doc)).await??;
    Ok(Json(SaveAck::default()))
}

#[cfg(test)]
mod test {
    use crate::error::ApiError;
    use crate::model::{ReportDocument, SaveAck, ServerRow};
    use crate::store::DocumentStore;
    use crate::Result;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::web::{scope, Data, JsonConfig};
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn mock_store() -> (TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("data.json"));
        (dir, store)
    }

    #[test]
    async fn get_empty() -> Result<()> {
        let (_dir, store) = mock_store();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store))
                .service(scope("data").service(super::get)),
        )
        .await;
        let req = TestRequest::get().uri("/data").to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            json!({"startDate": "", "endDate": "", "spaceUsed": "", "tableData": []}),
            res
        );
        Ok(())
    }

    #[test]
    async fn get_saved() -> Result<()> {
        let (_dir, store) = mock_store();
        let doc = ReportDocument {
            start_date: "2024-01-06".into(),
            table_data: vec![ServerRow {
                server_name: "srv1".into(),
                ..ServerRow::default()
            }],
            ..ReportDocument::default()
        };
        store.save(&doc)?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store))
                .service(scope("data").service(super::get)),
        )
        .await;
        let req = TestRequest::get().uri("/data").to_request();
        let res: ReportDocument = test::call_and_read_body_json(&app, req).await;
        assert_eq!(doc, res);
        Ok(())
    }

    #[test]
    async fn get_malformed_file() -> Result<()> {
        let (_dir, store) = mock_store();
        fs::write(store.path(), "[broken")?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store))
                .service(scope("data").service(super::get)),
        )
        .await;
        let req = TestRequest::get().uri("/data").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
        let body: ApiError = test::read_body_json(res).await;
        assert_eq!(500, body.http_code);
        Ok(())
    }

    #[test]
    async fn post() -> Result<()> {
        let (_dir, store) = mock_store();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store.clone()))
                .service(scope("data").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/data")
            .set_json(json!({
                "startDate": "2024-01-06",
                "endDate": "2024-01-12",
                "spaceUsed": "120GB",
                "tableData": [{"serverName": "srv1", "Monday": "FAILED"}],
            }))
            .to_request();
        let res: SaveAck = test::call_and_read_body_json(&app, req).await;
        assert_eq!("Data saved successfully", res.message);
        let doc = store.load()?;
        assert_eq!("120GB", doc.space_used);
        assert_eq!("FAILED", doc.table_data[0].monday);
        Ok(())
    }

    #[test]
    async fn post_replaces_previous_document() -> Result<()> {
        let (_dir, store) = mock_store();
        store.save(&ReportDocument {
            table_data: vec![ServerRow::default(), ServerRow::default()],
            ..ReportDocument::default()
        })?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store.clone()))
                .service(scope("data").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/data")
            .set_json(json!({"startDate": "2024-02-03", "tableData": []}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::OK, res.status());
        let doc = store.load()?;
        assert!(doc.table_data.is_empty());
        assert_eq!("2024-02-03", doc.start_date);
        Ok(())
    }

    #[test]
    async fn post_invalid_body() -> Result<()> {
        let (_dir, store) = mock_store();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store.clone()))
                .service(scope("data").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/data")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"tableData\": ")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, res.status());
        assert!(!store.path().exists());
        Ok(())
    }

    #[test]
    async fn post_body_over_limit() -> Result<()> {
        let (_dir, store) = mock_store();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store.clone()))
                .app_data(JsonConfig::default().limit(1_024))
                .service(scope("data").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/data")
            .set_json(json!({"spaceUsed": "x".repeat(2_048)}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::PAYLOAD_TOO_LARGE, res.status());
        assert!(!store.path().exists());
        Ok(())
    }

    #[test]
    async fn post_write_failure() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = DocumentStore::new(dir.path().join("missing").join("data.json"));
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store))
                .service(scope("data").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/data")
            .set_json(json!({"tableData": []}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
        Ok(())
    }
}
