use crate::report::ReportView;
use crate::store::DocumentStore;
use crate::Result;
use actix_web::get;
use actix_web::web::{self, Data};
use actix_web::HttpResponse;

/// Same page the report view produces, rendered straight from the store.
#[get("")]
pub async fn get(store: Data<DocumentStore>) -> Result<HttpResponse> {
    let store = store.into_inner();
    let doc = web::block(move || store.load()).await??;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(ReportView::from_document(doc).render()))
}
