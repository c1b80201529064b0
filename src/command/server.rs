use crate::conf::Conf;
use crate::rest;
use crate::store::DocumentStore;
use crate::Result;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::web::{scope, JsonConfig, ServiceConfig};
use actix_web::{
    middleware::{Compress, NormalizePath},
    web::Data,
    App, HttpServer,
};
use futures_util::future::FutureExt;
use std::time::Instant;
use tracing::info;

// Same default as the JSON body parser the report clients were built against
const JSON_BODY_LIMIT: usize = 102_400;

pub async fn run(conf: &Conf) -> Result<()> {
    let store = DocumentStore::new(&conf.data_file);
    info!(
        data_file = %store.path().display(),
        bind_addr = conf.bind_addr,
        port = conf.port,
        "Starting server",
    );

    HttpServer::new(move || app(store.clone()))
        .bind((conf.bind_addr.as_str(), conf.port))?
        .run()
        .await?;

    Ok(())
}

pub fn app(
    store: DocumentStore,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap_fn(|req, srv| {
            let req_query_string = req.query_string().to_string();
            let req_method = req.method().as_str().to_string();
            let req_path = req.path().to_string();
            let req_version = format!("{:?}", req.version());
            let req_time = Instant::now();
            let req_ip = req
                .connection_info()
                .peer_addr()
                .unwrap_or_default()
                .to_string();
            srv.call(req).map(move |res| {
                if let Ok(res) = res.as_ref() {
                    let res_status = res.status().as_u16();
                    info!(
                        req_query_string,
                        req_method,
                        req_path,
                        req_version,
                        req_ip,
                        res_status,
                        res_time_sec = req_time.elapsed().as_secs_f64(),
                    );
                }

                res
            })
        })
        .wrap(NormalizePath::trim())
        .wrap(Compress::default())
        .app_data(Data::new(store))
        .configure(configure)
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(JsonConfig::default().limit(JSON_BODY_LIMIT))
        .service(rest::index::get)
        .service(
            scope("data")
                .service(rest::data::get)
                .service(rest::data::post),
        )
        .service(scope("report").service(rest::report::get));
}
