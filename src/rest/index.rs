use actix_web::get;

pub const LIVENESS_MESSAGE: &str = "Server is running. Use /data endpoint to get or post data.";

#[get("/")]
pub async fn get() -> &'static str {
    LIVENESS_MESSAGE
}

#[cfg(test)]
mod test {
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::{test, App};

    #[test]
    async fn get() {
        let app = test::init_service(App::new().service(super::get)).await;
        let req = TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::OK, res.status());
        assert_eq!(
            "text/plain; charset=utf-8",
            res.headers().get("content-type").unwrap()
        );
        let body = test::read_body(res).await;
        assert_eq!(super::LIVENESS_MESSAGE.as_bytes(), &body[..]);
    }
}
