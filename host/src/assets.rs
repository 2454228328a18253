//! Serves the compiled browser app and its runtime configuration.
//!
//! The frontend's `dist/` is embedded at build time. Any path that is not a
//! file falls back to `index.html` so client-side navigation keeps working.

use actix_web::{web, HttpRequest, HttpResponse};
use common::config::ApiConfig;
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

pub const CONFIG_PATH: &str = "/config.json";

const INDEX: &str = "index.html";

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// `GET /config.json`: tells the frontend which student API to use.
pub async fn config_json(api: web::Data<ApiConfig>) -> HttpResponse {
    HttpResponse::Ok().json(api.get_ref())
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

/// Resolves `request_path` inside `dir`, falling back to `index.html`.
pub fn serve_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = asset_path(request_path);

    match dir.get_file(path) {
        Some(file) => {
            let mime = from_path(path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file(INDEX) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

fn asset_path(request_path: &str) -> &str {
    match request_path.trim_start_matches('/') {
        "" => INDEX,
        path => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use include_dir::{DirEntry, File};
    use pretty_assertions::assert_eq;

    static ENTRIES: [DirEntry<'static>; 2] = [
        DirEntry::File(File::new("index.html", b"<html>desk</html>")),
        DirEntry::File(File::new("frontend-1a2b.js", b"console.log(1)")),
    ];
    static DIST: Dir<'static> = Dir::new("", &ENTRIES);
    static EMPTY: Dir<'static> = Dir::new("", &[]);

    async fn body_of(response: HttpResponse) -> String {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(response: &HttpResponse) -> String {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let response = serve_from(&DIST, "/");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
        assert_eq!(body_of(response).await, "<html>desk</html>");
    }

    #[actix_web::test]
    async fn assets_get_their_mime_type() {
        let response = serve_from(&DIST, "/frontend-1a2b.js");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).contains("javascript"));
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let response = serve_from(&DIST, "/students/R100");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_of(response).await, "<html>desk</html>");
    }

    #[actix_web::test]
    async fn nothing_embedded_is_not_found() {
        let response = serve_from(&EMPTY, "/");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn config_endpoint_reports_api_base() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ApiConfig::new("http://api:5000/")))
                .route(CONFIG_PATH, web::get().to(config_json)),
        )
        .await;

        let req = test::TestRequest::get().uri(CONFIG_PATH).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({ "apiBaseUrl": "http://api:5000" }));
    }
}
