use axum::{
    http::{Method, StatusCode},
    response::Html,
};

const LANDING_PAGE: &str = r#"<h1>hashdrop</h1>
<form method="post" enctype="multipart/form-data">
  <input type="file" name="file">
  <input type="password" name="key" placeholder="upload key">
  <button type="submit">Upload</button>
</form>
"#;

/// GET /
pub async fn landing_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Any method on / other than GET and POST
pub async fn method_unsupported_handler(method: Method) -> (StatusCode, String) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        format!("HTTP Method type {} is unsupported on /\n", method),
    )
}
