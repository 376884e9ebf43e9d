//! Static Views
//!
//! The CV page and the not-found fallback. Outside the core contract, kept
//! because the original serves both.

use axum::http::StatusCode;
use axum::response::Html;

/// GET /cv
pub async fn cv() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>Currículum</title>
</head>
<body>
<h1>Currículum</h1>
<p>Administrador del inventario de la concesionaria.</p>
<a href="/">Inventario</a>
</body>
</html>"#,
    )
}

/// Fallback for unknown paths
pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html(
            r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>Página no encontrada</title>
</head>
<body>
<h1>404</h1>
<p>La página solicitada no existe.</p>
<a href="/">Volver al inventario</a>
</body>
</html>"#,
        ),
    )
}
