//! HTML Views
//!
//! Server-rendered pages for the auth flows. Plain format!-built HTML; the
//! rendering layer is deliberately thin and carries no logic beyond showing
//! a pending flash message.

use platform::flash::Flash;

/// Shared page shell
pub fn page(title: &str, body: &str, flash: Option<&Flash>) -> String {
    let flash_html = match flash {
        Some(f) => format!(
            r#"<div class="alert alert-{}">{}</div>"#,
            f.severity.as_str(),
            escape(&f.message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{flash_html}
{body}
</body>
</html>"#
    )
}

/// Login form
pub fn login_page(flash: Option<&Flash>) -> String {
    page(
        "Iniciar sesión",
        r#"<h1>Iniciar sesión</h1>
<form method="post" action="/login">
  <label>Usuario <input type="text" name="username" required></label>
  <label>Contraseña <input type="password" name="password" required></label>
  <button type="submit">Entrar</button>
</form>"#,
        flash,
    )
}

/// Logout confirmation
pub fn logout_page(flash: Option<&Flash>) -> String {
    page(
        "Sesión cerrada",
        r#"<h1>Sesión cerrada</h1>
<p>Has salido del sistema.</p>
<a href="/login">Volver a iniciar sesión</a>"#,
        flash,
    )
}

/// Minimal HTML escaping for user-influenced text
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
