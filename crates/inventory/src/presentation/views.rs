//! HTML Views
//!
//! The listing page: pending flash, the add form, and one row per record
//! with its toggle and delete forms.

use platform::flash::Flash;

use crate::domain::entity::Car;

/// Listing page for all car records
pub fn listing_page(cars: &[Car], flash: Option<&Flash>) -> String {
    let flash_html = match flash {
        Some(f) => format!(
            r#"<div class="alert alert-{}">{}</div>"#,
            f.severity.as_str(),
            escape(&f.message)
        ),
        None => String::new(),
    };

    let rows: String = cars
        .iter()
        .map(|car| {
            format!(
                r#"<tr>
  <td>{id}</td>
  <td>{brand}</td>
  <td>{origin}</td>
  <td>{stock}</td>
  <td>
    <form method="post" action="/cambiar_stock/{id}"><button type="submit">Cambiar stock</button></form>
    <form method="post" action="/eliminar/{id}"><button type="submit">Eliminar</button></form>
  </td>
</tr>"#,
                id = car.id,
                brand = escape(&car.brand),
                origin = escape(&car.origin),
                stock = car.stock.label(),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>Inventario de carros</title>
</head>
<body>
{flash_html}
<h1>Inventario de carros</h1>
<form method="post" action="/agregar">
  <label>Marca <input type="text" name="marca" required></label>
  <label>Origen <input type="text" name="origen" required></label>
  <button type="submit">Agregar</button>
</form>
<table>
  <thead>
    <tr><th>ID</th><th>Marca</th><th>Origen</th><th>En stock</th><th></th></tr>
  </thead>
  <tbody>
{rows}
  </tbody>
</table>
<a href="/logout">Cerrar sesión</a>
</body>
</html>"#
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
