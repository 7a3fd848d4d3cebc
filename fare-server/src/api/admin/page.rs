//! Admin overview page
//!
//! Zones and fares as HTML tables, with create and edit forms that post to
//! the handlers in `forms`.

use axum::{extract::State, response::Html};
use shared::models::{FareView, Zone};
use std::fmt::Write;

use crate::core::ServerState;
use crate::db::repository::{fare, zone};
use crate::utils::AppResult;

/// GET /admin
pub async fn overview(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let zones = zone::find_all(&state.pool).await?;
    let fares = fare::find_all_views(&state.pool).await?;
    Ok(Html(render(&zones, &fares)))
}

fn render(zones: &[Zone], fares: &[FareView]) -> String {
    let mut zone_rows = String::new();
    for z in zones {
        let _ = write!(
            zone_rows,
            r#"<tr><td>{id}</td><td>{name}</td><td><form method="post" action="/admin/zones/{id}"><input name="name" value="{name}" required maxlength="100"> <button>Rename</button></form></td></tr>"#,
            id = z.id,
            name = escape(&z.name)
        );
    }

    let mut fare_rows = String::new();
    for f in fares {
        let _ = write!(
            fare_rows,
            r#"<tr><td>{id}</td><td>{src}</td><td>{dst}</td><td>{price:.2}</td><td><form method="post" action="/admin/fares/{id}"><select name="source_id">{src_options}</select> <select name="destination_id">{dst_options}</select> <input name="price" value="{price:.2}" required inputmode="decimal"> <button>Save</button></form></td></tr>"#,
            id = f.id,
            src = escape(&f.source_zone),
            dst = escape(&f.destination_zone),
            price = f.price,
            src_options = zone_options(zones, Some(f.source_id)),
            dst_options = zone_options(zones, Some(f.destination_id)),
        );
    }

    let options = zone_options(zones, None);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Fare Admin</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
table {{ border-collapse: collapse; margin-bottom: 1rem; }}
th, td {{ border: 1px solid #ccc; padding: 0.3rem 0.8rem; text-align: left; }}
form {{ margin: 0; }}
</style>
</head>
<body>
<h1>Fare Admin</h1>
<h2>Zones ({zone_count})</h2>
<table>
<thead><tr><th>ID</th><th>Name</th><th>Edit</th></tr></thead>
<tbody>{zone_rows}</tbody>
</table>
<form method="post" action="/admin/zones">
<input name="name" placeholder="Zone name" required maxlength="100">
<button>Add zone</button>
</form>
<h2>Fares ({fare_count})</h2>
<table>
<thead><tr><th>ID</th><th>Source</th><th>Destination</th><th>Price</th><th>Edit</th></tr></thead>
<tbody>{fare_rows}</tbody>
</table>
<form method="post" action="/admin/fares">
<select name="source_id">{options}</select>
<select name="destination_id">{options}</select>
<input name="price" placeholder="0.00" required inputmode="decimal">
<button>Add fare</button>
</form>
<p>JSON access under <code>/admin/api/zones</code> and <code>/admin/api/fares</code>.</p>
</body>
</html>
"#,
        zone_count = zones.len(),
        fare_count = fares.len(),
    )
}

fn zone_options(zones: &[Zone], selected: Option<i64>) -> String {
    let mut out = String::new();
    for z in zones {
        let marker = if selected == Some(z.id) { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{}"{marker}>{}</option>"#,
            z.id,
            escape(&z.to_string())
        );
    }
    out
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn zones() -> Vec<Zone> {
        vec![
            Zone {
                id: 1,
                name: "Zone 1".into(),
            },
            Zone {
                id: 2,
                name: "<Harbour>".into(),
            },
        ]
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("Zone 1"), "Zone 1");
    }

    #[test]
    fn test_zone_options_mark_selection() {
        let html = zone_options(&zones(), Some(2));
        assert_eq!(
            html,
            r#"<option value="1">Zone 1</option><option value="2" selected>&lt;Harbour&gt;</option>"#
        );
        assert!(!zone_options(&zones(), None).contains("selected"));
    }

    #[test]
    fn test_render_uses_zone_names() {
        let zones = zones();
        let fares = vec![FareView {
            id: 7,
            source_id: 1,
            source_zone: "Zone 1".into(),
            destination_id: 2,
            destination_zone: "<Harbour>".into(),
            price: Decimal::new(55, 0),
        }];

        let html = render(&zones, &fares);
        assert!(html.contains("Zones (2)"));
        assert!(html.contains("<td>Zone 1</td><td>&lt;Harbour&gt;</td><td>55.00</td>"));
        assert!(html.contains(r#"<form method="post" action="/admin/fares/7">"#));
        assert!(html.contains(r#"<input name="price" value="55.00""#));
        assert!(html.contains(r#"value="&lt;Harbour&gt;""#));
        assert!(!html.contains("<Harbour>"));
    }
}
