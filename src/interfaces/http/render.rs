use std::fmt::Write;

use crate::domain::contractor::TableView;

pub const TABLE_CLASSES: &str = "dataframe styled-table";

/// Landing page; the buttons swap table fragments into `#data-container`
pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Contractor Data</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; margin: 20px; background-color: #f8f9fa; }
        h1 { color: #343a40; font-size: 22px; }

        .button-container {
            display: flex; flex-direction: column; align-items: center; gap: 10px;
            margin-bottom: 20px;
        }

        button {
            padding: 14px; font-size: 18px; cursor: pointer;
            border: none; background-color: #007bff; color: white; border-radius: 8px;
            transition: background 0.3s;
            width: 90%; max-width: 300px;
        }
        button:hover { background-color: #0056b3; }

        #data-container {
            margin-top: 20px; text-align: center; width: 100%;
            overflow-x: auto;
        }

        table { width: 100%; border-collapse: collapse; background: white; min-width: 300px; }
        th, td { padding: 8px; border: 1px solid #dee2e6; text-align: left; font-size: 14px; }
        th { background-color: #007bff; color: white; }
        tr:nth-child(even) { background-color: #f2f2f2; }

        @media (max-width: 600px) {
            th, td { font-size: 12px; padding: 6px; }
            table { min-width: 100%; }
        }
    </style>
    <script>
        function loadData(endpoint) {
            fetch(endpoint)
                .then(response => response.text())
                .then(html => { document.getElementById("data-container").innerHTML = html; })
                .catch(error => console.error("Error loading data:", error));
        }
    </script>
</head>
<body>
    <h1>Contractor Data</h1>
    <div class="button-container">
        <button onclick="loadData('/all_contractors')">Show All Contractors</button>
        <button onclick="loadData('/filtered_contractors')">Show Experienced Contractors</button>
    </div>
    <div id="data-container"></div>
</body>
</html>
"#;

/// Render a view as a scrollable HTML table fragment
pub fn render_table_fragment(view: &TableView<'_>) -> String {
    let mut html = String::with_capacity(256 + view.len() * 128);
    html.push_str(r#"<div style="overflow-x:auto;">"#);
    write_table(&mut html, view);
    html.push_str("</div>");
    html
}

fn write_table(html: &mut String, view: &TableView<'_>) {
    // Writing into a String cannot fail
    let _ = writeln!(html, r#"<table border="1" class="{}">"#, TABLE_CLASSES);

    html.push_str("  <thead>\n    <tr>\n");
    for header in view.headers {
        let _ = writeln!(html, "      <th>{}</th>", escape_html(header));
    }
    html.push_str("    </tr>\n  </thead>\n");

    html.push_str("  <tbody>\n");
    for row in &view.rows {
        html.push_str("    <tr>\n");
        for cell in &row.cells {
            let _ = writeln!(html, "      <td>{}</td>", escape_html(&cell.display()));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
