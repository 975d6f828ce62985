//! Placeholder Assets
//!
//! Fixed contents of the deployment bundle.

use serde_json::{json, Value};

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Acta Diurna</title>
    <meta http-equiv="refresh" content="0; url=/">
    <meta name="description" content="Acta Diurna - Your Personal Daily Chronicle">
</head>
<body>
    <p>Redirecting to Acta Diurna...</p>
    <script>
        setTimeout(function() {
            window.location.href = '/';
        }, 100);
    </script>
</body>
</html>
"#;

pub const MAIN_CSS: &str = r#"/* Acta Diurna build CSS - deployment compatibility */
body {
  font-family: Georgia, serif;
  margin: 0;
  padding: 0;
}
.build-notice {
  display: none;
}
"#;

pub const MAIN_JS: &str = r#"// Acta Diurna build JS - deployment compatibility
console.log('Acta Diurna loaded');
document.addEventListener('DOMContentLoaded', function() {
  console.log('Acta Diurna deployment bundle ready');
});
"#;

pub fn manifest() -> Value {
    json!({
        "short_name": "Acta Diurna",
        "name": "Acta Diurna - Your Personal Daily Chronicle",
        "start_url": "/",
        "display": "standalone",
        "theme_color": "#f59e0b",
        "background_color": "#ffffff",
        "description": "Share stories and read the latest news from your friends",
        "icons": []
    })
}

pub fn asset_manifest() -> Value {
    json!({
        "files": {
            "main.css": "/static/css/main.css",
            "main.js": "/static/js/main.js",
            "index.html": "/index.html",
            "manifest.json": "/manifest.json"
        },
        "entrypoints": [
            "static/css/main.css",
            "static/js/main.js"
        ]
    })
}
