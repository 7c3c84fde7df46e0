//! Server-rendered pages: index, one form view per content type, and the
//! placeholder login page. Page copy comes from the registry so the pages
//! and the API can never disagree about which keys exist.

use axum::{
    extract::Path,
    response::{Html, Redirect},
};

use crate::registry::{self, Category};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 0 auto; padding: 2rem; color: #111; }
a { color: #2563eb; text-decoration: none; }
h1 { margin-bottom: 0.25rem; }
.muted { color: #555; }
.card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin: 0.5rem 0; }
textarea { width: 100%; height: 16rem; padding: 1rem; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box; }
button { padding: 0.75rem 1.25rem; border: 0; border-radius: 6px; background: #2563eb; color: #fff; cursor: pointer; }
button:disabled { background: #93b4f5; cursor: not-allowed; }
.error { background: #fef2f2; border-left: 4px solid #f87171; padding: 1rem; margin: 1rem 0; display: none; }
.result { background: #f9fafb; border-radius: 8px; padding: 1.5rem; margin-top: 1.5rem; white-space: pre-wrap; display: none; }
.copy { margin-top: 1rem; background: #fff; color: #333; border: 1px solid #ccc; }
"#;

const FORM_SCRIPT: &str = r#"
const form = document.getElementById('generate-form');
const errorBox = document.getElementById('error');
const resultBox = document.getElementById('result');
const resultText = document.getElementById('result-text');
const submit = document.getElementById('submit');

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  errorBox.style.display = 'none';
  resultBox.style.display = 'none';
  submit.disabled = true;
  submit.textContent = 'Generating...';
  try {
    const response = await fetch('/api/generate', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        type: form.dataset.type,
        content: document.getElementById('content').value,
      }),
    });
    const data = await response.json();
    if (!response.ok) {
      throw new Error(data.error || 'Failed to generate content');
    }
    resultText.textContent = data.text;
    resultBox.style.display = 'block';
  } catch (err) {
    errorBox.textContent = err.message || 'Failed to generate content';
    errorBox.style.display = 'block';
  } finally {
    submit.disabled = false;
    submit.textContent = 'Generate';
  }
});

document.getElementById('copy').addEventListener('click', () => {
  navigator.clipboard.writeText(resultText.textContent);
});
"#;

const AUTH_SCRIPT: &str = r#"
document.getElementById('auth-form').addEventListener('submit', (event) => {
  event.preventDefault();
  document.cookie = 'authToken=placeholder; path=/';
  window.location.href = '/';
});
"#;

fn layout(title: &str, body: &str, script: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n\
         <script>{script}</script>\n</body>\n</html>\n"
    ))
}

/// GET /
/// Lists every registered content type, grouped by category.
pub async fn index() -> Html<String> {
    let mut body = String::from(
        "<h1>Recast</h1>\n<p class=\"muted\">Paste text, pick a format, get it rewritten.</p>\n",
    );

    for category in Category::ALL {
        body.push_str(&format!("<h2>{}</h2>\n", category.label()));
        for ct in registry::all().iter().filter(|ct| ct.category == category) {
            body.push_str(&format!(
                "<div class=\"card\"><a href=\"/create/{key}\"><strong>{title}</strong></a>\
                 <p class=\"muted\">{description}</p></div>\n",
                key = ct.key,
                title = ct.title,
                description = ct.description,
            ));
        }
    }

    layout("Recast", &body, "")
}

/// GET /create/:type
/// The form view for one content type. Unknown keys go back to the index.
pub async fn create(Path(key): Path<String>) -> Result<Html<String>, Redirect> {
    let ct = registry::find(&key).ok_or_else(|| Redirect::temporary("/"))?;

    let body = format!(
        "<p><a href=\"/\">&larr; Back to Home</a></p>\n\
         <h1>{title}</h1>\n<p class=\"muted\">{description}</p>\n\
         <form id=\"generate-form\" data-type=\"{key}\">\n\
         <textarea id=\"content\" placeholder=\"Paste your content here...\" required></textarea>\n\
         <div id=\"error\" class=\"error\"></div>\n\
         <p><button id=\"submit\" type=\"submit\">Generate</button></p>\n\
         </form>\n\
         <div id=\"result\" class=\"result\">\n<h2>Generated Content</h2>\n\
         <p id=\"result-text\"></p>\n\
         <button id=\"copy\" class=\"copy\" type=\"button\">Copy to clipboard</button>\n</div>",
        title = ct.title,
        description = ct.description,
        key = ct.key,
    );

    Ok(layout(ct.title, &body, FORM_SCRIPT))
}

/// GET /auth
/// Placeholder sign-in: sets the presence cookie and redirects home.
pub async fn auth() -> Html<String> {
    let body = "<h1>Sign in</h1>\n\
        <p class=\"muted\">Placeholder sign-in — no accounts yet.</p>\n\
        <form id=\"auth-form\"><p><button type=\"submit\">Continue</button></p></form>";

    layout("Sign in", body, AUTH_SCRIPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_lists_every_content_type() {
        let Html(html) = index().await;
        for ct in registry::all() {
            assert!(
                html.contains(&format!("/create/{}", ct.key)),
                "index missing link for {}",
                ct.key
            );
        }
        for category in Category::ALL {
            assert!(html.contains(category.label()));
        }
    }

    #[tokio::test]
    async fn create_renders_the_form_for_a_known_key() {
        let Html(html) = create(Path("general".to_string())).await.unwrap();
        assert!(html.contains("data-type=\"general\""));
        assert!(html.contains("Any text to tweet"));
        assert!(html.contains("/api/generate"));
    }

    #[tokio::test]
    async fn create_redirects_unknown_keys_to_index() {
        assert!(create(Path("nope".to_string())).await.is_err());
    }
}
