//! The results page, rendered from a fixed layout.
//!
//! No template engine: the page is one compile-time format layout filled by
//! a pure function, with all user-controlled values HTML-escaped.

/// Values the page needs. `score` already carries either the formatted
/// percentage or an error string; `verdict` is only set on success.
#[derive(Debug, Default)]
pub struct PageView {
    pub score: Option<String>,
    pub verdict: Option<&'static str>,
    pub text: String,
}

/// Render the full page for `view`.
pub fn render_page(view: &PageView) -> String {
    let results = match (&view.score, view.verdict) {
        (Some(score), Some(verdict)) => format!(
            r#"    <section class="result">
      <p class="score">Fluff score: {}%</p>
      <p class="verdict">{}</p>
    </section>
"#,
            escape_html(score),
            escape_html(verdict),
        ),
        (Some(score), None) => format!(
            r#"    <section class="result">
      <p class="score">{}</p>
    </section>
"#,
            escape_html(score),
        ),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Fluffmeter</title>
  <style>
    body {{ font-family: sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }}
    textarea {{ width: 100%; min-height: 10rem; }}
    .score {{ font-size: 1.4rem; font-weight: bold; }}
  </style>
</head>
<body>
  <h1>Fluffmeter</h1>
  <p>Paste a post below to measure its corporate-fluff level.</p>
  <form method="post" action="/">
    <textarea name="text" placeholder="Thrilled to share...">{text}</textarea>
    <p><button type="submit">Measure</button></p>
  </form>
{results}</body>
</html>
"#,
        text = escape_html(&view.text),
        results = results,
    )
}

/// Minimal HTML escaping for text and attribute contexts.
fn escape_html(raw: &str) -> String {
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

    #[test]
    fn empty_view_renders_form_without_results() {
        let page = render_page(&PageView::default());
        assert!(page.contains(r#"<textarea name="text""#));
        assert!(!page.contains("class=\"result\""));
    }

    #[test]
    fn success_renders_score_and_verdict() {
        let page = render_page(&PageView {
            score: Some("6.0".to_string()),
            verdict: Some("Surprisingly concrete!"),
            text: "we cut p95 by 40%".to_string(),
        });
        assert!(page.contains("Fluff score: 6.0%"));
        assert!(page.contains("Surprisingly concrete!"));
        assert!(page.contains(">we cut p95 by 40%</textarea>"));
    }

    #[test]
    fn error_renders_score_cell_without_verdict() {
        let page = render_page(&PageView {
            score: Some("Error: network error: boom".to_string()),
            verdict: None,
            text: "anything".to_string(),
        });
        assert!(page.contains("Error: network error: boom"));
        assert!(!page.contains("class=\"verdict\""));
    }

    #[test]
    fn user_text_is_escaped() {
        let page = render_page(&PageView {
            score: None,
            verdict: None,
            text: "<script>alert('x')</script>".to_string(),
        });
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }
}
