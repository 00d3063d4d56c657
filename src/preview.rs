//! Builds the isolated document the client displays in its preview iframe.

use crate::models::OutputMode;

/// Sandbox attribute granted to the preview iframe. Scripts only: the
/// Tailwind runtime has to execute at load, but the embedded document must
/// never navigate the host page or reach its state.
pub const SANDBOX: &str = "allow-scripts";

const EXCERPT_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
    pub srcdoc: String,
    pub sandbox: &'static str,
}

/// Rebuilt from scratch on every `(code, mode)` pair; nothing is cached.
pub fn build_preview(code: &str, mode: OutputMode) -> PreviewDocument {
    let srcdoc = if mode == OutputMode::React || looks_like_component(code) {
        component_placeholder(code)
    } else {
        markup_shell(code)
    };

    PreviewDocument {
        srcdoc,
        sandbox: SANDBOX,
    }
}

/// Component source cannot run in a plain document. `import ` keeps the
/// trailing space so `!important` inside CSS does not trip it.
fn looks_like_component(code: &str) -> bool {
    code.contains("import ") || code.contains("export default")
}

/// Full document shell for plain markup: Tailwind CDN runtime, white canvas,
/// the generated code embedded verbatim.
fn markup_shell(code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <script src="https://cdn.tailwindcss.com"></script>
    <style>body {{ background-color: white; }}</style>
  </head>
  <body>
    {code}
  </body>
</html>"#
    )
}

/// Static panel shown when the code cannot be live-rendered. The excerpt is
/// escaped and truncated, display only, never executed.
fn component_placeholder(code: &str) -> String {
    format!(
        r#"<div style="font-family: sans-serif; padding: 40px; text-align: center; color: #666;">
  <h2 style="color: #333; margin-bottom: 10px;">React Component Generated</h2>
  <p>Browsers cannot render raw JSX (React) code directly.</p>
  <p>Please switch to the <strong>Raw Code</strong> tab to copy it into your project.</p>
  <div style="margin-top: 20px; padding: 20px; background: #f3f4f6; border-radius: 8px; text-align: left; font-family: monospace; font-size: 12px; overflow: hidden; opacity: 0.7;">{}</div>
</div>"#,
        escape_html(&truncate(code, EXCERPT_LEN))
    )
}

/// Char-boundary-safe prefix, with an ellipsis when anything was cut.
fn truncate(code: &str, max: usize) -> String {
    if code.chars().count() <= max {
        code.to_string()
    } else {
        let mut excerpt: String = code.chars().take(max).collect();
        excerpt.push_str("...");
        excerpt
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
