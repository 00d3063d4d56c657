use std::fmt;

/// Output flavour requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain HTML with Tailwind classes, live-renderable in the preview.
    Html,
    /// A React component body. Raw-code view only, no live preview.
    React,
}

impl OutputMode {
    /// Permissive parser: anything other than `react` (absent, empty,
    /// unknown) falls back to `Html` so a sloppy client still gets a
    /// renderable result.
    pub fn parse(mode: Option<&str>) -> Self {
        match mode {
            Some("react") => OutputMode::React,
            _ => OutputMode::Html,
        }
    }

    /// Instruction sent to the provider alongside the screenshot.
    pub fn instruction(self) -> &'static str {
        match self {
            OutputMode::Html => HTML_INSTRUCTION,
            OutputMode::React => REACT_INSTRUCTION,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputMode::Html => write!(f, "html"),
            OutputMode::React => write!(f, "react"),
        }
    }
}

const HTML_INSTRUCTION: &str = "\
You are an expert frontend developer. Analyze this UI screenshot and generate HTML/Tailwind code that replicates it.

Rules:
- Use standard HTML tags with Tailwind CSS classes for styling.
- Ensure mobile responsiveness.
- Use <img src=\"https://placehold.co/600x400\" /> for images.
- Return ONLY the HTML code (divs, sections, etc) without <html> or <body> tags.
- Do NOT use markdown backticks.";

const REACT_INSTRUCTION: &str = "\
You are an expert React developer. Analyze this UI screenshot and generate a functional React component that replicates it.

Rules:
- Use Tailwind CSS classes for styling.
- Ensure mobile responsiveness.
- Use <img src=\"https://placehold.co/600x400\" /> for images.
- Return ONLY the component body. No import or export statements.
- Do NOT use markdown backticks.";

/// Outcome of one generation attempt. The fallback is carried as data rather
/// than as an error so the handler can always answer 200 with renderable
/// code, flagged via `isMock`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedCode {
    Provider(String),
    Fallback(String),
}

impl GeneratedCode {
    pub fn code(&self) -> &str {
        match self {
            GeneratedCode::Provider(code) | GeneratedCode::Fallback(code) => code,
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, GeneratedCode::Fallback(_))
    }
}
