//! Canned generation results used whenever the provider path is skipped or
//! fails. Pure data, no I/O, so a provider outage never becomes a user-facing
//! error.

use crate::models::OutputMode;

pub fn mock_code(mode: OutputMode) -> &'static str {
    match mode {
        OutputMode::Html => MOCK_HTML,
        OutputMode::React => MOCK_REACT,
    }
}

const MOCK_HTML: &str = r#"<div class="min-h-screen bg-gray-50 flex items-center justify-center p-4 sm:p-8">
  <div class="max-w-md w-full bg-white rounded-2xl shadow-sm border border-gray-200 overflow-hidden">
    <img class="w-full h-48 object-cover" src="https://placehold.co/600x400" alt="Uploaded screenshot" />
    <div class="p-6">
      <h2 class="text-xl font-bold text-gray-900 mb-2">Interpreted Layout</h2>
      <p class="text-gray-500 mb-4">Sample card standing in for the generated markup. The AI provider was unavailable for this request.</p>
      <button class="px-4 py-2 rounded-lg bg-blue-600 text-white font-medium">Action</button>
    </div>
  </div>
</div>"#;

const MOCK_REACT: &str = r#"function GeneratedComponent() {
  return (
    <div className="min-h-screen bg-gray-50 flex items-center justify-center p-4 sm:p-8">
      <div className="max-w-md w-full bg-white rounded-2xl shadow-sm border border-gray-200 p-6">
        <img className="w-full h-48 object-cover rounded-lg mb-4" src="https://placehold.co/600x400" alt="Uploaded screenshot" />
        <h2 className="text-xl font-bold text-gray-900 mb-2">Interpreted Layout</h2>
        <p className="text-gray-500 mb-4">Sample component standing in for the generated code. The AI provider was unavailable for this request.</p>
        <button className="px-4 py-2 rounded-lg bg-blue-600 text-white font-medium">Action</button>
      </div>
    </div>
  );
}"#;
