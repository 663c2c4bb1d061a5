//! The meal analysis client.

use std::path::Path;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

use crate::error::RepkitError;

use super::MealAnalysis;

const ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

const PROMPT: &str = "Analyze this meal. Provide a JSON response with these fields: \
    foodName (string), calories (estimated number), protein (string), carbs (string), \
    fats (string), healthScore (number 1-10), quickTip (string).";

/// Client for the meal analysis endpoint.
pub struct MealAnalyzer {
    client: reqwest::blocking::Client,
    api_key: Option<String>,
}

impl MealAnalyzer {
    /// Create an analyzer, resolving the API key from config or the
    /// `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config_key: Option<String>) -> Result<Self, RepkitError> {
        let key = config_key.or_else(|| std::env::var("GEMINI_API_KEY").ok());
        Self::with_key(key)
    }

    /// Create an analyzer with an explicit key (or none).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_key(api_key: Option<String>) -> Result<Self, RepkitError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RepkitError::Nutrition(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, api_key })
    }

    /// Analyze a meal photo.
    ///
    /// A missing or unreadable image is a real error; everything past that
    /// point (no key, network trouble, a malformed response) degrades to
    /// [`MealAnalysis::fallback`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the image file cannot be read.
    pub fn analyze(&self, image_path: &Path) -> Result<MealAnalysis, RepkitError> {
        let image = std::fs::read(image_path).map_err(RepkitError::Io)?;

        match self.request(&image, mime_for_path(image_path)) {
            Ok(analysis) => Ok(analysis),
            Err(e) => {
                log::warn!("meal analysis failed, using fallback estimate: {e}");
                Ok(MealAnalysis::fallback())
            }
        }
    }

    fn request(&self, image: &[u8], mime_type: &str) -> Result<MealAnalysis, RepkitError> {
        let key = self
            .api_key
            .as_ref()
            .ok_or_else(|| RepkitError::Nutrition("no API key configured".to_string()))?;

        let body = json!({
            "contents": [{
                "parts": [
                    { "inline_data": { "mime_type": mime_type, "data": STANDARD.encode(image) } },
                    { "text": PROMPT }
                ]
            }],
            "generationConfig": { "response_mime_type": "application/json" }
        });

        let response = self
            .client
            .post(format!("{ENDPOINT}?key={key}"))
            .json(&body)
            .send()
            .map_err(|e| RepkitError::Nutrition(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| RepkitError::Nutrition(format!("request rejected: {e}")))?;

        let payload: serde_json::Value = response
            .json()
            .map_err(|e| RepkitError::Nutrition(format!("invalid response body: {e}")))?;

        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| RepkitError::Nutrition("unexpected response shape".to_string()))?;

        Ok(serde_json::from_str(text)?)
    }
}

/// Pick the mime type to declare for an image file.
fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("photo")), "image/jpeg");
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let analyzer = MealAnalyzer::with_key(None).unwrap();
        let result = analyzer.analyze(Path::new("/nonexistent/meal.jpg"));
        assert!(matches!(result, Err(RepkitError::Io(_))));
    }

    #[test]
    fn test_no_api_key_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not really a jpeg").unwrap();

        let analyzer = MealAnalyzer::with_key(None).unwrap();
        let analysis = analyzer.analyze(file.path()).unwrap();

        assert_eq!(analysis, MealAnalysis::fallback());
    }
}
