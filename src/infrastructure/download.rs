// Attachment response for generated source export
use crate::domain::generation::GenerationResult;
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};

/// Byte-identical copy of the generated source, offered as a download under
/// `generated_code.<extension>`.
pub fn source_download_response(result: &GenerationResult) -> Result<Response<Body>, StatusCode> {
    let bytes = result.source_text.clone().into_bytes();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&format!(
                "attachment; filename=\"{}\"",
                result.download_filename()
            ))
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?,
        )
        .header(
            header::CONTENT_LENGTH,
            HeaderValue::from_str(&bytes.len().to_string()).unwrap(),
        )
        .body(Body::from(bytes))
        .map_err(|e| {
            eprintln!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::TargetLanguage;

    #[test]
    fn test_download_headers() {
        let result = GenerationResult::new(
            "class Bms {}".to_string(),
            TargetLanguage::Kotlin,
            "gemini-1.5-flash".to_string(),
        );
        let response = source_download_response(&result).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"generated_code.kt\""
        );
        assert_eq!(response.headers().get(header::CONTENT_LENGTH).unwrap(), "12");
    }
}
