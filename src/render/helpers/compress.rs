//! PDF compression helper
//!
//! Uses lopdf to compress PDF streams after printpdf generates uncompressed output.

use std::io::Cursor;

/// Compress PDF streams to reduce file size.
///
/// printpdf writes its content streams uncompressed; this parses the bytes
/// with lopdf, deflates every stream and re-saves.
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, String> {
    let mut doc = lopdf::Document::load_mem(uncompressed)
        .map_err(|e| format!("Failed to parse PDF for compression: {}", e))?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| format!("Failed to save compressed PDF: {}", e))?;

    Ok(output.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage() {
        assert!(compress_pdf(b"not a pdf").is_err());
    }
}
