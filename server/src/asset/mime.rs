//! Content type lookup for served assets

/// Returns the content type for a file name based on its extension.
/// Unknown extensions fall back to `application/octet-stream`.
pub fn content_type_for(file_name: &str) -> &'static str {
	let extension = file_name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or_default();

	match extension.to_ascii_lowercase().as_str() {
		"png" => "image/png",
		"svg" => "image/svg+xml",
		"webp" => "image/webp",
		"woff" => "font/woff",
		"woff2" => "font/woff2",
		"otf" => "font/otf",
		"ttf" => "font/ttf",
		"eot" => "application/vnd.ms-fontobject",
		_ => "application/octet-stream",
	}
}


// vim: ts=4
