use std::path::{Path, PathBuf};

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Whether the file looks like one of the accepted image types
pub fn is_image(path: &Path, accepted: &[String]) -> bool {
    let Some(ext) = extension(path) else {
        return false
    };
    accepted.iter().any(|a| a.eq_ignore_ascii_case(&ext))
}

fn mime_type(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_url(path: &Path, data: &[u8]) -> String {
    use base64::{engine::general_purpose, Engine as _};
    let string = general_purpose::STANDARD.encode(data);
    format!("data:{};base64,{string}", mime_type(path))
}

/// Read a file into a `data:` url
pub async fn read_image_data_url(path: PathBuf) -> Result<String, String> {
    let data = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Could not read {}: {e:?}", path.display()))?;
    Ok(encode_data_url(&path, &data))
}

pub fn open_file_dialog(directory: &str, extensions: &[String]) -> Option<PathBuf> {
    use rfd::FileDialog;
    FileDialog::new()
        .add_filter("image", extensions)
        .set_directory(directory)
        .pick_file()
}
