use crate::error::AssetError;

/// Fetches the remotely hosted profile picture shown on the About panel.
///
/// One-shot GET; the caller turns a failure into the broken-image fallback.
pub async fn fetch_profile_image(url: &'static str) -> Result<Vec<u8>, AssetError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| AssetError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AssetError::BadStatus(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AssetError::BodyRead(e.to_string()))?;

    Ok(bytes.to_vec())
}
