/// Why an asset could not be resolved.
#[derive(Debug)]
pub enum AssetError {
    /// No asset with this name exists.
    ResourceNotFound { name: String },
    /// The asset exists but could not be decoded.
    Decode { name: String, reason: String },
    /// A font could not be loaded at the requested size.
    Font { path: String, reason: String },
    /// The asset manifest itself is malformed.
    Manifest(serde_json::Error),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::ResourceNotFound { name } => write!(f, "asset not found: {name}"),
            AssetError::Decode { name, reason } => write!(f, "failed to decode {name}: {reason}"),
            AssetError::Font { path, reason } => write!(f, "failed to load font {path}: {reason}"),
            AssetError::Manifest(e) => write!(f, "invalid asset manifest: {e}"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Manifest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(e: serde_json::Error) -> Self {
        AssetError::Manifest(e)
    }
}

impl AssetError {
    pub fn not_found(name: impl Into<String>) -> Self {
        AssetError::ResourceNotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_asset() {
        let err = AssetError::not_found("sky.png");
        assert_eq!(err.to_string(), "asset not found: sky.png");

        let err = AssetError::Decode { name: "jetpack.png".into(), reason: "bad crc".into() };
        assert!(err.to_string().contains("jetpack.png"));
    }

    #[test]
    fn manifest_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AssetError = json_err.into();
        assert!(matches!(err, AssetError::Manifest(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
