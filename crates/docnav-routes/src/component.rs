//! Route component identifiers.

use sha2::{Digest, Sha256};

/// Components a route can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKey {
    DocsRoot,
    DocVersionRoot,
    DocRoot,
    DocItem,
    NotFound,
    DebugHome,
    DebugConfig,
    DebugContent,
    DebugGlobalData,
    DebugMetadata,
    DebugRegistry,
    DebugRoutes,
}

impl ComponentKey {
    /// Theme module path of the component.
    pub fn module(self) -> &'static str {
        match self {
            Self::DocsRoot => "@theme/DocsRoot",
            Self::DocVersionRoot => "@theme/DocVersionRoot",
            Self::DocRoot => "@theme/DocRoot",
            Self::DocItem => "@theme/DocItem",
            Self::NotFound => "@theme/NotFound",
            Self::DebugHome => "@theme/DebugHome",
            Self::DebugConfig => "@theme/DebugConfig",
            Self::DebugContent => "@theme/DebugContent",
            Self::DebugGlobalData => "@theme/DebugGlobalData",
            Self::DebugMetadata => "@theme/DebugMetadata",
            Self::DebugRegistry => "@theme/DebugRegistry",
            Self::DebugRoutes => "@theme/DebugRoutes",
        }
    }
}

/// Stable per-route component identifier.
///
/// Format: `<module>#<hash>`, where hash is the first 3 bytes (6 hex chars)
/// of SHA-256 over `"{path}:{module}:{doc_id}"` (empty `doc_id` for
/// non-document routes).
pub fn component_ref(path: &str, component: ComponentKey, doc_id: Option<&str>) -> String {
    let module = component.module();
    let content = format!("{path}:{module}:{}", doc_id.unwrap_or_default());
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    format!("{module}#{}", hex::encode(&digest[..3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_ref_format() {
        let r = component_ref("/intro", ComponentKey::DocItem, Some("intro"));
        let (module, hash) = r.split_once('#').unwrap();
        assert_eq!(module, "@theme/DocItem");
        assert_eq!(hash.len(), 6);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_component_ref_stable() {
        assert_eq!(
            component_ref("/arrays", ComponentKey::DocItem, Some("arrays")),
            component_ref("/arrays", ComponentKey::DocItem, Some("arrays"))
        );
    }

    #[test]
    fn test_component_ref_depends_on_inputs() {
        let base = component_ref("/arrays", ComponentKey::DocItem, Some("arrays"));
        assert_ne!(
            base,
            component_ref("/m/arrays", ComponentKey::DocItem, Some("arrays"))
        );
        assert_ne!(
            base,
            component_ref("/arrays", ComponentKey::DocItem, Some("graphs"))
        );
    }
}
