//! Gateway proxy path construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::{META_API_GROUP_NAME, META_API_VERSION_NAME};

/// Bytes that cannot appear literally in a URI path. `%` and `/` pass.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Cluster names are plain text, so a literal `%` is escaped as well.
const CLUSTER: &AsciiSet = &PATH.add(b'%');

/// Build the gateway path that proxies `original_path` to `cluster`.
///
/// Produces
/// `/apis/<group>/<version>/clustergateways/<cluster>/proxy/<original_path>`
/// with at most one leading `/` removed from `original_path`. The cluster
/// name keeps its `/` separators; characters a path cannot hold are
/// percent-encoded. Escapes already present in `original_path` are kept.
pub fn format_proxy_path(cluster: &str, original_path: &str) -> String {
    let original_path = original_path.strip_prefix('/').unwrap_or(original_path);
    let cluster = utf8_percent_encode(cluster, CLUSTER).to_string();
    let original_path = utf8_percent_encode(original_path, PATH).to_string();
    [
        "/apis",
        META_API_GROUP_NAME,
        META_API_VERSION_NAME,
        "clustergateways",
        &cluster,
        "proxy",
        &original_path,
    ]
    .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pods_path() {
        assert_eq!(
            format_proxy_path("cluster-a", "/api/v1/pods"),
            "/apis/cluster.core.oam.dev/v1alpha1/clustergateways/cluster-a/proxy/api/v1/pods"
        );
    }

    #[test]
    fn test_leading_slash_optional() {
        assert_eq!(format_proxy_path("c", "/a/b"), format_proxy_path("c", "a/b"));
    }

    #[test]
    fn test_strips_one_slash_only() {
        assert_eq!(
            format_proxy_path("c", "//a"),
            "/apis/cluster.core.oam.dev/v1alpha1/clustergateways/c/proxy//a"
        );
    }

    #[test]
    fn test_empty_and_root_paths() {
        let expected = "/apis/cluster.core.oam.dev/v1alpha1/clustergateways/c/proxy/";
        assert_eq!(format_proxy_path("c", ""), expected);
        assert_eq!(format_proxy_path("c", "/"), expected);
    }

    #[test]
    fn test_cluster_inserted_verbatim() {
        assert_eq!(
            format_proxy_path("a/b", "/x"),
            "/apis/cluster.core.oam.dev/v1alpha1/clustergateways/a/b/proxy/x"
        );
    }

    #[test]
    fn test_cluster_reserved_characters_are_escaped() {
        let prefix = "/apis/cluster.core.oam.dev/v1alpha1/clustergateways";
        assert_eq!(format_proxy_path("a#b", "/x"), format!("{prefix}/a%23b/proxy/x"));
        assert_eq!(format_proxy_path("a?b", "/x"), format!("{prefix}/a%3Fb/proxy/x"));
        assert_eq!(format_proxy_path("a b", "/x"), format!("{prefix}/a%20b/proxy/x"));
        assert_eq!(format_proxy_path("a%2Fb", "/x"), format!("{prefix}/a%252Fb/proxy/x"));
        assert_eq!(format_proxy_path("zürich", "/x"), format!("{prefix}/z%C3%BCrich/proxy/x"));
    }

    #[test]
    fn test_existing_escapes_in_path_are_kept() {
        assert_eq!(
            format_proxy_path("c", "/api/v1/namespaces/a%20b/pods"),
            "/apis/cluster.core.oam.dev/v1alpha1/clustergateways/c/proxy/api/v1/namespaces/a%20b/pods"
        );
        assert_eq!(
            format_proxy_path("c", "/x/{y}"),
            "/apis/cluster.core.oam.dev/v1alpha1/clustergateways/c/proxy/x/%7By%7D"
        );
    }
}
