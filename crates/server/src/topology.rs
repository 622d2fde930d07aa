/// Extracts the topology name from a gateway request path.
///
/// The raw path is split on `/` and the segment at index 2 names the
/// topology: `/gateway/sales/ranger` targets `sales`. Fewer than three
/// segments yield `None`, as does a missing path. Empty segments from
/// doubled separators are passed through untouched.
pub(crate) fn topology_name(source_url: Option<&str>) -> Option<&str> {
    source_url.map(str::trim).and_then(|url| url.split('/').nth(2))
}

#[cfg(test)]
mod tests {
    use super::topology_name;

    #[test]
    fn returns_the_segment_at_index_two() {
        assert_eq!(topology_name(Some("/gateway/mytopo/hive/tables")), Some("mytopo"));
        assert_eq!(topology_name(Some("/gw/sales/ranger")), Some("sales"));
    }

    #[test]
    fn short_paths_have_no_topology() {
        assert_eq!(topology_name(Some("/gateway")), None);
        assert_eq!(topology_name(Some("/")), None);
        assert_eq!(topology_name(Some("")), None);
    }

    #[test]
    fn missing_path_has_no_topology() {
        assert_eq!(topology_name(None), None);
    }

    #[test]
    fn empty_segments_are_passed_through() {
        assert_eq!(topology_name(Some("/gateway//hive")), Some(""));
        assert_eq!(topology_name(Some("//sales/hive")), Some("sales"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(topology_name(Some("  /gateway/sales/hive ")), Some("sales"));
    }
}
