pub(crate) fn title_href(id: i64) -> String {
    format!("/anime/{id}")
}

pub(crate) fn collection_href(name: &str) -> String {
    format!("/collectiondetail/{}", urlencoding::encode(name))
}

/// Route params may arrive percent-encoded; names are never allowed to contain `%`,
/// so decoding an already-decoded value is harmless.
pub(crate) fn decode_route_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

pub(crate) fn parse_title_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_href_roundtrip() {
        let href = collection_href("My List 2");
        assert_eq!(href, "/collectiondetail/My%20List%202");
        let segment = href.trim_start_matches("/collectiondetail/");
        assert_eq!(decode_route_segment(segment), "My List 2");
    }

    #[test]
    fn test_decode_route_segment_is_idempotent_for_names() {
        assert_eq!(decode_route_segment("My List 2"), "My List 2");
    }

    #[test]
    fn test_parse_title_id() {
        assert_eq!(parse_title_id("16498"), Some(16498));
        assert_eq!(parse_title_id("0"), None);
        assert_eq!(parse_title_id("abc"), None);
        assert_eq!(title_href(16498), "/anime/16498");
    }
}
