/// Umlaut-insensitive comparison form for entry fields:
/// ä→a, ö→o, ü→u, ß→ss after lowercasing.
pub fn normalize(text: &str) -> String {
    let mut s = text.to_lowercase();

    for (from, to) in [("ä", "a"), ("ö", "o"), ("ü", "u"), ("ß", "ss")] {
        s = s.replace(from, to);
    }

    s
}

/// Query-side form: additionally folds the ASCII digraph spellings
/// ae/oe/ue before the umlaut mapping, so "koennen" and "können"
/// both reach "konnen".
pub fn normalize_query(text: &str) -> String {
    let mut s = text.to_lowercase();

    for (from, to) in [("ae", "a"), ("oe", "o"), ("ue", "u")] {
        s = s.replace(from, to);
    }

    normalize(&s)
}

#[cfg(test)]
mod tests {
    use super::{normalize, normalize_query};
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_umlauts_and_sharp_s() {
        assert_eq!(normalize("können"), "konnen");
        assert_eq!(normalize("Straße"), "strasse");
        assert_eq!(normalize("Mädchen"), "madchen");
        assert_eq!(normalize("hören"), "horen");
    }

    #[test]
    fn query_folds_digraphs_too() {
        assert_eq!(normalize_query("koennen"), "konnen");
        assert_eq!(normalize_query("können"), "konnen");
        assert_eq!(normalize_query("mUEssen"), "mussen");
        assert_eq!(normalize_query("müssen"), "mussen");
    }

    #[test]
    fn plain_ascii_passes_through() {
        assert_eq!(normalize("gehen"), "gehen");
        assert_eq!(normalize_query("wer"), "wer");
    }
}
