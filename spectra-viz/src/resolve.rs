use crate::types::Band;

/// Finds the band a region name refers to.
///
/// Matching is case-insensitive and one-directional: the query must appear
/// inside the band name (`"ultra"` finds `"Ultraviolet"`, `"uvlamp"` finds
/// nothing). The first band in declared order wins.
pub fn resolve_band<'a>(query: &str, bands: &'a [Band]) -> Option<&'a Band> {
    let needle = query.to_lowercase();
    bands
        .iter()
        .find(|band| band.name.to_lowercase().contains(needle.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum_chart::EM_BANDS;

    #[test]
    fn test_exact_and_case_insensitive_names() {
        assert_eq!(resolve_band("Visible", &EM_BANDS).map(|b| b.name), Some("Visible"));
        assert_eq!(resolve_band("visible", &EM_BANDS).map(|b| b.name), Some("Visible"));
        assert_eq!(resolve_band("X-RAYS", &EM_BANDS).map(|b| b.name), Some("X-Rays"));
    }

    #[test]
    fn test_query_must_be_inside_band_name() {
        assert_eq!(
            resolve_band("ultra", &EM_BANDS).map(|b| b.name),
            Some("Ultraviolet")
        );
        assert_eq!(resolve_band("uvlamp", &EM_BANDS), None);
        assert_eq!(resolve_band("uv", &EM_BANDS), None);
        assert_eq!(resolve_band("Ultraviolet light", &EM_BANDS), None);
    }

    #[test]
    fn test_first_match_wins() {
        // "ra" is inside Radio, Infrared, X-Rays and Gamma Rays; Radio is declared first.
        assert_eq!(resolve_band("ra", &EM_BANDS).map(|b| b.name), Some("Radio"));
        assert_eq!(resolve_band("rays", &EM_BANDS).map(|b| b.name), Some("X-Rays"));
    }
}
