use std::collections::HashSet;
use std::sync::LazyLock;

const US_STATE_ABBRS: &[&str] = &[
    "al", "ak", "az", "ar", "ca", "co", "ct", "de", "fl", "ga", "hi", "id", "il", "in", "ia",
    "ks", "ky", "la", "me", "md", "ma", "mi", "mn", "ms", "mo", "mt", "ne", "nv", "nh", "nj",
    "nm", "ny", "nc", "nd", "oh", "ok", "or", "pa", "ri", "sc", "sd", "tn", "tx", "ut", "vt",
    "va", "wa", "wv", "wi", "wy", "dc",
];

const US_STATE_NAMES: &[&str] = &[
    "alabama", "alaska", "arizona", "arkansas", "california", "colorado", "connecticut",
    "delaware", "florida", "georgia", "hawaii", "idaho", "illinois", "indiana", "iowa",
    "kansas", "kentucky", "louisiana", "maine", "maryland", "massachusetts", "michigan",
    "minnesota", "mississippi", "missouri", "montana", "nebraska", "nevada", "new hampshire",
    "new jersey", "new mexico", "new york", "north carolina", "north dakota", "ohio",
    "oklahoma", "oregon", "pennsylvania", "rhode island", "south carolina", "south dakota",
    "tennessee", "texas", "utah", "vermont", "virginia", "washington", "west virginia",
    "wisconsin", "wyoming",
];

const COUNTRY_ABBRS: &[&str] = &[
    "us", "usa", "uk", "gb", "de", "fr", "es", "it", "nl", "be", "ch", "at", "se", "no", "dk",
    "fi", "ie", "pt", "pl", "cz", "ro", "hu", "gr", "ca", "mx", "br", "ar", "cl", "co", "au",
    "nz", "jp", "cn", "kr", "in", "sg", "hk", "tw", "il", "ae", "sa", "za", "ng", "eg", "tr",
    "ru", "ua", "ee", "lv", "lt",
];

const COUNTRY_NAMES: &[&str] = &[
    "united states", "united states of america", "america", "united kingdom", "england",
    "scotland", "wales", "ireland", "germany", "france", "spain", "italy", "netherlands",
    "belgium", "switzerland", "austria", "sweden", "norway", "denmark", "finland", "portugal",
    "poland", "czechia", "czech republic", "romania", "hungary", "greece", "canada", "mexico",
    "brazil", "argentina", "chile", "colombia", "australia", "new zealand", "japan", "china",
    "south korea", "korea", "india", "singapore", "hong kong", "taiwan", "israel",
    "united arab emirates", "saudi arabia", "south africa", "nigeria", "egypt", "turkey",
    "russia", "ukraine", "estonia", "latvia", "lithuania",
];

static REGIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    US_STATE_ABBRS
        .iter()
        .chain(US_STATE_NAMES)
        .chain(COUNTRY_ABBRS)
        .chain(COUNTRY_NAMES)
        .copied()
        .collect()
});

fn is_region(s: &str) -> bool {
    REGIONS.contains(s.trim().to_lowercase().as_str())
}

/// Heuristic: does this string denote a geography (city/state/country)?
///
/// Two rules: a "City, Region" shape where the part after the first comma is a
/// known state/country, or a string whose every token is a known region word.
/// Used to veto title/company candidates that are really address fragments.
pub fn is_location(s: &str) -> bool {
    let s = s.trim().trim_matches(|c: char| c == '.' || c == ';');
    if s.is_empty() {
        return false;
    }

    if is_region(s) {
        return true;
    }

    // "Austin, TX" / "Berlin, Germany" / "Remote, Germany"
    if let Some((_, rest)) = s.split_once(',') {
        if is_region(rest) {
            return true;
        }
    }

    // "TX USA", "Germany" etc: all tokens are region words
    let tokens: Vec<String> = s
        .split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect();
    !tokens.is_empty() && tokens.iter().all(|t| REGIONS.contains(t.as_str()))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_state_pairs() {
        assert!(is_location("Austin, TX"));
        assert!(is_location("Berlin, Germany"));
        assert!(is_location("Remote, Germany"));
        assert!(is_location("New York, NY"));
    }

    #[test]
    fn bare_regions() {
        assert!(is_location("TX"));
        assert!(is_location("Germany"));
        assert!(is_location("United States"));
        assert!(is_location("tx usa"));
    }

    #[test]
    fn non_locations() {
        assert!(!is_location("Acme Corp"));
        assert!(!is_location("Senior Backend Engineer"));
        assert!(!is_location("Widgets, Inc"));
        assert!(!is_location(""));
    }

    #[test]
    fn unknown_city_alone_is_not_a_location() {
        // Cities are only recognized through the "City, Region" shape.
        assert!(!is_location("Austin"));
        assert!(!is_location("Berlin office"));
    }
}
