use std::sync::LazyLock;

use regex::Regex;

use super::geo;

// Trailing clauses that describe the role rather than name it.
static TRAILING_FILLER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\s+who\s+is\b.*$",
        r"(?i)\s+with\s+experience\b.*$",
        r"(?i)\s+to\s+join\b.*$",
        r"(?i)[,\s]+asap\b.*$",
        r"(?i)\s+based\s+in\b.*$",
        // "to support/build/keep/…": a lowercase verb after "to" starts a purpose clause
        r"\s+to\s+[a-z].*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static TRAILING_PREP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:at|with|for|in)\s+\S.*$").unwrap());

static SEP_LOWERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:[-–—]|:)\s+[a-z].*$").unwrap());

static LEADING_TITLE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:hiring|job\s*title|title|role|position|job)\s*:\s*").unwrap());

static SENTENCE_CUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)[.!?]\s.*$").unwrap());

static URL_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://\S+|www\.\S+|\S+@\S+\.\S+").unwrap()
});

static LEADING_COMPANY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:company(?:\s*name)?|employer|organization|org)\s*[:\-]\s*").unwrap()
});

static UI_ARTIFACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:logo|see\s+jobs|view\s+jobs|view\s+profile|follow)\b").unwrap()
});

static TRAILING_DEPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:team|department|dept|group|program|studio|lab|labs|division|unit)\s*$")
        .unwrap()
});

// Phrases postings use in place of an actual title.
const GENERIC_FILLERS: &[&str] = &[
    "member of the team",
    "member of our team",
    "part of the team",
    "part of our team",
    "team member",
    "new team member",
    "rockstar",
    "superstar",
];

const TRIM_CHARS: &[char] = &[
    ',', ';', ':', '|', '-', '–', '—', '.', '"', '\'', '(', ')', '?', '!', '*', '#',
];

const MAX_TITLE_WORDS: usize = 8;

/// Reduce a raw title candidate to a short display-ready phrase.
/// Idempotent: cleaning a cleaned title is a no-op.
pub fn clean_title(raw: &str) -> String {
    let mut cur = raw.trim().to_string();
    // Some steps (word truncation, location peeling) can expose new trailing
    // clauses, so the pass runs to a fixpoint.
    for _ in 0..6 {
        let next = clean_title_once(&cur);
        if next == cur {
            break;
        }
        cur = next;
    }
    cur
}

fn clean_title_once(s: &str) -> String {
    let mut s = s.trim().to_string();

    for re in TRAILING_FILLER_RES.iter() {
        s = re.replace(&s, "").to_string();
    }
    s = TRAILING_PREP_RE.replace(&s, "").to_string();

    // ", Austin, TX" / ", Berlin, Germany"
    if let Some((left, rest)) = s.split_once(',') {
        if geo::is_location(rest) {
            s = left.to_string();
        }
    }

    let folded = s.trim().to_lowercase();
    if GENERIC_FILLERS.contains(&folded.as_str()) {
        return String::new();
    }

    // A lowercase continuation after a dash/colon is descriptive text.
    s = SEP_LOWERCASE_RE.replace(&s, "").to_string();
    s = LEADING_TITLE_LABEL_RE.replace(&s, "").to_string();
    s = SENTENCE_CUT_RE.replace(&s, "").to_string();

    let mut words: Vec<&str> = s.split_whitespace().take(MAX_TITLE_WORDS).collect();

    // Peel trailing location fragments ("TX", "Germany", "New York").
    loop {
        match words.last() {
            Some(last) if geo::is_location(last.trim_matches(TRIM_CHARS)) => {
                words.pop();
            }
            Some(_) if words.len() >= 2 => {
                let pair = format!("{} {}", words[words.len() - 2], words[words.len() - 1]);
                if geo::is_location(pair.trim_matches(TRIM_CHARS)) {
                    words.pop();
                    words.pop();
                } else {
                    break;
                }
            }
            _ => break,
        }
    }

    words
        .join(" ")
        .trim_matches(|c: char| c.is_whitespace() || TRIM_CHARS.contains(&c))
        .to_string()
}

/// Reduce a raw company candidate to a bare organization name.
/// Idempotent like [`clean_title`].
pub fn clean_company(raw: &str) -> String {
    let mut cur = raw.trim().to_string();
    for _ in 0..6 {
        let next = clean_company_once(&cur);
        if next == cur {
            break;
        }
        cur = next;
    }
    cur
}

fn clean_company_once(s: &str) -> String {
    let mut s = URL_EMAIL_RE.replace_all(s, "").to_string();
    s = s.replace(['®', '™', '©'], "");
    s = LEADING_COMPANY_LABEL_RE.replace(&s, "").to_string();
    s = UI_ARTIFACT_RE.replace_all(&s, "").to_string();
    s = SEP_LOWERCASE_RE.replace(&s, "").to_string();
    s = TRAILING_DEPT_RE.replace(&s, "").to_string();

    // First segment only: "Acme | Berlin", "Acme / Austin"
    if let Some(idx) = s.find(['|', ',', '/']) {
        s.truncate(idx);
    }

    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c.is_whitespace() || TRIM_CHARS.contains(&c))
        .to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_strips_trailing_clauses() {
        assert_eq!(
            clean_title("Senior Backend Engineer to join our team in Berlin"),
            "Senior Backend Engineer"
        );
        assert_eq!(
            clean_title("Data Analyst with experience in SQL"),
            "Data Analyst"
        );
        assert_eq!(clean_title("DevOps Engineer ASAP!"), "DevOps Engineer");
        assert_eq!(
            clean_title("Product Manager based in Austin, TX"),
            "Product Manager"
        );
    }

    #[test]
    fn title_strips_prepositional_tail() {
        assert_eq!(clean_title("Data Analyst in Austin, TX"), "Data Analyst");
        assert_eq!(clean_title("Software Engineer at Google"), "Software Engineer");
        assert_eq!(clean_title("Designer for Mobile Apps"), "Designer");
    }

    #[test]
    fn title_strips_label_and_sentence() {
        assert_eq!(clean_title("Role: Staff Engineer"), "Staff Engineer");
        assert_eq!(
            clean_title("Senior Engineer. Apply today"),
            "Senior Engineer"
        );
        assert_eq!(
            clean_title("Backend Engineer - you will own the platform"),
            "Backend Engineer"
        );
    }

    #[test]
    fn title_generic_filler_becomes_empty() {
        assert_eq!(clean_title("member of the team"), "");
        assert_eq!(clean_title("Part of our team"), "");
    }

    #[test]
    fn title_truncates_and_peels_locations() {
        assert_eq!(clean_title("Engineer, Berlin, Germany"), "Engineer");
        assert_eq!(clean_title("Engineer Germany"), "Engineer");
        let long = "One Two Three Four Five Six Seven Eight Nine Ten";
        assert!(clean_title(long).split_whitespace().count() <= 8);
    }

    #[test]
    fn title_clean_is_idempotent() {
        for raw in [
            "Senior Backend Engineer to join our team ASAP",
            "Data Analyst in Austin, TX",
            "Role: Staff Engineer - you will build things. Apply now!",
            "Engineer, Berlin, Germany",
            "  Product   Manager  ",
        ] {
            let once = clean_title(raw);
            assert_eq!(clean_title(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn company_strips_labels_glyphs_and_artifacts() {
        assert_eq!(clean_company("Company: Acme Corp"), "Acme Corp");
        assert_eq!(clean_company("Acme™"), "Acme");
        assert_eq!(clean_company("Acme logo"), "Acme");
        assert_eq!(clean_company("Acme see jobs"), "Acme");
    }

    #[test]
    fn company_cuts_descriptive_tail_and_segments() {
        assert_eq!(clean_company("Acme - building the future"), "Acme");
        assert_eq!(clean_company("Acme | Berlin office"), "Acme");
        assert_eq!(clean_company("Acme, Inc."), "Acme");
        assert_eq!(clean_company("Acme Robotics Team"), "Acme Robotics");
    }

    #[test]
    fn company_strips_urls_and_emails() {
        assert_eq!(clean_company("Acme https://acme.example"), "Acme");
        assert_eq!(clean_company("jobs@acme.example Acme"), "Acme");
    }

    #[test]
    fn company_clean_is_idempotent() {
        for raw in [
            "Company: Acme Corp®",
            "Acme | Berlin - hiring now",
            "Widgets Inc",
            "Acme Labs",
        ] {
            let once = clean_company(raw);
            assert_eq!(clean_company(&once), once, "not idempotent for {raw:?}");
        }
    }
}
