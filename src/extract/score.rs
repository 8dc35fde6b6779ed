use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::clean::{clean_company, clean_title};
use super::geo;
use super::{Candidate, Field};

// Role nouns and domain terms that mark a line as title-like.
static ROLE_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)\b(?:
            engineer|engineering|developer|programmer|architect|manager|director|head|
            officer|lead|analyst|scientist|designer|consultant|specialist|coordinator|
            administrator|accountant|recruiter|marketer|writer|editor|researcher|
            intern(?:ship)?|devops|sre|qa|tester|counsel|technician|
            software|frontend|backend|fullstack|full-stack|mobile|cloud|security|
            data|product|sales|marketing|support|success|operations|ops
        )\b",
    )
    .unwrap()
});

// Common exact titles that get a confidence bump once cleaned.
const PREFERRED_ROLES: &[&str] = &[
    "software engineer",
    "software developer",
    "backend engineer",
    "backend developer",
    "frontend engineer",
    "frontend developer",
    "full stack engineer",
    "full stack developer",
    "web developer",
    "mobile developer",
    "ios developer",
    "android developer",
    "data analyst",
    "data scientist",
    "data engineer",
    "machine learning engineer",
    "devops engineer",
    "site reliability engineer",
    "security engineer",
    "cloud engineer",
    "qa engineer",
    "product manager",
    "project manager",
    "engineering manager",
    "product designer",
    "ux designer",
    "ui designer",
    "business analyst",
    "marketing manager",
    "sales manager",
    "account executive",
    "customer success manager",
    "technical writer",
    "solutions architect",
];

// Section labels and page furniture that are never a real title.
const BANNED_TITLES: &[&str] = &[
    "seniority",
    "title",
    "job title",
    "role",
    "position",
    "location",
    "department",
    "company",
    "team",
    "careers",
    "hiring",
    "remote",
    "hybrid",
    "salary",
    "benefits",
    "requirements",
    "responsibilities",
    "qualifications",
    "about",
    "about us",
    "about the role",
    "about the team",
    "about the company",
    "the role",
    "the team",
    "who we are",
    "what you'll do",
    "overview",
    "description",
    "apply",
    "apply now",
];

const FILLER_WORDS: &[&str] = &["the", "a", "an", "our", "we", "i"];

// Lowercase words allowed inside an otherwise title-cased phrase.
const LOWER_CONNECTORS: &[&str] = &[
    "of", "and", "for", "to", "in", "on", "with", "the", "a", "an", "or",
];

static VERB_CUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:is|are|seeking|hiring|looking|need|needs|join|build|help|drive|lead)\b")
        .unwrap()
});

static EMAIL_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://|www\.|\S@\S").unwrap());

static LEGAL_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:inc|llc|ltd|corp|gmbh|plc|pte|bv|sas)\b\.?|\bs\.a\.?(?:\s|$)").unwrap()
});

static TRAILING_DEPT_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:team|department|dept|group|program|studio|lab|labs|division|unit)$")
        .unwrap()
});

static TRAILING_COMMA_CAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*[A-Z][A-Za-z]*$").unwrap());

pub(super) fn contains_role_keyword(s: &str) -> bool {
    ROLE_KEYWORD_RE.is_match(s)
}

pub(super) fn has_verb_cue(s: &str) -> bool {
    VERB_CUE_RE.is_match(s)
}

/// At least 60% of words are capitalized or an allowed lowercase connector.
pub(super) fn is_title_cased(s: &str) -> bool {
    let words: Vec<&str> = s.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }
    let good = words
        .iter()
        .filter(|w| {
            let w = w.trim_matches(|c: char| !c.is_alphanumeric());
            w.chars().next().is_some_and(|c| c.is_uppercase())
                || LOWER_CONNECTORS.contains(&w.to_lowercase().as_str())
        })
        .count();
    good * 10 >= words.len() * 6
}

fn starts_with_filler(s: &str) -> bool {
    s.split_whitespace()
        .next()
        .map(|w| FILLER_WORDS.contains(&w.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub(super) fn is_banned_title(cleaned: &str) -> bool {
    BANNED_TITLES.contains(&cleaned.trim().to_lowercase().as_str())
}

/// Admissibility check for a company candidate, independent of score.
/// The location veto also looks at the raw match: cleaning cuts at the first
/// comma, which would otherwise hide a "City, Region" shape.
fn company_plausible(raw: &str, cleaned: &str) -> bool {
    if cleaned.len() < 2 {
        return false;
    }
    if EMAIL_URL_RE.is_match(cleaned) {
        return false;
    }
    if starts_with_filler(cleaned) {
        return false;
    }
    if has_verb_cue(cleaned) {
        return false;
    }
    if geo::is_location(cleaned) || geo::is_location(raw) {
        return false;
    }
    if cleaned.split_whitespace().count() > 6 {
        return false;
    }
    if !cleaned
        .split_whitespace()
        .any(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
    {
        return false;
    }
    cleaned.chars().any(|c| c.is_alphabetic())
}

fn title_score(raw: &str, cleaned: &str, base: i32) -> i32 {
    let mut score = base;
    if contains_role_keyword(raw) {
        score += 3;
    }
    if is_title_cased(raw) {
        score += 2;
    }
    if starts_with_filler(raw) {
        score -= 4;
    }
    if raw.split_whitespace().count() > 10 {
        score -= 3;
    }
    if !raw.chars().next().is_some_and(|c| c.is_uppercase()) {
        score -= 2;
    }
    let folded = cleaned.to_lowercase();
    if PREFERRED_ROLES.iter().any(|r| folded.contains(r)) {
        score += 5;
    }
    // Heavy cleaning usually means the match was mostly junk.
    if cleaned.chars().count() * 2 < raw.trim().chars().count() {
        score -= 1;
    }
    score
}

fn company_score(cleaned: &str, base: i32) -> i32 {
    let mut score = base;
    if LEGAL_SUFFIX_RE.is_match(cleaned) {
        score += 3;
    }
    if is_title_cased(cleaned) {
        score += 2;
    }
    if cleaned.split_whitespace().count() > 4 {
        score -= 2;
    }
    if TRAILING_DEPT_WORD_RE.is_match(cleaned) {
        score -= 2;
    }
    let alpha: Vec<char> = cleaned.chars().filter(|c| c.is_alphabetic()).collect();
    if !alpha.is_empty()
        && (alpha.iter().all(|c| c.is_uppercase()) || alpha.iter().all(|c| c.is_lowercase()))
    {
        score -= 1;
    }
    if TRAILING_COMMA_CAP_RE.is_match(cleaned) {
        score -= 2;
    }
    if cleaned.chars().count() > 40 {
        score -= 3;
    }
    score
}

/// Pick the best admissible title. Strict `>` keeps the first-generated
/// candidate on ties.
pub fn select_title(candidates: &[Candidate]) -> Option<String> {
    let mut best: Option<(String, i32)> = None;
    for cand in candidates {
        debug_assert_eq!(cand.field, Field::Title);
        let cleaned = clean_title(&cand.raw);
        if cleaned.is_empty() || is_banned_title(&cleaned) {
            continue;
        }
        let score = title_score(&cand.raw, &cleaned, cand.base_score);
        trace!(rule = cand.rule, %cleaned, score, "title candidate");
        if best.as_ref().map_or(true, |(_, s)| score > *s) {
            best = Some((cleaned, score));
        }
    }
    best.map(|(t, _)| t)
}

/// Pick the best admissible company, same tie-break as [`select_title`].
pub fn select_company(candidates: &[Candidate]) -> Option<String> {
    let mut best: Option<(String, i32)> = None;
    for cand in candidates {
        debug_assert_eq!(cand.field, Field::Company);
        let cleaned = clean_company(&cand.raw);
        if cleaned.is_empty() || !company_plausible(&cand.raw, &cleaned) {
            continue;
        }
        let score = company_score(&cleaned, cand.base_score);
        trace!(rule = cand.rule, %cleaned, score, "company candidate");
        if best.as_ref().map_or(true, |(_, s)| score > *s) {
            best = Some((cleaned, score));
        }
    }
    best.map(|(c, _)| c)
}

// ── Tests ──
