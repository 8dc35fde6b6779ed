use std::sync::LazyLock;

use regex::Regex;

use super::score::{contains_role_keyword, has_verb_cue, is_banned_title, is_title_cased};
use super::{Candidate, Field};

// Only the top of a posting is structurally meaningful.
const STRUCTURAL_WINDOW: usize = 5;
const JOIN_WINDOW: usize = 12;
const PLACEHOLDER_LOOKAHEAD: usize = 5;

const SEPARATORS: &[&str] = &[" - ", " – ", " — ", " | ", ":"];

static TITLE_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(job\s*title|position|title|role)\s*[:\-]\s*(.{2,})$").unwrap()
});

static COMPANY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(company(?:\s*name)?|employer|organization|org)\s*[:\-]\s*(.{2,})$").unwrap()
});

static LOOKING_FOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\blooking\s+for\s+an?\s+([^.!?\n]{2,})").unwrap());

static AS_A_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bas\s+an?\s+([^.!?\n]{2,})").unwrap());

static AT_SIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)@\s*([A-Z][\w&.'-]*(?:\s+[A-Z][\w&.'-]*)*)").unwrap()
});

static AT_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[Aa]t\s+([A-Z][\w&.'-]*(?:\s+[A-Z][\w&.'-]*)*)").unwrap()
});

// "at The Office" style continuations are not company names.
const AT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "scale", "least", "most", "all", "this", "that", "your", "our",
];

static CAREERS_AT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^careers\s+at\s+(.{2,})$").unwrap());

static JOIN_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^join\s+(.{2,})$").unwrap());

static JOIN_AS_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+as\s+an?\s.*$").unwrap());

static HIRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.{2,}?)\s+(?:is|are)\s+(?:hiring|seeking)\b[:!.]?\s*(?:for\s+)?(?:an?\s+)?(.*)$")
        .unwrap()
});

static JOIN_AS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bjoin\s+(.{2,}?)\s+as\s+an?\s+([^.!?\n]{2,})").unwrap());

static NAME_IS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][\w&.'-]*(?:\s+[A-Z][\w&.'-]*)*)\s+is\b").unwrap()
});

const COMPANY_PLACEHOLDERS: &[&str] = &[
    "us", "we", "our team", "the team", "our company", "our growing team",
];

/// Scan the posting with every rule and return the raw title and company
/// candidate lists, in rule order. No rule is required to match; either list
/// may come back empty.
pub fn generate(text: &str) -> (Vec<Candidate>, Vec<Candidate>) {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut titles = Vec::new();
    let mut companies = Vec::new();

    labels(&lines, &mut titles, &mut companies);
    semantic(text, &mut titles);
    structural(&lines, &mut titles, &mut companies);
    juxtaposition(&lines, &mut titles, &mut companies);
    careers_and_join(&lines, &mut companies);
    fallback(&lines, &mut titles, &mut companies);
    joint(&lines, &mut titles, &mut companies);

    (titles, companies)
}

fn push(list: &mut Vec<Candidate>, raw: &str, field: Field, base_score: i32, rule: &'static str) {
    let raw = raw.trim();
    if raw.len() >= 2 {
        list.push(Candidate {
            raw: raw.to_string(),
            field,
            base_score,
            rule,
        });
    }
}

// "Job Title: X" / "Company: X" — the strongest signal a posting can carry.
fn labels(lines: &[&str], titles: &mut Vec<Candidate>, companies: &mut Vec<Candidate>) {
    for line in lines {
        if let Some(caps) = TITLE_LABEL_RE.captures(line) {
            let base = if caps[1].to_lowercase().starts_with("job") {
                7
            } else {
                6
            };
            push(titles, &caps[2], Field::Title, base, "title_label");
        }
        if let Some(caps) = COMPANY_LABEL_RE.captures(line) {
            let base = if caps[1].to_lowercase().starts_with("company") {
                7
            } else {
                6
            };
            push(companies, &caps[2], Field::Company, base, "company_label");
        }
    }
}

// "looking for a X" / "as a X"
fn semantic(text: &str, titles: &mut Vec<Candidate>) {
    for caps in LOOKING_FOR_RE.captures_iter(text) {
        push(titles, &caps[1], Field::Title, 5, "looking_for");
    }
    for caps in AS_A_RE.captures_iter(text) {
        push(titles, &caps[1], Field::Title, 5, "as_a");
    }
}

// Separator splits and title-cased whole lines near the top.
fn structural(lines: &[&str], titles: &mut Vec<Candidate>, companies: &mut Vec<Candidate>) {
    for line in lines.iter().filter(|l| !l.is_empty()).take(STRUCTURAL_WINDOW) {
        if let Some((sep_idx, sep)) = first_separator(line) {
            let left = line[..sep_idx].trim();
            let right = line[sep_idx + sep.len()..].trim();
            for (side, other) in [(left, right), (right, left)] {
                if !side.chars().next().is_some_and(|c| c.is_uppercase()) {
                    continue;
                }
                // A side that is itself a label word carries no content.
                if is_banned_title(side) {
                    continue;
                }
                let title_base = if contains_role_keyword(side) { 4 } else { 3 };
                push(titles, side, Field::Title, title_base, "separator_side");
                if !contains_role_keyword(side) {
                    let company_base = if contains_role_keyword(other) { 4 } else { 3 };
                    push(companies, side, Field::Company, company_base, "separator_side");
                }
            }
        } else if is_title_cased(line) {
            push(titles, line, Field::Title, 3, "titlecase_line");
        }
    }
}

fn first_separator(line: &str) -> Option<(usize, &'static str)> {
    SEPARATORS
        .iter()
        .filter_map(|sep| line.find(sep).map(|idx| (idx, *sep)))
        .min_by_key(|(idx, _)| *idx)
}

// "Title @ Company" / "Title at Company" / bare "@ Company".
fn juxtaposition(lines: &[&str], titles: &mut Vec<Candidate>, companies: &mut Vec<Candidate>) {
    for line in lines {
        for caps in AT_SIGN_RE.captures_iter(line) {
            push(companies, &caps[1], Field::Company, 6, "at_sign");
            let left = line[..caps.get(0).unwrap().start()].trim();
            if title_like(left) {
                push(titles, left, Field::Title, 5, "title_at_sign");
            }
        }
        for caps in AT_WORD_RE.captures_iter(line) {
            let name = &caps[1];
            let first = name.split_whitespace().next().unwrap_or("");
            if AT_STOPWORDS.contains(&first.to_lowercase().as_str()) {
                continue;
            }
            push(companies, name, Field::Company, 5, "at_word");
            let left = line[..caps.get(0).unwrap().start()].trim();
            if title_like(left) {
                push(titles, left, Field::Title, 4, "title_at_word");
            }
        }
    }
}

fn title_like(s: &str) -> bool {
    !s.is_empty() && (contains_role_keyword(s) || is_title_cased(s))
}

// "Careers at X" / "Join X" headers near the top.
fn careers_and_join(lines: &[&str], companies: &mut Vec<Candidate>) {
    for line in lines.iter().take(JOIN_WINDOW) {
        if let Some(caps) = CAREERS_AT_RE.captures(line) {
            push(companies, &caps[1], Field::Company, 4, "careers_at");
        }
        if let Some(caps) = JOIN_LINE_RE.captures(line) {
            let name = JOIN_AS_TAIL_RE.replace(&caps[1], "");
            if name.chars().next().is_some_and(|c| c.is_uppercase()) {
                push(companies, &name, Field::Company, 3, "join_line");
            }
        }
    }
}

// Early unlabeled lines: role keyword ⇒ title-ish, plain proper-noun line ⇒ company-ish.
fn fallback(lines: &[&str], titles: &mut Vec<Candidate>, companies: &mut Vec<Candidate>) {
    for line in lines.iter().filter(|l| !l.is_empty()).take(STRUCTURAL_WINDOW) {
        if contains_role_keyword(line) {
            push(titles, line, Field::Title, 3, "early_role_line");
        } else if is_title_cased(line) && !has_verb_cue(line) {
            push(companies, line, Field::Company, 3, "early_name_line");
        }
    }
}

// "Company is hiring/seeking a Title" and "Join Company as a Title" emit both
// fields from one match. A placeholder company ("us", "our team") triggers a
// bounded lookahead for a "Name is …" line.
fn joint(lines: &[&str], titles: &mut Vec<Candidate>, companies: &mut Vec<Candidate>) {
    for (idx, line) in lines.iter().enumerate() {
        if let Some(caps) = HIRING_RE.captures(line) {
            let company = resolve_placeholder(&caps[1], lines, idx);
            push(companies, &company, Field::Company, 6, "is_hiring");
            if caps[2].len() >= 2 {
                push(titles, &caps[2], Field::Title, 5, "is_hiring");
            }
        }
        if let Some(caps) = JOIN_AS_RE.captures(line) {
            let company = resolve_placeholder(&caps[1], lines, idx);
            push(companies, &company, Field::Company, 6, "join_as");
            push(titles, &caps[2], Field::Title, 5, "join_as");
        }
    }
}

fn resolve_placeholder(company: &str, lines: &[&str], idx: usize) -> String {
    if !COMPANY_PLACEHOLDERS.contains(&company.trim().to_lowercase().as_str()) {
        return company.to_string();
    }
    lines[idx + 1..]
        .iter()
        .filter(|l| !l.is_empty())
        .take(PLACEHOLDER_LOOKAHEAD)
        .find_map(|l| NAME_IS_RE.captures(l).map(|c| c[1].to_string()))
        .unwrap_or_else(|| company.to_string())
}

// ── Tests ──
