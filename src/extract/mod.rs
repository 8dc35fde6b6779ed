pub mod clean;
pub mod geo;
pub mod patterns;
pub mod score;

use serde::Serialize;
use tracing::debug;

/// Which field a candidate was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Company,
}

/// A raw substring matched by one rule, before cleaning. Immutable once
/// produced; candidates live only for the duration of one extraction pass.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub raw: String,
    pub field: Field,
    pub base_score: i32,
    pub rule: &'static str,
}

/// The engine's sole output. Either field may be absent; the caller is
/// expected to ask the user for whatever could not be guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub title: Option<String>,
    pub company: Option<String>,
}

/// Best-guess job title and company name for one posting.
///
/// Pure and deterministic: every rule fires, each candidate is cleaned and
/// filtered, and scoring arbitrates between the survivors. Malformed or
/// unrecognizable input never errors, it just yields absent fields.
pub fn extract(text: &str) -> ExtractionResult {
    let (title_cands, company_cands) = patterns::generate(text);
    debug!(
        titles = title_cands.len(),
        companies = company_cands.len(),
        "generated candidates"
    );
    ExtractionResult {
        title: score::select_title(&title_cands),
        company: score::select_company(&company_cands),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_posting() {
        let text = "Company: Acme Corp\nJob Title: Senior Backend Engineer\nWe are looking for a great teammate.";
        let res = extract(text);
        assert_eq!(res.title.as_deref(), Some("Senior Backend Engineer"));
        assert_eq!(res.company.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn join_as_posting() {
        let res = extract("Join Widgets Inc as a Data Analyst in Austin, TX");
        assert_eq!(res.title.as_deref(), Some("Data Analyst"));
        assert_eq!(res.company.as_deref(), Some("Widgets Inc"));
    }

    #[test]
    fn unstructured_posting_yields_nothing() {
        let res = extract(
            "this posting tells you very little.\nwe value kindness and snacks.\napply within.",
        );
        assert_eq!(res.title, None);
        assert_eq!(res.company, None);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let res = extract("");
        assert_eq!(res.title, None);
        assert_eq!(res.company, None);
    }

    #[test]
    fn fields_resolve_independently() {
        let res = extract("Job Title: Staff Software Engineer");
        assert_eq!(res.title.as_deref(), Some("Staff Software Engineer"));
        assert_eq!(res.company, None);
    }

    #[test]
    fn plain_header_posting() {
        let text = "Senior Software Engineer\nAcme Robotics\nSan Francisco, CA\n\nAbout the role: we build robot arms for small workshops.";
        let res = extract(text);
        assert_eq!(res.title.as_deref(), Some("Senior Software Engineer"));
        assert_eq!(res.company.as_deref(), Some("Acme Robotics"));
    }

    #[test]
    fn careers_page_with_placeholder_company() {
        let text = "Careers at Nimbus Data\n\nJoin us as a Site Reliability Engineer to keep the lights on.\nNimbus Data is a storage company based in Austin, TX.";
        let res = extract(text);
        assert_eq!(res.title.as_deref(), Some("Site Reliability Engineer"));
        assert_eq!(res.company.as_deref(), Some("Nimbus Data"));
    }

    #[test]
    fn hiring_line_with_location_noise() {
        let res = extract("Acme GmbH is hiring a Frontend Developer\nRemote, Germany");
        assert_eq!(res.title.as_deref(), Some("Frontend Developer"));
        assert_eq!(res.company.as_deref(), Some("Acme GmbH"));
    }

    #[test]
    fn location_never_wins_a_field() {
        let res = extract("Data Analyst\nAustin, TX");
        assert_eq!(res.title.as_deref(), Some("Data Analyst"));
        assert_eq!(res.company, None);
    }

    #[test]
    fn result_serializes_to_json() {
        let res = ExtractionResult {
            title: Some("Data Analyst".into()),
            company: None,
        };
        let json = serde_json::to_string(&res).unwrap();
        assert_eq!(json, r#"{"title":"Data Analyst","company":null}"#);
    }
}
