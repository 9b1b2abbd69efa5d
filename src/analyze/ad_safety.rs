use crate::types::config::KeywordEntry;
use crate::types::metrics::{clamp_score, Score};
use std::collections::HashSet;

const BASE: i32 = 100;

/// A keyword-table row that fired against the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHit<'a> {
    pub entry: &'a KeywordEntry,
    pub applied: bool,
}

pub fn ad_safe_score(content: &str, title: &str, keywords: &[KeywordEntry]) -> Score {
    let hits = keyword_hits(content, title, keywords);
    let delta: i32 = hits
        .iter()
        .filter(|hit| hit.applied)
        .map(|hit| hit.entry.weight)
        .sum();
    clamp_score(BASE + delta)
}

/// Every table entry present in the lowercased `title + " " + content`.
/// Each entry is checked once regardless of how often it occurs; within a
/// group only the first hit is applied.
pub fn keyword_hits<'a>(
    content: &str,
    title: &str,
    keywords: &'a [KeywordEntry],
) -> Vec<KeywordHit<'a>> {
    let full_text = format!("{title} {content}").to_lowercase();
    let mut applied_groups = HashSet::new();

    keywords
        .iter()
        .filter(|entry| full_text.contains(&entry.term.to_lowercase()))
        .map(|entry| KeywordHit {
            entry,
            applied: applied_groups.insert(entry.group_key()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::{KeywordCategory, DEFAULT_KEYWORDS};

    fn score(content: &str, title: &str) -> Score {
        ad_safe_score(content, title, &DEFAULT_KEYWORDS)
    }

    #[test]
    fn clean_and_empty_text_keeps_base() {
        assert_eq!(score("", ""), 100);
        assert_eq!(score("আজ আবহাওয়া ভালো", "বৃষ্টি"), 100);
    }

    #[test]
    fn violent_keyword_costs_fifteen() {
        assert_eq!(score("এলাকায় হত্যা করা হয়েছে", ""), 85);
    }

    #[test]
    fn adult_keyword_costs_thirty() {
        assert_eq!(score("যৌন হয়রানির অভিযোগ", ""), 70);
    }

    #[test]
    fn keyword_in_title_counts() {
        assert_eq!(score("", "বোমা হামলা"), 85);
    }

    #[test]
    fn repeated_keyword_applies_once() {
        assert_eq!(score("হত্যা হত্যা হত্যা", "হত্যা"), 85);
    }

    #[test]
    fn distinct_keywords_accumulate() {
        assert_eq!(score("যুদ্ধ ও রক্ত, রাজনীতি ও দুর্নীতি", ""), 60);
        assert_eq!(score("হত্যা খুন রক্ত যুদ্ধ বোমা যৌন অশ্লীল", ""), 0);
    }

    #[test]
    fn bonus_groups_apply_once_each() {
        assert_eq!(score("শিক্ষা ও স্বাস্থ্য খাতে রাজনীতি", ""), 100);
        assert_eq!(
            score("শিক্ষা, স্বাস্থ্য, প্রযুক্তি ও বিজ্ঞান নিয়ে বিতর্ক", ""),
            100
        );
        assert_eq!(score("শিক্ষা ও বিতর্ক, বোমা", ""), 85);
    }

    #[test]
    fn matching_ignores_ascii_case() {
        let table = vec![KeywordEntry::new("Casino", KeywordCategory::Adult, -30)];
        assert_eq!(ad_safe_score("new CASINO opens", "", &table), 70);
    }

    #[test]
    fn custom_weights_reach_any_boundary() {
        let table = vec![KeywordEntry::new("গুজব", KeywordCategory::Controversial, -21)];
        assert_eq!(ad_safe_score("গুজব ছড়াল", "", &table), 79);
    }

    #[test]
    fn hits_report_which_entries_applied() {
        let hits = keyword_hits("শিক্ষা ও স্বাস্থ্য", "", &DEFAULT_KEYWORDS);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].applied);
        assert!(!hits[1].applied);
    }
}
