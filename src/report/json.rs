use serde::Serialize;

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::types::config::ScorerConfig;
    use crate::types::metrics::ContentInput;
    use crate::types::report::BatchReport;

    #[test]
    fn json_report_uses_camel_case_fields() {
        let report = analyze(&ContentInput::default(), &ScorerConfig::default(), None);
        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"overallScore\": 27"));
        assert!(rendered.contains("\"isAdSafe\": true"));
        assert!(rendered.contains("\"readabilityScore\": 0"));
        assert!(rendered.contains("\"contentDigest\""));
        assert!(!rendered.contains("\"source\""));
    }

    #[test]
    fn json_batch_report_summarizes_articles() {
        let config = ScorerConfig::default();
        let batch = BatchReport::new(vec![
            analyze(&ContentInput::default(), &config, Some("a.md")),
            analyze(&ContentInput::new("যৌন", "", ""), &config, Some("b.md")),
        ]);
        let rendered = to_json(&batch).expect("json should serialize");
        assert!(rendered.contains("\"articleCount\": 2"));
        assert!(rendered.contains("\"adSafeCount\": 1"));
        assert!(rendered.contains("\"source\": \"b.md\""));
    }
}
