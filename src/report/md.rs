use crate::types::report::{BatchReport, ScoreReport};

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Content Quality Report\n\n");
    if let Some(source) = &report.source {
        output.push_str(&format!("Source: {source}\n\n"));
    }
    push_summary(&mut output, report);
    push_findings(&mut output, report);
    output
}

pub fn batch_to_markdown(batch: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Content Quality Batch Report\n\n");
    output.push_str(&format!(
        "Articles: {} (ad-safe: {}, average score: {:.1})\n\n",
        batch.article_count, batch.ad_safe_count, batch.average_overall_score
    ));

    output.push_str("| article | overall | ad-safe | grade |\n|---|---|---|---|\n");
    for article in &batch.articles {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            article.source.as_deref().unwrap_or("-"),
            article.overall.overall_score,
            if article.overall.is_ad_safe { "yes" } else { "no" },
            article.grade.label()
        ));
    }
    output.push('\n');

    for article in batch.articles.iter().filter(|a| !a.findings.is_empty()) {
        output.push_str(&format!(
            "## {}\n\n",
            article.source.as_deref().unwrap_or("article")
        ));
        push_findings(&mut output, article);
    }
    output
}

fn push_summary(output: &mut String, report: &ScoreReport) {
    output.push_str(&format!(
        "Overall score: {} ({})\n\nAd-safe: {}\n\nWords: {}\n\n",
        report.overall.overall_score,
        report.grade.label(),
        if report.overall.is_ad_safe { "yes" } else { "no" },
        report.metrics.word_count
    ));
    output.push_str("## Scores\n\n");
    for (name, value) in report.metrics.named_scores() {
        output.push_str(&format!("- {name}: {value}\n"));
    }
    output.push('\n');
}

fn push_findings(output: &mut String, report: &ScoreReport) {
    output.push_str("### Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for finding in &report.findings {
        output.push_str(&format!(
            "- [{}] {}: {}\n",
            if finding.blocking {
                "blocking"
            } else {
                "warning"
            },
            finding.title,
            finding.body
        ));
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::types::config::ScorerConfig;
    use crate::types::metrics::ContentInput;

    #[test]
    fn markdown_report_contains_sections() {
        let report = analyze(
            &ContentInput::new("যৌন", "", ""),
            &ScorerConfig::default(),
            Some("news/a.md"),
        );
        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Content Quality Report"));
        assert!(rendered.contains("Source: news/a.md"));
        assert!(rendered.contains("## Scores"));
        assert!(rendered.contains("- ad_safety: 70"));
        assert!(rendered.contains("[blocking] Not safe for ads"));
    }

    #[test]
    fn markdown_batch_lists_every_article() {
        let config = ScorerConfig::default();
        let batch = BatchReport::new(vec![
            analyze(&ContentInput::default(), &config, Some("a.md")),
            analyze(&ContentInput::new("হত্যা", "", ""), &config, Some("b.md")),
        ]);
        let rendered = batch_to_markdown(&batch);
        assert!(rendered.contains("Articles: 2 (ad-safe: 2"));
        assert!(rendered.contains("| a.md | 27 | yes | needs review |"));
        assert!(rendered.contains("## b.md"));
    }
}
