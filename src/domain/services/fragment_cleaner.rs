// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::journal::JournalRecord;
use crate::domain::models::source::{
    ExtractionStrategy, ABBREVIATION_REGEX, NAME_REGEX, URL_REGEX,
};
use regex::Regex;

/// 片段清洗器
///
/// 对单个片段分别应用名称、网址、缩写三个字段模式。每个模式只取第一个匹配，
/// 因此含有多个链接的片段只会产出第一个链接对应的记录（例如被劫持期刊的
/// 表格行只记录劫持者，不记录原期刊）。
pub struct FragmentCleaner;

impl FragmentCleaner {
    /// 使用默认字段模式清洗片段
    pub fn clean(fragment: &str) -> Option<JournalRecord> {
        Self::extract(&NAME_REGEX, &URL_REGEX, &ABBREVIATION_REGEX, fragment)
    }

    /// 使用来源的提取策略清洗片段
    ///
    /// # 返回值
    ///
    /// * `Some(JournalRecord)` - 名称和网址都匹配时的记录，缩写缺失时为空字符串
    /// * `None` - 名称或网址未匹配，片段被丢弃
    pub fn clean_with(strategy: &ExtractionStrategy, fragment: &str) -> Option<JournalRecord> {
        Self::extract(
            strategy.name(),
            strategy.url(),
            strategy.abbreviation(),
            fragment,
        )
    }

    fn extract(
        name: &Regex,
        url: &Regex,
        abbreviation: &Regex,
        fragment: &str,
    ) -> Option<JournalRecord> {
        let name = first_match(name, fragment)?;
        let url = first_match(url, fragment)?;
        let abbreviation = first_match(abbreviation, fragment).unwrap_or_default();

        Some(JournalRecord::new(name, abbreviation, url))
    }
}

/// 第一个匹配的字段值：有第1捕获组时取该组，否则取整个匹配
fn first_match<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    let captures = pattern.captures(text)?;
    captures
        .get(1)
        .or_else(|| captures.get(0))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_anchor_with_abbreviation() {
        let fragment = r#"<li><a href="http://j.example">Journal One (J1)</a></li>"#;

        let record = FragmentCleaner::clean(fragment).unwrap();

        assert_eq!(
            record,
            JournalRecord::new("Journal One (J1)", "J1", "http://j.example")
        );
    }

    #[test]
    fn test_clean_without_abbreviation_leaves_it_empty() {
        let fragment = r#"<li><a href="https://k.example/">Kappa Journal</a></li>"#;

        let record = FragmentCleaner::clean(fragment).unwrap();

        assert_eq!(record.name, "Kappa Journal");
        assert_eq!(record.url, "https://k.example/");
        assert_eq!(record.abbreviation, "");
    }

    #[test]
    fn test_clean_requires_name() {
        let fragment = r#"<li><a href="http://x.example" >X Journal</a></li>"#;
        assert!(FragmentCleaner::clean(fragment).is_none());
    }

    #[test]
    fn test_clean_requires_url() {
        let fragment = r#"<li><a href="/relative">Relative Journal</a></li>"#;
        assert!(FragmentCleaner::clean(fragment).is_none());
    }

    #[test]
    fn test_clean_plain_text_yields_nothing() {
        assert!(FragmentCleaner::clean("<li>Plain text entry</li>").is_none());
    }

    #[test]
    fn test_clean_takes_first_link_only() {
        let fragment = concat!(
            r#"<tr><td><a href="http://fake.example">Fake Journal (FJ)</a></td>"#,
            r#"<td><a href="http://real.example">Real Journal (RJ)</a></td></tr>"#
        );

        let record = FragmentCleaner::clean(fragment).unwrap();

        assert_eq!(
            record,
            JournalRecord::new("Fake Journal (FJ)", "FJ", "http://fake.example")
        );
    }

    #[test]
    fn test_clean_follows_pattern_boundaries_not_markup() {
        let fragment = r#"<li><a href="...">"http://j.example">Journal One (J1)</a></li>"#;

        let record = FragmentCleaner::clean(fragment).unwrap();

        assert_eq!(record.name, r#""http://j.example">Journal One (J1)"#);
        assert_eq!(record.url, "http://j.example");
        assert_eq!(record.abbreviation, "J1");
    }

    #[test]
    fn test_clean_skips_parenthetical_with_space() {
        let fragment =
            r#"<li><a href="http://oa.example">Journal (Open Access) (JOA)</a></li>"#;

        let record = FragmentCleaner::clean(fragment).unwrap();

        assert_eq!(record.abbreviation, "JOA");
    }

    #[test]
    fn test_clean_with_custom_strategy_uses_whole_match_without_group() {
        let strategy = ExtractionStrategy::with_field_patterns(
            "<p>.*?</p>",
            r"[A-Z][a-z]+ Review",
            r"https://[a-z.]+",
            r"\[[A-Z]+\]",
        )
        .unwrap();

        let record =
            FragmentCleaner::clean_with(&strategy, "<p>Bogus Review [BR] https://bogus.example</p>")
                .unwrap();

        assert_eq!(
            record,
            JournalRecord::new("Bogus Review", "[BR]", "https://bogus.example")
        );
    }
}
