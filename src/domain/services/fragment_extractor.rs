// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::source::ExtractionStrategy;
use regex::Regex;

/// 片段提取器
///
/// 用粗粒度模式把页面切分为不透明的文本片段，不做任何HTML解码
pub struct FragmentExtractor;

impl FragmentExtractor {
    /// 按文档顺序返回模式的全部不重叠匹配
    ///
    /// 没有匹配时返回空序列
    pub fn extract_fragments(pattern: &Regex, text: &str) -> Vec<String> {
        pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// 待清洗片段
pub struct PendingFragment<'a> {
    pub text: String,
    /// 片段所属来源的提取策略，清洗时使用其字段模式
    pub strategy: &'a ExtractionStrategy,
}

/// 待清洗片段池
///
/// 第一遍收集所有片段来源的片段，第二遍按拼接顺序统一清洗
#[derive(Default)]
pub struct PendingFragments<'a> {
    fragments: Vec<PendingFragment<'a>>,
}

impl<'a> PendingFragments<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从页面中提取片段并追加到池中
    ///
    /// # 返回值
    ///
    /// 本次追加的片段数
    pub fn collect(&mut self, strategy: &'a ExtractionStrategy, body: &str) -> usize {
        let before = self.fragments.len();
        self.fragments.extend(
            FragmentExtractor::extract_fragments(strategy.element(), body)
                .into_iter()
                .map(|text| PendingFragment { text, strategy }),
        );
        self.fragments.len() - before
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl<'a> IntoIterator for PendingFragments<'a> {
    type Item = PendingFragment<'a>;
    type IntoIter = std::vec::IntoIter<PendingFragment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}
