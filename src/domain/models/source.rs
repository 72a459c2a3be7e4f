// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ConfigurationError;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// 默认名称模式：锚点标签内 `">` 与下一个 `<` 之间的可见文本
pub const DEFAULT_NAME_PATTERN: &str = r#"">(.*?)<"#;
/// 默认网址模式：从 `http` 开始到下一个双引号为止
pub const DEFAULT_URL_PATTERN: &str = r#"(http.*?)""#;
/// 默认缩写模式：括号内不含空格的标记
pub const DEFAULT_ABBREVIATION_PATTERN: &str = r"\(([^ ]*)\)";

pub(crate) static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_NAME_PATTERN).expect("Failed to compile name regex"));
pub(crate) static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_URL_PATTERN).expect("Failed to compile url regex"));
pub(crate) static ABBREVIATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_ABBREVIATION_PATTERN).expect("Failed to compile abbreviation regex")
});

/// 提取策略
///
/// 一个粗粒度的元素模式加上三个细粒度的字段模式。字段模式若包含捕获组，
/// 取第1组作为字段值，否则取整个匹配。页面结构变化时只需要替换策略配置。
#[derive(Debug, Clone)]
pub struct ExtractionStrategy {
    element: Regex,
    name: Regex,
    url: Regex,
    abbreviation: Regex,
}

impl ExtractionStrategy {
    /// 使用默认字段模式创建提取策略
    ///
    /// # 参数
    ///
    /// * `element_pattern` - 将页面切分为片段的粗粒度模式
    ///
    /// # 返回值
    ///
    /// * `Ok(ExtractionStrategy)` - 提取策略
    /// * `Err(ConfigurationError)` - 模式无法编译
    pub fn new(element_pattern: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            element: compile(element_pattern)?,
            name: NAME_REGEX.clone(),
            url: URL_REGEX.clone(),
            abbreviation: ABBREVIATION_REGEX.clone(),
        })
    }

    /// 使用自定义字段模式创建提取策略
    pub fn with_field_patterns(
        element_pattern: &str,
        name_pattern: &str,
        url_pattern: &str,
        abbreviation_pattern: &str,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            element: compile(element_pattern)?,
            name: compile(name_pattern)?,
            url: compile(url_pattern)?,
            abbreviation: compile(abbreviation_pattern)?,
        })
    }

    pub fn element(&self) -> &Regex {
        &self.element
    }

    pub fn name(&self) -> &Regex {
        &self.name
    }

    pub fn url(&self) -> &Regex {
        &self.url
    }

    pub fn abbreviation(&self) -> &Regex {
        &self.abbreviation
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigurationError> {
    Regex::new(pattern).map_err(|source| ConfigurationError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// 来源描述
///
/// 表格来源（CSV，无提取策略）或片段来源（HTML，带提取策略），
/// 两者由构造方式决定，互斥。构造后不可变。
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    location: Url,
    strategy: Option<ExtractionStrategy>,
}

impl SourceDescriptor {
    /// 创建表格来源
    ///
    /// # 返回值
    ///
    /// * `Ok(SourceDescriptor)` - 来源描述
    /// * `Err(ConfigurationError)` - 地址不是合法的URL
    pub fn tabular(location: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            location: parse_location(location)?,
            strategy: None,
        })
    }

    /// 创建使用默认字段模式的片段来源
    pub fn fragment(location: &str, element_pattern: &str) -> Result<Self, ConfigurationError> {
        Self::with_strategy(location, ExtractionStrategy::new(element_pattern)?)
    }

    /// 创建使用指定提取策略的片段来源
    pub fn with_strategy(
        location: &str,
        strategy: ExtractionStrategy,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            location: parse_location(location)?,
            strategy: Some(strategy),
        })
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn strategy(&self) -> Option<&ExtractionStrategy> {
        self.strategy.as_ref()
    }

    /// 地址路径中是否带有表格格式标记（`.csv`）
    pub fn is_tabular(&self) -> bool {
        self.location.path().contains(".csv")
    }
}

fn parse_location(location: &str) -> Result<Url, ConfigurationError> {
    Url::parse(location).map_err(|source| ConfigurationError::MalformedLocation {
        location: location.to_string(),
        source,
    })
}
