// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SourceSettings;
use crate::domain::models::source::SourceDescriptor;
use crate::utils::errors::ConfigurationError;

/// 内置来源：(地址, 元素模式)，没有元素模式的是CSV来源
const PREDATORY_SOURCES: &[(&str, Option<&str>)] = &[
    (
        "https://raw.githubusercontent.com/stop-predatory-journals/stop-predatory-journals.github.io/master/_data/journals.csv",
        None,
    ),
    (
        "https://raw.githubusercontent.com/stop-predatory-journals/stop-predatory-journals.github.io/master/_data/publishers.csv",
        None,
    ),
    ("https://beallslist.net/", Some("<li>.*?</li>")),
    ("https://beallslist.net/standalone-journals/", Some("<li>.*?</li>")),
    ("https://beallslist.net/hijacked-journals/", Some("<tr>.*?</tr>")),
];

/// 来源注册表
///
/// 启动时构建一次的有序、只读来源列表
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: Vec<SourceDescriptor>,
}

impl SourceRegistry {
    /// 构建内置来源注册表
    pub fn builtin() -> Result<Self, ConfigurationError> {
        let sources = PREDATORY_SOURCES
            .iter()
            .map(|(location, pattern)| descriptor(location, *pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sources })
    }

    /// 根据配置构建来源注册表
    ///
    /// 配置中没有来源时使用内置来源
    ///
    /// # 返回值
    ///
    /// * `Ok(SourceRegistry)` - 来源注册表
    /// * `Err(ConfigurationError)` - 任一来源的地址或模式非法
    pub fn from_settings(sources: &[SourceSettings]) -> Result<Self, ConfigurationError> {
        if sources.is_empty() {
            return Self::builtin();
        }

        let sources = sources
            .iter()
            .map(|s| descriptor(&s.location, s.element_pattern.as_deref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sources })
    }

    pub fn from_descriptors(sources: Vec<SourceDescriptor>) -> Self {
        Self { sources }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceDescriptor> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn descriptor(
    location: &str,
    element_pattern: Option<&str>,
) -> Result<SourceDescriptor, ConfigurationError> {
    match element_pattern {
        Some(pattern) => SourceDescriptor::fragment(location, pattern),
        None => SourceDescriptor::tabular(location),
    }
}
