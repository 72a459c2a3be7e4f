// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 掠夺性期刊记录
///
/// 所有来源统一归一化后的输出单元。`url` 原样复制自来源文本，
/// 不保证是合法的URL；来源中缺失缩写时 `abbreviation` 为空字符串。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalRecord {
    /// 期刊或出版商名称
    pub name: String,
    /// 缩写
    pub abbreviation: String,
    /// 来源中给出的网址
    pub url: String,
}

impl JournalRecord {
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            url: url.into(),
        }
    }
}
