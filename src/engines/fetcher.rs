// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::source::SourceDescriptor;
use crate::engines::traits::{ContentReader, FetchError, HttpFetcher};
use crate::utils::errors::SourceError;
use std::io::Read;

/// 来源原始内容
pub enum RawContent {
    /// CSV字节流，交给表格处理器逐行消费
    Tabular(ContentReader),
    /// 完整的HTML文本
    Html(String),
}

/// 来源获取器
///
/// 先做可达性探测，再根据地址中的表格格式标记决定如何下载
pub struct SourceFetcher<H: HttpFetcher> {
    http: H,
}

impl<H: HttpFetcher> SourceFetcher<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// 获取单个来源的原始内容
    ///
    /// # 参数
    ///
    /// * `source` - 来源描述
    ///
    /// # 返回值
    ///
    /// * `Ok(RawContent)` - 原始内容
    /// * `Err(SourceError::Unreachable)` - 探测失败，没有发起下载
    /// * `Err(SourceError::MissingStrategy)` - 非表格来源且没有提取策略
    /// * `Err(SourceError::Transport)` - 下载或读取失败
    pub async fn fetch(&self, source: &SourceDescriptor) -> Result<RawContent, SourceError> {
        let location = source.location();

        if !self.http.reachable(location).await {
            return Err(SourceError::Unreachable(location.clone()));
        }

        if source.is_tabular() {
            let reader = self.http.download(location).await?;
            return Ok(RawContent::Tabular(reader));
        }

        if source.strategy().is_none() {
            return Err(SourceError::MissingStrategy(location.clone()));
        }

        let mut reader = self.http.download(location).await?;
        let mut body = Vec::new();
        reader.read_to_end(&mut body).map_err(FetchError::from)?;

        Ok(RawContent::Html(String::from_utf8_lossy(&body).into_owned()))
    }

    /// 底层HTTP实现名称
    pub fn engine_name(&self) -> &'static str {
        self.http.name()
    }
}
