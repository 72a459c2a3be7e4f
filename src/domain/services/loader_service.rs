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

use crate::domain::models::journal::JournalRecord;
use crate::domain::models::source::SourceDescriptor;
use crate::domain::services::aggregator::JournalAggregator;
use crate::domain::services::fragment_cleaner::FragmentCleaner;
use crate::domain::services::fragment_extractor::PendingFragments;
use crate::domain::services::source_registry::SourceRegistry;
use crate::domain::services::tabular_handler::TabularHandler;
use crate::engines::fetcher::{RawContent, SourceFetcher};
use crate::engines::traits::HttpFetcher;
use crate::utils::errors::SourceError;
use tracing::{debug, error, info, warn};

/// 掠夺性期刊加载服务
///
/// 按注册表顺序依次处理各来源。第一遍：表格来源直接追加记录，片段来源只把
/// 片段放入待清洗池；第二遍：按池中顺序清洗片段并追加记录。
/// 单个来源的失败只记录日志，不会影响其他来源。
pub struct PredatoryJournalLoader<H: HttpFetcher> {
    registry: SourceRegistry,
    fetcher: SourceFetcher<H>,
}

impl<H: HttpFetcher> PredatoryJournalLoader<H> {
    /// 创建新的加载服务实例
    ///
    /// # 参数
    ///
    /// * `registry` - 来源注册表
    /// * `http` - HTTP获取能力
    pub fn new(registry: SourceRegistry, http: H) -> Self {
        Self {
            registry,
            fetcher: SourceFetcher::new(http),
        }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// 执行一次完整的加载
    ///
    /// 每次调用都使用新的聚合器和待清洗池，可以重复执行
    ///
    /// # 返回值
    ///
    /// 所有来源的记录（可能不完整），表格来源在前，片段来源在后
    pub async fn run(&self) -> Vec<JournalRecord> {
        let mut aggregator = JournalAggregator::new();
        let mut pending = PendingFragments::new();

        // Pass 1: fetch every source, tabular rows go straight to the aggregator
        for source in self.registry.iter() {
            if let Err(e) = self.crawl(source, &mut aggregator, &mut pending).await {
                match e {
                    SourceError::Unreachable(url) => {
                        warn!(source = %url, "URL unreachable");
                    }
                    SourceError::MissingStrategy(url) => {
                        warn!(source = %url, "No extraction strategy for non-tabular source");
                    }
                    other => {
                        error!(source = %source.location(), error = %other, "Could not crawl source");
                    }
                }
            }
        }

        // Pass 2: clean pooled fragments in concatenation order
        debug!(fragments = pending.len(), "Cleaning pooled fragments");
        for fragment in pending {
            if let Some(record) = FragmentCleaner::clean_with(fragment.strategy, &fragment.text) {
                aggregator.push(record);
            }
        }

        info!(records = aggregator.len(), "Updated predatory journal list");
        aggregator.into_records()
    }

    async fn crawl<'a>(
        &self,
        source: &'a SourceDescriptor,
        aggregator: &mut JournalAggregator,
        pending: &mut PendingFragments<'a>,
    ) -> Result<(), SourceError> {
        match self.fetcher.fetch(source).await? {
            RawContent::Tabular(reader) => {
                let appended = TabularHandler::append_to(reader, aggregator)?;
                debug!(source = %source.location(), records = appended, "Loaded tabular source");
            }
            RawContent::Html(body) => {
                let strategy = source
                    .strategy()
                    .ok_or_else(|| SourceError::MissingStrategy(source.location().clone()))?;
                let collected = pending.collect(strategy, &body);
                debug!(source = %source.location(), fragments = collected, "Extracted fragments");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "loader_service_test.rs"]
mod tests;
