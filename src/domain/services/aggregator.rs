// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::journal::JournalRecord;

/// 记录聚合器
///
/// 单次运行内唯一的只追加记录序列，不去重也不排序
#[derive(Debug, Default)]
pub struct JournalAggregator {
    records: Vec<JournalRecord>,
}

impl JournalAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: JournalRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[JournalRecord] {
        &self.records
    }

    /// 结束本次运行，交出全部记录
    pub fn into_records(self) -> Vec<JournalRecord> {
        self.records
    }
}
