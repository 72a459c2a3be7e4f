// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::journal::JournalRecord;
use crate::domain::services::aggregator::JournalAggregator;
use crate::utils::errors::TabularError;
use csv::{ByteRecord, ByteRecordsIntoIter, ReaderBuilder};
use std::io::Read;

/// 上游CSV的列数：url, name, abbr
const EXPECTED_COLUMNS: usize = 3;

/// 表格处理器
///
/// 按标准（Excel风格）CSV方言读取，不跳过表头，第一行也作为数据。
pub struct TabularHandler;

impl TabularHandler {
    /// 将CSV字节流解析为期刊记录序列
    ///
    /// 上游列顺序为 `(url, name, abbreviation)`，产出的记录重排为
    /// `(name, abbreviation, url)`。序列在第一个错误之后结束。
    pub fn parse_csv<R: Read>(reader: R) -> CsvRecords<R> {
        let rows = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_byte_records();

        CsvRecords { rows, done: false }
    }

    /// 解析CSV并逐条追加到聚合器
    ///
    /// # 返回值
    ///
    /// * `Ok(usize)` - 追加的记录数
    /// * `Err(TabularError)` - 读取或行解析失败，之前已追加的记录保留在聚合器中
    pub fn append_to<R: Read>(
        reader: R,
        aggregator: &mut JournalAggregator,
    ) -> Result<usize, TabularError> {
        let mut appended = 0;
        for record in Self::parse_csv(reader) {
            aggregator.push(record?);
            appended += 1;
        }
        Ok(appended)
    }
}

/// CSV记录迭代器
pub struct CsvRecords<R: Read> {
    rows: ByteRecordsIntoIter<R>,
    done: bool,
}

impl<R: Read> Iterator for CsvRecords<R> {
    type Item = Result<JournalRecord, TabularError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = match self.rows.next()? {
            Ok(row) => to_record(&row),
            Err(e) => Err(TabularError::from(e)),
        };

        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

fn to_record(row: &ByteRecord) -> Result<JournalRecord, TabularError> {
    if row.len() != EXPECTED_COLUMNS {
        return Err(TabularError::MalformedRow {
            row: row.position().map(|p| p.line()).unwrap_or_default(),
            found: row.len(),
        });
    }

    let field = |i: usize| String::from_utf8_lossy(&row[i]).into_owned();
    Ok(JournalRecord::new(field(1), field(2), field(0)))
}

#[cfg(test)]
#[path = "tabular_handler_test.rs"]
mod tests;
