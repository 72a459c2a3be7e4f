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

use async_trait::async_trait;
use std::io::Read;
use thiserror::Error;
use url::Url;

/// 下载内容的字节流
pub type ContentReader = Box<dyn Read + Send>;

/// 获取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Unexpected status: {0}")]
    Status(u16),
    /// 读取内容失败
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// HTTP获取能力
///
/// 由外部协作方提供：轻量的可达性探测，以及完整下载
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// 探测URL是否可达
    async fn reachable(&self, url: &Url) -> bool;

    /// 下载URL的完整内容
    async fn download(&self, url: &Url) -> Result<ContentReader, FetchError>;

    /// 实现名称
    fn name(&self) -> &'static str;
}
