//! 文档存储模块
//!
//! 此模块负责：
//! - 定义 `集合/文档ID` 寻址的文档存储接口
//! - 通过HTTP访问远程文档存储服务
//! - 提供进程内存储，用于本地运行和测试
//! - 计算翻译记录的文档ID（内容的SHA-1十六进制摘要）

// 标准库导入
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

// 第三方crate导入
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha1::{Digest, Sha1};
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

// 本地模块导入
use crate::api_constants::store_config;
use crate::error::Result;
use crate::translation_error;

/// 翻译记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// 英语文本
    pub eng: String,
    /// 小黄人语文本
    pub min: String,
    /// 创建时间
    pub created: DateTime<Utc>,
}

/// 使用计数文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageCounter {
    pub num: u64,
    pub updated: DateTime<Utc>,
}

/// 计算文档ID：UTF-8内容的SHA-1小写十六进制摘要
pub fn document_id(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// 文档存储接口
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 读取文档，不存在时返回None
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// 写入（覆盖）文档
    async fn set(&self, collection: &str, id: &str, value: Value) -> Result<()>;
}

/// 远程文档存储客户端
///
/// 文档地址为 `{base_url}/{collection}/{id}`，GET读取、PUT写入，内容为JSON。
#[derive(Debug, Clone)]
pub struct RestDocumentStore {
    client: Client,
    base_url: Url,
}

impl RestDocumentStore {
    /// 使用默认超时创建客户端
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(
            base_url,
            Duration::from_secs(store_config::REQUEST_TIMEOUT_SECONDS),
        )
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("创建HTTP客户端失败")?;

        Self::with_client(base_url, client)
    }

    /// 使用已配置好的HTTP客户端
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| translation_error!(config, "store_url", e))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(translation_error!(
                config,
                "store_url",
                format!("不支持的协议: {}", base_url.scheme())
            ));
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 拼接文档地址，集合名和文档ID作为独立路径段编码
    pub fn document_url(&self, collection: &str, id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| translation_error!(config, "store_url", "地址不能作为路径基准"))?
            .pop_if_empty()
            .push(collection)
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let url = self.document_url(collection, id)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(translation_error!(store, collection, id, format!("读取返回错误状态: {}", status)));
        }

        let value = response.json::<Value>().await?;
        Ok(Some(value))
    }

    async fn set(&self, collection: &str, id: &str, value: Value) -> Result<()> {
        let url = self.document_url(collection, id)?;
        debug!("PUT {}", url);

        let response = self.client.put(url).json(&value).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(translation_error!(store, collection, id, format!("写入返回错误状态: {}", status)));
        }

        Ok(())
    }
}

/// 进程内文档存储
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<RwLock<HashMap<(String, String), Value>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 文档总数
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(&(collection.to_string(), id.to_string()))
            .cloned())
    }

    async fn set(&self, collection: &str, id: &str, value: Value) -> Result<()> {
        let mut documents = self.documents.write().await;
        documents.insert((collection.to_string(), id.to_string()), value);
        Ok(())
    }
}
