//! 翻译服务模块
//!
//! 把词典、翻译器和文档存储组合成两个翻译流程：
//! - 小黄人化（英语 -> 小黄人语）
//! - 人类化（小黄人语 -> 英语），优先复用已有的小黄人化记录
//!
//! 持久化与翻译正确性无关：存储失败只记录警告，翻译结果照常返回。

// 标准库导入
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// 第三方crate导入
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

// 本地模块导入
use crate::api_constants::{error_messages, store_config};
use crate::config::{Direction, TranslatorConfig};
use crate::error::Result;
use crate::oracle::Dictionaries;
use crate::store::{document_id, DocumentStore, TranslationRecord, UsageCounter};
use crate::translation_error;
use crate::translator::{normalize, TranslationReport, Translator};

/// 单次翻译流程的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// 翻译方向
    pub direction: Direction,
    /// 翻译结果
    pub text: String,
    /// 记录的文档ID（结果文本的SHA-1）
    pub document_id: String,
    /// 是否命中已有的小黄人化记录
    pub cache_hit: bool,
    /// 记录是否成功写入存储
    pub persisted: bool,
    /// 该方向的累计使用次数
    pub usage_count: u64,
    /// 翻译统计
    pub report: TranslationReport,
}

/// 翻译服务
pub struct TranslationService {
    dictionaries: Dictionaries,
    translator: Translator,
    store: Option<Arc<dyn DocumentStore>>,
    config: TranslatorConfig,
    minionize_count: AtomicU64,
    humanize_count: AtomicU64,
}

impl TranslationService {
    /// 创建服务，如有存储则从中读取两个使用计数
    pub async fn new(
        dictionaries: Dictionaries,
        store: Option<Arc<dyn DocumentStore>>,
        config: TranslatorConfig,
    ) -> Result<Self> {
        let translator = Translator::new()?;

        let store = if config.is_persistence_enabled() { store } else { None };

        let (minionize_count, humanize_count) = match &store {
            Some(store) => (
                load_count(store.as_ref(), store_config::ENG2MIN_COUNT_DOC).await,
                load_count(store.as_ref(), store_config::MIN2ENG_COUNT_DOC).await,
            ),
            None => (0, 0),
        };

        debug!(
            "使用计数: minionize={}, humanize={}",
            minionize_count, humanize_count
        );

        Ok(Self {
            dictionaries,
            translator,
            store,
            config,
            minionize_count: AtomicU64::new(minionize_count),
            humanize_count: AtomicU64::new(humanize_count),
        })
    }

    pub fn minionize_count(&self) -> u64 {
        self.minionize_count.load(Ordering::SeqCst)
    }

    pub fn humanize_count(&self) -> u64 {
        self.humanize_count.load(Ordering::SeqCst)
    }

    /// 按方向分派
    pub async fn translate(&self, direction: Direction, text: &str) -> Result<TranslationOutcome> {
        match direction {
            Direction::Minionize => self.minionize(text).await,
            Direction::Humanize => self.humanize(text).await,
        }
    }

    /// 英语 -> 小黄人语
    pub async fn minionize(&self, text: &str) -> Result<TranslationOutcome> {
        self.validate_input(text)?;

        let eng_text = normalize(text);
        debug!("input:eng2min:: {}", eng_text);

        let report = self.translator.translate_with_report(
            &eng_text,
            &self.dictionaries.eng2min,
            self.config.strategy(),
        );
        debug!("translated:eng2min:: {}", report.text);

        let doc_id = document_id(&report.text);
        let record = TranslationRecord {
            eng: eng_text,
            min: report.text.clone(),
            created: Utc::now(),
        };
        let persisted = self
            .persist_record(store_config::ENG2MIN_COLLECTION, &doc_id, &record)
            .await;

        let usage_count = self.minionize_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.persist_count(store_config::ENG2MIN_COUNT_DOC, usage_count).await;

        Ok(TranslationOutcome {
            direction: Direction::Minionize,
            text: report.text.clone(),
            document_id: doc_id,
            cache_hit: false,
            persisted,
            usage_count,
            report,
        })
    }

    /// 小黄人语 -> 英语
    ///
    /// 先按原始输入的SHA-1查找小黄人化记录，命中则直接取其英语原文。
    pub async fn humanize(&self, text: &str) -> Result<TranslationOutcome> {
        self.validate_input(text)?;
        debug!("input:min2eng:: {}", text);

        let (report, cache_hit) = match self.lookup_minionized(text).await {
            Some(eng) => {
                info!("♻️  命中已有翻译记录");
                (
                    TranslationReport {
                        text: eng,
                        ..TranslationReport::default()
                    },
                    true,
                )
            }
            None => (
                self.translator.translate_with_report(
                    text,
                    &self.dictionaries.min2eng,
                    self.config.strategy(),
                ),
                false,
            ),
        };
        debug!("translated:min2eng:: {}", report.text);

        let doc_id = document_id(&report.text);
        let record = TranslationRecord {
            eng: report.text.clone(),
            min: text.to_string(),
            created: Utc::now(),
        };
        let persisted = self
            .persist_record(store_config::MIN2ENG_COLLECTION, &doc_id, &record)
            .await;

        let usage_count = self.humanize_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.persist_count(store_config::MIN2ENG_COUNT_DOC, usage_count).await;

        Ok(TranslationOutcome {
            direction: Direction::Humanize,
            text: report.text.clone(),
            document_id: doc_id,
            cache_hit,
            persisted,
            usage_count,
            report,
        })
    }

    /// 校验输入长度（按字符计）
    fn validate_input(&self, text: &str) -> Result<()> {
        let chars = text.chars().count();
        if chars > self.config.max_chars() {
            return Err(translation_error!(
                input_validation,
                text.chars().take(20).collect::<String>(),
                format!(
                    "{} ({} > {})",
                    error_messages::INPUT_TOO_LONG,
                    chars,
                    self.config.max_chars()
                )
            ));
        }
        Ok(())
    }

    /// 查找已有的小黄人化记录
    async fn lookup_minionized(&self, text: &str) -> Option<String> {
        let store = self.store.as_ref()?;
        let id = document_id(text);

        match store.get(store_config::ENG2MIN_COLLECTION, &id).await {
            Ok(Some(doc)) => doc.get("eng").and_then(Value::as_str).map(str::to_string),
            Ok(None) => None,
            Err(e) => {
                warn!("⚠️  查询翻译记录失败: {}", e);
                None
            }
        }
    }

    /// 写入翻译记录，返回是否成功
    async fn persist_record(&self, collection: &str, id: &str, record: &TranslationRecord) -> bool {
        let Some(store) = &self.store else {
            return false;
        };

        let result = match to_document(collection, id, record) {
            Ok(value) => store.set(collection, id, value).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                debug!("已保存翻译记录 {}/{}", collection, id);
                true
            }
            Err(e) => {
                warn!("⚠️  保存翻译记录失败: {}", e);
                false
            }
        }
    }

    /// 写入使用计数
    async fn persist_count(&self, counter_doc: &str, num: u64) {
        let Some(store) = &self.store else {
            return;
        };

        let counter = UsageCounter {
            num,
            updated: Utc::now(),
        };

        let result = match to_document(store_config::COUNT_COLLECTION, counter_doc, &counter) {
            Ok(value) => store.set(store_config::COUNT_COLLECTION, counter_doc, value).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            warn!("⚠️  更新使用计数失败 [{}]: {}", counter_doc, e);
        }
    }
}

/// 序列化待写入的文档，失败时归为该文档的存储错误
fn to_document<T: Serialize>(collection: &str, id: &str, value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| translation_error!(store, collection, id, format!("序列化失败: {}", e)))
}

/// 读取使用计数，文档或字段缺失视为0，读取失败只警告
async fn load_count(store: &dyn DocumentStore, counter_doc: &str) -> u64 {
    match store.get(store_config::COUNT_COLLECTION, counter_doc).await {
        Ok(Some(doc)) => doc.get("num").and_then(Value::as_u64).unwrap_or(0),
        Ok(None) => 0,
        Err(e) => {
            warn!("⚠️  读取使用计数失败 [{}]: {}", counter_doc, e);
            0
        }
    }
}
