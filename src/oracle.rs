//! 词典（Oracle）模块
//!
//! 负责加载单向词对照表。词典在启动时加载一次，此后只读，
//! 通过引用显式传入翻译器，不存在全局可变状态。

// 标准库导入
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

// 第三方crate导入
use serde_json::Value;
use tracing::{debug, info, warn};

// 本地模块导入
use crate::api_constants::{dictionary_config, error_messages};
use crate::error::Result;
use crate::translation_error;

/// 单向词对照表：小写源词 -> 译词
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Oracle {
    entries: HashMap<String, String>,
}

impl Oracle {
    /// 从JSON文本解析，根节点必须是字符串到字符串的对象
    pub fn from_json_str(source_name: &str, json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)
            .map_err(|e| translation_error!(dictionary, source_name, e))?;

        let object = root.as_object().ok_or_else(|| {
            translation_error!(dictionary, source_name, error_messages::DICTIONARY_MALFORMED)
        })?;

        let mut entries = HashMap::with_capacity(object.len());
        let mut non_lowercase = 0usize;

        for (key, value) in object {
            let translated = value.as_str().ok_or_else(|| {
                translation_error!(
                    dictionary,
                    source_name,
                    format!("{} (键 {:?})", error_messages::DICTIONARY_MALFORMED, key)
                )
            })?;

            if key.to_lowercase() != *key {
                non_lowercase += 1;
            }

            entries.insert(key.clone(), translated.to_string());
        }

        // 输入会先转小写，含大写字母的键永远不会命中
        if non_lowercase > 0 {
            warn!("⚠️  词典 {} 中有 {} 个键含大写字母，将无法匹配", source_name, non_lowercase);
        }

        debug!("词典 {} 解析完成: {} 个词条", source_name, entries.len());

        Ok(Self { entries })
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.is_file() {
            return Err(translation_error!(
                dictionary,
                display,
                error_messages::DICTIONARY_MISSING
            ));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| translation_error!(file_op, display, "读取", e))?;

        Self::from_json_str(&display, &content)
    }

    /// 查找译词
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// 是否包含该词
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Oracle
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// 两个方向的词典
///
/// 两者不保证互为逆映射
#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    /// 英语 -> 小黄人语
    pub eng2min: Oracle,
    /// 小黄人语 -> 英语
    pub min2eng: Oracle,
}

impl Dictionaries {
    pub fn new(eng2min: Oracle, min2eng: Oracle) -> Self {
        Self { eng2min, min2eng }
    }

    /// 从词典目录加载两个方向的词典，任一缺失或格式错误即失败
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let (eng2min_path, min2eng_path) = Self::paths(dir);

        let eng2min = Oracle::load(&eng2min_path)?;
        let min2eng = Oracle::load(&min2eng_path)?;

        info!(
            "📚 词典加载完成: eng2min {} 条, min2eng {} 条",
            eng2min.len(),
            min2eng.len()
        );

        Ok(Self { eng2min, min2eng })
    }

    /// 词典目录下两个词典文件的路径
    pub fn paths(dir: &Path) -> (PathBuf, PathBuf) {
        (
            dir.join(dictionary_config::ENG2MIN_FILE),
            dir.join(dictionary_config::MIN2ENG_FILE),
        )
    }
}
