/// 翻译器常量配置
///
/// 该文件定义了词典、文档存储和翻译规则相关的常量，方便统一管理和维护

/// 文档存储配置
pub mod store_config {
    /// 默认文档存储服务地址
    pub const DEFAULT_STORE_URL: &str = "http://localhost:8088/documents";

    /// 英语 -> 小黄人语翻译记录集合
    pub const ENG2MIN_COLLECTION: &str = "eng2min";

    /// 小黄人语 -> 英语翻译记录集合
    pub const MIN2ENG_COLLECTION: &str = "min2eng";

    /// 使用计数集合
    pub const COUNT_COLLECTION: &str = "count";

    /// 小黄人化计数文档ID
    pub const ENG2MIN_COUNT_DOC: &str = "eng2min";

    /// 人类化计数文档ID
    pub const MIN2ENG_COUNT_DOC: &str = "min2eng";

    /// 请求超时时间（秒）
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;
}

/// 词典配置
pub mod dictionary_config {
    /// 默认词典目录
    pub const DEFAULT_DICTIONARY_DIR: &str = "data";

    /// 英语 -> 小黄人语词典文件名
    pub const ENG2MIN_FILE: &str = "eng2min.json";

    /// 小黄人语 -> 英语词典文件名
    pub const MIN2ENG_FILE: &str = "min2eng.json";
}

/// 翻译规则配置
pub mod translation_config {
    /// 正则分词模式：单词字符/撇号串，或单个标点
    pub const WORD_PATTERN: &str = r"[\w']+|[.,!?;]";

    /// 拼接时视为标点的字符集（判断方式为子串包含）
    pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

    /// 输入文本最大字符数
    pub const DEFAULT_MAX_CHARS: usize = 200;
}

/// 错误消息常量
pub mod error_messages {
    /// 词典文件缺失
    pub const DICTIONARY_MISSING: &str = "词典文件不存在";

    /// 词典格式错误
    pub const DICTIONARY_MALFORMED: &str = "词典必须是字符串到字符串的JSON对象";

    /// 输入过长
    pub const INPUT_TOO_LONG: &str = "输入文本超过最大字符数";
}

/// 实用工具函数
/// 获取文档存储地址，自定义地址优先
pub fn get_store_url(custom_url: Option<&str>) -> &str {
    match custom_url {
        Some(custom) if !custom.is_empty() => custom,
        _ => store_config::DEFAULT_STORE_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_url_selection() {
        assert_eq!(get_store_url(None), store_config::DEFAULT_STORE_URL);
        assert_eq!(get_store_url(Some("")), store_config::DEFAULT_STORE_URL);
        assert_eq!(get_store_url(Some("http://custom.store")), "http://custom.store");
    }

    #[test]
    fn test_punctuation_set() {
        assert_eq!(translation_config::PUNCTUATION.len(), 32);
        assert!(translation_config::PUNCTUATION.contains('\''));
        assert!(translation_config::PUNCTUATION.contains('\\'));
    }
}
