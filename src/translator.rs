//! 词替换翻译模块
//!
//! 翻译流程：规范化（去首尾空白、转小写）-> 分词 -> 逐词查表替换 -> 按空格/标点规则拼接。
//! 翻译本身是全函数，对任何输入都不会出错；查不到的词原样保留。

// 本地模块导入
use crate::api_constants::translation_config::PUNCTUATION;
use crate::error::Result;
use crate::oracle::Oracle;
use crate::tokenizer::{Tokenizer, TokenizerStrategy};

/// 单次翻译的统计报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    /// 翻译结果
    pub text: String,
    /// 分词数量
    pub tokens: usize,
    /// 命中词典并被替换的词数
    pub substituted: usize,
    /// 未命中、原样保留的词数
    pub passthrough: usize,
}

/// 词替换翻译器
///
/// 只持有编译好的分词器，词典由调用方按方向传入。
#[derive(Debug, Clone)]
pub struct Translator {
    tokenizer: Tokenizer,
}

impl Translator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
        })
    }

    /// 翻译文本
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minion_translator::oracle::Oracle;
    /// use minion_translator::tokenizer::TokenizerStrategy;
    /// use minion_translator::translator::Translator;
    ///
    /// let oracle: Oracle = [("hello", "bello"), ("world", "wurld")].into_iter().collect();
    /// let translator = Translator::new().unwrap();
    /// assert_eq!(
    ///     translator.translate("Hello, World!", &oracle, TokenizerStrategy::Regex),
    ///     "bello, wurld!"
    /// );
    /// ```
    pub fn translate(&self, text: &str, oracle: &Oracle, strategy: TokenizerStrategy) -> String {
        self.translate_with_report(text, oracle, strategy).text
    }

    /// 翻译文本并返回统计信息
    pub fn translate_with_report(
        &self,
        text: &str,
        oracle: &Oracle,
        strategy: TokenizerStrategy,
    ) -> TranslationReport {
        let normalized = normalize(text);
        let words = self.tokenizer.tokenize(&normalized, strategy);

        let mut substituted = 0;
        let translated: Vec<&str> = words
            .iter()
            .map(|word| match oracle.get(word) {
                Some(target) => {
                    substituted += 1;
                    target
                }
                None => word.as_str(),
            })
            .collect();

        TranslationReport {
            text: join_tokens(&translated),
            tokens: words.len(),
            substituted,
            passthrough: words.len() - substituted,
        }
    }
}

/// 规范化输入：去首尾空白并转小写
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// 是否视为标点（对固定标点串做子串判断，空串也算）
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.contains(token)
}

/// 拼接译词：除撇号开头或标点外，每个词前加一个空格，最后去首尾空白
///
/// 判断依据是替换后的词。
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut joined = String::new();

    for token in tokens {
        let token = token.as_ref();
        if !token.starts_with('\'') && !is_punctuation(token) {
            joined.push(' ');
        }
        joined.push_str(token);
    }

    joined.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle(pairs: &[(&str, &str)]) -> Oracle {
        pairs.iter().copied().collect()
    }

    fn translate(text: &str, pairs: &[(&str, &str)]) -> String {
        Translator::new()
            .unwrap()
            .translate(text, &oracle(pairs), TokenizerStrategy::Regex)
    }

    fn translate_linguistic(text: &str, pairs: &[(&str, &str)]) -> String {
        Translator::new()
            .unwrap()
            .translate(text, &oracle(pairs), TokenizerStrategy::Linguistic)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(translate("", &[("hello", "bello")]), "");
        assert_eq!(translate("   ", &[]), "");
        assert_eq!(translate_linguistic("", &[]), "");
    }

    #[test]
    fn test_simple_substitution() {
        assert_eq!(translate("hello world", &[("hello", "bello")]), "bello world");
    }

    #[test]
    fn test_punctuation_attaches() {
        assert_eq!(
            translate("Hello, World!", &[("hello", "bello"), ("world", "wurld")]),
            "bello, wurld!"
        );
    }

    #[test]
    fn test_punctuation_only() {
        assert_eq!(translate("?!", &[]), "?!");
        assert_eq!(translate_linguistic("?!", &[]), "?!");
    }

    #[test]
    fn test_apostrophe_word() {
        assert_eq!(translate("it's fine", &[("it's", "eet's")]), "eet's fine");
    }

    #[test]
    fn test_unknown_passthrough() {
        assert_eq!(translate("xyz123 hello", &[("hello", "bello")]), "xyz123 bello");
        assert_eq!(translate("XYZ Hello", &[("hello", "bello")]), "xyz bello");
    }

    #[test]
    fn test_empty_oracle_normalizes() {
        assert_eq!(translate("  Hello   WORLD  ", &[]), "hello world");
        assert_eq!(translate("a + b = c", &[]), "a b c");
    }

    #[test]
    fn test_multi_word_value_is_one_token() {
        assert_eq!(
            translate("thanks, friend", &[("thanks", "tank yu")]),
            "tank yu, friend"
        );
    }

    #[test]
    fn test_spacing_uses_translated_token() {
        // 替换后以撇号开头的词不加前导空格
        assert_eq!(translate("go away", &[("away", "'way")]), "go'way");
        // 替换成标点同样不加空格
        assert_eq!(translate("go now", &[("now", "!")]), "go!");
    }

    #[test]
    fn test_translated_value_is_trimmed_at_edges() {
        assert_eq!(translate("hello", &[("hello", "bello ")]), "bello");
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(
            translate("one two three", &[("one", "hana"), ("three", "tri")]),
            "hana two tri"
        );
    }

    #[test]
    fn test_linguistic_strategy() {
        assert_eq!(translate_linguistic("I don't know.", &[]), "i do n't know.");
        assert_eq!(
            translate_linguistic("Hello, World!", &[("hello", "bello")]),
            "bello, world!"
        );
        assert_eq!(translate_linguistic("it's fine", &[]), "it's fine");
    }

    #[test]
    fn test_non_ascii_follows_rust_unicode_classes() {
        // \w 不含上标数字，含组合符号
        assert_eq!(translate("x²", &[]), "x");
        assert_eq!(translate("cafe\u{301}", &[]), "cafe\u{301}");
        // trim 只去除 White_Space 字符
        assert_eq!(translate_linguistic("\u{1f} hello", &[]), "\u{1f} hello");
    }

    #[test]
    fn test_report_counts() {
        let report = Translator::new().unwrap().translate_with_report(
            "hello big world!",
            &oracle(&[("hello", "bello"), ("world", "wurld")]),
            TokenizerStrategy::Regex,
        );
        assert_eq!(report.text, "bello big wurld!");
        assert_eq!(report.tokens, 4);
        assert_eq!(report.substituted, 2);
        assert_eq!(report.passthrough, 2);
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("."));
        assert!(is_punctuation(""));
        assert!(is_punctuation("()"));
        assert!(!is_punctuation("..."));
        assert!(!is_punctuation("``"));
        assert!(!is_punctuation("a"));
    }

    #[test]
    fn test_join_tokens() {
        assert_eq!(join_tokens(&["bello", ",", "wurld", "!"]), "bello, wurld!");
        assert_eq!(join_tokens::<&str>(&[]), "");
    }
}
