//! Minion Translator - 小黄人语翻译工具库
//!
//! 这个库提供了词典加载、分词、词替换翻译、翻译记录持久化和使用计数等核心功能。

pub mod api_constants;
pub mod config;
pub mod error;
pub mod oracle;
pub mod service;
pub mod stats;
pub mod store;
pub mod tokenizer;
pub mod translator;
pub mod utils;

use once_cell::sync::Lazy;

pub use error::{Result, TranslationError};
pub use oracle::{Dictionaries, Oracle};
pub use tokenizer::TokenizerStrategy;
pub use translator::Translator;

/// 进程内共享的翻译器，分词规则全部是常量，只编译一次
static SHARED_TRANSLATOR: Lazy<Translator> =
    Lazy::new(|| Translator::new().expect("内置分词规则均为合法正则"));

/// 翻译文本，对任何输入都返回结果
///
/// ```rust
/// use minion_translator::Oracle;
///
/// let oracle: Oracle = [("hello", "bello")].into_iter().collect();
/// assert_eq!(minion_translator::translate("Hello!", &oracle, false), "bello!");
/// ```
pub fn translate(text: &str, oracle: &Oracle, use_linguistic_tokenizer: bool) -> String {
    SHARED_TRANSLATOR.translate(
        text,
        oracle,
        TokenizerStrategy::from_flag(use_linguistic_tokenizer),
    )
}
