//! 配置管理模块
//!
//! 提供CLI参数解析和翻译配置管理功能

// 标准库导入
use std::path::PathBuf;

// 第三方crate导入
use clap::{Parser, ValueEnum};

// 本地模块导入
use crate::api_constants::{dictionary_config, translation_config};
use crate::tokenizer::TokenizerStrategy;

/// 翻译方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// 英语 -> 小黄人语
    Minionize,
    /// 小黄人语 -> 英语
    Humanize,
}

/// 翻译配置结构体
///
/// 支持Builder模式进行链式配置。
///
/// # Examples
///
/// ```rust
/// use minion_translator::config::TranslatorConfig;
/// use minion_translator::tokenizer::TokenizerStrategy;
///
/// let config = TranslatorConfig::new()
///     .with_strategy(TokenizerStrategy::Linguistic)
///     .with_max_chars(500)
///     .enable_persistence(false);
/// assert_eq!(config.max_chars(), 500);
/// ```
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// 分词策略
    strategy: TokenizerStrategy,
    /// 输入文本最大字符数
    max_chars: usize,
    /// 是否写入文档存储
    persist: bool,
}

impl TranslatorConfig {
    /// 创建新的配置实例
    ///
    /// 默认值：
    /// - 分词策略: 正则
    /// - 最大字符数: 200
    /// - 持久化: 开启
    pub fn new() -> Self {
        Self {
            strategy: TokenizerStrategy::Regex,
            max_chars: translation_config::DEFAULT_MAX_CHARS,
            persist: true,
        }
    }

    pub fn strategy(&self) -> TokenizerStrategy {
        self.strategy
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn is_persistence_enabled(&self) -> bool {
        self.persist
    }

    /// 设置分词策略
    pub fn with_strategy(mut self, strategy: TokenizerStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 设置最大字符数
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// 设置是否持久化
    pub fn enable_persistence(mut self, enable: bool) -> Self {
        self.persist = enable;
        self
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// CLI参数结构
#[derive(Parser, Debug)]
#[command(author, version, about = "小黄人语翻译器 - 英语与小黄人语互译", long_about = None)]
pub struct Cli {
    /// 翻译方向
    #[arg(short, long, value_enum, default_value = "minionize")]
    pub direction: Direction,

    /// 待翻译文本 (未指定时读取 --input 或标准输入)
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// 输入文本文件路径
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// 输出文件路径 (可选，默认输出到标准输出)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// 词典目录 (包含 eng2min.json 与 min2eng.json)
    #[arg(long, value_name = "DIR", default_value = dictionary_config::DEFAULT_DICTIONARY_DIR)]
    pub dictionary_dir: PathBuf,

    /// 使用语言学分词 (默认使用正则分词)
    #[arg(long)]
    pub linguistic: bool,

    /// 文档存储服务地址
    #[arg(long, value_name = "URL")]
    pub store_url: Option<String>,

    /// 使用进程内存储 (不访问远程服务)
    #[arg(long, conflicts_with = "store_url")]
    pub local_store: bool,

    /// 不保存翻译记录
    #[arg(long)]
    pub no_persist: bool,

    /// 输入文本最大字符数
    #[arg(long, default_value_t = translation_config::DEFAULT_MAX_CHARS)]
    pub max_chars: usize,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 静默模式 (仅输出错误)
    #[arg(short, long)]
    pub quiet: bool,

    /// 显示使用统计
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// 由命令行参数生成翻译配置
    pub fn translator_config(&self) -> TranslatorConfig {
        TranslatorConfig::new()
            .with_strategy(TokenizerStrategy::from_flag(self.linguistic))
            .with_max_chars(self.max_chars)
            .enable_persistence(!self.no_persist)
    }
}
