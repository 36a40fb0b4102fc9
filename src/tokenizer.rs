//! 分词模块
//!
//! 提供两种分词策略：
//! - 正则策略（默认）：`[\w']+|[.,!?;]`，空白和其他符号全部丢弃
//! - 语言学策略：先分句，再按Treebank规则切分单词、缩写和标点
//!
//! 两种分词器的正则都在构建时编译一次，之后只读，可在多个任务间共享。

// 第三方crate导入
use anyhow::Context;
use regex::Regex;

// 本地模块导入
use crate::api_constants::translation_config;
use crate::error::Result;

/// 分词策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerStrategy {
    /// 固定字符类正则分词
    #[default]
    Regex,
    /// Treebank风格的语言学分词
    Linguistic,
}

impl TokenizerStrategy {
    /// 根据开关选择策略
    pub fn from_flag(use_linguistic: bool) -> Self {
        if use_linguistic {
            TokenizerStrategy::Linguistic
        } else {
            TokenizerStrategy::Regex
        }
    }
}

/// 正则分词器
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    pub fn new() -> Result<Self> {
        let pattern =
            Regex::new(translation_config::WORD_PATTERN).context("编译分词正则表达式失败")?;
        Ok(Self { pattern })
    }

    /// 提取所有匹配，不匹配任何分支的字符被丢弃
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// 一条替换规则
#[derive(Debug, Clone)]
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("编译分词规则失败: {}", pattern))?;
        Ok(Self { pattern, replacement })
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

fn compile_rules(specs: &[(&str, &'static str)]) -> Result<Vec<Rule>> {
    specs
        .iter()
        .map(|&(pattern, replacement)| Rule::new(pattern, replacement))
        .collect()
}

/// 开头引号
const STARTING_QUOTES: &[(&str, &str)] = &[
    (r"([`]+)", " ${1} "),
    (r#"^""#, "``"),
    (r"(``)", " ${1} "),
    (r#"([ (\[{<])("|'')"#, "${1} `` "),
];

/// 标点
const PUNCTUATION: &[(&str, &str)] = &[
    (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
    (r"([:,])([^\d])", " ${1} ${2}"),
    (r"([:,])$", " ${1} "),
    (r"\.{2,}", " ${0} "),
    (r"[;@#$%&]", " ${0} "),
    (r"[?!]", " ${0} "),
    (r"([^'])' ", "${1} ' "),
    (r"[*]", " ${0} "),
];

/// 括号
const PARENS_BRACKETS: &[(&str, &str)] = &[(r"[\]\[(){}<>]", " ${0} ")];

/// 双破折号
const DOUBLE_DASHES: &[(&str, &str)] = &[(r"--", " -- ")];

/// 结尾引号与英语缩写
const ENDING_QUOTES: &[(&str, &str)] = &[
    (r"''", " '' "),
    (r#"""#, " '' "),
    (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
    (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
];

/// 需要拆开的口语合成词
const CONTRACTIONS: &[(&str, &str)] = &[
    (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
    (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
    (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
    (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
    (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
    (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
    (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
    (r"(?i)\b(wan)(na)\b", " ${1} ${2} "),
    (r"(?i) ('t)(is)\b", " ${1} ${2} "),
    (r"(?i) ('t)(was)\b", " ${1} ${2} "),
];

/// 句子边界：句末标点（可带右引号/右括号）后接空白
const SENTENCE_BOUNDARY: &str = r#"[.!?]+["')\]]*\s+"#;

/// Treebank风格分词器
#[derive(Debug, Clone)]
pub struct TreebankTokenizer {
    sentence_boundary: Regex,
    starting_quotes: Vec<Rule>,
    punctuation: Vec<Rule>,
    parens_brackets: Vec<Rule>,
    double_dashes: Vec<Rule>,
    ending_quotes: Vec<Rule>,
    contractions: Vec<Rule>,
}

impl TreebankTokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sentence_boundary: Regex::new(SENTENCE_BOUNDARY).context("编译分句正则表达式失败")?,
            starting_quotes: compile_rules(STARTING_QUOTES)?,
            punctuation: compile_rules(PUNCTUATION)?,
            parens_brackets: compile_rules(PARENS_BRACKETS)?,
            double_dashes: compile_rules(DOUBLE_DASHES)?,
            ending_quotes: compile_rules(ENDING_QUOTES)?,
            contractions: compile_rules(CONTRACTIONS)?,
        })
    }

    /// 分句后逐句分词
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.split_sentences(text)
            .into_iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }

    /// 按句末标点切分句子，句末标点保留在句子内
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for boundary in self.sentence_boundary.find_iter(text) {
            let sentence = text[start..boundary.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = boundary.end();
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }

        sentences
    }

    /// 单句分词
    pub fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let mut text = sentence.to_string();

        for rule in self
            .starting_quotes
            .iter()
            .chain(&self.punctuation)
            .chain(&self.parens_brackets)
            .chain(&self.double_dashes)
        {
            text = rule.apply(&text);
        }

        // 结尾规则依赖词后的空格
        text = format!(" {} ", text);

        for rule in self.ending_quotes.iter().chain(&self.contractions) {
            text = rule.apply(&text);
        }

        text.split_whitespace().map(str::to_string).collect()
    }
}

/// 按策略分派的分词器，两种策略同时就绪
#[derive(Debug, Clone)]
pub struct Tokenizer {
    regex: RegexTokenizer,
    treebank: TreebankTokenizer,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: RegexTokenizer::new()?,
            treebank: TreebankTokenizer::new()?,
        })
    }

    pub fn tokenize(&self, text: &str, strategy: TokenizerStrategy) -> Vec<String> {
        match strategy {
            TokenizerStrategy::Regex => self.regex.tokenize(text),
            TokenizerStrategy::Linguistic => self.treebank.tokenize(text),
        }
    }
}
