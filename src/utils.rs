use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

/// 输入源类型枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// 命令行直接给出的文本
    Text(String),
    /// 本地文件路径
    File(PathBuf),
    /// 标准输入
    Stdin,
}

/// 初始化日志系统
pub fn init_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // 日志写到stderr，stdout只留给翻译结果
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// 根据命令行参数确定输入源
pub fn select_input_source(text: Option<&str>, input: Option<&Path>) -> InputSource {
    match (text, input) {
        (Some(text), _) => InputSource::Text(text.to_string()),
        (None, Some(path)) => InputSource::File(path.to_path_buf()),
        (None, None) => InputSource::Stdin,
    }
}

/// 验证输入文件
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("输入文件不存在: {}", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("输入路径不是文件: {}", path.display());
    }

    if let Some(ext) = path.extension() {
        if ext != "txt" {
            warn!("⚠️  文件扩展名不是txt: {}", ext.to_string_lossy());
        }
    }

    Ok(())
}

/// 读取输入文本
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Text(text) => Ok(text.clone()),
        InputSource::File(path) => {
            validate_input_file(path)?;
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("读取输入文件失败: {}", path.display()))?;
            Ok(strip_line_ending(&content))
        }
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("读取标准输入失败")?;
            Ok(strip_line_ending(&buffer))
        }
    }
}

/// 去掉末尾换行，保证文档ID与直接输入的文本一致
fn strip_line_ending(text: &str) -> String {
    text.trim_end_matches(['\n', '\r']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_select_input_source() {
        assert_eq!(
            select_input_source(Some("hello"), None),
            InputSource::Text("hello".to_string())
        );
        assert_eq!(
            select_input_source(None, Some(Path::new("in.txt"))),
            InputSource::File(PathBuf::from("in.txt"))
        );
        assert_eq!(select_input_source(None, None), InputSource::Stdin);
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = std::env::temp_dir().join("minion-translator-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("input_{}.txt", std::process::id()));
        fs::write(&path, "Hello, World!\n").unwrap();

        let content = read_input(&InputSource::File(path.clone())).unwrap();
        assert_eq!(content, "Hello, World!");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("bello\r\n"), "bello");
        assert_eq!(strip_line_ending("  bello  "), "  bello  ");
    }

    #[test]
    fn test_read_input_missing_file() {
        let path = std::env::temp_dir().join("minion-translator-tests/does-not-exist.txt");
        assert!(read_input(&InputSource::File(path)).is_err());
    }
}
