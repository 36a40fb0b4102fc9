use std::time::Duration;

use crate::config::Direction;
use crate::service::TranslationOutcome;

/// 单次运行的统计结构
#[derive(Debug, Default)]
pub struct TranslationStats {
    pub dictionary_load_time: Duration,
    pub translator_init_time: Duration,
    pub translation_time: Duration,
    pub input_size: usize,
    pub output_size: usize,
    pub tokens: usize,
    pub substituted: usize,
    pub passthrough: usize,
    pub cache_hit: bool,
    pub persisted: bool,
    pub minionize_count: u64,
    pub humanize_count: u64,
}

impl TranslationStats {
    /// 记录一次翻译结果
    pub fn record_outcome(&mut self, input: &str, outcome: &TranslationOutcome) {
        self.input_size = input.len();
        self.output_size = outcome.text.len();
        self.tokens = outcome.report.tokens;
        self.substituted = outcome.report.substituted;
        self.passthrough = outcome.report.passthrough;
        self.cache_hit = outcome.cache_hit;
        self.persisted = outcome.persisted;

        match outcome.direction {
            Direction::Minionize => self.minionize_count = outcome.usage_count,
            Direction::Humanize => self.humanize_count = outcome.usage_count,
        }
    }

    /// 词典命中率，没有分词时为None
    pub fn hit_rate(&self) -> Option<f64> {
        if self.tokens == 0 {
            None
        } else {
            Some(self.substituted as f64 / self.tokens as f64)
        }
    }
}

/// 打印统计报告
pub fn print_performance_stats(stats: &TranslationStats, total_duration: Duration) {
    println!("\n📊 翻译统计报告:");
    println!("═══════════════════════════════════════");

    // 时间分解
    println!("⏱️  时间分解:");
    println!("   词典加载: {}", format_duration(stats.dictionary_load_time));
    println!(
        "   翻译器初始化: {}",
        format_duration(stats.translator_init_time)
    );
    println!("   翻译执行: {}", format_duration(stats.translation_time));
    println!("   总耗时: {}", format_duration(total_duration));

    // 文本统计
    println!("\n📏 文本统计:");
    println!("   输入大小: {} 字节", stats.input_size);
    println!("   输出大小: {} 字节", stats.output_size);

    // 翻译统计
    println!("\n🔤 翻译统计:");
    println!("   分词数量: {} 个", stats.tokens);
    println!("   词典替换: {} 个", stats.substituted);
    println!("   原样保留: {} 个", stats.passthrough);
    if let Some(rate) = stats.hit_rate() {
        println!("   命中率: {:.1}%", rate * 100.0);
    }
    if stats.cache_hit {
        println!("   ♻️  复用已有翻译记录");
    }

    // 使用计数
    println!("\n💾 使用计数:");
    println!("   小黄人化: {} 次", stats.minionize_count);
    println!("   人类化: {} 次", stats.humanize_count);
    println!(
        "   记录保存: {}",
        if stats.persisted { "✅ 成功" } else { "⚠️  未保存" }
    );
}

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{:.3}s", duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::TranslationReport;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
        assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.500s");
    }

    #[test]
    fn test_record_outcome() {
        let outcome = TranslationOutcome {
            direction: Direction::Humanize,
            text: "hello world".to_string(),
            document_id: "abc".to_string(),
            cache_hit: false,
            persisted: true,
            usage_count: 7,
            report: TranslationReport {
                text: "hello world".to_string(),
                tokens: 2,
                substituted: 1,
                passthrough: 1,
            },
        };

        let mut stats = TranslationStats::default();
        stats.record_outcome("bello world", &outcome);

        assert_eq!(stats.input_size, 11);
        assert_eq!(stats.output_size, 11);
        assert_eq!(stats.humanize_count, 7);
        assert_eq!(stats.minionize_count, 0);
        assert_eq!(stats.hit_rate(), Some(0.5));
    }

    #[test]
    fn test_hit_rate_empty() {
        assert_eq!(TranslationStats::default().hit_rate(), None);
    }
}
