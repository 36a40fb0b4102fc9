use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use minion_translator::api_constants::get_store_url;
use minion_translator::config::Cli;
use minion_translator::oracle::Dictionaries;
use minion_translator::service::TranslationService;
use minion_translator::stats::{print_performance_stats, TranslationStats};
use minion_translator::store::{DocumentStore, MemoryDocumentStore, RestDocumentStore};
use minion_translator::utils::{init_logging, read_input, select_input_source};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    init_logging(cli.verbose, cli.quiet);

    let start_time = Instant::now();

    match run(&cli).await {
        Ok(stats) => {
            if cli.stats {
                print_performance_stats(&stats, start_time.elapsed());
            }
            Ok(())
        }
        Err(e) => {
            error!("❌ 翻译失败: {:#}", e);
            Err(e)
        }
    }
}

async fn run(cli: &Cli) -> Result<TranslationStats> {
    let mut stats = TranslationStats::default();

    // 词典缺失或格式错误时直接退出
    let load_start = Instant::now();
    let dictionaries = Dictionaries::load(&cli.dictionary_dir)
        .with_context(|| format!("加载词典失败: {}", cli.dictionary_dir.display()))?;
    stats.dictionary_load_time = load_start.elapsed();

    let config = cli.translator_config();
    let store = build_store(cli)?;

    let init_start = Instant::now();
    let service = TranslationService::new(dictionaries, store, config).await?;
    stats.translator_init_time = init_start.elapsed();

    let source = select_input_source(cli.text.as_deref(), cli.input.as_deref());
    let text = read_input(&source)?;

    let translate_start = Instant::now();
    let outcome = service.translate(cli.direction, &text).await?;
    stats.translation_time = translate_start.elapsed();
    stats.record_outcome(&text, &outcome);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", outcome.text))
                .with_context(|| format!("写入输出文件失败: {}", path.display()))?;
            if !cli.quiet {
                info!("✅ 翻译完成: {}", path.display());
            }
        }
        None => println!("{}", outcome.text),
    }

    Ok(stats)
}

/// 根据参数选择文档存储：不持久化、进程内或远程
fn build_store(cli: &Cli) -> Result<Option<Arc<dyn DocumentStore>>> {
    if cli.no_persist {
        return Ok(None);
    }

    if cli.local_store {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        return Ok(Some(store));
    }

    let url = get_store_url(cli.store_url.as_deref());
    let rest = RestDocumentStore::new(url)?;
    info!("🔗 文档存储: {}", rest.base_url());

    let store: Arc<dyn DocumentStore> = Arc::new(rest);
    Ok(Some(store))
}
