mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use folder_insights_common::{init_logging, EngineConfig, InsightsError};
use folder_insights_executor::{execute_with, write_csv, QueryContext};
use folder_insights_intent::classify;
use folder_insights_scanner::FsDirectory;

const GUIDANCE: &str = "Could not understand the goal. Try being more specific, e.g. \
\"find files >50MB\", \"count files by extension\" or 'search for \"TODO\" in .js files'.";

#[derive(Debug, Parser)]
#[command(name = "folder-insights", version, about = "Ask questions about a local folder in plain English")]
struct Cli {
    /// 要查询的目录
    dir: String,

    /// 查询目标，例如 "find files >50MB depth 2"
    #[arg(required = true, num_args = 1..)]
    goal: Vec<String>,

    /// 覆盖遍历深度（排他上界）
    #[arg(long)]
    depth: Option<usize>,

    /// 结果导出为 CSV 文件
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// 以 JSON 输出结果
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// 打印解析出的意图
    #[arg(long)]
    show_intent: bool,
}

/// 命令行宿主：把本地目录作为能力句柄打开，解析自然语言目标并执行查询
fn run(cli: Cli) -> Result<ExitCode, InsightsError> {
    let goal = cli.goal.join(" ");
    let Some(mut intent) = classify(&goal) else {
        eprintln!("{}", GUIDANCE);
        return Ok(ExitCode::from(2));
    };
    if cli.depth.is_some() {
        intent.set_max_depth(cli.depth);
    }
    if cli.show_intent {
        eprintln!(
            "[FolderInsights] intent: {}",
            serde_json::to_string(&intent).unwrap_or_else(|_| format!("{:?}", intent))
        );
    }

    let root = FsDirectory::open(&cli.dir)?;
    log::info!("query {:?} on {}", goal, root.path().display());

    let ctx = QueryContext::new(EngineConfig::from_env()?);
    let outcome = execute_with(&root, &intent, &ctx)?;

    if let Some(path) = &cli.csv {
        write_csv(&outcome.results, path)?;
        eprintln!("[FolderInsights] wrote {} rows to {}", outcome.results.len(), path.display());
    } else if cli.json {
        println!("{}", render::render_json(&outcome)?);
    } else {
        print!("{}", render::render_table(&root.name(), &outcome.results));
    }

    if !outcome.warnings.is_empty() {
        eprintln!(
            "[FolderInsights] {} entries skipped (set RUST_LOG=warn for details)",
            outcome.warnings.len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[FolderInsights] error: {}", e);
            ExitCode::FAILURE
        }
    }
}
