// ==========================================
// 设备预测性维护系统 - CLI 主入口
// ==========================================
// 用法:
//   maint-predictor <file.csv|.xlsx> [error_report.csv]
//
// 环境变量:
//   MAINT_PREDICTOR_SERVICE_URL 设置后走远程预测服务,
//   否则走本地校验/分析路径
// ==========================================

use maint_predictor::config::PredictionServiceConfig;
use maint_predictor::service::PredictionServiceClient;
use maint_predictor::{logging, AnalysisApi, AnalysisResponse};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", maint_predictor::APP_NAME);
    tracing::info!("系统版本: {}", maint_predictor::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let file_path = match args.next() {
        Some(p) => p,
        None => {
            eprintln!("用法: maint-predictor <file.csv|.xlsx> [error_report.csv]");
            std::process::exit(2);
        }
    };
    let report_path = args.next();

    let api = AnalysisApi::new();

    // 远程模式: 配置了服务地址时, 预测结果由上游服务计算
    let response = match PredictionServiceConfig::from_env() {
        Some(config) => {
            tracing::info!(base_url = %config.base_url, "使用远程预测服务");
            let client = PredictionServiceClient::new(config);
            let bytes = std::fs::read(&file_path)?;
            let file_name = std::path::Path::new(&file_path)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file_path.clone());
            api.analyze_remote(&client, &file_name, bytes, false).await?
        }
        None => api.analyze_file(&file_path).await?,
    };

    print_response(&response);

    // 有被拒绝的行时导出错误报告
    if !response.issues.is_empty() {
        let report = api.export_error_report(&response.issues)?;
        match &report_path {
            Some(path) => {
                std::fs::write(path, &report)?;
                tracing::info!(path = %path, rows = response.issues.len(), "错误报告已写出");
            }
            None => {
                println!();
                println!("--- 错误报告 (equipment_id,reason) ---");
                print!("{}", report);
            }
        }
    }

    Ok(())
}

fn print_response(response: &AnalysisResponse) {
    println!(
        "批次 {}: 总行数 {}, 通过 {}, 拒绝 {} ({} ms)",
        response.batch_id,
        response.summary.total_rows,
        response.summary.accepted,
        response.summary.rejected,
        response.elapsed_ms
    );
    println!(
        "风险普查: High={} Medium={} Low={} (total={})",
        response.census.high, response.census.medium, response.census.low, response.census.total
    );

    if !response.recommendations.is_empty() {
        println!();
        println!("--- 维护建议 ---");
        for recommendation in &response.recommendations {
            println!("{}", recommendation);
        }
    }
}
