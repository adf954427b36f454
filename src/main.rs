// ==========================================
// 供应商质量比率系统 - 批量报表入口
// ==========================================
// 流程: 配置加载 → 台账导入 → 报表计算 → CSV 导出
// 用法: sqr-analytics [配置文件路径]  (默认 sqr_config.json)
// ==========================================

use anyhow::Context;
use sqr_analytics::config::SqrConfig;
use sqr_analytics::export;
use sqr_analytics::importer;
use sqr_analytics::ReportApi;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    sqr_analytics::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 质量决策支持系统", sqr_analytics::APP_NAME);
    tracing::info!("系统版本: {}", sqr_analytics::VERSION);
    tracing::info!("==================================================");

    // 配置加载
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sqr_config.json"));
    let config = SqrConfig::load_or_default(&config_path)?;

    // 台账导入
    let dmr_records = importer::import_dmr_log(
        &config.dmr_log_path,
        &config.dmr_columns.date_column,
        &config.dmr_columns.vendor_column,
    )
    .with_context(|| format!("DMR 台账导入失败: {}", config.dmr_log_path.display()))?;

    let po_records = importer::import_po_log(
        &config.po_log_path,
        &config.po_columns.date_column,
        &config.po_columns.vendor_column,
    )
    .with_context(|| format!("PO 台账导入失败: {}", config.po_log_path.display()))?;

    // 报表计算
    let report = ReportApi::new(config.top_n).generate(&dmr_records, &po_records);

    // CSV 导出
    export::write_report(&report, &config.output_dir)
        .with_context(|| format!("报表导出失败: {}", config.output_dir.display()))?;

    tracing::info!(
        output_dir = %config.output_dir.display(),
        "运行完成"
    );

    Ok(())
}
