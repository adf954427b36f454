// ==========================================
// 引擎间集成测试
// ==========================================
// 职责: 验证时段计数 / 供应商聚合 / 比率计算 / PBC
//       多个引擎之间的协作和数据流转
// ==========================================

use sqr_analytics::domain::{RatioCell, SourceRecord};
use sqr_analytics::engine::temporal::unique_years;
use sqr_analytics::engine::{PbcEngine, PeriodCounter, RatioEngine, VendorAggregator};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用源记录
fn rec(date: &str, vendor: &str) -> SourceRecord {
    SourceRecord::new(date, vendor)
}

/// 构造一组跨两年、含畸形日期的 DMR 记录
fn sample_dmr_records() -> Vec<SourceRecord> {
    vec![
        rec("2023-01-05", "ACME"),
        rec("2023-01-20", "ACME"),
        rec("2023-03-02", "Widgets Inc"),
        rec("2024-02-11", "ACME"),
        rec("not-a-date", "ACME"), // 畸形日期: 静默不计入任何时间键
    ]
}

/// 构造对应的 PO 记录 (2023 年 10 条 / 2024 年 5 条)
fn sample_po_records() -> Vec<SourceRecord> {
    let mut records = Vec::new();
    for day in 1..=10 {
        records.push(rec(&format!("2023-01-{:02}", day), "ACME"));
    }
    for day in 1..=5 {
        records.push(rec(&format!("2024-02-{:02}", day), "ACME"));
    }
    records
}

// ==========================================
// 年度流水线: 计数 → 比率
// ==========================================

#[test]
fn test_year_pipeline_counts_to_ratios() {
    let counter = PeriodCounter::new();
    let ratio = RatioEngine::new();

    let dmr = sample_dmr_records();
    let po = sample_po_records();

    let dmr_years = unique_years(dmr.iter().map(|r| r.date.as_str()));
    let po_years = unique_years(po.iter().map(|r| r.date.as_str()));

    // DMR 年份键保持首现序, 畸形键照常出现
    assert_eq!(dmr_years, vec!["2023", "2024", "not-"]);

    let dmr_counts = counter.count_by_year(&dmr, &dmr_years);
    let po_counts = counter.count_by_year(&po, &po_years);

    assert_eq!(dmr_counts.get("2023"), Some(2 + 1));
    assert_eq!(dmr_counts.get("2024"), Some(1));
    assert_eq!(po_counts.get("2023"), Some(10));

    let table = ratio.year_ratio(&dmr_counts, &po_counts);

    // 2023: 3 DMR / 10 PO = 30%; 2024: 1/5 = 20%
    assert_eq!(table.get("2023"), Some(RatioCell::Value(30.0)));
    assert_eq!(table.get("2024"), Some(RatioCell::Value(20.0)));
    // 畸形键在 PO 表中缺失 -> Missing (展示边界再过滤掉)
    assert_eq!(table.get("not-"), Some(RatioCell::Missing));
}

// ==========================================
// 月度流水线: 计数 → 比率 (零分母省略)
// ==========================================

#[test]
fn test_month_pipeline_omits_zero_denominator_months() {
    let counter = PeriodCounter::new();
    let ratio = RatioEngine::new();

    let dmr = sample_dmr_records();
    let po = sample_po_records();

    let table = ratio.month_ratio(&counter.count_by_month(&dmr), &counter.count_by_month(&po));

    // 2023-01: 2 DMR / 10 PO = 20%
    assert_eq!(table.get("2023", "01"), Some(20.0));
    // 2023-03 有 1 条 DMR 但 PO 为 0 -> 整体省略
    assert_eq!(table.get("2023", "03"), None);
    // 2024-02: 1 DMR / 5 PO = 20%
    assert_eq!(table.get("2024", "02"), Some(20.0));
    // 共有年份以外的键不出现
    assert!(!table.years.contains_key("not-"));
}

// ==========================================
// 供应商流水线: 聚合 → 比率 → 排名
// ==========================================

#[test]
fn test_vendor_pipeline_aggregation_ratio_ranking() {
    let aggregator = VendorAggregator::new();
    let ratio = RatioEngine::new();

    let dmr = sample_dmr_records();
    let po = sample_po_records();

    let dmr_counts = aggregator.count_by_vendor_year(&dmr);
    let po_counts = aggregator.count_by_vendor_year(&po);

    // 畸形日期行被 isdigit 过滤
    assert_eq!(dmr_counts.get("ACME", "2023"), Some(2));
    assert_eq!(dmr_counts.get("Widgets Inc", "2023"), Some(1));

    let table = ratio.vendor_ratio(&dmr_counts, &po_counts);

    // ACME 2023: 2/10 = 20%
    assert_eq!(table.get("ACME", "2023"), Some(RatioCell::Value(20.0)));
    // Widgets Inc 只出现在 DMR 流: 行存在, 但 PO 中无此供应商 -> Missing
    assert_eq!(table.get("Widgets Inc", "2023"), Some(RatioCell::Missing));

    // 排名: Missing 不参与, 只剩 ACME
    let top = aggregator.top_ratios(&table, "2023", 8);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].vendor, "ACME");
    assert_eq!(top[0].ratio, 20.0);
}

// ==========================================
// PBC 流水线: 原始记录 → 控制限
// ==========================================

#[test]
fn test_pbc_pipeline_from_raw_records() {
    let engine = PbcEngine::new();
    let dmr = sample_dmr_records();

    let series = engine.compute(&dmr, "acme", 2023);

    // 大写归一化匹配; 2023-01 两条, 其余月份缺席
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].year_month, "2023-01");
    assert_eq!(series.points[0].count, 2);
    assert_eq!(series.mean, 2.0);
    // 单点序列: 最后一个移动极差为 0 -> 控制限退化
    assert_eq!(series.upl, 2.0);
    assert_eq!(series.lpl, 2.0);
    assert_eq!(series.url, 0.0);
}

// ==========================================
// 全链路幂等性
// ==========================================

#[test]
fn test_full_pipeline_idempotent() {
    let counter = PeriodCounter::new();
    let ratio = RatioEngine::new();
    let aggregator = VendorAggregator::new();

    let dmr = sample_dmr_records();
    let po = sample_po_records();

    let run = || {
        let dmr_years = unique_years(dmr.iter().map(|r| r.date.as_str()));
        let po_years = unique_years(po.iter().map(|r| r.date.as_str()));
        let year = ratio.year_ratio(
            &counter.count_by_year(&dmr, &dmr_years),
            &counter.count_by_year(&po, &po_years),
        );
        let month = ratio.month_ratio(&counter.count_by_month(&dmr), &counter.count_by_month(&po));
        let vendor = ratio.vendor_ratio(
            &aggregator.count_by_vendor_year(&dmr),
            &aggregator.count_by_vendor_year(&po),
        );
        (year, month, vendor)
    };

    assert_eq!(run(), run());
}
