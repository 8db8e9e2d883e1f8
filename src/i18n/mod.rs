//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Resolve a language tag such as `"en"`, `"zh"` or `"zh-CN"`
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Store errors
    map.insert("error-forecast", ("Unable to load forecast data.", "无法加载预测数据。"));
    map.insert("error-insights", ("Unable to load insights.", "无法加载洞察数据。"));
    map.insert("error-history", ("Unable to load history.", "无法加载历史数据。"));
    map.insert("error-upload", ("Upload failed. Please check the CSV format.", "上传失败，请检查 CSV 格式。"));
    map.insert("error-predict", ("Unable to fetch prediction.", "无法获取预测结果。"));

    // Store toasts
    map.insert("toast-forecast-failed", ("Failed to load forecast data.", "加载预测数据失败。"));
    map.insert("toast-insights-failed", ("Failed to load insights.", "加载洞察数据失败。"));
    map.insert("toast-history-failed", ("Failed to load history.", "加载历史数据失败。"));
    map.insert("toast-upload-failed", ("CSV upload failed. Please check the file format.", "CSV 上传失败，请检查文件格式。"));
    map.insert("toast-upload-ok", ("CSV uploaded and dashboard updated.", "CSV 已上传，仪表盘已更新。"));
    map.insert("toast-predict-failed", ("Prediction failed. Please try again.", "预测失败，请重试。"));
    map.insert("toast-predict-ok", ("Prediction generated successfully.", "预测生成成功。"));

    // Export toasts
    map.insert("toast-export-forecast", ("Forecast CSV exported.", "预测 CSV 已导出。"));
    map.insert("toast-export-prediction", ("Prediction CSV exported.", "预测结果 CSV 已导出。"));
    map.insert("toast-export-history", ("Filtered history exported.", "筛选后的历史数据已导出。"));
    map.insert("toast-export-insights", ("Insights PDF exported.", "洞察 PDF 已导出。"));
    map.insert("toast-no-prediction", ("Generate prediction first.", "请先生成预测。"));
    map.insert("toast-no-insights", ("No insights to export.", "没有可导出的洞察数据。"));
    map.insert("toast-export-failed", ("Export failed.", "导出失败。"));
    map.insert("toast-logged-out", ("Logged out.", "已退出登录。"));
    map.insert("toast-invalid-file", ("Invalid file. Please select a .csv", "文件无效，请选择 .csv 文件"));
    map.insert("toast-invalid-month", ("Select a month (Jan-Dec) and a year between 2025 and 2035.", "请选择月份（Jan-Dec）和 2025 至 2035 之间的年份。"));
    map.insert("toast-dismissed", ("Notification dismissed.", "通知已关闭。"));
    map.insert("toast-not-found", ("No such notification.", "未找到该通知。"));
    map.insert("toasts-empty", ("No notifications.", "暂无通知。"));
    map.insert("export-saved", ("Saved to", "已保存至"));

    // Navigation
    map.insert("nav-dashboard", ("Dashboard", "仪表盘"));
    map.insert("nav-insights", ("Insights", "洞察"));
    map.insert("nav-history", ("History", "历史"));

    // Dashboard
    map.insert("stat-total-consumption", ("Total Consumption", "总用电量"));
    map.insert("stat-avg-consumption", ("Avg Monthly Consumption", "月均用电量"));
    map.insert("stat-peak-month", ("Peak Month", "峰值月份"));
    map.insert("stat-lowest-month", ("Lowest Month", "最低月份"));
    map.insert("stat-total-bill", ("Total Bill Amount", "总电费"));
    map.insert("stat-avg-rate", ("Avg Cost per kWh", "每千瓦时平均费用"));
    map.insert("dashboard-series", ("Actual vs Forecast", "实际与预测"));
    map.insert("dashboard-trend", ("Consumption Trend", "用电趋势"));
    map.insert("prediction-title", ("Prediction Result", "预测结果"));
    map.insert("prediction-empty", ("Generate prediction to view results.", "生成预测以查看结果。"));
    map.insert("prediction-month", ("Month", "月份"));
    map.insert("prediction-model", ("Model", "模型"));
    map.insert("prediction-consumption", ("Predicted Consumption", "预测用电量"));
    map.insert("prediction-bill", ("Predicted Bill", "预测电费"));
    map.insert("prediction-confidence", ("Confidence", "置信度"));
    map.insert("prediction-trend", ("Trend", "趋势"));
    map.insert("trend-up", ("Up", "上升"));
    map.insert("trend-down", ("Down", "下降"));
    map.insert("trend-predicted", ("predicted", "预测"));
    map.insert("forecast-marker", ("forecast month", "预测月份"));
    map.insert("forecast-empty", ("No forecast data yet. Upload a CSV to get started.", "暂无预测数据，请上传 CSV。"));

    // Insights
    map.insert("insights-empty", ("Upload energy data from Dashboard.", "请在仪表盘上传能耗数据。"));
    map.insert("insights-consumption", ("Consumption Insights", "用电洞察"));
    map.insert("insights-bill", ("Bill Insights", "电费洞察"));
    map.insert("insights-trend", ("Trend Analysis", "趋势分析"));
    map.insert("insights-rate", ("Avg Rate / kWh", "平均单价 / 千瓦时"));
    map.insert("insights-bill-distribution", ("Bill Distribution (Last 6 Months)", "电费分布（近 6 个月）"));
    map.insert("insights-recommendations", ("Recommendations", "建议"));
    map.insert("report-title", ("Energy Insights Summary", "能耗洞察摘要"));
    map.insert("report-avg-consumption", ("Average Consumption", "平均用电量"));
    map.insert("report-peak-month", ("Peak Month", "峰值月份"));
    map.insert("report-lowest-month", ("Lowest Month", "最低月份"));
    map.insert("report-total-bill", ("Total Bill", "总电费"));
    map.insert("report-avg-rate", ("Avg Rate/kWh", "平均单价/千瓦时"));

    // History table
    map.insert("col-month", ("Month", "月份"));
    map.insert("col-consumption", ("Consumption (kWh)", "用电量 (kWh)"));
    map.insert("col-bill", ("Bill Amount", "电费"));
    map.insert("history-search", ("Search", "搜索"));
    map.insert("history-year", ("Year", "年份"));
    map.insert("history-loading", ("Loading history...", "正在加载历史数据..."));
    map.insert("history-no-records", ("No records found.", "未找到记录。"));
    map.insert("history-page", ("Page", "页"));
    map.insert("history-of", ("of", "/"));

    // Common
    map.insert("loading", ("Loading...", "加载中..."));
    map.insert("login-required", ("Please log in first.", "请先登录。"));
    map.insert("login-invalid", ("Email and password are required.", "请输入邮箱和密码。"));
    map.insert("login-welcome", ("Welcome back.", "欢迎回来。"));

    // Shell
    map.insert("shell-banner", ("Energy Dash. Type `help` for commands, `login <email> <password>` to start.", "Energy Dash。输入 `help` 查看命令，输入 `login <邮箱> <密码>` 开始。"));
    map.insert("shell-bye", ("Goodbye.", "再见。"));
    map.insert("status-user", ("User", "用户"));
    map.insert("status-api", ("Service", "服务"));
    map.insert("status-page", ("Page", "页面"));
    map.insert("status-language", ("Language", "语言"));
    map.insert("status-loading", ("In flight", "进行中"));
    map.insert("status-last-error", ("Last error", "最近错误"));
    map.insert("status-none", ("none", "无"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> Arc<str> {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => Arc::from(en),
            Locale::ZhCN => Arc::from(zh),
        }
    } else {
        // Fallback: return the key itself
        Arc::from(key)
    }
}
