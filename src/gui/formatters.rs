use iced::Color;
use crate::models::analysis::AnalysisMode;

pub const CRITICAL_COLOR: Color = Color { r: 0.85, g: 0.15, b: 0.15, a: 1.0 }; // red
pub const HIGH_COLOR: Color = Color { r: 0.95, g: 0.5, b: 0.1, a: 1.0 };      // orange
pub const MEDIUM_COLOR: Color = Color { r: 0.85, g: 0.75, b: 0.1, a: 1.0 };   // yellow
pub const LOW_COLOR: Color = Color { r: 0.2, g: 0.65, b: 0.2, a: 1.0 };       // green
pub const NEUTRAL_COLOR: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 };    // gray

pub const ERROR_TEXT_COLOR: Color = Color { r: 0.8, g: 0.1, b: 0.1, a: 1.0 };
pub const WARNING_TEXT_COLOR: Color = Color { r: 0.8, g: 0.5, b: 0.0, a: 1.0 };
pub const SUCCESS_TEXT_COLOR: Color = Color { r: 0.1, g: 0.55, b: 0.2, a: 1.0 };
pub const INFO_TEXT_COLOR: Color = Color { r: 0.15, g: 0.4, b: 0.75, a: 1.0 };
pub const MUTED_TEXT_COLOR: Color = Color { r: 0.4, g: 0.4, b: 0.4, a: 1.0 };

/// Severity vocabulary the backend uses for `risk_level`. Display only.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl RiskLevel {
    pub fn parse(raw: &str) -> Self {
        match fold_case(raw.trim()).as_str() {
            "kritik" | "critical" => RiskLevel::Critical,
            "yüksek" | "high" => RiskLevel::High,
            "orta" | "medium" => RiskLevel::Medium,
            "düşük" | "low" => RiskLevel::Low,
            _ => RiskLevel::Unknown,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            RiskLevel::Critical => CRITICAL_COLOR,
            RiskLevel::High => HIGH_COLOR,
            RiskLevel::Medium => MEDIUM_COLOR,
            RiskLevel::Low => LOW_COLOR,
            RiskLevel::Unknown => NEUTRAL_COLOR,
        }
    }
}

/// Lower-cases and folds Turkish `İ`/`ı` onto `i`, so "KRİTİK", "Kritik"
/// and "KRITIK" compare equal.
fn fold_case(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| *c != '\u{307}')
        .map(|c| if c == 'ı' { 'i' } else { c })
        .collect()
}

pub fn risk_color(level: &str) -> Color {
    RiskLevel::parse(level).color()
}

pub fn format_risk_badge(level: &str) -> String {
    format!("RISK SEVİYESİ: {}", level.to_uppercase())
}

pub fn format_run_info(mode_used: &str, processing_time_ms: u64) -> String {
    format!("Kullanılan Mod: {} | Tepki Süresi: {} ms", mode_used, processing_time_ms)
}

pub fn format_cve_list(cve_ids: &[String]) -> String {
    cve_ids.join(", ")
}

pub fn format_progress(mode: AnalysisMode) -> String {
    format!("{} Modu ile analiz ediliyor...", mode.as_str().to_uppercase())
}

/// Green while the selected mode can reach the LLM, yellow for rule-based mode.
pub fn ai_status_color(mode: AnalysisMode) -> Color {
    if mode.uses_llm() {
        SUCCESS_TEXT_COLOR
    } else {
        WARNING_TEXT_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_parse() {
        assert_eq!(RiskLevel::parse("KRİTİK"), RiskLevel::Critical);
        assert_eq!(RiskLevel::parse("kritik"), RiskLevel::Critical);
        assert_eq!(RiskLevel::parse("Kritik"), RiskLevel::Critical);
        assert_eq!(RiskLevel::parse("KRITIK"), RiskLevel::Critical);
        assert_eq!(RiskLevel::parse("YÜKSEK"), RiskLevel::High);
        assert_eq!(RiskLevel::parse("yüksek"), RiskLevel::High);
        assert_eq!(RiskLevel::parse(" Orta "), RiskLevel::Medium);
        assert_eq!(RiskLevel::parse("DÜŞÜK"), RiskLevel::Low);
        assert_eq!(RiskLevel::parse("high"), RiskLevel::High);
        assert_eq!(RiskLevel::parse("Bilinmiyor"), RiskLevel::Unknown);
        assert_eq!(RiskLevel::parse(""), RiskLevel::Unknown);
    }

    #[test]
    fn test_risk_color() {
        assert_eq!(risk_color("KRİTİK"), CRITICAL_COLOR);
        assert_eq!(risk_color("kritik"), CRITICAL_COLOR);
        assert_eq!(risk_color("YÜKSEK"), HIGH_COLOR);
        assert_eq!(risk_color("ORTA"), MEDIUM_COLOR);
        assert_eq!(risk_color("DÜŞÜK"), LOW_COLOR);
        assert_eq!(risk_color("catastrophic"), NEUTRAL_COLOR);
    }

    #[test]
    fn test_formatters() {
        assert_eq!(format_risk_badge("yüksek"), "RISK SEVİYESİ: YÜKSEK");
        assert_eq!(format_run_info("ai", 1500), "Kullanılan Mod: ai | Tepki Süresi: 1500 ms");
        assert_eq!(
            format_cve_list(&["CVE-2021-1".to_string(), "CVE-2021-2".to_string()]),
            "CVE-2021-1, CVE-2021-2"
        );
        assert_eq!(format_progress(AnalysisMode::Ai), "AI Modu ile analiz ediliyor...");
    }

    #[test]
    fn test_ai_status_color() {
        assert_eq!(ai_status_color(AnalysisMode::Ai), SUCCESS_TEXT_COLOR);
        assert_eq!(ai_status_color(AnalysisMode::Auto), SUCCESS_TEXT_COLOR);
        assert_eq!(ai_status_color(AnalysisMode::Fast), WARNING_TEXT_COLOR);
    }
}
