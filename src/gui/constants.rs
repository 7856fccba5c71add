pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const EDITOR_HEIGHT: f32 = 200.0;

pub const DASHBOARD_TITLE: &str = "Yapay Zeka Destekli Güvenlik Haritalama Sistemi";
pub const DASHBOARD_INTRO: &str = "İş veya teknik gereksinimlerinizi analiz ederek, ilgili güvenlik çerçeveleriyle eşleştirin ve çözüm önerileri alın.";
pub const REQUIREMENT_PROMPT: &str = "İşletmenizin veya teknik gereksinimlerinizin listesini girin:";
pub const REQUIREMENT_EXAMPLE: &str = "Örnek: Yeni e-ticaret platformumuzda kullanıcı şifrelerini güvenli bir şekilde saklamalıyız ve müşteri kişisel verilerine yetkisiz erişimi engellemeliyiz.";
pub const MODE_HELP: &str = "Auto: Kural tabanlı Fast Mode'u dener, eşleşmezse veya zorunluysa AI Mode'a geçer.";

/// Display names for the sidebar; the wire names live in `models::analysis`.
pub const SUPPORTED_FRAMEWORKS: [&str; 5] = [
    "OWASP İlk 10",
    "MITRE ATT&CK",
    "NIST Siber Güvenlik Çerçevesi",
    "ISO 27001/27002",
    "IEC 62443",
];

pub const INCOMPLETE_WARNING: &str = "Analiz başarılı ancak sonuçlar beklendiği gibi işlenemedi.";
pub const NO_FRAMEWORK_MATCHES: &str = "Hiçbir güvenlik çerçevesi eşleştirilemedi.";
pub const NO_SHORT_TERM: &str = "Kısa vadeli acil öneri bulunamadı.";
pub const NO_LONG_TERM: &str = "Uzun vadeli stratejik öneri bulunamadı.";
