//! Localized notification texts.

use crate::domain::catalog::LevelTitle;
use crate::domain::settings::Language;

/// A rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub title: String,
    pub body: String,
}

impl NotificationMessage {
    pub fn level_up(level: u8, title: LevelTitle, language: Language) -> Self {
        let (heading, body) = match language {
            Language::Fr => (
                "🎖️ GRADE ÉLEVÉ",
                format!("Agent, vous êtes NIVEAU {} : {}.", level, title),
            ),
            Language::Ar => (
                "🎖️ ترقية الرتبة",
                format!("أيها العميل، أنت الآن في المستوى {} : {}.", level, title),
            ),
            Language::En => (
                "🎖️ RANK RAISED",
                format!("Agent, you are now LEVEL {}: {}.", level, title),
            ),
            Language::Es => (
                "🎖️ RANGO ELEVADO",
                format!("Agente, ahora eres NIVEL {}: {}.", level, title),
            ),
        };
        Self {
            title: heading.to_string(),
            body,
        }
    }

    pub fn check_in_success(days: u32, language: Language) -> Self {
        let (heading, body) = match language {
            Language::Fr => (
                "✅ CYCLE VALIDÉ",
                format!("J+{} accompli. Système synchronisé.", days),
            ),
            Language::Ar => ("✅ تم تأكيد الدورة", format!("اليوم {} مكتمل. النظام متزامن.", days)),
            Language::En => (
                "✅ CYCLE CONFIRMED",
                format!("Day +{} complete. System synchronized.", days),
            ),
            Language::Es => (
                "✅ CICLO VALIDADO",
                format!("Día +{} completado. Sistema sincronizado.", days),
            ),
        };
        Self {
            title: heading.to_string(),
            body,
        }
    }
}
