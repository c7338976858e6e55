//! Coach persona and prompt templates.

use crate::domain::progress::CravingIntensity;
use crate::domain::settings::Language;

/// System persona for the coach, answering in `language`.
pub fn persona(language: Language) -> &'static str {
    match language {
        Language::Fr => "Tu es le Stratège Neural de Bila Dkhane. Ton élocution est calme, lente, articulée et extrêmement professionnelle. Tu ne montres aucune précipitation. Tu es là pour assurer le bien-être total de l'Agent. Réponds toujours en Français.",
        Language::Ar => "أنت المخطط العصبي لـ Bila Dkhane. حديثك هادئ، بطيء، واضح واحترافي للغاية. لا تظهر أي عجلة. أنت هنا لضمان الرفاهية الكاملة للعميل. أجب دائماً بالعربية الفصحى.",
        Language::En => "You are the Bila Dkhane Neural Strategist. Your speech is calm, slow, articulate, and highly professional. You show no rush. You are here to ensure the Agent's total well-being. Always respond in English.",
        Language::Es => "Eres el Estratega Neural de Bila Dkhane. Tu habla es tranquila, lenta, articulada y altamente profesional. No muestras ninguna prisa. Estás aquí para asegurar el bienestar total del Agente. Responde siempre en español.",
    }
}

pub fn craving_system_prompt(language: Language) -> String {
    format!(
        "{} Mission: neutralize the urge with one precise, soothing mental command of 10 to 15 words at most.",
        persona(language)
    )
}

pub fn craving_prompt(trigger: &str, intensity: CravingIntensity) -> String {
    format!(
        "ALERT: CRAVING [{}] - LEVEL [{}]. GENERATE NEURAL SHIELD PROTOCOL.",
        trigger, intensity
    )
}

pub fn wisdom_system_prompt(language: Language) -> String {
    format!(
        "{} Mission: produce a single sentence of complete well-being, encouraging and highly professional.",
        persona(language)
    )
}

pub fn wisdom_prompt(days: u32, target_days: u32) -> String {
    format!(
        "Mission Day: {}/{}. Generate a high-end wellness affirmation.",
        days, target_days
    )
}

pub fn coach_system_prompt(language: Language) -> String {
    format!(
        "{} Mission: give a strategic, highly intelligent and calm answer about quitting smoking.",
        persona(language)
    )
}

pub fn coach_prompt(inquiry: &str, days: u32) -> String {
    format!("Agent Status: {} days. Inquiry: {}", days, inquiry)
}

pub fn wish_image_prompt(subject: &str) -> String {
    format!(
        "A photorealistic 4K cinematic visualization of the ultimate reward: {}. Dramatic lighting, futuristic aesthetic, hyper-detailed symbol of success.",
        subject
    )
}

pub const SMOKER_ANATOMY_PROMPT: &str = "A hyper-realistic 4K anatomical rendering of a human torso affected by smoking. Ashy lungs, dark congested airways, dull skin tone, slow-firing grey neural pathways, obsidian background, clinical red warning lights, extreme detail, medical visualization style.";

pub const RECOVERED_ANATOMY_PROMPT: &str = "A hyper-realistic 4K anatomical rendering of a perfectly healthy human torso. Luminous emerald-clean lungs, crystalline airways, vibrant golden skin glow, bright electric emerald neural pathways firing rapidly, futuristic medical interface background, sense of peak performance.";
