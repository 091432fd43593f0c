use crate::speech::Voice;

const LABEL_SEPARATOR: &str = " | ";

/// A voice as offered in a voice picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOption {
    pub name: String,
    pub lang: String,
}

impl VoiceOption {
    /// Picker label, e.g. `Alex | (en-US)`
    pub fn label(&self) -> String {
        format!("{}{}({})", self.name, LABEL_SEPARATOR, self.lang)
    }
}

impl From<&Voice> for VoiceOption {
    fn from(voice: &Voice) -> Self {
        Self {
            name: voice.name.clone(),
            lang: voice.lang.clone(),
        }
    }
}

/// Voices whose language tag matches `lang` exactly, in engine order.
pub fn voice_options(voices: &[Voice], lang: &str) -> Vec<VoiceOption> {
    voices
        .iter()
        .filter(|voice| voice.lang == lang)
        .map(VoiceOption::from)
        .collect()
}

/// Parses a picker label back into name and language.
///
/// Returns `None` for labels without the separator or with an empty name.
pub fn parse_label(label: &str) -> Option<VoiceOption> {
    let (name, lang) = label.split_once(LABEL_SEPARATOR)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let lang = lang
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .to_string();
    Some(VoiceOption {
        name: name.to_string(),
        lang,
    })
}
