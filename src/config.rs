// Configuration for readalong playback, synchronization and UI components
// All values have defaults; the command line overrides a handful of them.

use std::ops::RangeInclusive;

/// Reading-speed model used to time simulated speech
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Word length threshold for penalty (default 10 chars)
    pub long_word_threshold: usize,

    /// Word length penalty multiplier for words > threshold (default 1.15x)
    pub long_word_penalty: f64,

    pub period_multiplier: f64,      // default 3.0x
    pub comma_multiplier: f64,       // default 1.5x
    pub question_multiplier: f64,    // default 3.0x
    pub exclamation_multiplier: f64, // default 3.0x
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            long_word_threshold: 10,
            long_word_penalty: 1.15,
            period_multiplier: 3.0,
            comma_multiplier: 1.5,
            question_multiplier: 3.0,
            exclamation_multiplier: 3.0,
        }
    }
}

/// Boundary resynchronization tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResyncConfig {
    /// Words probed ahead of the current index when correcting drift (default 10)
    pub lookahead_window: usize,

    /// Words probed behind the current index before scanning forward (default 1)
    pub probe_back: usize,
}

impl Default for ResyncConfig {
    fn default() -> Self {
        Self {
            lookahead_window: 10,
            probe_back: 1,
        }
    }
}

/// Utterance settings handed to the speech engine
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Speech rate multiplier (default 1.0)
    pub rate: f32,

    /// Accepted engine rates
    pub rate_range: RangeInclusive<f32>,

    /// Only voices with this language tag are offered (default "en-US")
    pub voice_lang: String,

    /// Voice name to start with; `None` uses the engine default
    pub voice: Option<String>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            rate: 1.0,
            rate_range: 0.1..=10.0,
            voice_lang: "en-US".to_string(),
            voice: None,
        }
    }
}

/// Settings for the built-in simulated speech engine
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedEngineConfig {
    /// Speaking speed at rate 1.0 (default 180 WPM)
    pub base_wpm: u32,

    /// Emit a word boundary only every n-th word (default 1, every word)
    pub boundary_stride: usize,

    /// Emit sentence boundaries alongside word boundaries (default true)
    pub sentence_boundaries: bool,

    /// Voices the engine claims to support, as (name, lang)
    pub voices: Vec<(String, String)>,

    pub timing: TimingConfig,
}

impl Default for SimulatedEngineConfig {
    fn default() -> Self {
        Self {
            base_wpm: 180,
            boundary_stride: 1,
            sentence_boundaries: true,
            voices: vec![
                ("Alex".to_string(), "en-US".to_string()),
                ("Samantha".to_string(), "en-US".to_string()),
                ("Fred".to_string(), "en-US".to_string()),
                ("Daniel".to_string(), "en-GB".to_string()),
                ("Amélie".to_string(), "fr-CA".to_string()),
            ],
            timing: TimingConfig::default(),
        }
    }
}

/// Highlight colours for the terminal view, as RGB triples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    pub background: (u8, u8, u8),
    pub text: (u8, u8, u8),
    /// Highlighted word background (yellow)
    pub highlight_background: (u8, u8, u8),
    /// Highlighted word foreground (black)
    pub highlight_text: (u8, u8, u8),
    pub dimmed: (u8, u8, u8),
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: (26, 27, 38),
            text: (169, 177, 214),
            highlight_background: (255, 255, 0),
            highlight_text: (0, 0, 0),
            dimmed: (100, 110, 150),
        }
    }
}

/// Master configuration combining all readalong settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub sync: ResyncConfig,
    pub engine: SimulatedEngineConfig,
    pub theme: ThemeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resync_defaults() {
        let config = ResyncConfig::default();
        assert_eq!(config.lookahead_window, 10);
        assert_eq!(config.probe_back, 1);
    }

    #[test]
    fn test_playback_defaults() {
        let config = PlaybackConfig::default();
        assert_eq!(config.rate, 1.0);
        assert!(config.rate_range.contains(&config.rate));
        assert_eq!(config.voice_lang, "en-US");
        assert!(config.voice.is_none());
    }

    #[test]
    fn test_default_engine_offers_filtered_language() {
        let config = Config::default();
        assert!(config
            .engine
            .voices
            .iter()
            .any(|(_, lang)| *lang == config.playback.voice_lang));
    }
}
