//! Deterministic stand-in for a platform speech engine
//!
//! Speaks nothing; instead it times every word of the utterance with the
//! reading-speed model and releases boundary events as its clock advances.

use super::{BoundaryEvent, EngineError, EngineEvent, SpeechEngine, Utterance, Voice};
use crate::config::SimulatedEngineConfig;
use crate::reading::{ends_sentence, word_duration_ms};
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::time::Duration;

const SUPPORTED_RATES: RangeInclusive<f32> = 0.1..=10.0;

#[derive(Debug, Clone, PartialEq)]
struct Scheduled {
    due_ms: u64,
    event: EngineEvent,
}

pub struct SimulatedEngine {
    config: SimulatedEngineConfig,
    schedule: VecDeque<Scheduled>,
    /// Errors reported on the next poll, whatever the playback state.
    pending_errors: Vec<EngineError>,
    clock_ms: u64,
    speaking: bool,
    paused: bool,
}

impl SimulatedEngine {
    pub fn new(config: SimulatedEngineConfig) -> Self {
        Self {
            config,
            schedule: VecDeque::new(),
            pending_errors: Vec::new(),
            clock_ms: 0,
            speaking: false,
            paused: false,
        }
    }

    fn knows_voice(&self, voice: &Voice) -> bool {
        self.config.voices.iter().any(|(name, _)| *name == voice.name)
    }

    fn build_schedule(&self, text: &str, wpm: u32) -> VecDeque<Scheduled> {
        let stride = self.config.boundary_stride.max(1);
        let mut schedule = VecDeque::new();
        let mut due_ms = 0;
        let mut char_offset = 0;
        let mut previous: Option<&str> = None;

        for (word_index, word) in text.split(' ').filter(|w| !w.is_empty()).enumerate() {
            // Words never contain spaces, so the offset only needs re-syncing
            // when the text carries runs of spaces.
            char_offset = find_char_offset(text, word, char_offset);

            let sentence_start = previous.map_or(true, ends_sentence);
            if self.config.sentence_boundaries && sentence_start {
                schedule.push_back(Scheduled {
                    due_ms,
                    event: EngineEvent::Boundary(BoundaryEvent::sentence(char_offset)),
                });
            }
            if word_index % stride == 0 {
                schedule.push_back(Scheduled {
                    due_ms,
                    event: EngineEvent::Boundary(BoundaryEvent::word(char_offset)),
                });
            }

            due_ms += word_duration_ms(word, wpm, &self.config.timing);
            char_offset += word.chars().count();
            previous = Some(word);
        }

        schedule.push_back(Scheduled {
            due_ms,
            event: EngineEvent::End,
        });
        schedule
    }
}

impl Default for SimulatedEngine {
    fn default() -> Self {
        Self::new(SimulatedEngineConfig::default())
    }
}

/// Char offset of the next occurrence of `word` at or after `from`.
fn find_char_offset(text: &str, word: &str, from: usize) -> usize {
    let byte_from = text
        .char_indices()
        .nth(from)
        .map_or(text.len(), |(byte, _)| byte);
    match text[byte_from..].find(word) {
        Some(found) => from + text[byte_from..byte_from + found].chars().count(),
        None => from,
    }
}

impl SpeechEngine for SimulatedEngine {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), EngineError> {
        if utterance.text.trim().is_empty() {
            return Err(EngineError::EmptyUtterance);
        }

        self.cancel();

        if !SUPPORTED_RATES.contains(&utterance.rate) {
            self.pending_errors
                .push(EngineError::UnsupportedRate(utterance.rate));
            return Ok(());
        }
        if let Some(voice) = utterance.voice.as_ref().filter(|v| !self.knows_voice(v)) {
            self.pending_errors
                .push(EngineError::VoiceUnavailable(voice.name.clone()));
            return Ok(());
        }

        let wpm = (self.config.base_wpm as f32 * utterance.rate).round().max(1.0) as u32;
        self.schedule = self.build_schedule(&utterance.text, wpm);
        self.speaking = true;
        log::debug!(
            "simulated engine queued {} events at {} wpm",
            self.schedule.len(),
            wpm
        );
        Ok(())
    }

    fn pause(&mut self) {
        if self.speaking {
            self.paused = true;
        }
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn cancel(&mut self) {
        self.schedule.clear();
        self.clock_ms = 0;
        self.speaking = false;
        self.paused = false;
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn voices(&self) -> Vec<Voice> {
        self.config
            .voices
            .iter()
            .map(|(name, lang)| Voice::new(name.clone(), lang.clone()))
            .collect()
    }

    fn poll(&mut self, elapsed: Duration) -> Vec<EngineEvent> {
        let mut events: Vec<EngineEvent> = self
            .pending_errors
            .drain(..)
            .map(EngineEvent::Error)
            .collect();

        if !self.speaking || self.paused {
            return events;
        }

        self.clock_ms += elapsed.as_millis() as u64;
        while self
            .schedule
            .front()
            .is_some_and(|next| next.due_ms <= self.clock_ms)
        {
            if let Some(next) = self.schedule.pop_front() {
                if next.event == EngineEvent::End {
                    self.speaking = false;
                }
                events.push(next.event);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::BoundaryKind;

    fn word_offsets(events: &[EngineEvent]) -> Vec<usize> {
        events
            .iter()
            .filter_map(|event| match event {
                EngineEvent::Boundary(b) if b.kind == BoundaryKind::Word => Some(b.char_offset),
                _ => None,
            })
            .collect()
    }

    fn drain(engine: &mut SimulatedEngine) -> Vec<EngineEvent> {
        engine.poll(Duration::from_secs(3600))
    }

    #[test]
    fn test_word_boundaries_at_word_starts() {
        let mut engine = SimulatedEngine::default();
        engine.speak(&Utterance::new("The quick fox")).unwrap();
        let events = drain(&mut engine);
        assert_eq!(word_offsets(&events), vec![0, 4, 10]);
        assert_eq!(events.last(), Some(&EngineEvent::End));
        assert!(!engine.is_speaking());
    }

    #[test]
    fn test_events_released_by_clock() {
        let mut engine = SimulatedEngine::new(SimulatedEngineConfig {
            base_wpm: 300,
            sentence_boundaries: false,
            ..SimulatedEngineConfig::default()
        });
        engine.speak(&Utterance::new("one two three")).unwrap();

        // 300 WPM = 200ms per word
        assert_eq!(word_offsets(&engine.poll(Duration::ZERO)), vec![0]);
        assert_eq!(word_offsets(&engine.poll(Duration::from_millis(150))), vec![]);
        assert_eq!(word_offsets(&engine.poll(Duration::from_millis(50))), vec![4]);
        assert_eq!(word_offsets(&engine.poll(Duration::from_millis(200))), vec![8]);
        assert!(engine.is_speaking());
        assert_eq!(
            engine.poll(Duration::from_millis(200)),
            vec![EngineEvent::End]
        );
    }

    #[test]
    fn test_offsets_never_decrease() {
        let mut engine = SimulatedEngine::default();
        engine
            .speak(&Utterance::new("Dr. Smith arrived. He sat — quietly, then left!"))
            .unwrap();
        let offsets: Vec<usize> = drain(&mut engine)
            .iter()
            .filter_map(|event| match event {
                EngineEvent::Boundary(b) => Some(b.char_offset),
                _ => None,
            })
            .collect();
        assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_sentence_boundaries() {
        let mut engine = SimulatedEngine::default();
        engine.speak(&Utterance::new("Hi there. Bye now")).unwrap();
        let sentences: Vec<usize> = drain(&mut engine)
            .iter()
            .filter_map(|event| match event {
                EngineEvent::Boundary(b) if b.kind == BoundaryKind::Sentence => {
                    Some(b.char_offset)
                }
                _ => None,
            })
            .collect();
        assert_eq!(sentences, vec![0, 10]);
    }

    #[test]
    fn test_boundary_stride_skips_words() {
        let mut engine = SimulatedEngine::new(SimulatedEngineConfig {
            boundary_stride: 2,
            ..SimulatedEngineConfig::default()
        });
        engine.speak(&Utterance::new("a bb ccc dddd e")).unwrap();
        assert_eq!(word_offsets(&drain(&mut engine)), vec![0, 5, 14]);
    }

    #[test]
    fn test_pause_holds_events() {
        let mut engine = SimulatedEngine::default();
        engine.speak(&Utterance::new("one two")).unwrap();
        engine.pause();
        assert!(engine.is_paused());
        assert!(engine.poll(Duration::from_secs(60)).is_empty());
        engine.resume();
        assert!(!drain(&mut engine).is_empty());
    }

    #[test]
    fn test_cancel_is_silent() {
        let mut engine = SimulatedEngine::default();
        engine.speak(&Utterance::new("one two")).unwrap();
        engine.cancel();
        assert!(!engine.is_speaking());
        assert!(drain(&mut engine).is_empty());
    }

    #[test]
    fn test_unknown_voice_reports_error() {
        let mut engine = SimulatedEngine::default();
        let mut utterance = Utterance::new("hello");
        utterance.voice = Some(Voice::new("Nobody", "en-US"));
        engine.speak(&utterance).unwrap();
        assert!(!engine.is_speaking());
        assert_eq!(
            drain(&mut engine),
            vec![EngineEvent::Error(EngineError::VoiceUnavailable(
                "Nobody".to_string()
            ))]
        );
    }

    #[test]
    fn test_unsupported_rate_reports_error() {
        let mut engine = SimulatedEngine::default();
        let mut utterance = Utterance::new("hello");
        utterance.rate = 25.0;
        engine.speak(&utterance).unwrap();
        assert_eq!(
            drain(&mut engine),
            vec![EngineEvent::Error(EngineError::UnsupportedRate(25.0))]
        );
    }

    #[test]
    fn test_empty_utterance_rejected() {
        let mut engine = SimulatedEngine::default();
        assert_eq!(
            engine.speak(&Utterance::new("   ")),
            Err(EngineError::EmptyUtterance)
        );
    }

    #[test]
    fn test_find_char_offset_multibyte() {
        assert_eq!(find_char_offset("café  au", "au", 4), 6);
        assert_eq!(find_char_offset("abc", "zzz", 1), 1);
    }
}
