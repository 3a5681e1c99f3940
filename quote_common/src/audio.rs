//! Audio feedback contract and the cues it can play.

use strum_macros::{Display, EnumString};

/// One of the three audio cues.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Cue {
    Happy,
    Sad,
    Error,
}

/// Fire-and-forget player for the three cues.
pub trait AudioSignal: Send {
    /// Price went up.
    fn play_happy_music(&self);
    /// Price went down.
    fn play_sad_music(&self);
    /// No data to judge.
    fn play_error_music(&self);

    /// Dispatch `cue` to the matching trigger.
    fn play(&self, cue: Cue) {
        match cue {
            Cue::Happy => self.play_happy_music(),
            Cue::Sad => self.play_sad_music(),
            Cue::Error => self.play_error_music(),
        }
    }
}

impl<T: AudioSignal + ?Sized> AudioSignal for Box<T> {
    fn play_happy_music(&self) {
        (**self).play_happy_music()
    }

    fn play_sad_music(&self) {
        (**self).play_sad_music()
    }

    fn play_error_music(&self) {
        (**self).play_error_music()
    }
}
