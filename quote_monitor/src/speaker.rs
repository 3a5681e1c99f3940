use log::info;
use quote_common::AudioSignal;

/// Audio signal that announces cues through the logger instead of a sound device.
pub struct LogSpeaker;

impl AudioSignal for LogSpeaker {
    fn play_happy_music(&self) {
        info!("♪ happy music");
    }

    fn play_sad_music(&self) {
        info!("♪ sad music");
    }

    fn play_error_music(&self) {
        info!("♪ error music");
    }
}
