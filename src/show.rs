use crate::audio::Synth;
use crate::dom;
use instant::Instant;
use prank_core::{Action, ActionError, Director, Effect};

/// The director together with the clock it runs on and the synthesizer its
/// effects go to. Shared between the frame loop and the event handlers.
pub struct Show {
    pub director: Director,
    pub synth: Synth,
    epoch: Instant,
    effects: Vec<Effect>,
}

impl Show {
    pub fn new(director: Director) -> Self {
        Self {
            director,
            synth: Synth::default(),
            epoch: Instant::now(),
            effects: Vec::new(),
        }
    }

    /// Milliseconds since the page started.
    pub fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    pub fn advance(&mut self) {
        let now = self.now_ms();
        self.director.advance(now, &mut self.effects);
        self.run_effects();
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        let now = self.now_ms();
        let result = self.director.dispatch(now, action, &mut self.effects);
        self.run_effects();
        if let Err(e) = &result {
            log::warn!("[show] {:?} rejected: {}", action, e);
        }
        result
    }

    fn run_effects(&mut self) {
        for effect in self.effects.drain(..) {
            match effect {
                Effect::Sound(sfx) => self.synth.play(sfx),
                Effect::StaticStart { volume } => self.synth.start_static(volume),
                Effect::StaticStop { fade_sec } => self.synth.stop_static(fade_sec),
                Effect::Navigate(url) => dom::navigate(&url),
            }
        }
    }
}
