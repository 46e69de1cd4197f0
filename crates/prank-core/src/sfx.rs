//! Sound effects as plain data.
//!
//! Every effect is described as an [`AudioGraphSpec`]: a handful of voices,
//! each a source (oscillator or noise buffer) with frequency and gain
//! envelopes, an optional biquad filter and start/stop offsets in seconds on
//! the audio clock. The web front-end turns a spec into WebAudio nodes; the
//! host tests inspect the spec directly.

use rand::prelude::*;
use smallvec::{smallvec, SmallVec};

/// Basic oscillator shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampKind {
    /// Jump to the value at `at`.
    Set,
    Linear,
    Exponential,
}

/// One automation event; ramps run from the previous breakpoint to `at`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub at: f64,
    pub value: f32,
    pub ramp: RampKind,
}

pub type Envelope = SmallVec<[Breakpoint; 4]>;

#[inline]
pub fn set(at: f64, value: f32) -> Breakpoint {
    Breakpoint {
        at,
        value,
        ramp: RampKind::Set,
    }
}

#[inline]
pub fn lin(at: f64, value: f32) -> Breakpoint {
    Breakpoint {
        at,
        value,
        ramp: RampKind::Linear,
    }
}

#[inline]
pub fn exp(at: f64, value: f32) -> Breakpoint {
    Breakpoint {
        at,
        value,
        ramp: RampKind::Exponential,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoiseShape {
    White,
    /// White noise under a `(1 - i/len)^exponent` decay.
    Decay { exponent: f32 },
    /// Frequency-modulated carrier plus pulsing noise, the modem handshake.
    Modem,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Source {
    Osc(Waveform),
    Noise {
        shape: NoiseShape,
        seconds: f32,
        looped: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Lowpass,
    Highpass,
    Bandpass,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub kind: FilterKind,
    pub cutoff: Envelope,
    pub q: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Voice {
    pub source: Source,
    /// Empty for noise sources.
    pub frequency: Envelope,
    pub gain: Envelope,
    pub filter: Option<Filter>,
    pub start: f64,
    /// `None` keeps the voice alive until it is stopped from outside.
    pub stop: Option<f64>,
}

/// A complete, self-contained effect. When `master` is set every voice is
/// routed through one shared gain carrying that envelope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioGraphSpec {
    pub master: Option<Envelope>,
    pub voices: Vec<Voice>,
}

impl AudioGraphSpec {
    /// Time of the last scheduled stop, in seconds from the effect start.
    pub fn end(&self) -> f64 {
        self.voices
            .iter()
            .map(|v| v.stop.unwrap_or(v.start))
            .fold(0.0, f64::max)
    }

    pub fn oscillators(&self, waveform: Waveform) -> impl Iterator<Item = &Voice> {
        self.voices
            .iter()
            .filter(move |v| v.source == Source::Osc(waveform))
    }

    pub fn noise_voices(&self) -> impl Iterator<Item = &Voice> {
        self.voices
            .iter()
            .filter(|v| matches!(v.source, Source::Noise { .. }))
    }
}

/// Every one-shot effect the show can fire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sfx {
    Type,
    DialUp { duration_ms: u32 },
    Click,
    Error,
    Success,
    Checkbox,
    Champagne,
    Drumroll,
    Stinger,
}

pub const DIAL_TONES_HZ: [f32; 6] = [350.0, 440.0, 480.0, 620.0, 700.0, 800.0];
pub const SUCCESS_NOTES_HZ: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];
pub const SPARKLE_NOTES_HZ: [f32; 5] = [1318.0, 1568.0, 2093.0, 2637.0, 3136.0];
pub const DRUMROLL_HITS: usize = 60;
pub const DRUMROLL_SECONDS: f64 = 2.5;

/// Describe one effect. Randomised pitches are drawn from `rng`.
pub fn build(sfx: Sfx, rng: &mut impl Rng) -> AudioGraphSpec {
    match sfx {
        Sfx::Type => type_click(rng),
        Sfx::DialUp { duration_ms } => dial_up(duration_ms, rng),
        Sfx::Click => ui_click(),
        Sfx::Error => error_buzzer(),
        Sfx::Success => success_chime(),
        Sfx::Checkbox => checkbox_tick(),
        Sfx::Champagne => champagne(),
        Sfx::Drumroll => drumroll(rng),
        Sfx::Stinger => stinger(),
    }
}

fn tone(waveform: Waveform, frequency: Envelope, gain: Envelope, start: f64, stop: f64) -> Voice {
    Voice {
        source: Source::Osc(waveform),
        frequency,
        gain,
        filter: None,
        start,
        stop: Some(stop),
    }
}

fn noise(shape: NoiseShape, seconds: f32, filter: Filter, gain: Envelope, start: f64) -> Voice {
    Voice {
        source: Source::Noise {
            shape,
            seconds,
            looped: false,
        },
        frequency: Envelope::new(),
        gain,
        filter: Some(filter),
        start,
        stop: Some(start + seconds as f64),
    }
}

fn filter(kind: FilterKind, cutoff: Envelope) -> Filter {
    Filter {
        kind,
        cutoff,
        q: None,
    }
}

fn type_click(rng: &mut impl Rng) -> AudioGraphSpec {
    let hz = 1800.0 + rng.gen::<f32>() * 400.0;
    let mut v = tone(
        Waveform::Square,
        smallvec![set(0.0, hz)],
        smallvec![set(0.0, 0.03), exp(0.05, 0.001)],
        0.0,
        0.05,
    );
    v.filter = Some(filter(FilterKind::Highpass, smallvec![set(0.0, 1000.0)]));
    AudioGraphSpec {
        master: None,
        voices: vec![v],
    }
}

fn dial_up(duration_ms: u32, rng: &mut impl Rng) -> AudioGraphSpec {
    let total = duration_ms as f64 / 1000.0;
    let fade_from = (total - 0.5).max(0.0);
    let mut voices = Vec::with_capacity(DIAL_TONES_HZ.len() + 1 + 8);

    for (i, hz) in DIAL_TONES_HZ.iter().enumerate() {
        let st = i as f64 * 0.08;
        voices.push(tone(
            Waveform::Sine,
            smallvec![set(0.0, *hz)],
            smallvec![set(st, 0.0), lin(st + 0.02, 0.3), lin(st + 0.07, 0.0)],
            st,
            st + 0.08,
        ));
    }

    // Handshake screech
    let screech_at = 0.5;
    voices.push(noise(
        NoiseShape::Modem,
        1.5,
        Filter {
            kind: FilterKind::Bandpass,
            cutoff: smallvec![set(screech_at, 1500.0)],
            q: Some(2.0),
        },
        smallvec![set(screech_at, 0.4), lin(screech_at + 1.5, 0.0)],
        screech_at,
    ));

    // Data bursts
    for i in 0..8 {
        let at = screech_at + 0.6 + i as f64 * 0.15;
        let hz = 1200.0 + rng.gen::<f32>() * 800.0;
        voices.push(tone(
            Waveform::Square,
            smallvec![set(at, hz)],
            smallvec![set(at, 0.1), exp(at + 0.1, 0.001)],
            at,
            at + 0.1,
        ));
    }

    AudioGraphSpec {
        master: Some(smallvec![set(0.0, 0.08), set(fade_from, 0.08), lin(total, 0.0)]),
        voices,
    }
}

fn ui_click() -> AudioGraphSpec {
    AudioGraphSpec {
        master: None,
        voices: vec![tone(
            Waveform::Sine,
            smallvec![set(0.0, 800.0), exp(0.05, 600.0)],
            smallvec![set(0.0, 0.1), exp(0.05, 0.01)],
            0.0,
            0.05,
        )],
    }
}

fn error_buzzer() -> AudioGraphSpec {
    AudioGraphSpec {
        master: None,
        voices: vec![tone(
            Waveform::Square,
            smallvec![set(0.0, 200.0), set(0.1, 150.0), set(0.2, 100.0)],
            smallvec![set(0.0, 0.08), exp(0.3, 0.01)],
            0.0,
            0.3,
        )],
    }
}

fn success_chime() -> AudioGraphSpec {
    let voices = SUCCESS_NOTES_HZ
        .iter()
        .enumerate()
        .map(|(i, hz)| {
            let st = i as f64 * 0.1;
            tone(
                Waveform::Sine,
                smallvec![set(st, *hz)],
                smallvec![set(st, 0.0), lin(st + 0.02, 0.1), exp(st + 0.3, 0.01)],
                st,
                st + 0.3,
            )
        })
        .collect();
    AudioGraphSpec {
        master: None,
        voices,
    }
}

fn checkbox_tick() -> AudioGraphSpec {
    AudioGraphSpec {
        master: None,
        voices: vec![tone(
            Waveform::Sine,
            smallvec![set(0.0, 600.0), exp(0.08, 900.0)],
            smallvec![set(0.0, 0.08), exp(0.1, 0.01)],
            0.0,
            0.1,
        )],
    }
}

fn champagne() -> AudioGraphSpec {
    let mut voices = Vec::with_capacity(2 + SPARKLE_NOTES_HZ.len());

    let mut pop = tone(
        Waveform::Saw,
        smallvec![set(0.0, 150.0), exp(0.1, 50.0)],
        smallvec![set(0.0, 0.3), exp(0.15, 0.01)],
        0.0,
        0.15,
    );
    pop.filter = Some(filter(
        FilterKind::Lowpass,
        smallvec![set(0.0, 3000.0), exp(0.15, 100.0)],
    ));
    voices.push(pop);

    let fizz_at = 0.1;
    voices.push(noise(
        NoiseShape::Decay { exponent: 0.5 },
        1.5,
        filter(FilterKind::Highpass, smallvec![set(fizz_at, 4000.0)]),
        smallvec![set(fizz_at, 0.15), exp(fizz_at + 1.5, 0.01)],
        fizz_at,
    ));

    for (i, hz) in SPARKLE_NOTES_HZ.iter().enumerate() {
        let st = 0.2 + i as f64 * 0.1;
        voices.push(tone(
            Waveform::Sine,
            smallvec![set(st, *hz)],
            smallvec![set(st, 0.05), exp(st + 0.5, 0.001)],
            st,
            st + 0.5,
        ));
    }

    AudioGraphSpec {
        master: None,
        voices,
    }
}

fn drumroll(rng: &mut impl Rng) -> AudioGraphSpec {
    // Hits sit under a 0.15 bus level; the crash is not attenuated.
    const BUS: f32 = 0.15;
    let mut voices = Vec::with_capacity(DRUMROLL_HITS + 1);
    for i in 0..DRUMROLL_HITS {
        let progress = i as f64 / DRUMROLL_HITS as f64;
        let t = progress * DRUMROLL_SECONDS;
        let volume = (0.3 + progress as f32 * 0.7) * BUS;
        let mut hit = tone(
            Waveform::Triangle,
            smallvec![set(t, 80.0 + rng.gen::<f32>() * 20.0)],
            smallvec![set(t, volume), exp(t + 0.05, 0.01 * BUS)],
            t,
            t + 0.05,
        );
        hit.filter = Some(filter(
            FilterKind::Lowpass,
            smallvec![set(t, 200.0 + progress as f32 * 300.0)],
        ));
        voices.push(hit);
    }

    let crash_at = DRUMROLL_SECONDS;
    voices.push(noise(
        NoiseShape::Decay { exponent: 0.3 },
        0.5,
        filter(FilterKind::Highpass, smallvec![set(crash_at, 3000.0)]),
        smallvec![set(crash_at, 0.3), exp(crash_at + 0.5, 0.01)],
        crash_at,
    ));

    AudioGraphSpec {
        master: None,
        voices,
    }
}

fn stinger() -> AudioGraphSpec {
    AudioGraphSpec {
        master: None,
        voices: vec![
            tone(
                Waveform::Saw,
                smallvec![set(0.0, 55.0)],
                smallvec![set(0.0, 0.15), exp(0.8, 0.01)],
                0.0,
                0.8,
            ),
            tone(
                Waveform::Sine,
                smallvec![set(0.0, 80.0), exp(0.3, 30.0)],
                smallvec![set(0.0, 0.2), exp(0.5, 0.01)],
                0.0,
                0.5,
            ),
        ],
    }
}

pub const STATIC_LOOP_SECONDS: f32 = 2.0;
pub const STATIC_DEFAULT_VOLUME: f32 = 0.15;
pub const STATIC_DEFAULT_FADE_SEC: f64 = 0.3;

/// The looping background hiss. It has no stop time; the synthesizer keeps
/// the handle and fades it out on request.
pub fn static_drone(volume: f32) -> AudioGraphSpec {
    AudioGraphSpec {
        master: None,
        voices: vec![Voice {
            source: Source::Noise {
                shape: NoiseShape::White,
                seconds: STATIC_LOOP_SECONDS,
                looped: true,
            },
            frequency: Envelope::new(),
            gain: smallvec![set(0.0, volume)],
            filter: Some(filter(FilterKind::Highpass, smallvec![set(0.0, 1000.0)])),
            start: 0.0,
            stop: None,
        }],
    }
}

/// Fill a mono buffer of `seconds` at `sample_rate` with the given noise.
pub fn render_noise(
    shape: NoiseShape,
    sample_rate: f32,
    seconds: f32,
    rng: &mut impl Rng,
) -> Vec<f32> {
    let len = (sample_rate * seconds).max(0.0) as usize;
    let mut buf = Vec::with_capacity(len);
    for i in 0..len {
        let white = rng.gen::<f32>() * 2.0 - 1.0;
        let s = match shape {
            NoiseShape::White => white,
            NoiseShape::Decay { exponent } => white * (1.0 - i as f32 / len as f32).powf(exponent),
            NoiseShape::Modem => {
                let t = i as f32 / sample_rate;
                (t * 2000.0 + (t * 100.0).sin() * 500.0).sin() * 0.3
                    + white * 0.2 * (t * 50.0).sin()
            }
        };
        buf.push(s);
    }
    buf
}
