use prank_core::sfx::{self, AudioGraphSpec, Envelope, FilterKind, RampKind, Sfx, Source, Voice, Waveform};
use rand::prelude::*;
use wasm_bindgen::JsValue;
use web_sys as web;

/// The looping hiss, kept so it can be faded out later.
struct Drone {
    source: web::AudioScheduledSourceNode,
    gain: web::GainNode,
}

/// Turns effect descriptions into WebAudio graphs.
///
/// Until [`Synth::init`] succeeds every call is a silent no-op, so the visual
/// sequence never depends on audio being available.
pub struct Synth {
    ctx: Option<web::AudioContext>,
    drone: Option<Drone>,
    rng: StdRng,
}

impl Default for Synth {
    fn default() -> Self {
        Self {
            ctx: None,
            drone: None,
            rng: StdRng::from_entropy(),
        }
    }
}

impl Synth {
    /// Create the `AudioContext`. Must run inside a user gesture.
    pub fn init(&mut self) {
        if self.ctx.is_some() {
            return;
        }
        match web::AudioContext::new() {
            Ok(ctx) => {
                _ = ctx.resume();
                log::info!("[audio] context ready at {} Hz", ctx.sample_rate());
                self.ctx = Some(ctx);
            }
            Err(e) => log::warn!("[audio] Web Audio unavailable, running silent: {:?}", e),
        }
    }

    pub fn play(&mut self, effect: Sfx) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        let spec = sfx::build(effect, &mut self.rng);
        if let Err(e) = render_graph(ctx, &spec, &mut self.rng) {
            log::error!("[audio] {:?} failed: {:?}", effect, e);
        }
    }

    /// Start the background hiss, replacing any drone already running.
    pub fn start_static(&mut self, volume: f32) {
        self.stop_static(0.0);
        let Some(ctx) = &self.ctx else {
            return;
        };
        let spec = sfx::static_drone(volume);
        let Some(voice) = spec.voices.first() else {
            return;
        };
        let t0 = ctx.current_time();
        match render_voice(ctx, voice, &ctx.destination(), t0, &mut self.rng) {
            Ok((source, gain)) => self.drone = Some(Drone { source, gain }),
            Err(e) => log::error!("[audio] static failed: {:?}", e),
        }
    }

    /// Fade the hiss out over `fade_sec`; the source stops 100 ms after the fade.
    pub fn stop_static(&mut self, fade_sec: f64) {
        let (Some(ctx), Some(drone)) = (&self.ctx, self.drone.take()) else {
            return;
        };
        let now = ctx.current_time();
        let gain = drone.gain.gain();
        _ = gain.cancel_scheduled_values(now);
        _ = gain.set_value_at_time(gain.value(), now);
        _ = gain.linear_ramp_to_value_at_time(0.0, now + fade_sec);
        _ = drone.source.stop_with_when(now + fade_sec + 0.1);
    }
}

fn render_graph(
    ctx: &web::AudioContext,
    spec: &AudioGraphSpec,
    rng: &mut impl Rng,
) -> Result<(), JsValue> {
    let t0 = ctx.current_time();
    let dest: web::AudioNode = match &spec.master {
        Some(env) => {
            let master = web::GainNode::new(ctx)?;
            apply_envelope(&master.gain(), env, t0)?;
            master.connect_with_audio_node(&ctx.destination())?;
            master.into()
        }
        None => ctx.destination().into(),
    };
    for voice in &spec.voices {
        render_voice(ctx, voice, &dest, t0, &mut *rng)?;
    }
    Ok(())
}

// source -> [filter] -> gain -> dest
fn render_voice(
    ctx: &web::AudioContext,
    voice: &Voice,
    dest: &web::AudioNode,
    t0: f64,
    rng: &mut impl Rng,
) -> Result<(web::AudioScheduledSourceNode, web::GainNode), JsValue> {
    let source: web::AudioScheduledSourceNode = match voice.source {
        Source::Osc(waveform) => {
            let osc = web::OscillatorNode::new(ctx)?;
            osc.set_type(match waveform {
                Waveform::Sine => web::OscillatorType::Sine,
                Waveform::Square => web::OscillatorType::Square,
                Waveform::Saw => web::OscillatorType::Sawtooth,
                Waveform::Triangle => web::OscillatorType::Triangle,
            });
            apply_envelope(&osc.frequency(), &voice.frequency, t0)?;
            osc.into()
        }
        Source::Noise {
            shape,
            seconds,
            looped,
        } => {
            let sr = ctx.sample_rate();
            let mut data = sfx::render_noise(shape, sr, seconds, rng);
            let buffer = ctx.create_buffer(1, data.len() as u32, sr)?;
            buffer.copy_to_channel(&mut data, 0)?;
            let src = web::AudioBufferSourceNode::new(ctx)?;
            src.set_buffer(Some(&buffer));
            src.set_loop(looped);
            src.into()
        }
    };

    let gain = web::GainNode::new(ctx)?;
    apply_envelope(&gain.gain(), &voice.gain, t0)?;

    match &voice.filter {
        Some(f) => {
            let filter = web::BiquadFilterNode::new(ctx)?;
            filter.set_type(match f.kind {
                FilterKind::Lowpass => web::BiquadFilterType::Lowpass,
                FilterKind::Highpass => web::BiquadFilterType::Highpass,
                FilterKind::Bandpass => web::BiquadFilterType::Bandpass,
            });
            apply_envelope(&filter.frequency(), &f.cutoff, t0)?;
            if let Some(q) = f.q {
                filter.q().set_value_at_time(q, t0)?;
            }
            source.connect_with_audio_node(&filter)?;
            filter.connect_with_audio_node(&gain)?;
        }
        None => {
            source.connect_with_audio_node(&gain)?;
        }
    }
    gain.connect_with_audio_node(dest)?;

    source.start_with_when(t0 + voice.start)?;
    if let Some(stop) = voice.stop {
        source.stop_with_when(t0 + stop)?;
    }
    Ok((source, gain))
}

fn apply_envelope(param: &web::AudioParam, env: &Envelope, t0: f64) -> Result<(), JsValue> {
    for bp in env {
        let t = t0 + bp.at;
        match bp.ramp {
            RampKind::Set => param.set_value_at_time(bp.value, t)?,
            RampKind::Linear => param.linear_ramp_to_value_at_time(bp.value, t)?,
            RampKind::Exponential => param.exponential_ramp_to_value_at_time(bp.value, t)?,
        };
    }
    Ok(())
}
