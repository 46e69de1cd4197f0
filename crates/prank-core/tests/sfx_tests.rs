use prank_core::sfx::*;
use rand::prelude::*;

const ALL: [Sfx; 9] = [
    Sfx::Type,
    Sfx::DialUp { duration_ms: 4000 },
    Sfx::Click,
    Sfx::Error,
    Sfx::Success,
    Sfx::Checkbox,
    Sfx::Champagne,
    Sfx::Drumroll,
    Sfx::Stinger,
];

fn rng() -> StdRng {
    StdRng::seed_from_u64(17)
}

fn envelopes(spec: &AudioGraphSpec) -> Vec<&Envelope> {
    let mut out: Vec<&Envelope> = spec.master.iter().collect();
    for v in &spec.voices {
        out.push(&v.frequency);
        out.push(&v.gain);
        if let Some(f) = &v.filter {
            out.push(&f.cutoff);
        }
    }
    out
}

#[test]
fn every_effect_is_well_formed() {
    let mut r = rng();
    for sfx in ALL {
        let spec = build(sfx, &mut r);
        assert!(!spec.voices.is_empty(), "{sfx:?}");
        for v in &spec.voices {
            let stop = v.stop.expect("one-shot voices stop by themselves");
            assert!(stop > v.start, "{sfx:?}");
            assert!(!v.gain.is_empty(), "{sfx:?}");
            if let Source::Osc(_) = v.source {
                assert!(!v.frequency.is_empty(), "{sfx:?}");
            }
        }
        for env in envelopes(&spec) {
            for pair in env.windows(2) {
                assert!(pair[0].at <= pair[1].at, "{sfx:?} {env:?}");
            }
            for bp in env.iter() {
                // exponential ramps cannot reach or cross zero
                if bp.ramp == RampKind::Exponential {
                    assert!(bp.value > 0.0, "{sfx:?} {bp:?}");
                }
                assert!(bp.at >= 0.0);
            }
        }
    }
}

#[test]
fn type_click_is_a_short_filtered_square() {
    let mut r = rng();
    for _ in 0..20 {
        let spec = build(Sfx::Type, &mut r);
        assert_eq!(spec.voices.len(), 1);
        let v = &spec.voices[0];
        assert_eq!(v.source, Source::Osc(Waveform::Square));
        let hz = v.frequency[0].value;
        assert!((1800.0..=2200.0).contains(&hz), "{hz}");
        assert_eq!(v.stop, Some(0.05));
        let f = v.filter.as_ref().expect("highpassed");
        assert_eq!(f.kind, FilterKind::Highpass);
        assert_eq!(f.cutoff[0].value, 1000.0);
    }
}

#[test]
fn dial_up_plays_tones_screech_and_bursts() {
    let spec = build(Sfx::DialUp { duration_ms: 4000 }, &mut rng());
    let tones: Vec<f32> = spec
        .oscillators(Waveform::Sine)
        .map(|v| v.frequency[0].value)
        .collect();
    assert_eq!(tones, DIAL_TONES_HZ.to_vec());
    assert_eq!(spec.oscillators(Waveform::Square).count(), 8);
    assert_eq!(spec.noise_voices().count(), 1);

    let master = spec.master.as_ref().expect("dial-up runs through a master gain");
    let last = master.last().copied().expect("non-empty");
    assert_eq!(last.at, 4.0);
    assert_eq!(last.value, 0.0);
    assert!(spec.end() <= 4.0);
}

#[test]
fn success_is_an_ascending_arpeggio() {
    let spec = build(Sfx::Success, &mut rng());
    let notes: Vec<(f64, f32)> = spec
        .voices
        .iter()
        .map(|v| (v.start, v.frequency[0].value))
        .collect();
    assert_eq!(notes.len(), SUCCESS_NOTES_HZ.len());
    for (i, (start, hz)) in notes.iter().enumerate() {
        assert!((start - i as f64 * 0.1).abs() < 1e-9);
        assert_eq!(*hz, SUCCESS_NOTES_HZ[i]);
    }
}

#[test]
fn drumroll_builds_up_then_crashes() {
    let spec = build(Sfx::Drumroll, &mut rng());
    let hits: Vec<&Voice> = spec.oscillators(Waveform::Triangle).collect();
    assert_eq!(hits.len(), DRUMROLL_HITS);
    for pair in hits.windows(2) {
        assert!(pair[0].start < pair[1].start);
        assert!(pair[0].gain[0].value < pair[1].gain[0].value);
    }
    let crash: Vec<&Voice> = spec.noise_voices().collect();
    assert_eq!(crash.len(), 1);
    assert_eq!(crash[0].start, DRUMROLL_SECONDS);
    assert_eq!(spec.end(), 3.0);
}

#[test]
fn champagne_pops_fizzes_and_sparkles() {
    let spec = build(Sfx::Champagne, &mut rng());
    assert_eq!(spec.oscillators(Waveform::Saw).count(), 1);
    assert_eq!(spec.noise_voices().count(), 1);
    let sparkles: Vec<f32> = spec
        .oscillators(Waveform::Sine)
        .map(|v| v.frequency[0].value)
        .collect();
    assert_eq!(sparkles, SPARKLE_NOTES_HZ.to_vec());
}

#[test]
fn stinger_is_a_low_saw_with_a_sub_drop() {
    let spec = build(Sfx::Stinger, &mut rng());
    let saw: Vec<&Voice> = spec.oscillators(Waveform::Saw).collect();
    assert_eq!(saw.len(), 1);
    assert_eq!(saw[0].frequency[0].value, 55.0);
    let sub: Vec<&Voice> = spec.oscillators(Waveform::Sine).collect();
    assert_eq!(sub[0].frequency.last().map(|b| b.value), Some(30.0));
}

#[test]
fn static_drone_loops_until_stopped() {
    let spec = static_drone(STATIC_DEFAULT_VOLUME);
    assert_eq!(spec.voices.len(), 1);
    let v = &spec.voices[0];
    assert_eq!(v.stop, None);
    assert_eq!(v.gain[0].value, STATIC_DEFAULT_VOLUME);
    match v.source {
        Source::Noise { looped, seconds, .. } => {
            assert!(looped);
            assert_eq!(seconds, STATIC_LOOP_SECONDS);
        }
        other => panic!("unexpected source {other:?}"),
    }
}

#[test]
fn noise_buffers_have_the_requested_length_and_range() {
    let mut r = rng();
    let white = render_noise(NoiseShape::White, 8000.0, 0.5, &mut r);
    assert_eq!(white.len(), 4000);
    assert!(white.iter().all(|s| (-1.0..=1.0).contains(s)));

    let decay = render_noise(NoiseShape::Decay { exponent: 0.5 }, 8000.0, 0.5, &mut r);
    // the envelope is down to about 1.6% on the last sample
    assert!(decay[3999].abs() <= 0.02);

    let modem = render_noise(NoiseShape::Modem, 8000.0, 1.5, &mut r);
    assert_eq!(modem.len(), 12000);
    assert!(modem.iter().all(|s| s.abs() <= 0.5 + 1e-6));
}
