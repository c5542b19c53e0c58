//! Optional ambient audio reactivity: a silent oscillator routed through
//! an analyser, sampled once per frame for a 0..1 intensity scalar.
//! Nothing else depends on this succeeding; an unsupported or blocked
//! audio context logs and disables the feature.

use crate::constants::ANALYSER_FFT_SIZE;
use web_sys as web;

pub struct AmbientAudio {
    analyser: web::AnalyserNode,
    buf: Vec<u8>,
}

pub fn init() -> Option<AmbientAudio> {
    let ctx = match web::AudioContext::new() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("audio context unavailable, ambient reactivity off: {:?}", e);
            return None;
        }
    };

    let analyser = match ctx.create_analyser() {
        Ok(a) => a,
        Err(e) => {
            log::warn!("analyser unavailable, ambient reactivity off: {:?}", e);
            return None;
        }
    };
    analyser.set_fft_size(ANALYSER_FFT_SIZE);

    // Silent sine as a texture source; the gain stays at zero so this is
    // purely an analyser feed, never audible.
    if let (Ok(osc), Ok(gain)) = (web::OscillatorNode::new(&ctx), web::GainNode::new(&ctx)) {
        osc.set_type(web::OscillatorType::Sine);
        osc.frequency().set_value(40.0);
        gain.gain().set_value(0.0);
        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&analyser);
        _ = gain.connect_with_audio_node(&ctx.destination());
        _ = osc.start();
    }

    let bins = analyser.frequency_bin_count() as usize;
    Some(AmbientAudio {
        analyser,
        buf: vec![0; bins],
    })
}

impl AmbientAudio {
    /// Average frequency magnitude, normalized to 0..1.
    pub fn intensity(&mut self) -> f32 {
        self.analyser.get_byte_frequency_data(&mut self.buf);
        if self.buf.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.buf.iter().map(|&v| v as u32).sum();
        sum as f32 / self.buf.len() as f32 / 255.0
    }
}
