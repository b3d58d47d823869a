// famicore - main entry point
//
// Two threads: this one runs the host window and input, a worker runs
// the simulation tick loop. They share the published frame, the
// controller byte, and a shutdown flag.

use famicore::emulator::{run_worker, EmulatorConfig, Nes};
use famicore::{Cartridge, SharedButtons, SharedFrame, SynthControl, WindowConfig};
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;

fn main() -> ExitCode {
    let rom_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: famicore <rom.nes>");
            return ExitCode::FAILURE;
        }
    };

    let cartridge = match Cartridge::from_ines_file(&rom_path) {
        Ok(cartridge) => cartridge,
        Err(err) => {
            eprintln!("{}: {}", rom_path, err);
            return ExitCode::FAILURE;
        }
    };

    let config = EmulatorConfig::load_or_default();

    // Cross-thread state: published frame, controller byte, shutdown flag
    let frame = SharedFrame::new();
    let buttons = SharedButtons::new();
    let synth = SynthControl::new();
    let shutdown = Arc::new(AtomicBool::new(false));

    let mut nes = Nes::new(&cartridge);
    nes.set_shared_frame(frame.clone());
    nes.set_shared_buttons(buttons.clone());
    nes.set_synth(synth.clone());

    // Sound output is optional twice over: the feature gate and the host
    // device. A failure leaves the emulator running silent.
    #[cfg(feature = "audio")]
    let _audio = if config.audio.enabled {
        let audio_config = famicore::AudioConfig::new().with_volume(config.audio.volume);
        match famicore::AudioOutput::start(synth.clone(), audio_config) {
            Ok(output) => Some(output),
            Err(err) => {
                eprintln!("audio disabled: {}", err);
                None
            }
        }
    } else {
        None
    };

    println!("famicore: running {}", rom_path);

    let worker = {
        let shutdown = shutdown.clone();
        thread::spawn(move || run_worker(nes, shutdown))
    };

    let window_config = WindowConfig::new().with_scale(config.video.scale);
    if let Err(err) = famicore::display::run_display(
        window_config,
        frame,
        buttons,
        shutdown.clone(),
    ) {
        eprintln!("display error: {}", err);
    }

    // Window closed (or died): stop the worker and collect its verdict
    shutdown.store(true, std::sync::atomic::Ordering::Relaxed);
    match worker.join() {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(fault)) => {
            eprintln!("fatal: {}", fault);
            ExitCode::FAILURE
        }
        Err(_) => {
            eprintln!("simulation thread panicked");
            ExitCode::FAILURE
        }
    }
}
