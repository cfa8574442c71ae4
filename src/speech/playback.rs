//! Voiceover playback
//!
//! rodio's `OutputStream` is `!Send`, so all audio lives on one dedicated OS
//! thread that receives commands over a sync channel. Starting a new clip
//! replaces whatever was playing; the shared flag lets the UI render
//! play/pause state without querying the thread.

use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

enum PlayCmd {
    /// Replace the current clip with new MP3 bytes
    Play(Vec<u8>),
    Pause,
    Resume,
    Stop,
}

/// Cloneable handle to the playback thread. All methods are non-blocking.
#[derive(Clone)]
pub struct AudioPlayer {
    cmd_tx: mpsc::Sender<PlayCmd>,
    playing: Arc<AtomicBool>,
}

impl AudioPlayer {
    /// Spawn the playback thread and return a handle to it.
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let playing = Arc::new(AtomicBool::new(false));

        let thread_playing = playing.clone();
        std::thread::Builder::new()
            .name("renova-playback".into())
            .spawn(move || playback_thread(cmd_rx, thread_playing))
            .expect("failed to spawn playback thread");

        Self { cmd_tx, playing }
    }

    /// Play an MP3 clip, replacing whatever is currently playing.
    pub fn play(&self, mp3_bytes: Vec<u8>) {
        let _ = self.cmd_tx.send(PlayCmd::Play(mp3_bytes));
    }

    pub fn pause(&self) {
        let _ = self.cmd_tx.send(PlayCmd::Pause);
    }

    pub fn resume(&self) {
        let _ = self.cmd_tx.send(PlayCmd::Resume);
    }

    pub fn stop(&self) {
        let _ = self.cmd_tx.send(PlayCmd::Stop);
    }

    /// Whether a clip is currently audible.
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn playback_thread(cmd_rx: mpsc::Receiver<PlayCmd>, playing: Arc<AtomicBool>) {
    let (_stream, stream_handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("playback: failed to open audio output: {e}");
            return;
        }
    };

    let mut sink: Option<Sink> = None;

    loop {
        // Poll with a timeout so the flag flips off when a clip ends on
        // its own.
        match cmd_rx.recv_timeout(Duration::from_millis(200)) {
            Ok(PlayCmd::Play(bytes)) => {
                if let Some(old) = sink.take() {
                    old.stop();
                }
                match Sink::try_new(&stream_handle) {
                    Ok(new_sink) => match Decoder::new(Cursor::new(bytes)) {
                        Ok(source) => {
                            new_sink.append(source);
                            playing.store(true, Ordering::Relaxed);
                            sink = Some(new_sink);
                        }
                        Err(e) => {
                            tracing::error!("playback: failed to decode MP3: {e}");
                            playing.store(false, Ordering::Relaxed);
                        }
                    },
                    Err(e) => {
                        tracing::error!("playback: failed to create sink: {e}");
                    }
                }
            }
            Ok(PlayCmd::Pause) => {
                if let Some(s) = &sink {
                    s.pause();
                }
                playing.store(false, Ordering::Relaxed);
            }
            Ok(PlayCmd::Resume) => {
                if let Some(s) = &sink {
                    s.play();
                    playing.store(!s.empty(), Ordering::Relaxed);
                }
            }
            Ok(PlayCmd::Stop) => {
                if let Some(s) = sink.take() {
                    s.stop();
                }
                playing.store(false, Ordering::Relaxed);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if let Some(s) = &sink {
                    if s.empty() {
                        playing.store(false, Ordering::Relaxed);
                        sink = None;
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                if let Some(s) = sink.take() {
                    s.stop();
                }
                break;
            }
        }
    }
}
