use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Engine, Events, Snapshot};

/// Engine handle for drivers that tick on one thread and take input on another
///
/// Every call goes through the one lock, so pointer updates and start
/// triggers land between ticks, never inside one.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // The engine holds plain data, so a panic elsewhere cannot leave it torn
    fn lock(&self) -> MutexGuard<'_, Engine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_human_paddle_target(&self, y: f32) {
        self.lock().set_human_paddle_target(y);
    }

    pub fn request_start(&self) -> bool {
        self.lock().request_start()
    }

    pub fn tick(&self) -> Events {
        *self.lock().tick()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Run `f` with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Phase;
    use std::thread;

    #[test]
    fn test_input_from_another_thread() {
        let shared = SharedEngine::new(Engine::with_defaults(5));
        shared.request_start();

        let input = shared.clone();
        let handle = thread::spawn(move || {
            for y in 0..50 {
                input.set_human_paddle_target(y as f32 * 20.0);
            }
        });
        for _ in 0..50 {
            shared.tick();
        }
        handle.join().expect("input thread finished");

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.player.y, 400.0, "Last target wins, clamped");
        assert_ne!(snapshot.phase, Phase::Idle);
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let shared = SharedEngine::new(Engine::with_defaults(5));
        let accepted = shared.with(|engine| engine.request_start());
        assert!(accepted);
        assert_eq!(shared.snapshot().phase, Phase::Serving);
    }
}
