use std::error::Error;
use std::sync::mpsc::{channel, Sender};
use std::sync::Arc;

/// Runs an `init`/`transition` core on the calling thread.
///
/// The calling thread is the only consumer of the event queue, so the state
/// and every render happen on it. Effects run on their own threads and report
/// back by sending events into the queue.
pub struct StateMachine<TState, TEvent, TEffect, T, R, E>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    R: Fn(&TState) + Send + Sync,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync,
{
    pub init: (TState, Vec<TEffect>),
    pub transition_fn: Arc<T>,
    pub render_fn: Arc<R>,
    pub run_effect_fn: Arc<E>,
    stop_fn: Arc<dyn Fn(&TEvent) -> bool + Send + Sync>,
}

impl<TState, TEvent, TEffect, T, R, E> StateMachine<TState, TEvent, TEffect, T, R, E>
where
    TState: Clone + Send + 'static,
    TEvent: Send + 'static,
    TEffect: Clone + Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync + 'static,
    R: Fn(&TState) + Send + Sync + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
{
    pub fn new(
        init: (TState, Vec<TEffect>),
        transition_fn: T,
        render_fn: R,
        run_effect_fn: E,
    ) -> Self {
        Self {
            init,
            transition_fn: Arc::new(transition_fn),
            render_fn: Arc::new(render_fn),
            run_effect_fn: Arc::new(run_effect_fn),
            stop_fn: Arc::new(|_| false),
        }
    }

    /// Stop the loop, without transitioning, when `stop_fn` matches an event.
    pub fn stop_when(mut self, stop_fn: impl Fn(&TEvent) -> bool + Send + Sync + 'static) -> Self {
        self.stop_fn = Arc::new(stop_fn);
        self
    }

    pub fn run(&self) -> Result<TState, Box<dyn Error + Send + Sync>> {
        let (event_sender, event_receiver) = channel();
        let (mut state, effects) = self.init.clone();

        (self.render_fn)(&state);
        self.spawn_effects(effects, &event_sender);

        loop {
            let event = event_receiver.recv()?;

            if (self.stop_fn)(&event) {
                return Ok(state);
            }

            let (new_state, new_effects) = (self.transition_fn)(state, event);
            state = new_state;

            (self.render_fn)(&state);
            self.spawn_effects(new_effects, &event_sender);
        }
    }

    fn spawn_effects(&self, effects: Vec<TEffect>, event_sender: &Sender<TEvent>) {
        for effect in effects {
            let effect_sender = event_sender.clone();
            let run_effect_fn = Arc::clone(&self.run_effect_fn);
            std::thread::spawn(move || {
                run_effect_fn(effect, effect_sender);
            });
        }
    }
}
