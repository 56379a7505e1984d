// src/images/lazy.rs
//
// Per-placeholder lazy image.
//
// Waiting ──(in reach or eager)──▶ Loading ──▶ Ready | Failed
//
// Each placeholder resolves on its own worker thread, exactly once. Nothing is
// shared between placeholders with the same id. Dropping a placeholder while
// it is loading just drops the receiver; the worker's send then fails quietly.

use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
};

use super::resolver::{DecodedImage, ImageError, ImageResolver};

pub enum ImagePhase {
    Waiting,
    Loading(Receiver<Result<DecodedImage, ImageError>>),
    Ready(DecodedImage),
    Failed,
}

pub struct LazyImage {
    id: String,
    alt: String,
    eager: bool,
    phase: ImagePhase,
}

impl LazyImage {
    pub fn new(id: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { id: id.into(), alt: alt.into(), eager: false, phase: ImagePhase::Waiting }
    }

    /// Load immediately, without waiting to come into view.
    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn alt(&self) -> &str { &self.alt }
    pub fn phase(&self) -> &ImagePhase { &self.phase }

    /// Still watching the viewport? (Stops once eligibility is reached.)
    pub fn wants_visibility(&self) -> bool {
        !self.eager && matches!(self.phase, ImagePhase::Waiting)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ImagePhase::Loading(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.phase, ImagePhase::Failed)
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        match &self.phase {
            ImagePhase::Ready(img) => Some(img),
            _ => None,
        }
    }

    /// Advance the state machine for one frame.
    /// `in_view` is this frame's proximity check; ignored once started.
    pub fn update(&mut self, in_view: bool, resolver: &Arc<dyn ImageResolver>) {
        if matches!(self.phase, ImagePhase::Waiting) {
            if self.eager || in_view {
                self.start(resolver);
            }
        } else {
            self.poll();
        }
    }

    fn start(&mut self, resolver: &Arc<dyn ImageResolver>) {
        let (tx, rx) = mpsc::channel();
        let resolver = Arc::clone(resolver);
        let id = self.id.clone();

        logd!("Image: resolve {}", id);
        thread::spawn(move || {
            let res = resolver.resolve(&id);
            // Placeholder may be gone by now
            let _ = tx.send(res);
        });

        self.phase = ImagePhase::Loading(rx);
        self.poll();
    }

    fn poll(&mut self) {
        let ImagePhase::Loading(rx) = &self.phase else { return };

        let next = match rx.try_recv() {
            Ok(Ok(img)) => ImagePhase::Ready(img),
            Ok(Err(e)) => {
                logd!("Image: {} → alt text ({})", self.id, e);
                ImagePhase::Failed
            }
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                loge!("Image: worker for {} vanished", self.id);
                ImagePhase::Failed
            }
        };
        self.phase = next;
    }
}
