// src/gui/actions/fetch.rs
//
// One feed load per catalog mount, off the UI thread. The page polls the task
// each frame; dropping the task (page unmounted) discards the result.

use std::{
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
};

use eframe::egui;

use crate::{
    config::options::FeedOptions,
    feed::{self, FeedError, Product},
    gui::progress::GuiProgress,
};

type FeedResult = Result<Vec<Product>, FeedError>;

pub struct FeedTask {
    rx: Receiver<FeedResult>,
}

pub enum TaskPoll {
    Pending,
    Done(FeedResult),
    /// Worker died without answering
    Lost,
}

impl FeedTask {
    pub fn poll(&self) -> TaskPoll {
        match self.rx.try_recv() {
            Ok(res) => TaskPoll::Done(res),
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Disconnected) => TaskPoll::Lost,
        }
    }
}

pub fn fetch_catalog(
    opts: FeedOptions,
    status: Arc<Mutex<String>>,
    egui_ctx: egui::Context,
) -> FeedTask {
    let (tx, rx) = mpsc::channel();

    logf!("Fetch: Begin {}", opts.url);
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = feed::load_catalog(&opts, Some(&mut prog));
        // Receiver is gone if the page was left meanwhile
        if tx.send(res).is_err() {
            logd!("Fetch: result dropped (page unmounted)");
        }
        egui_ctx.request_repaint();
    });

    FeedTask { rx }
}
