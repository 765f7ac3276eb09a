#![allow(dead_code)]

use std::sync::Mutex;

use stack_cli::browser::UrlOpener;

/// Opener stub that records every URL instead of touching a browser.
#[derive(Default)]
pub struct RecordingOpener {
    urls: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.urls.lock().expect("opener lock poisoned").clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        self.urls
            .lock()
            .expect("opener lock poisoned")
            .push(url.to_string());
        Ok(())
    }
}

/// Opener stub that always fails, for asserting the non-fatal contract.
pub struct FailingOpener;

impl UrlOpener for FailingOpener {
    fn open(&self, _url: &str) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no browser available",
        ))
    }
}
