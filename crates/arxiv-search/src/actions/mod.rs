//! User-triggered actions on a paper: clipboard, browser, PDF download.

mod desktop;
mod download;

pub use desktop::{Browser, Clipboard, SystemBrowser, SystemClipboard};
pub use download::{download_pdf, pdf_path};
