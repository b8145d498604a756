//! Text Match
//!
//! Client for a PDF comparison service. Upload two PDFs, and the service
//! returns the paragraph pairs it judges similar, each with a score; this
//! crate renders one card per pair.
//!
//! # Features
//!
//! - **Upload form**: two file slots, fail-fast validation, one request in flight
//! - **Multipart client**: `file1`/`file2` parts posted to `/compare-pdfs-by-partition/`
//! - **Result cards**: text, Markdown or JSON, in service order, scores verbatim
//!
//! # Example
//!
//! ```no_run
//! use text_match::{App, ComparisonClient, Config};
//! use text_match::models::{FileSlot, OutputFormat, SelectedFile};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ComparisonClient::new(Config::from_env()?)?;
//!     let mut app = App::new();
//!
//!     app.select(FileSlot::First, SelectedFile::open("a.pdf").await?);
//!     app.select(FileSlot::Second, SelectedFile::open("b.pdf").await?);
//!     app.submit(&client).await?;
//!
//!     println!("{}", app.render(OutputFormat::Text)?);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod formatters;
pub mod models;

pub use app::{App, AppState, Notice};
pub use client::{Comparator, ComparisonClient};
pub use config::Config;
pub use error::{ClientError, FormError};
pub use form::UploadForm;
