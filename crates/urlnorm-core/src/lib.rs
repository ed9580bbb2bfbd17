pub mod config;
pub mod logging;
pub mod url_model;

pub use url_model::{
    normalize_path, parse, ParsedUrl, UrlError, UrlPart, UrlResult, DEFAULT_PORT,
};
