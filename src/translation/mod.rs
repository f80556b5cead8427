mod client;
mod language;
mod sign;

pub use client::{BaiduClient, DEFAULT_ENDPOINT, TranslateError, TranslationRequest, Translator};
pub use language::{AUTO_DETECT, LanguageError, print_languages, resolve_language};
pub use sign::{SALT_RANGE, generate_salt, sign};
