pub mod fmt;
pub mod lint;
pub mod urls;

pub use fmt::{fmt, FmtArgs};
pub use lint::{lint, LintArgs};
pub use urls::{urls, UrlsArgs};
