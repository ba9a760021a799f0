pub mod diagnostic;
pub mod report;
pub mod theme;

pub use theme::{Icon, Theme};

pub fn info(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::primary(Icon::Info), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::warning(Icon::Warning), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::error(Icon::Cross), message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::success(Icon::Check), message.as_ref());
}
