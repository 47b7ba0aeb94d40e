/// Formatter adapters for the supported output formats
mod json_formatter;
mod plain_text_formatter;

pub use json_formatter::JsonFormatter;
pub use plain_text_formatter::PlainTextFormatter;
